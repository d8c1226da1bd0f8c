//! Refactoring errors.
//!
//! These are contract violations: the caller asked for a rewrite the target
//! does not support. Expected "nothing to do" outcomes are values instead
//! ([`Candidate::None`](crate::Candidate::None), a `None` field symbol,
//! [`Rewrite::NotApplicable`](crate::Rewrite::NotApplicable)).

use propex_ir::MemberPath;

/// A rewrite was requested on a target of the wrong shape. The input tree is
/// left as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RefactorError {
    #[error("no member at {path}")]
    PathNotFound { path: MemberPath },

    #[error("member at {path} is not a property")]
    NotAProperty { path: MemberPath },

    #[error("{parent} does not contain the property at {property}")]
    ParentMismatch {
        parent: MemberPath,
        property: MemberPath,
    },

    #[error("property at {path} is neither an auto-property nor a bare expression-bodied property")]
    NotExplodable { path: MemberPath },

    #[error("property at {path} has no accessor list to collapse")]
    NotCrunchable { path: MemberPath },
}

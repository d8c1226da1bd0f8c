//! Deciding which rewrite a property offers.

use propex_ir::{MemberPath, SyntaxTree};

use crate::shape::{self, AccessorBody, PropertyBody, PropertyView};

/// The rewrite a property is a candidate for.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Candidate {
    /// Auto-property, or expression-bodied property returning a bare field.
    Explode,
    /// Property whose getter has a statement body.
    Crunch,
    None,
}

/// Classify the property at `path`.
///
/// Paths that do not address a property classify as [`Candidate::None`].
pub fn classify(tree: &SyntaxTree, path: &MemberPath) -> Candidate {
    match shape::locate(tree, path) {
        Ok(view) => classify_view(tree, &view),
        Err(_) => Candidate::None,
    }
}

pub(crate) fn classify_view(tree: &SyntaxTree, view: &PropertyView) -> Candidate {
    match &view.body {
        PropertyBody::Arrow { expr, .. } => {
            if shape::bare_field_reference(tree.arena(), *expr).is_some() {
                Candidate::Explode
            } else {
                Candidate::None
            }
        }
        PropertyBody::Accessors(list) => match (list.getter, list.setter) {
            (Some(getter), Some(setter))
                if getter.body == AccessorBody::Bodiless
                    && setter.body == AccessorBody::Bodiless =>
            {
                Candidate::Explode
            }
            (Some(getter), _) if matches!(getter.body, AccessorBody::Block(_)) => {
                Candidate::Crunch
            }
            _ => Candidate::None,
        },
    }
}

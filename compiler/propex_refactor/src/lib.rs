//! Property explode/crunch refactorings.
//!
//! Two inverse rewrites of property declarations:
//!
//! - **explode**: `public string Name { get; set; }` becomes a private field
//!   `_name` followed by `public string Name { get { return _name; } set { _name = value; } }`
//! - **crunch**: a property whose getter is `return _field;` becomes an
//!   auto-property again, and the field declaration is removed
//!
//! The host selects a property by [`MemberPath`](propex_ir::MemberPath), asks
//! [`classify`] which rewrite applies, and for crunch first calls
//! [`resolve_backing_field`] with a [`FieldResolver`] (usually a
//! [`DeclarationResolver`]). Every rewrite returns a new tree; the input tree
//! is never modified, and members the rewrite does not touch keep their node
//! ids in the output.
//!
//! Comments, blank lines and `#region` markers survive both rewrites.

mod classify;
mod crunch;
mod error;
mod explode;
mod naming;
mod options;
mod resolve;
mod shape;
mod symbols;
mod trivia;

pub use classify::{classify, Candidate};
pub use crunch::{crunch, crunch_with, Rewrite};
pub use error::RefactorError;
pub use explode::{explode, explode_with, Exploded};
pub use naming::backing_field_name;
pub use options::RefactorOptions;
pub use resolve::{resolve_backing_field, resolve_getter, FieldResolver, FieldSymbol};
pub use symbols::DeclarationResolver;

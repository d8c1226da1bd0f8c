//! Propex IR - Syntax Tree Types
//!
//! This crate contains the core data structures shared by the lexer, parser,
//! printer and refactoring passes:
//! - Spans for source locations
//! - Names for interned identifiers
//! - Tokens with attached trivia (whitespace, comments, directives)
//! - Syntax nodes (`NodeKind`) stored in a `SyntaxArena`
//! - `SyntaxTree` values addressed by `MemberPath`
//! - Read-only traversal (`Visitor`) and copy-on-write rewriting (`fold`)
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: token and trivia text → `Name(u32)`
//! - **Flatten Everything**: no `Box<Node>`, children are `NodeId(u32)` indices
//! - **Never Mutate**: arenas are append-only; an edit allocates replacement
//!   nodes and re-creates the ancestors, so every untouched subtree keeps its id
//!
//! The tree is lossless: printing every token with its trivia reproduces the
//! source byte for byte.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
mod factory;
pub mod fold;
mod ids;
mod interner;
mod modifiers;
mod name;
mod span;
mod syntax;
mod token;
mod tree;
pub mod visitor;

#[cfg(test)]
mod test_support;

pub use arena::SyntaxArena;
pub use factory::SyntaxFactory;
pub use ids::{NodeId, NodeRange, TokenRange, TriviaRange};
pub use interner::{InternError, SharedInterner, StringInterner, StringLookup};
pub use modifiers::ModifierFlags;
pub use name::Name;
pub use span::{Span, SpanError};
pub use syntax::{AccessorKind, Node, NodeKind, TypeKeyword};
pub use token::{Token, TokenKind, Trivia, TriviaKind};
pub use tree::{MemberPath, SyntaxTree, TypeKey};

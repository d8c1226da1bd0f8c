//! Recursive descent parser for C# declarations.
//!
//! Produces a lossless [`SyntaxTree`]: every token keeps its trivia, and
//! printing the tree reproduces the source exactly.
//!
//! The grammar models what the property refactorings need (namespaces,
//! types, fields, properties with their accessors, and the statements and
//! expressions of accessor bodies) in full. Everything else (methods,
//! constructors, events, enums, using directives, complex statements and
//! expressions) is kept as [`NodeKind::Opaque`](propex_ir::NodeKind::Opaque)
//! token runs.

mod cursor;
mod error;
mod grammar;

pub use error::ParseError;

use cursor::Cursor;
use propex_ir::{NodeId, NodeKind, SharedInterner, SyntaxArena, SyntaxTree, Token, TokenRange};

/// Parse a C# source file.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse(source: &str, interner: &SharedInterner) -> Result<SyntaxTree, ParseError> {
    let mut arena = SyntaxArena::with_capacity(source.len());
    let tokens = propex_lexer::lex(source, &mut arena, interner)?;
    tracing::debug!(tokens = tokens.len(), "lexed");

    let mut parser = Parser::new(&tokens, arena, interner);
    let root = parser.parse_compilation_unit()?;
    tracing::debug!(nodes = parser.arena.len(), "parsed");
    Ok(SyntaxTree::new(parser.arena, root, interner.clone()))
}

/// Parser state.
pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: SyntaxArena,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token], arena: SyntaxArena, interner: &'a propex_ir::StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
            arena,
        }
    }

    /// Allocate a node spanning the tokens consumed since `start`.
    fn alloc(&mut self, kind: NodeKind, start: usize) -> NodeId {
        let span = self.cursor.span_since(start);
        self.arena.alloc(kind, span)
    }

    /// Store the tokens consumed since `start` as a run.
    fn token_run(&mut self, start: usize) -> TokenRange {
        self.arena.alloc_tokens(self.cursor.since(start))
    }

    /// Run a speculative parse; on `None` the cursor is rolled back.
    ///
    /// Nodes allocated by a failed attempt stay in the arena unreferenced.
    fn attempt<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let start = self.cursor.position();
        let result = f(self);
        if result.is_none() {
            self.cursor.set_position(start);
        }
        result
    }
}

#[cfg(test)]
mod tests;

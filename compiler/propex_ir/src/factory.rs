//! Building new syntax.
//!
//! Synthesized tokens and nodes carry [`Span::DUMMY`]: they have no source
//! location. Everything is appended to the arena, never written over.

use crate::{
    NodeId, NodeKind, NodeRange, Span, StringInterner, SyntaxArena, Token, TokenKind, TokenRange,
    Trivia, TriviaKind, TriviaRange,
};

/// Allocates synthesized tokens, trivia and nodes into an arena.
pub struct SyntaxFactory<'a> {
    arena: &'a mut SyntaxArena,
    interner: &'a StringInterner,
}

impl<'a> SyntaxFactory<'a> {
    pub fn new(arena: &'a mut SyntaxArena, interner: &'a StringInterner) -> Self {
        SyntaxFactory { arena, interner }
    }

    #[inline]
    pub fn arena(&self) -> &SyntaxArena {
        self.arena
    }

    #[inline]
    pub fn interner(&self) -> &StringInterner {
        self.interner
    }

    // Tokens

    /// A token without trivia.
    pub fn token(&self, kind: TokenKind, text: &str) -> Token {
        Token::new(kind, self.interner.intern(text), Span::DUMMY)
    }

    pub fn ident(&self, text: &str) -> Token {
        self.token(TokenKind::Ident, text)
    }

    pub fn keyword(&self, text: &str) -> Token {
        self.token(TokenKind::Keyword, text)
    }

    pub fn semicolon(&self) -> Token {
        self.token(TokenKind::Semicolon, ";")
    }

    pub fn open_brace(&self) -> Token {
        self.token(TokenKind::OpenBrace, "{")
    }

    pub fn close_brace(&self) -> Token {
        self.token(TokenKind::CloseBrace, "}")
    }

    pub fn equals(&self) -> Token {
        self.token(TokenKind::Eq, "=")
    }

    // Trivia

    pub fn trivia_piece(&self, kind: TriviaKind, text: &str) -> Trivia {
        Trivia::new(kind, self.interner.intern(text))
    }

    /// Store a trivia run.
    pub fn trivia(&mut self, pieces: &[Trivia]) -> TriviaRange {
        self.arena.alloc_trivia(pieces)
    }

    /// A single space.
    pub fn space(&mut self) -> TriviaRange {
        let piece = self.trivia_piece(TriviaKind::Whitespace, " ");
        self.arena.alloc_trivia(&[piece])
    }

    /// A single line break.
    pub fn newline(&mut self) -> TriviaRange {
        let piece = self.trivia_piece(TriviaKind::Newline, "\n");
        self.arena.alloc_trivia(&[piece])
    }

    /// Trivia read from the arena, for building a modified copy.
    pub fn trivia_of(&self, range: TriviaRange) -> Vec<Trivia> {
        self.arena.trivia(range).to_vec()
    }

    // Lists

    pub fn tokens(&mut self, tokens: &[Token]) -> TokenRange {
        self.arena.alloc_tokens(tokens)
    }

    /// Tokens read from the arena, for building a modified copy.
    pub fn tokens_of(&self, range: TokenRange) -> Vec<Token> {
        self.arena.tokens(range).to_vec()
    }

    pub fn list(&mut self, ids: &[NodeId]) -> NodeRange {
        self.arena.alloc_node_list(ids)
    }

    // Nodes

    /// Allocate a synthesized node.
    pub fn node(&mut self, kind: NodeKind) -> NodeId {
        self.arena.alloc(kind, Span::DUMMY)
    }

    /// Allocate a node that replaces one parsed from `span`.
    pub fn node_at(&mut self, kind: NodeKind, span: Span) -> NodeId {
        self.arena.alloc(kind, span)
    }

    /// `name` as an expression.
    pub fn name_expr(&mut self, text: &str) -> NodeId {
        let tok = self.ident(text);
        self.node(NodeKind::Name(tok))
    }
}

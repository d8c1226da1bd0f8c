//! Token cursor for navigating the token stream.

use propex_ir::{Span, StringInterner, Token, TokenKind};
use tracing::trace;

use crate::ParseError;

/// Cursor over a lexed token stream.
///
/// Invariant: the stream is non-empty and ends with EOF; the position never
/// moves past the EOF token.
pub(crate) struct Cursor<'a> {
    tokens: &'a [Token],
    interner: &'a StringInterner,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tokens: &'a [Token], interner: &'a StringInterner) -> Self {
        debug_assert!(
            tokens.last().is_some_and(|tok| tok.kind == TokenKind::Eof),
            "token stream must end with EOF"
        );
        Cursor {
            tokens,
            interner,
            pos: 0,
        }
    }

    /// Current position, for snapshots and token runs.
    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    /// Roll back to a position returned by [`Cursor::position`].
    #[inline]
    pub(crate) fn set_position(&mut self, pos: usize) {
        debug_assert!(pos < self.tokens.len(), "cursor position {pos} out of bounds");
        self.pos = pos;
    }

    #[inline]
    pub(crate) fn current(&self) -> Token {
        self.tokens[self.pos]
    }

    /// Token `n` positions ahead, clamped to EOF.
    #[inline]
    pub(crate) fn peek(&self, n: usize) -> Token {
        let last = self.tokens.len() - 1;
        self.tokens[(self.pos + n).min(last)]
    }

    #[inline]
    pub(crate) fn kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub(crate) fn text_of(&self, token: Token) -> &'a str {
        self.interner.lookup(token.text)
    }

    #[inline]
    pub(crate) fn text(&self) -> &'a str {
        self.text_of(self.current())
    }

    #[inline]
    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.kind() == kind
    }

    /// At a reserved keyword with this text.
    #[inline]
    pub(crate) fn at_keyword(&self, keyword: &str) -> bool {
        self.at(TokenKind::Keyword) && self.text() == keyword
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.at(TokenKind::Eof)
    }

    /// Consume the current token. EOF is never consumed.
    pub(crate) fn bump(&mut self) -> Token {
        let tok = self.current();
        if tok.kind != TokenKind::Eof {
            trace!(kind = ?tok.kind, pos = self.pos, "bump");
            self.pos += 1;
        }
        tok
    }

    pub(crate) fn eat(&mut self, kind: TokenKind) -> Option<Token> {
        self.at(kind).then(|| self.bump())
    }

    pub(crate) fn expect(
        &mut self,
        kind: TokenKind,
        expected: &'static str,
    ) -> Result<Token, ParseError> {
        if self.at(kind) {
            return Ok(self.bump());
        }
        Err(self.error(expected))
    }

    /// Error for an unexpected current token.
    pub(crate) fn error(&self, expected: &'static str) -> ParseError {
        let tok = self.current();
        if tok.kind == TokenKind::Eof {
            ParseError::UnexpectedEof {
                expected,
                span: tok.span,
            }
        } else {
            ParseError::Expected {
                expected,
                found: self.text_of(tok).to_owned(),
                span: tok.span,
            }
        }
    }

    /// Tokens consumed since `start`.
    #[inline]
    pub(crate) fn since(&self, start: usize) -> &'a [Token] {
        &self.tokens[start..self.pos]
    }

    /// Span covering the tokens consumed since `start`.
    pub(crate) fn span_since(&self, start: usize) -> Span {
        match self.since(start) {
            [] => {
                let at = self.current().span.start;
                Span::new(at, at)
            }
            [only] => only.span,
            [first, .., last] => first.span.merge(last.span),
        }
    }
}

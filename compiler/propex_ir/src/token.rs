//! Tokens and trivia.
//!
//! Every byte of source belongs either to a token's text or to a trivia piece
//! attached to a token. Trivia is split the way C# tooling splits it:
//! trailing trivia runs up to and including the first newline after the
//! token, everything after that is leading trivia of the next token.

use std::fmt;

use crate::{Name, Span, TriviaRange};

/// Token kinds.
///
/// Keywords are kept as one kind; the parser inspects their text. Contextual
/// keywords (`get`, `set`, `init`, `value`, `partial`, ...) lex as [`TokenKind::Ident`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    Ident,
    Keyword,
    Number,
    Str,
    Char,

    // Delimiters
    OpenBrace,
    CloseBrace,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,

    // Punctuation
    Semicolon,
    Comma,
    Dot,
    Colon,
    ColonColon,
    Question,
    QuestionQuestion,
    FatArrow,
    ThinArrow,

    // Operators
    Eq,
    EqEq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Bang,
    Tilde,
    Amp,
    AmpAmp,
    Pipe,
    PipePipe,
    Caret,
    PlusPlus,
    MinusMinus,
    /// `+=`, `-=`, `??=`, ... (the text tells them apart).
    CompoundAssign,

    Eof,
}

impl TokenKind {
    /// Opening delimiters that raise nesting depth.
    #[inline]
    pub fn is_open_delim(self) -> bool {
        matches!(
            self,
            TokenKind::OpenBrace | TokenKind::OpenParen | TokenKind::OpenBracket
        )
    }

    /// Closing delimiters that lower nesting depth.
    #[inline]
    pub fn is_close_delim(self) -> bool {
        matches!(
            self,
            TokenKind::CloseBrace | TokenKind::CloseParen | TokenKind::CloseBracket
        )
    }

    /// Literal tokens (`true`/`false`/`null` are keywords, checked by text).
    #[inline]
    pub fn is_literal(self) -> bool {
        matches!(self, TokenKind::Number | TokenKind::Str | TokenKind::Char)
    }
}

/// A token with its trivia.
///
/// A *missing* token is a position-only placeholder: it keeps its trivia but
/// prints no text. Refactorings use it to keep comments and region markers
/// that were attached to syntax they removed.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: Name,
    pub leading: TriviaRange,
    pub trailing: TriviaRange,
    pub span: Span,
    pub missing: bool,
}

impl Token {
    /// Create a token without trivia.
    #[inline]
    pub const fn new(kind: TokenKind, text: Name, span: Span) -> Self {
        Token {
            kind,
            text,
            leading: TriviaRange::EMPTY,
            trailing: TriviaRange::EMPTY,
            span,
            missing: false,
        }
    }

    /// Same token with different leading trivia.
    #[inline]
    #[must_use]
    pub const fn with_leading(self, leading: TriviaRange) -> Self {
        Token { leading, ..self }
    }

    /// Same token with different trailing trivia.
    #[inline]
    #[must_use]
    pub const fn with_trailing(self, trailing: TriviaRange) -> Self {
        Token { trailing, ..self }
    }

    /// Turn the token into a placeholder that prints only its trivia.
    #[inline]
    #[must_use]
    pub const fn into_missing(self) -> Self {
        Token {
            missing: true,
            ..self
        }
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)?;
        if self.missing {
            write!(f, " (missing)")?;
        }
        Ok(())
    }
}

/// The kind of a trivia piece.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TriviaKind {
    /// Spaces, tabs, form feeds.
    Whitespace,
    /// `\n`, `\r\n` or `\r`.
    Newline,
    /// `// text`
    LineComment,
    /// `/// text`
    DocComment,
    /// `/* text */`
    BlockComment,
    /// `#region`, `#endregion`, `#if`, `#pragma`, ... up to the end of line.
    Directive,
}

impl TriviaKind {
    /// Whitespace and newlines carry layout only.
    #[inline]
    pub fn is_layout(self) -> bool {
        matches!(self, TriviaKind::Whitespace | TriviaKind::Newline)
    }

    /// Comments and directives carry content a rewrite must not drop.
    #[inline]
    pub fn is_annotation(self) -> bool {
        !self.is_layout()
    }
}

/// A single trivia piece.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Trivia {
    pub kind: TriviaKind,
    pub text: Name,
}

impl Trivia {
    #[inline]
    pub const fn new(kind: TriviaKind, text: Name) -> Self {
        Trivia { kind, text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiters() {
        assert!(TokenKind::OpenBrace.is_open_delim());
        assert!(TokenKind::CloseBracket.is_close_delim());
        assert!(!TokenKind::Lt.is_open_delim());
    }

    #[test]
    fn test_trivia_classes() {
        assert!(TriviaKind::Whitespace.is_layout());
        assert!(TriviaKind::Newline.is_layout());
        assert!(TriviaKind::Directive.is_annotation());
        assert!(TriviaKind::LineComment.is_annotation());
    }

    #[test]
    fn test_missing_token_keeps_trivia() {
        let tok = Token::new(TokenKind::Semicolon, Name::EMPTY, Span::new(3, 4))
            .with_leading(TriviaRange::new(0, 2));
        let missing = tok.into_missing();
        assert!(missing.missing);
        assert_eq!(missing.leading, TriviaRange::new(0, 2));
        assert_eq!(missing.kind, TokenKind::Semicolon);
    }

    #[test]
    fn test_debug_shows_kind_and_span() {
        let tok = Token::new(TokenKind::Semicolon, Name::EMPTY, Span::new(3, 4));
        assert_eq!(format!("{tok:?}"), "Semicolon @ 3..4");
        assert_eq!(format!("{:?}", tok.into_missing()), "Semicolon @ 3..4 (missing)");
    }
}

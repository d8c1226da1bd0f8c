//! Lexer for C# source using logos with string interning.
//!
//! Produces the full token stream of a file with every byte accounted for:
//! whitespace, newlines, comments and preprocessor directives become trivia
//! attached to the neighbouring tokens, so the printer can reproduce the
//! input exactly.
//!
//! # Trivia attachment
//!
//! After a token, trivia up to and including the first newline is *trailing*
//! trivia of that token. Everything after that newline is *leading* trivia of
//! the next token. Trivia at the end of the file leads the EOF token.
//!
//! ```text
//! int x; // note⏎    ← trailing of `;`
//!     // doc⏎        ← leading of `int`
//!     int y;
//! ```

mod raw;

use logos::Logos;
use propex_ir::{
    Name, Span, SpanError, StringInterner, SyntaxArena, Token, TokenKind, Trivia, TriviaKind,
    TriviaRange,
};

pub use raw::is_reserved_keyword;
use raw::{Lexeme, RawToken};

/// Errors that stop lexing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// Input no token rule accepts: a stray character, an unterminated
    /// string or block comment.
    #[error("unrecognized input {text:?}")]
    Unrecognized { text: String, span: Span },

    #[error(transparent)]
    SourceTooLarge(#[from] SpanError),
}

impl LexError {
    /// Location of the error in the source.
    pub fn span(&self) -> Span {
        match self {
            LexError::Unrecognized { span, .. } => *span,
            LexError::SourceTooLarge(_) => Span::DUMMY,
        }
    }
}

/// Collects trivia and decides which side of a token it lands on.
struct TriviaSink {
    /// Trivia after the last token, before any newline.
    trailing: Vec<Trivia>,
    /// Trivia waiting for the next token.
    leading: Vec<Trivia>,
    /// True until a newline ends the trailing run of the last token.
    after_token: bool,
}

impl TriviaSink {
    fn push(&mut self, piece: Trivia) {
        if self.after_token {
            self.trailing.push(piece);
            if piece.kind == TriviaKind::Newline {
                self.after_token = false;
            }
        } else {
            self.leading.push(piece);
        }
    }

    fn take_trailing(&mut self, arena: &mut SyntaxArena) -> TriviaRange {
        let range = arena.alloc_trivia(&self.trailing);
        self.trailing.clear();
        range
    }

    fn take_leading(&mut self, arena: &mut SyntaxArena) -> TriviaRange {
        let range = arena.alloc_trivia(&self.leading);
        self.leading.clear();
        range
    }
}

/// Lex `source` into tokens with attached trivia.
///
/// Trivia is allocated in `arena`; the returned tokens reference it. The last
/// token is always [`TokenKind::Eof`].
pub fn lex(
    source: &str,
    arena: &mut SyntaxArena,
    interner: &StringInterner,
) -> Result<Vec<Token>, LexError> {
    let mut tokens: Vec<Token> = Vec::with_capacity(source.len() / 4 + 1);
    let mut sink = TriviaSink {
        trailing: Vec::new(),
        leading: Vec::new(),
        after_token: false,
    };
    let mut lexer = RawToken::lexer(source);

    while let Some(result) = lexer.next() {
        let span = Span::try_from_range(lexer.span())?;
        let slice = lexer.slice();
        let Ok(raw) = result else {
            return Err(LexError::Unrecognized {
                text: slice.to_owned(),
                span,
            });
        };
        match raw.lexeme(slice) {
            Lexeme::Trivia(kind) => sink.push(Trivia::new(kind, interner.intern(slice))),
            Lexeme::Token(kind) => {
                if let Some(prev) = tokens.last_mut() {
                    prev.trailing = sink.take_trailing(arena);
                }
                let leading = sink.take_leading(arena);
                tokens.push(Token::new(kind, interner.intern(slice), span).with_leading(leading));
                sink.after_token = true;
            }
        }
    }

    if let Some(prev) = tokens.last_mut() {
        prev.trailing = sink.take_trailing(arena);
    }
    let end = u32::try_from(source.len()).map_err(|_| SpanError { offset: source.len() })?;
    let leading = sink.take_leading(arena);
    tokens.push(
        Token::new(TokenKind::Eof, Name::EMPTY, Span::new(end, end)).with_leading(leading),
    );
    Ok(tokens)
}

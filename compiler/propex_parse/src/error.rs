//! Parse error types.

use propex_ir::Span;
use propex_lexer::LexError;

/// Errors that stop parsing.
///
/// The parser is permissive: syntax it does not model becomes opaque token
/// runs. Errors are reserved for input whose structure cannot be recovered
/// (unbalanced braces, truncated declarations, untokenizable text).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("expected {expected}, found `{found}`")]
    Expected {
        expected: &'static str,
        found: String,
        span: Span,
    },

    #[error("unexpected end of file, expected {expected}")]
    UnexpectedEof { expected: &'static str, span: Span },

    #[error("unmatched `{delim}`")]
    UnbalancedDelimiter { delim: String, span: Span },
}

impl ParseError {
    /// Location of the error in the source.
    pub fn span(&self) -> Span {
        match self {
            ParseError::Lex(err) => err.span(),
            ParseError::Expected { span, .. }
            | ParseError::UnexpectedEof { span, .. }
            | ParseError::UnbalancedDelimiter { span, .. } => *span,
        }
    }
}

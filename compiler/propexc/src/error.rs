//! CLI errors.

use std::io;
use std::path::PathBuf;

use propex_parse::ParseError;
use propex_refactor::RefactorError;

/// Everything that ends a `propex` run with exit code 1.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("cannot access {}: {error}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        error: io::Error,
    },

    /// Carries the source text so the error can be rendered with context.
    #[error("cannot parse {}: {error}", path.display())]
    Parse {
        path: PathBuf,
        text: String,
        #[source]
        error: ParseError,
    },

    #[error("no property `{query}` in {}", path.display())]
    UnknownProperty { path: PathBuf, query: String },

    #[error(transparent)]
    Refactor(#[from] RefactorError),
}

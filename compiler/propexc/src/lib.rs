//! Propex command-line driver.
//!
//! The binary (`propex`) is a thin shell over this library: it parses the
//! command line into a [`Command`], runs it with [`run`] and prints the
//! [`Outcome`]. Errors come back as [`CliError`]; parse errors carry the
//! source so they can be rendered with `ariadne`.

mod commands;
mod error;
mod report;

pub use commands::{run, Command, Outcome};
pub use error::CliError;
pub use report::{color_enabled, render_error};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber, once per process.
///
/// Reads the filter from `PROPEX_LOG`, falling back to `RUST_LOG`; nothing is
/// installed when neither is set. With `PROPEX_LOG_TREE` set, spans print as
/// an indented tree instead of flat lines. Output goes to stderr so rewritten
/// source on stdout stays clean.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Ok(filter) =
            EnvFilter::try_from_env("PROPEX_LOG").or_else(|_| EnvFilter::try_from_default_env())
        else {
            return;
        };

        let tree = std::env::var_os("PROPEX_LOG_TREE").is_some();
        let tree_layer = tree.then(|| {
            tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_bracketed_fields(true)
        });
        let fmt_layer = (!tree).then(|| {
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .compact()
        });
        tracing_subscriber::registry()
            .with(tree_layer)
            .with(fmt_layer)
            .with(filter)
            .init();
    });
}

//! Rendering errors for the terminal.

use ariadne::{Color, Config, Label, Report, ReportKind, Source};

use crate::CliError;

/// Render an error as text for stderr.
///
/// Parse errors become an `ariadne` report pointing into the source; every
/// other error is a single `error: ...` line. Colors are off when `color` is
/// false.
pub fn render_error(error: &CliError, color: bool) -> String {
    let CliError::Parse { path, text, error } = error else {
        return format!("error: {error}\n");
    };
    let name = path.display().to_string();
    let range = clamp(error.span().to_range(), text.len());
    let report = Report::build(ReportKind::Error, name.clone(), range.start)
        .with_config(Config::default().with_color(color))
        .with_message(error.to_string())
        .with_label(
            Label::new((name.clone(), range))
                .with_message(error.to_string())
                .with_color(Color::Red),
        )
        .finish();

    let mut out = Vec::new();
    if report.write((name, Source::from(text.as_str())), &mut out).is_err() {
        return format!("error: {error}\n");
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Keep a label inside the source; an error at end of file gets an empty
/// range after the last byte.
fn clamp(range: std::ops::Range<usize>, len: usize) -> std::ops::Range<usize> {
    let start = range.start.min(len);
    start..range.end.clamp(start, len)
}

/// Colors follow `NO_COLOR`.
pub fn color_enabled() -> bool {
    !matches!(std::env::var_os("NO_COLOR"), Some(value) if !value.is_empty())
}

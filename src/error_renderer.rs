//! Error rendering with source snippets using ariadne
//!
//! The engine's diagnostics have a plain one-line form (`Display`). This
//! module renders them with the offending source line and a label under the
//! offending token instead.

use crate::{Diagnostic, Error, Severity};
use ariadne::{ColorGenerator, Config, IndexType, Label, Report, ReportKind, Source};
use std::io::Write;

const SOURCE_ID: &str = "<script>";

/// Render an error with source snippets to stderr
///
/// # Example
/// ```no_run
/// use lox::{Engine, EngineOptions, render_error};
///
/// let mut engine = Engine::new(EngineOptions::default());
/// if let Err(e) = engine.run("print 1 +;", &mut std::io::stdout()) {
///     render_error(&e);
/// }
/// ```
pub fn render_error(error: &Error) {
    render_error_to_writer(error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(error: &Error, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(error, writer, true)
}

/// Render an error to a String
pub fn render_error_to_string(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &Error,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let source = error.source_text();
    for diagnostic in error.diagnostics() {
        render_diagnostic(source, diagnostic, writer, use_color)?;
    }
    Ok(())
}

fn render_diagnostic(
    source: &str,
    diag: &Diagnostic,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    // Errors without a location (failed output) have nothing to point at.
    let Some(span) = &diag.span else {
        return writeln!(writer, "{diag}");
    };

    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let kind = match diag.severity {
        Severity::Error => ReportKind::Error,
    };

    let mut report = Report::build(kind, (SOURCE_ID, span.0.clone()))
        .with_message(format!("[line {}] {}", diag.line, diag.message))
        .with_config(
            Config::default()
                .with_color(use_color)
                .with_index_type(IndexType::Byte),
        );

    if let Some(code) = &diag.code {
        report = report.with_code(code);
    }

    let label = if diag.location.is_empty() {
        diag.message.clone()
    } else {
        format!("{} {}", diag.location, diag.message)
    };
    report = report.with_label(
        Label::new((SOURCE_ID, span.0.clone()))
            .with_message(label)
            .with_color(colors.next()),
    );

    report
        .finish()
        .write((SOURCE_ID, Source::from(source)), &mut *writer)
}

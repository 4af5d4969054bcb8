//! Error types with miette diagnostics.
//!
//! Building shapes never fails; only writing the rendered markup can.

use miette::Diagnostic;
use thiserror::Error;

/// Errors that occur during rendering
#[derive(Error, Diagnostic, Debug)]
pub enum RenderError {
    /// The output sink rejected a write. Whatever was written before the
    /// failure stays in the sink.
    #[error("failed to write SVG output")]
    #[diagnostic(
        code(svgdoc::render::io),
        help("the sink may hold a partially written document; the document itself is unchanged")
    )]
    Io(#[from] std::io::Error),
}

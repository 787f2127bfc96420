//! Typed error enum for drawing charts and writing the rendered document.

use std::io;
use std::path::PathBuf;

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Failure to draw a chart or deliver the rendered page.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Output file could not be created or written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to stdout failed (closed pipe, full disk behind a redirect).
    #[error("failed to write to stdout: {0}")]
    Stdout(#[source] io::Error),

    /// plotters failed while drawing a chart into its SVG buffer.
    #[error("failed to draw chart: {0}")]
    Chart(#[from] DrawingAreaErrorKind<io::Error>),
}

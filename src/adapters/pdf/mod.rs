//! Document rendering backends
//!
//! A [`DocumentRenderer`] turns a laid-out [`DocumentCanvas`] into the bytes
//! of a downloadable file.

pub mod renderer;

pub use renderer::PrintPdfRenderer;

use crate::core::layout::DocumentCanvas;
use crate::domain::GenerationFailure;

/// Renders a canvas to a document format
pub trait DocumentRenderer {
    /// Renders every page of `canvas`; `title` becomes the document title
    ///
    /// # Errors
    ///
    /// Returns [`GenerationFailure::Render`] if the backend fails.
    fn render(&self, canvas: &DocumentCanvas, title: &str) -> Result<Vec<u8>, GenerationFailure>;
}

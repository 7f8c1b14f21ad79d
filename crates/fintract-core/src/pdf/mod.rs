//! PDF text rendering module.

mod extractor;
mod fallback;

pub use extractor::{LopdfRenderer, PdfExtractRenderer};
pub use fallback::{FallbackRenderer, RenderOutcome};

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// A strategy that turns PDF bytes into plain text.
pub trait TextRenderer {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Render the whole document as a single string.
    fn render(&self, data: &[u8]) -> Result<String>;
}

impl<R: TextRenderer + ?Sized> TextRenderer for Box<R> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn render(&self, data: &[u8]) -> Result<String> {
        (**self).render(data)
    }
}

//! Text renderers backed by pdf-extract and lopdf.

use std::panic::{AssertUnwindSafe, catch_unwind};

use lopdf::Document;
use tracing::{debug, trace};

use super::{Result, TextRenderer};
use crate::error::PdfError;

/// Primary renderer using `pdf-extract`, which keeps layout-derived line breaks.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractRenderer;

impl PdfExtractRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TextRenderer for PdfExtractRenderer {
    fn name(&self) -> &'static str {
        "pdf-extract"
    }

    fn render(&self, data: &[u8]) -> Result<String> {
        // pdf-extract panics on some malformed font programs
        match catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(data))) {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(PdfError::TextExtraction(e.to_string())),
            Err(_) => Err(PdfError::TextExtraction(
                "pdf-extract panicked while decoding the document".to_string(),
            )),
        }
    }
}

/// Fallback renderer using `lopdf` page-by-page text extraction.
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfRenderer;

impl LopdfRenderer {
    pub fn new() -> Self {
        Self
    }

    fn load(data: &[u8]) -> Result<Document> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");
        }

        Ok(doc)
    }
}

impl TextRenderer for LopdfRenderer {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    fn render(&self, data: &[u8]) -> Result<String> {
        let doc = Self::load(data)?;

        let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
        if page_numbers.is_empty() {
            return Err(PdfError::NoPages);
        }

        let mut pages = Vec::with_capacity(page_numbers.len());
        for page in page_numbers {
            let text = doc
                .extract_text(&[page])
                .map_err(|e| PdfError::TextExtraction(format!("page {}: {}", page, e)))?;
            trace!("Page {} rendered {} chars", page, text.len());
            pages.push(text);
        }

        Ok(pages.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_extract_rejects_garbage() {
        let result = PdfExtractRenderer::new().render(b"definitely not a pdf");
        assert!(matches!(result, Err(PdfError::TextExtraction(_))));
    }

    #[test]
    fn test_lopdf_rejects_garbage() {
        let result = LopdfRenderer::new().render(b"definitely not a pdf");
        assert!(matches!(result, Err(PdfError::Parse(_))));
    }

    #[test]
    fn test_renderer_names() {
        assert_eq!(PdfExtractRenderer::new().name(), "pdf-extract");
        assert_eq!(LopdfRenderer::new().name(), "lopdf");
    }
}

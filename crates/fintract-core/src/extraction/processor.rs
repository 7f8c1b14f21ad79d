//! Per-document pipeline: render, match fields, group line items.

use std::path::Path;

use tracing::{debug, info};

use crate::error::{PdfError, Result};
use crate::models::config::FintractConfig;
use crate::models::record::DocumentRecord;
use crate::pdf::{FallbackRenderer, RenderOutcome};

use super::parser::{DocumentParser, ExtractionResult, RuleParser};

/// Turns a PDF path into a [`DocumentRecord`].
pub struct DocumentProcessor<P = RuleParser> {
    renderer: FallbackRenderer,
    parser: P,
}

impl DocumentProcessor<RuleParser> {
    /// Default renderer chain and rule parser.
    pub fn new() -> Self {
        Self::with_parts(FallbackRenderer::new(), RuleParser::new())
    }

    pub fn from_config(config: &FintractConfig) -> Self {
        Self::with_parts(
            FallbackRenderer::from_config(&config.pdf),
            RuleParser::from_config(&config.extraction),
        )
    }
}

impl Default for DocumentProcessor<RuleParser> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: DocumentParser> DocumentProcessor<P> {
    pub fn with_parts(renderer: FallbackRenderer, parser: P) -> Self {
        Self { renderer, parser }
    }

    /// Render and parse a PDF, keeping extraction diagnostics.
    ///
    /// When no strategy could render the document, the error of the last
    /// strategy tried is returned.
    pub fn try_extract_pdf(&self, path: &Path) -> Result<ExtractionResult> {
        info!("Processing file: {}", path.display());

        let text = match self.renderer.render_file(path) {
            RenderOutcome::Primary(text) => text,
            RenderOutcome::Fallback(text) => {
                debug!("Used fallback renderer for {}", path.display());
                text
            }
            RenderOutcome::Failed(mut errors) => {
                let (_, error) = errors
                    .pop()
                    .unwrap_or(("none", PdfError::TextExtraction("no renderer".to_string())));
                return Err(error.into());
            }
        };

        Ok(self.parser.parse(&text))
    }

    /// Render and parse a PDF. `None` when the document cannot be rendered.
    pub fn extract_pdf(&self, path: &Path) -> Option<ExtractionResult> {
        self.try_extract_pdf(path).ok()
    }

    /// Render and parse a PDF, keeping only the record.
    pub fn process_pdf(&self, path: &Path) -> Option<DocumentRecord> {
        self.extract_pdf(path).map(|result| result.record)
    }

    /// Parse already rendered text.
    pub fn process_text(&self, text: &str) -> DocumentRecord {
        self.parser.parse(text).record
    }
}

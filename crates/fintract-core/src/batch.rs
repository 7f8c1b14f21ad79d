//! Sequential batch processing over many documents.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::extraction::{DocumentParser, DocumentProcessor};
use crate::models::record::DocumentRecord;

/// Records from a batch, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResult {
    /// One record per successfully processed input.
    pub records: Vec<DocumentRecord>,
    /// Inputs that could not be rendered and produced no record.
    pub skipped: Vec<PathBuf>,
}

impl BatchResult {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total line items across all records.
    pub fn product_count(&self) -> usize {
        self.records.iter().map(|r| r.products.len()).sum()
    }
}

impl From<Vec<DocumentRecord>> for BatchResult {
    fn from(records: Vec<DocumentRecord>) -> Self {
        Self {
            records,
            skipped: Vec::new(),
        }
    }
}

/// Process every path in order.
pub fn process_batch<P: DocumentParser>(
    processor: &DocumentProcessor<P>,
    paths: &[PathBuf],
) -> BatchResult {
    process_batch_with(processor, paths, |_, _| {})
}

/// Process every path in order, calling `on_document` after each one.
///
/// The callback receives the record, or `None` when the document was skipped.
pub fn process_batch_with<P, F>(
    processor: &DocumentProcessor<P>,
    paths: &[PathBuf],
    mut on_document: F,
) -> BatchResult
where
    P: DocumentParser,
    F: FnMut(&Path, Option<&DocumentRecord>),
{
    let mut result = BatchResult::default();

    for path in paths {
        match processor.process_pdf(path) {
            Some(record) => {
                on_document(path, Some(&record));
                result.records.push(record);
            }
            None => {
                warn!("Skipping {}: no text could be extracted", path.display());
                on_document(path, None);
                result.skipped.push(path.clone());
            }
        }
    }

    info!(
        "Batch complete: {} record(s), {} skipped",
        result.records.len(),
        result.skipped.len()
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PdfError;
    use crate::extraction::RuleParser;
    use crate::pdf::{FallbackRenderer, TextRenderer};

    struct PrefixRenderer;

    impl TextRenderer for PrefixRenderer {
        fn name(&self) -> &'static str {
            "prefix"
        }

        fn render(&self, data: &[u8]) -> crate::pdf::Result<String> {
            let text = String::from_utf8_lossy(data);
            match text.strip_prefix("%PDF ") {
                Some(body) => Ok(body.to_string()),
                None => Err(PdfError::Parse("missing header".to_string())),
            }
        }
    }

    #[test]
    fn test_batch_skips_failures_and_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let write = |name: &str, body: &[u8]| {
            let path = dir.path().join(name);
            std::fs::write(&path, body).unwrap();
            path
        };

        let paths = vec![
            write("a.pdf", b"%PDF Order ID: 1"),
            write("broken.pdf", b"garbage"),
            dir.path().join("missing.pdf"),
            write("b.pdf", b"%PDF Order ID: 2"),
        ];

        let processor = DocumentProcessor::with_parts(
            FallbackRenderer::with_strategies(Box::new(PrefixRenderer), None),
            RuleParser::new(),
        );

        let mut seen = Vec::new();
        let result = process_batch_with(&processor, &paths, |path, record| {
            seen.push((path.to_path_buf(), record.is_some()));
        });

        let ids: Vec<_> = result.records.iter().map(|r| r.order_id()).collect();
        assert_eq!(ids, vec![Some("1"), Some("2")]);
        assert_eq!(result.skipped, vec![paths[1].clone(), paths[2].clone()]);
        assert_eq!(seen.len(), 4);
        assert!(!seen[1].1);
    }

    #[test]
    fn test_empty_batch() {
        let result = process_batch(&DocumentProcessor::new(), &[]);
        assert!(result.is_empty());
        assert_eq!(result.product_count(), 0);
    }
}

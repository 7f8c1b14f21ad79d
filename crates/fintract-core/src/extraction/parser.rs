//! Rule-based document parser.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::models::config::{ExtractionConfig, SectionMode};
use crate::models::record::DocumentRecord;

use super::rules::{extract_line_items, match_fields};

/// Result of parsing one document's text.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted record.
    pub record: DocumentRecord,
    /// Partial line items discarded because a section ended first.
    pub dropped_partial_items: usize,
    /// Product sections that were grouped.
    pub product_sections: usize,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for turning rendered text into a record.
pub trait DocumentParser {
    /// Parse a record from text. Missing fields are never an error.
    fn parse(&self, text: &str) -> ExtractionResult;
}

/// Parser built on the fixed field and line-item pattern tables.
#[derive(Debug, Clone, Default)]
pub struct RuleParser {
    section_mode: SectionMode,
}

impl RuleParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new().with_section_mode(config.product_sections)
    }

    /// Set which product sections are grouped.
    pub fn with_section_mode(mut self, mode: SectionMode) -> Self {
        self.section_mode = mode;
        self
    }
}

impl DocumentParser for RuleParser {
    fn parse(&self, text: &str) -> ExtractionResult {
        let start = Instant::now();

        info!("Parsing document from {} characters of text", text.len());

        let fields = match_fields(text);
        debug!("Matched {} of 4 top-level fields", fields.len());

        let grouping = extract_line_items(text, self.section_mode);
        if grouping.dropped_partial > 0 {
            warn!(
                "Dropped {} incomplete line item(s) at the end of a product section",
                grouping.dropped_partial
            );
        }

        debug!(
            "Extracted {} line item(s) from {} section(s)",
            grouping.items.len(),
            grouping.sections
        );

        ExtractionResult {
            record: DocumentRecord {
                fields,
                products: grouping.items,
            },
            dropped_partial_items: grouping.dropped_partial,
            product_sections: grouping.sections,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

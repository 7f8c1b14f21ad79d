//! Core library for financial document extraction.
//!
//! This crate provides:
//! - PDF text rendering with a pdf-extract primary and lopdf fallback
//! - Labelled field matching (order, customer, total, date)
//! - Line-item grouping over product sections
//! - Sequential batch processing
//! - Workbook and CSV export

pub mod batch;
pub mod error;
pub mod export;
pub mod extraction;
pub mod models;
pub mod pdf;

pub use batch::{BatchResult, process_batch, process_batch_with};
pub use error::{ExportError, FintractError, PdfError, Result};
pub use export::BatchExporter;
pub use extraction::{DocumentParser, DocumentProcessor, ExtractionResult, RuleParser};
pub use models::config::FintractConfig;
pub use models::record::{DocumentRecord, FieldKey, LineItem, LineItemKey};
pub use pdf::{FallbackRenderer, LopdfRenderer, PdfExtractRenderer, RenderOutcome, TextRenderer};

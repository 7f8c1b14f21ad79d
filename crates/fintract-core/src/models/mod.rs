//! Data models and configuration.

pub mod config;
pub mod record;

pub use config::{ExtractionConfig, FintractConfig, OutputConfig, PdfConfig, SectionMode};
pub use record::{DocumentRecord, FieldKey, LineItem, LineItemKey, PartialLineItem};

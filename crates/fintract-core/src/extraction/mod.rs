//! Field extraction module.

mod parser;
mod processor;
pub mod rules;

pub use parser::{DocumentParser, ExtractionResult, RuleParser};
pub use processor::DocumentProcessor;

//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for the fintract pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FintractConfig {
    /// PDF rendering configuration.
    pub pdf: PdfConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Output locations.
    pub output: OutputConfig,

    /// Input paths or glob patterns used when none are given on the command line.
    pub inputs: Vec<String>,
}

/// PDF rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Retry with the lopdf renderer when pdf-extract fails.
    pub enable_fallback: bool,

    /// Minimum non-whitespace characters for rendered text to count as usable.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            enable_fallback: true,
            min_text_length: 1,
        }
    }
}

/// Which product sections of a document are grouped into line items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionMode {
    /// Only the first section.
    #[default]
    First,
    /// Every section, in text order.
    All,
}

/// Field extraction configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Product section selection.
    pub product_sections: SectionMode,
}

/// Output file locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Workbook with the "Basic Info" and "Products" sheets.
    pub xlsx_path: PathBuf,

    /// Flat one-row-per-document CSV file.
    pub csv_path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            xlsx_path: PathBuf::from("financial_data.xlsx"),
            csv_path: PathBuf::from("financial_data.csv"),
        }
    }
}

impl FintractConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = FintractConfig::default();
        assert!(config.pdf.enable_fallback);
        assert_eq!(config.extraction.product_sections, SectionMode::First);
        assert_eq!(config.output.csv_path, PathBuf::from("financial_data.csv"));
        assert!(config.inputs.is_empty());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: FintractConfig =
            serde_json::from_str(r#"{ "extraction": { "product_sections": "all" } }"#).unwrap();
        assert_eq!(config.extraction.product_sections, SectionMode::All);
        assert_eq!(config.pdf.min_text_length, 1);
        assert_eq!(config.output.xlsx_path, PathBuf::from("financial_data.xlsx"));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = FintractConfig::default();
        config.inputs.push("invoices/*.pdf".to_string());
        config.pdf.enable_fallback = false;
        config.save(&path).unwrap();

        let loaded = FintractConfig::from_file(&path).unwrap();
        assert_eq!(loaded.inputs, vec!["invoices/*.pdf".to_string()]);
        assert!(!loaded.pdf.enable_fallback);
    }
}

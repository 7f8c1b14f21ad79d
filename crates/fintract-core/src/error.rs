//! Error types for the fintract-core library.

use thiserror::Error;

/// Main error type for the fintract library.
#[derive(Error, Debug)]
pub enum FintractError {
    /// PDF rendering error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Export error.
    #[error("export error: {0}")]
    Export(#[from] ExportError),
}

/// Errors raised by a single text rendering strategy.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to read the PDF file.
    #[error("failed to read PDF: {0}")]
    Read(#[from] std::io::Error),

    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// The strategy produced no usable text.
    #[error("no text extracted ({0} characters)")]
    EmptyText(usize),
}

/// Errors raised while writing tabular outputs.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Workbook writer failure.
    #[error("workbook error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// CSV writer failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Serializing the product list failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error while writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the fintract library.
pub type Result<T> = std::result::Result<T, FintractError>;

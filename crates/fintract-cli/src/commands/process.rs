//! Process command - extract data from a single PDF.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::debug;

use fintract_core::export::write_csv_to;
use fintract_core::models::config::{FintractConfig, SectionMode};
use fintract_core::{DocumentProcessor, DocumentRecord, FieldKey};

use super::config::load_config;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Group line items from every product section, not just the first
    #[arg(long)]
    all_sections: bool,

    /// Do not retry with the lopdf renderer when pdf-extract fails
    #[arg(long)]
    no_fallback: bool,

    /// Show extraction statistics
    #[arg(long)]
    show_stats: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    apply_overrides(&mut config, &args);

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let processor = DocumentProcessor::from_config(&config);
    let result = processor
        .try_extract_pdf(&args.input)
        .map_err(|e| anyhow::anyhow!("Failed to extract text from {}: {}", args.input.display(), e))?;

    if result.dropped_partial_items > 0 {
        eprintln!(
            "{} Dropped {} incomplete line item(s)",
            style("!").yellow(),
            result.dropped_partial_items
        );
    }

    let output = format_record(&result.record, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_stats {
        eprintln!();
        eprintln!(
            "{} {} of 4 fields, {} line item(s) from {} product section(s)",
            style("ℹ").blue(),
            result.record.fields.len(),
            result.record.products.len(),
            result.product_sections
        );
        eprintln!(
            "{} Processing time: {}ms",
            style("ℹ").blue(),
            result.processing_time_ms
        );
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn apply_overrides(config: &mut FintractConfig, args: &ProcessArgs) {
    if args.all_sections {
        config.extraction.product_sections = SectionMode::All;
    }
    if args.no_fallback {
        config.pdf.enable_fallback = false;
    }
}

fn format_record(record: &DocumentRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Csv => {
            let mut data = Vec::new();
            write_csv_to(std::slice::from_ref(record), &mut data)?;
            Ok(String::from_utf8(data)?)
        }
        OutputFormat::Text => Ok(format_text(record)),
    }
}

fn format_text(record: &DocumentRecord) -> String {
    let mut output = String::new();

    for key in FieldKey::ALL {
        let value = record.get(key).unwrap_or("-");
        output.push_str(&format!("{:<12} {}\n", format!("{}:", key), value));
    }

    output.push('\n');
    output.push_str(&format!("Products ({}):\n", record.products.len()));
    for item in &record.products {
        output.push_str(&format!(
            "  [{}] {} x{} @ {}\n",
            item.product_id, item.product_name, item.quantity, item.unit_price
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use fintract_core::LineItem;

    #[test]
    fn test_format_text() {
        let mut record = DocumentRecord::default();
        record.fields.insert(FieldKey::OrderId, "10294".to_string());
        record.products.push(LineItem {
            product_id: "17".to_string(),
            product_name: "Alice Mutton".to_string(),
            quantity: "2".to_string(),
            unit_price: "39.00".to_string(),
        });

        let text = format_text(&record);
        assert!(text.contains("order_id:    10294"));
        assert!(text.contains("customer_id: -"));
        assert!(text.contains("  [17] Alice Mutton x2 @ 39.00"));
    }

    #[test]
    fn test_format_csv_single_row() {
        let record = DocumentRecord::default();
        let csv = format_record(&record, OutputFormat::Csv).unwrap();
        assert_eq!(csv, "products\n[]\n");
    }
}

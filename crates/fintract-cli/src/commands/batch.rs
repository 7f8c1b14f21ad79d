//! Batch processing command for multiple PDF files.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use fintract_core::models::config::{FintractConfig, SectionMode};
use fintract_core::{BatchExporter, DocumentProcessor, process_batch_with};

use super::config::load_config;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob patterns (default: `inputs` from the config file)
    inputs: Vec<String>,

    /// Workbook output path
    #[arg(long)]
    output_xlsx: Option<PathBuf>,

    /// CSV output path
    #[arg(long)]
    output_csv: Option<PathBuf>,

    /// Group line items from every product section, not just the first
    #[arg(long)]
    all_sections: bool,

    /// Do not retry with the lopdf renderer when pdf-extract fails
    #[arg(long)]
    no_fallback: bool,

    /// Hide the progress bar
    #[arg(short, long)]
    quiet: bool,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    apply_overrides(&mut config, &args);

    let patterns = if args.inputs.is_empty() {
        config.inputs.clone()
    } else {
        args.inputs.clone()
    };

    if patterns.is_empty() {
        warn!("No input files given; writing empty outputs");
    }

    let files = expand_inputs(&patterns);

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    let pb = if args.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(files.len() as u64)
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let processor = DocumentProcessor::from_config(&config);
    let batch = process_batch_with(&processor, &files, |path, record| {
        if let Some(record) = record {
            debug!(
                "{}: {} field(s), {} line item(s)",
                path.display(),
                record.fields.len(),
                record.products.len()
            );
        }
        pb.inc(1);
    });

    pb.finish_and_clear();

    let exporter = BatchExporter::from_config(&config.output);
    exporter.export(&batch)?;

    println!(
        "{} Workbook written to {}",
        style("✓").green(),
        exporter.xlsx_path().display()
    );
    println!(
        "{} CSV written to {}",
        style("✓").green(),
        exporter.csv_path().display()
    );

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        files.len(),
        start.elapsed()
    );
    println!(
        "   {} extracted ({} line items), {} skipped",
        style(batch.len()).green(),
        batch.product_count(),
        style(batch.skipped.len()).red()
    );

    if !batch.skipped.is_empty() {
        println!();
        println!("{}", style("Skipped files:").red());
        for path in &batch.skipped {
            println!("  - {}", path.display());
        }
    }

    Ok(())
}

fn apply_overrides(config: &mut FintractConfig, args: &BatchArgs) {
    if let Some(path) = &args.output_xlsx {
        config.output.xlsx_path = path.clone();
    }
    if let Some(path) = &args.output_csv {
        config.output.csv_path = path.clone();
    }
    if args.all_sections {
        config.extraction.product_sections = SectionMode::All;
    }
    if args.no_fallback {
        config.pdf.enable_fallback = false;
    }
}

/// Expand glob patterns in order. A pattern that is not valid glob syntax or
/// matches nothing is kept as a literal path, so it is either processed as
/// a plain file name or reported as skipped.
fn expand_inputs(patterns: &[String]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for pattern in patterns {
        let mut matched: Vec<PathBuf> = match glob(pattern) {
            Ok(paths) => paths.filter_map(|r| r.ok()).collect(),
            Err(e) => {
                warn!("Not a glob pattern, using {} as a path: {}", pattern, e);
                files.push(PathBuf::from(pattern));
                continue;
            }
        };

        if matched.is_empty() {
            warn!("No files match {}", pattern);
            files.push(PathBuf::from(pattern));
        } else {
            matched.sort();
            files.append(&mut matched);
        }
    }

    files
}

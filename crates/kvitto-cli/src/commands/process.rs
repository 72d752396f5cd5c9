//! Process command - extract products from a receipt PDF.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use kvitto_core::report::{HEADERS, format_fixed, record_cells, render_table};
use kvitto_core::{ExtractionResult, PdfRowExtractor, ReceiptExtractor};

use super::config::load_config;

/// Arguments for processing a receipt.
#[derive(Args)]
pub struct ProcessArgs {
    /// Receipt PDF to read
    #[arg(default_value = "ica_receipt.pdf")]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned table
    Table,
    /// JSON array of products
    Json,
    /// CSV output
    Csv,
}

pub fn run(args: ProcessArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    info!("Processing file: {}", args.input.display());

    let source = PdfRowExtractor::open(&args.input, &config.pdf)
        .with_context(|| format!("Failed to open receipt {}", args.input.display()))?;

    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {msg}")?
            .progress_chars("##-"),
    );

    let result = ReceiptExtractor::new(&config).extract_with_progress(&source, |page, total| {
        pb.set_length(u64::from(total));
        pb.set_position(u64::from(page));
        pb.set_message(format!("Page {}/{}", page, total));
    });

    pb.finish_and_clear();
    info!(
        "Found {} products, receipt total {}",
        result.products.len(),
        format_fixed(result.total(), 2)
    );

    let output = format_products(&result, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} {} products written to {}",
            style("✓").green(),
            result.products.len(),
            output_path.display()
        );
    } else {
        print!("{}", output);
    }

    if !result.skipped_pages.is_empty() {
        info!("Skipped pages: {:?}", result.skipped_pages);
    }
    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn format_products(result: &ExtractionResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(&result.products)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&result.products)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Csv => format_csv(result),
    }
}

fn format_csv(result: &ExtractionResult) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(HEADERS)?;
    for product in &result.products {
        wtr.write_record(record_cells(product))?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

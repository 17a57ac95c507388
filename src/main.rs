use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use relgraph::output::write_csv;
use relgraph::pipeline::extract_document;

#[derive(Parser, Debug)]
#[command(name = "relgraph")]
#[command(about = "Extract relationship data from a sanctions-list XML document")]
struct Args {
    /// Path to the input XML file
    input_file: PathBuf,

    /// Path to the output CSV file
    #[arg(short, long, default_value = "relationship_data.csv")]
    output_file: PathBuf,
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(
        env_logger::Env::default()
            .filter_or("RUST_LOG", "info")
    ).init();

    let args = Args::parse();

    log::info!("Reading {}", args.input_file.display());
    let content = std::fs::read_to_string(&args.input_file)
        .with_context(|| format!("Failed to read input file: {}", args.input_file.display()))?;

    let report = extract_document(&content)
        .context("Extraction failed")?;

    log::info!("=== Extraction Complete ===");
    log::info!("Entities in document: {}", report.entities_total);
    log::info!("Entities with relationships: {}", report.entities_with_relationships);
    log::info!("Relationship rows: {}", report.triples.len());
    if !report.skipped.is_empty() {
        log::warn!("Entities skipped due to errors: {}", report.skipped.len());
        for skipped in &report.skipped {
            log::warn!("  entity {}: {}", skipped.index, skipped.reason);
        }
    }

    let file = File::create(&args.output_file)
        .with_context(|| format!("Failed to create output file: {}", args.output_file.display()))?;
    let mut writer = BufWriter::new(file);
    write_csv(&mut writer, &report.triples)?;

    log::info!(
        "Wrote {} row(s) to {}",
        report.triples.len(),
        args.output_file.display()
    );

    Ok(())
}

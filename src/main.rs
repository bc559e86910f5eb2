//! props-convert - CLI tool to convert prop catalogs to xLights inventory XML.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use props_convert_rs::{
    assemble, generate_inventory_xml, parse_catalog_file, validate_rows, VendorConfig,
};

/// Convert a prop catalog CSV into xLights vendor inventory XML.
#[derive(Parser, Debug)]
#[command(name = "props-convert")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input catalog CSV file path
    #[arg(short, long)]
    input: PathBuf,

    /// Output XML file path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Vendor config JSON file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Report catalog warnings only, don't generate output
    #[arg(long)]
    validate: bool,

    /// Output parsed rows as JSON
    #[arg(long)]
    debug: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Processing: {}", args.input.display());

    // Parse the input file
    let rows = parse_catalog_file(&args.input)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;

    info!("Parsed {} row(s)", rows.len());

    // Debug output
    if args.debug {
        let json = serde_json::to_string_pretty(&rows)?;
        println!("{}", json);
        return Ok(());
    }

    // Validate-only mode: advisory diagnostics, no output written
    if args.validate {
        let report = validate_rows(&rows);
        for warning in &report.warnings {
            warn!("{}", warning);
        }
        info!(
            "Checked {} row(s): {} warning(s), {} would be excluded",
            rows.len(),
            report.warnings.len(),
            report.excluded_rows
        );
        return Ok(());
    }

    // Load vendor config
    let vendor = match &args.config {
        Some(path) => VendorConfig::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => VendorConfig::default(),
    };

    // Assemble and serialize
    let doc = assemble(&rows, &vendor)?;
    let xml = generate_inventory_xml(&doc);

    // Write output
    let output_path = args.output.unwrap_or_else(|| {
        let mut path = args.input.clone();
        path.set_extension("xml");
        path
    });

    std::fs::write(&output_path, &xml)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    info!("Generated: {}", output_path.display());
    info!("  # of models processed: {}", doc.models.len());

    Ok(())
}

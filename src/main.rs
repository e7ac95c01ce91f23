//! window-bom - CLI tool to compute window cutting lists from order files.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use window_bom::{
    compute_batch_with, load_orders, parse_order_line, validate_orders, CalcOptions,
    FormulaRepository, InMemoryFormulaRepository,
};

/// Compute frame, sash, screen, glass and grid cutting lists for window orders.
#[derive(Parser, Debug)]
#[command(name = "window-bom")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input order file (JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// Output BOM file path (JSON); printed to stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Reject order lines with defaulted codes or validation findings
    #[arg(long)]
    strict: bool,

    /// Validate only, don't compute
    #[arg(long)]
    validate: bool,

    /// Formula records (JSON) used for XO/OX lines
    #[arg(long)]
    formulas: Option<PathBuf>,

    /// Print a plain-text cutting list instead of JSON
    #[arg(long)]
    summary: bool,

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
        .with_writer(std::io::stderr)
        .init();

    info!("Processing: {}", args.input.display());

    let records = load_orders(&args.input)
        .with_context(|| format!("Failed to load {}", args.input.display()))?;

    info!("Loaded {} order line(s)", records.len());

    // Validate-only mode
    if args.validate {
        let orders: Vec<_> = records
            .iter()
            .map(|raw| parse_order_line(raw).order)
            .collect();
        let validation = validate_orders(&orders)?;

        for warning in &validation.warnings {
            warn!("{}", warning);
        }

        for err in &validation.errors {
            error!("{}", err);
        }

        if !validation.passed {
            anyhow::bail!("Validation failed");
        }

        info!("Validation passed");
        return Ok(());
    }

    let repo = match &args.formulas {
        Some(path) => Some(
            InMemoryFormulaRepository::load(path)
                .with_context(|| format!("Failed to load formulas from {}", path.display()))?,
        ),
        None => None,
    };

    let options = if args.strict {
        CalcOptions::strict()
    } else {
        CalcOptions::default()
    };

    let results = compute_batch_with(
        &records,
        &options,
        repo.as_ref().map(|r| r as &dyn FormulaRepository),
    )?;

    for (idx, result) in results.iter().enumerate() {
        for warning in &result.warnings {
            warn!("Order line {}: {}", idx + 1, warning);
        }
    }

    let rendered = if args.summary {
        results
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n\n")
    } else {
        serde_json::to_string_pretty(&results)?
    };

    match args.output {
        Some(output_path) => {
            std::fs::write(&output_path, &rendered)
                .with_context(|| format!("Failed to write {}", output_path.display()))?;
            info!("Generated: {}", output_path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

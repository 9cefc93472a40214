//! siteplan - CLI tool to check a site layout and export its order payload.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use siteplan_rs::{
    load_plan, order_from_layout, validate_plan, Catalogue, GridStep, Platform, PlannerConfig,
};

/// Check a site cabin layout for collisions and export a checkout payload.
#[derive(Parser, Debug)]
#[command(name = "siteplan")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input layout JSON file path
    #[arg(short, long, required_unless_present = "catalogue")]
    input: Option<PathBuf>,

    /// Output payload file path (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Checkout platform: generic, shopify or stripe
    #[arg(short, long, default_value = "generic")]
    platform: String,

    /// Grid step used with --snap when the layout declares none
    #[arg(short, long)]
    grid: Option<f64>,

    /// Snap item positions to the grid before checking
    #[arg(long)]
    snap: bool,

    /// Validate only, don't generate output
    #[arg(long)]
    validate: bool,

    /// Print the unit catalogue as JSON and exit
    #[arg(long)]
    catalogue: bool,

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

    if args.catalogue {
        println!("{}", serde_json::to_string_pretty(&Catalogue::standard())?);
        return Ok(());
    }

    let input = args.input.context("No input layout given")?;

    let platform = match Platform::parse(&args.platform) {
        Some(platform) => platform,
        None => {
            warn!(
                "Unknown platform '{}', falling back to {}",
                args.platform,
                Platform::default()
            );
            Platform::default()
        }
    };

    let mut config = PlannerConfig::new(platform);
    if let Some(step) = args.grid {
        config.grid_step = GridStep::new(step)?;
    }
    if args.snap {
        info!(
            "Snapping positions to the grid ({} unless the layout sets one)",
            config.grid_step
        );
    }

    info!("Processing: {}", input.display());

    // Load and place the layout
    let plan = load_plan(&input, &config, args.snap)
        .with_context(|| format!("Failed to load {}", input.display()))?;

    info!("Placed {} item(s)", plan.len());

    // Validate
    let validation = validate_plan(&plan);

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    for err in &validation.errors {
        error!("{}", err);
    }

    if !validation.passed {
        anyhow::bail!("Validation failed");
    }

    // Validate-only mode
    if args.validate {
        info!("Validation passed");
        return Ok(());
    }

    // Generate output
    let payload = order_from_layout(&input, &config, args.snap)?;
    let json = payload.to_json_pretty()?;

    match args.output {
        Some(output_path) => {
            std::fs::write(&output_path, &json)
                .with_context(|| format!("Failed to write {}", output_path.display()))?;
            info!("Generated: {}", output_path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

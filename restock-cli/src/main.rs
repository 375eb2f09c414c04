//! Restock CLI — feature-engineering and replenishment-report commands.
//!
//! Commands:
//! - `features` — build the feature-engineered sales CSV from a cleaned sales export
//! - `replenish` — compute the safety-stock/reorder-point report from a sales
//!   export plus a TOML config and/or flag overrides

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use restock_core::features::build_features;
use restock_runner::{
    export_features_csv, export_report_csv, export_report_json, read_sales_csv,
    run_pipeline_from_observations, RunConfig,
};

#[derive(Parser)]
#[command(
    name = "restock",
    about = "Restock CLI — demand-driven inventory replenishment"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the feature-engineered sales CSV (calendar fields, rolling mean, lag).
    Features {
        /// Cleaned sales CSV with date,product,quantity columns.
        #[arg(long)]
        sales: PathBuf,

        /// Output CSV path. Defaults to sales_with_features.csv.
        #[arg(long, default_value = "sales_with_features.csv")]
        output: PathBuf,
    },
    /// Compute the safety-stock and reorder-point report.
    Replenish {
        /// Cleaned sales CSV with date,product,quantity columns.
        #[arg(long)]
        sales: PathBuf,

        /// Path to a TOML config file (policy parameters + stock overrides).
        #[arg(long)]
        config: Option<PathBuf>,

        /// Supplier lead time in days (overrides the config file).
        #[arg(long)]
        lead_time_days: Option<u32>,

        /// Target service level in (0,1) (overrides the config file).
        #[arg(long)]
        service_level: Option<f64>,

        /// Default stock on hand (overrides the config file).
        #[arg(long)]
        current_stock: Option<f64>,

        /// Output CSV path. Defaults to safety_stock_and_reorder_report.csv.
        #[arg(long, default_value = "safety_stock_and_reorder_report.csv")]
        output: PathBuf,

        /// Also write the full JSON artifact next to the CSV.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Features { sales, output } => run_features(&sales, &output),
        Commands::Replenish {
            sales,
            config,
            lead_time_days,
            service_level,
            current_stock,
            output,
            json,
        } => run_replenish(
            &sales,
            config.as_deref(),
            lead_time_days,
            service_level,
            current_stock,
            &output,
            json,
        ),
    }
}

fn run_features(sales: &std::path::Path, output: &std::path::Path) -> Result<()> {
    let observations = read_sales_csv(sales)?;
    let records = build_features(&observations)?;
    let csv = export_features_csv(&records)?;
    std::fs::write(output, csv)
        .with_context(|| format!("failed to write {}", output.display()))?;
    println!(
        "Wrote {} feature records for {} observations to {}",
        records.len(),
        observations.len(),
        output.display()
    );
    Ok(())
}

fn run_replenish(
    sales: &std::path::Path,
    config_path: Option<&std::path::Path>,
    lead_time_days: Option<u32>,
    service_level: Option<f64>,
    current_stock: Option<f64>,
    output: &std::path::Path,
    json: bool,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => RunConfig::from_toml_file(path)?,
        None => RunConfig::default(),
    };
    if let Some(days) = lead_time_days {
        config.policy.lead_time_days = days;
    }
    if let Some(level) = service_level {
        config.policy.service_level = level;
    }
    if let Some(stock) = current_stock {
        config.policy.current_stock = stock;
    }

    let observations = read_sales_csv(sales)?;
    let report = run_pipeline_from_observations(&config, &observations)?;

    let csv = export_report_csv(&report)?;
    std::fs::write(output, csv)
        .with_context(|| format!("failed to write {}", output.display()))?;

    if json {
        let json_path = output.with_extension("json");
        std::fs::write(&json_path, export_report_json(&report)?)
            .with_context(|| format!("failed to write {}", json_path.display()))?;
    }

    println!(
        "Run {}: {} policies, {} failures -> {}",
        &report.run_id[..12.min(report.run_id.len())],
        report.policies.len(),
        report.failures.len(),
        output.display()
    );
    for failure in &report.failures {
        eprintln!("  failed: {} ({})", failure.product, failure.error);
    }

    Ok(())
}

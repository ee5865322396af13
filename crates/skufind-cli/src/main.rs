mod config;

use clap::{Parser, Subcommand};
use config::{OutputFormat, SkufindConfig, DEFAULT_CONFIG};
use skufind_core::SkuFindResult;
use skufind_registry::{render_json, render_report, render_summary, SkuRegistry};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// SKU whose report the demo walk-through prints.
const DEMO_SKU: &str = "AA0001";

#[derive(Parser)]
#[command(name = "skufind", about = "SKU findability status checker")]
struct Cli {
    /// Path to config file (defaults to ./skufind.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a findability report for each SKU
    Report {
        #[arg(required = true)]
        skus: Vec<String>,
    },
    /// Print the status of every SKU
    List,
    /// Walk through a single report and the full listing
    Demo,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let (config_path, explicit) = match cli.config {
        Some(path) => (path, true),
        None => (PathBuf::from(DEFAULT_CONFIG), false),
    };
    let config = SkufindConfig::load(&config_path, explicit)?;
    let format = cli.format.unwrap_or(config.output.format);

    let registry = config.build_registry()?;
    info!(records = registry.len(), "SKU registry ready");

    println!("{}", run(&registry, &cli.command, format)?);
    Ok(())
}

/// Renders the output of `command` against `registry`.
fn run(registry: &SkuRegistry, command: &Commands, format: OutputFormat) -> SkuFindResult<String> {
    match (command, format) {
        (Commands::Report { skus }, OutputFormat::Text) => Ok(skus
            .iter()
            .map(|sku| render_report(sku, registry.lookup(sku).as_ref()))
            .collect::<Vec<_>>()
            .join("\n")),
        (Commands::Report { skus }, OutputFormat::Json) => skus
            .iter()
            .map(|sku| render_json(&registry.lookup(sku)))
            .collect::<SkuFindResult<Vec<_>>>()
            .map(|docs| docs.join("\n")),
        (Commands::List, OutputFormat::Text) => Ok(render_summary(&registry.list_all())),
        (Commands::Demo, OutputFormat::Text) => Ok([
            "🔍 SKU Findability Status Checker".to_string(),
            "=".repeat(40),
            render_report(DEMO_SKU, registry.lookup(DEMO_SKU).as_ref()),
            String::new(),
            "📊 All SKU Statuses:".to_string(),
            render_summary(&registry.list_all()),
        ]
        .join("\n")),
        (Commands::List | Commands::Demo, OutputFormat::Json) => {
            render_json(registry.list_all().as_slice())
        }
    }
}

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pickchart::{run_chart, ChartConfig, ChartSettings, Dataset, SelectionMatch};

/// Interactive point chart with click-to-select markers.
#[derive(Parser, Debug)]
#[command(name = "pickchart", version, about)]
struct Args {
    /// JSON array of points to show instead of the bundled sample
    #[arg(short, long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// JSON or YAML settings file overriding the defaults
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Delay before markers appear, in milliseconds
    #[arg(long, value_name = "MS")]
    loading_delay_ms: Option<u64>,

    /// How clicks are matched against selected points (coordinates or id)
    #[arg(long = "match", value_name = "MODE")]
    selection_match: Option<SelectionMatch>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pickchart=info")),
        )
        .init();

    let args = Args::parse();

    let dataset = match &args.data {
        Some(path) => Dataset::from_json_file(path)
            .with_context(|| format!("loading dataset {}", path.display()))?,
        None => Dataset::bundled().context("loading bundled dataset")?,
    };

    let mut cfg = ChartConfig::default();
    if let Some(path) = &args.config {
        ChartSettings::from_file(path)
            .and_then(|settings| settings.apply_to(&mut cfg))
            .with_context(|| format!("applying settings {}", path.display()))?;
    }
    if let Some(ms) = args.loading_delay_ms {
        cfg.loading_delay = Duration::from_millis(ms);
    }
    if let Some(m) = args.selection_match {
        cfg.selection_match = m;
    }

    tracing::info!(
        points = dataset.len(),
        selection_match = %cfg.selection_match,
        "dataset ready"
    );

    run_chart(dataset, cfg).map_err(|e| anyhow::anyhow!("chart window failed: {e}"))
}

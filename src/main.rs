use anyhow::{bail, Result};
use chrono::Utc;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use battle_analyzer::config::Config;
use battle_analyzer::loader;
use battle_analyzer::reporting::{console, export};
use battle_analyzer::scoring;

fn main() -> Result<()> {
    let cfg = Config::from_env();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    let paths: Vec<PathBuf> = std::env::args().skip(1).map(PathBuf::from).collect();
    if paths.is_empty() {
        bail!("usage: battle-analyzer <config_metrics.json> [<config_metrics.json> ...]");
    }

    let records = loader::load_batch(&paths);
    if records.is_empty() {
        bail!("none of the {} metrics files could be loaded", paths.len());
    }
    info!(
        "Scoring {} of {} configurations",
        records.len(),
        paths.len()
    );

    let results = scoring::rank(&records)?;

    console::print_rankings(&results);
    if let Some(winner) = results.first() {
        console::print_recommendations(winner);
    }

    let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
    if cfg.export_csv {
        let path = PathBuf::from(&cfg.output_dir).join(format!("battle_{}.csv", timestamp));
        export::write_csv(&results, &path)?;
        info!("CSV exported to {}", path.display());
    }
    if cfg.export_json {
        let path = PathBuf::from(&cfg.output_dir).join(format!("battle_{}.json", timestamp));
        export::write_json(&results, &path)?;
        info!("JSON exported to {}", path.display());
    }

    Ok(())
}

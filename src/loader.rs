use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::models::MetricRecord;
use crate::scoring::consistency_score;

/// Load one `<config>_metrics.json` artifact into a MetricRecord.
///
/// Missing fields deserialize to zero, the drawdown sign is normalized
/// so the engine only ever sees loss magnitudes, and consistency is
/// derived from the trade history. A file that fails to parse is
/// rejected whole; a partially-read record would distort every other
/// record's normalization range.
pub fn load_metrics_file(path: &Path) -> Result<MetricRecord> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let mut record: MetricRecord = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    record.identifier = config_name(path);
    record.max_drawdown = record.max_drawdown.abs();
    record.consistency = consistency_score(&record.trade_pnls);

    Ok(record)
}

/// Load every artifact, skipping the ones that fail with a warning so
/// one corrupt file does not sink the whole comparison.
pub fn load_batch(paths: &[PathBuf]) -> Vec<MetricRecord> {
    let mut records = Vec::new();
    for path in paths {
        match load_metrics_file(path) {
            Ok(record) => {
                info!("Loaded {} from {}", record.identifier, path.display());
                records.push(record);
            }
            Err(e) => warn!("Skipping {}: {:#}", path.display(), e),
        }
    }
    records
}

/// Configuration name from the file stem, with the `_metrics` suffix
/// the battle runner appends stripped off.
fn config_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown");
    stem.strip_suffix("_metrics").unwrap_or(stem).to_string()
}

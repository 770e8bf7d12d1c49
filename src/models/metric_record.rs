use serde::{Deserialize, Serialize};

/// Metrics written by one bot instance at the end of a battle run.
///
/// Every field defaults to zero so a partially-written artifact still
/// deserializes; the loader is the only place defaults are decided.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricRecord {
    #[serde(default)]
    pub identifier: String,
    #[serde(default)]
    pub total_pnl: f64,
    #[serde(default)]
    pub win_rate: f64,
    #[serde(default)]
    pub max_drawdown: f64,
    #[serde(default)]
    pub sharpe_ratio: f64,
    #[serde(default)]
    pub trade_pnls: Vec<f64>,
    #[serde(default)]
    pub total_trades: usize,
    #[serde(default)]
    pub winning_trades: usize,
    #[serde(default)]
    pub losing_trades: usize,
    /// Derived from trade_pnls at load time, never read from the artifact.
    #[serde(skip_deserializing)]
    pub consistency: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoredResult {
    pub identifier: String,
    pub composite_score: f64,
    pub record: MetricRecord,
}

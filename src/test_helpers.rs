use crate::models::MetricRecord;
use crate::scoring::consistency_score;

/// A fully-populated MetricRecord with derived consistency, the way the
/// loader builds one from an artifact.
pub fn make_record(
    identifier: &str,
    total_pnl: f64,
    win_rate: f64,
    max_drawdown: f64,
    sharpe_ratio: f64,
    trade_pnls: &[f64],
) -> MetricRecord {
    let winning = trade_pnls.iter().filter(|p| **p > 0.0).count();
    MetricRecord {
        identifier: identifier.to_string(),
        total_pnl,
        win_rate,
        max_drawdown,
        sharpe_ratio,
        trade_pnls: trade_pnls.to_vec(),
        total_trades: trade_pnls.len(),
        winning_trades: winning,
        losing_trades: trade_pnls.len() - winning,
        consistency: consistency_score(trade_pnls),
    }
}

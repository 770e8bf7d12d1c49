use std::path::{Path, PathBuf};

/// A temp directory unique to this test process and call site.
pub fn temp_battle_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "battle_analyzer_integ_{}_{}_{}",
        label,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Write a `<config>_metrics.json` artifact the way a bot instance does
/// at the end of a battle run.
pub fn write_metrics_file(
    dir: &Path,
    config: &str,
    total_pnl: f64,
    win_rate: f64,
    max_drawdown: f64,
    sharpe_ratio: f64,
    trade_pnls: &[f64],
) -> PathBuf {
    let winning = trade_pnls.iter().filter(|p| **p > 0.0).count();
    let payload = serde_json::json!({
        "total_pnl": total_pnl,
        "win_rate": win_rate,
        "max_drawdown": max_drawdown,
        "sharpe_ratio": sharpe_ratio,
        "trade_pnls": trade_pnls,
        "total_trades": trade_pnls.len(),
        "winning_trades": winning,
        "losing_trades": trade_pnls.len() - winning,
    });

    let path = dir.join(format!("{}_metrics.json", config));
    std::fs::write(&path, serde_json::to_string_pretty(&payload).unwrap()).unwrap();
    path
}

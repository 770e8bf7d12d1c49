use anyhow::Result;
use std::io::Write;
use std::path::Path;

use crate::models::ScoredResult;

/// One CSV row per configuration, in descending score order.
pub fn write_csv(results: &[ScoredResult], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut f = std::fs::File::create(path)?;
    writeln!(
        f,
        "rank,config,score,total_pnl,win_rate,max_drawdown,sharpe_ratio,consistency,total_trades,winning_trades,losing_trades"
    )?;
    for (i, result) in results.iter().enumerate() {
        let m = &result.record;
        writeln!(
            f,
            "{},{},{:.2},{:.2},{:.2},{:.2},{:.4},{:.2},{},{},{}",
            i + 1,
            result.identifier,
            result.composite_score,
            m.total_pnl,
            m.win_rate,
            m.max_drawdown,
            m.sharpe_ratio,
            m.consistency,
            m.total_trades,
            m.winning_trades,
            m.losing_trades
        )?;
    }

    Ok(())
}

/// Ranked results plus a summary block, as pretty JSON.
pub fn write_json(results: &[ScoredResult], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let total_trades: usize = results.iter().map(|r| r.record.total_trades).sum();
    let payload = serde_json::json!({
        "summary": {
            "configs_compared": results.len(),
            "total_trades": total_trades,
            "winner": results.first().map(|r| r.identifier.clone()),
        },
        "rankings": results,
    });

    std::fs::write(path, serde_json::to_string_pretty(&payload)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring;
    use crate::test_helpers::make_record;
    use std::path::PathBuf;

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "battle_analyzer_export_{}_{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn sample_results() -> Vec<crate::models::ScoredResult> {
        let records = vec![
            make_record("winner", 100.0, 60.0, 4.0, 1.5, &[10.0, 10.0]),
            make_record("loser", -20.0, 40.0, 12.0, 0.5, &[]),
        ];
        scoring::rank(&records).unwrap()
    }

    #[test]
    fn csv_has_header_and_ranked_rows() {
        let path = temp_dir().join("battle.csv");
        write_csv(&sample_results(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("rank,config,score"));
        assert!(lines[1].starts_with("1,winner,"));
        assert!(lines[2].starts_with("2,loser,"));
    }

    #[test]
    fn json_summary_names_the_winner() {
        let path = temp_dir().join("battle.json");
        write_json(&sample_results(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["summary"]["winner"], "winner");
        assert_eq!(value["summary"]["configs_compared"], 2);
        assert_eq!(value["rankings"][0]["identifier"], "winner");
    }

    #[test]
    fn exports_create_missing_directories() {
        let path = temp_dir().join("nested").join("out").join("battle.csv");
        write_csv(&sample_results(), &path).unwrap();
        assert!(path.exists());
    }
}

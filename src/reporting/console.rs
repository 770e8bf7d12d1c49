use crate::models::ScoredResult;

/// Print the ranked comparison, one block per configuration, followed
/// by the winner banner.
pub fn print_rankings(results: &[ScoredResult]) {
    println!("\n{}", "=".repeat(70));
    println!("  CONFIG BATTLE RESULTS");
    println!("{}", "=".repeat(70));

    for (i, result) in results.iter().enumerate() {
        let m = &result.record;
        println!();
        println!("  [{}] {}", i + 1, result.identifier);
        println!("  ───────────────────────────────────");
        println!("  Score:        {:.2}/100", result.composite_score);
        println!("  PnL:          ${:+.2}", m.total_pnl);
        println!("  Win Rate:     {:.1}%", m.win_rate);
        println!("  Max Drawdown: {:.2}%", m.max_drawdown);
        println!("  Sharpe:       {:.2}", m.sharpe_ratio);
        println!("  Consistency:  {:.1}/100", m.consistency);
        println!(
            "  Trades:       {} ({}W / {}L)",
            m.total_trades, m.winning_trades, m.losing_trades
        );
    }

    if let Some(winner) = results.first() {
        println!();
        println!("{}", "=".repeat(70));
        println!(
            "  WINNER: {}  ({:.2}/100)",
            winner.identifier, winner.composite_score
        );
        println!("{}", "=".repeat(70));
    }
}

/// Production-readiness assessment of the winning configuration.
pub fn print_recommendations(winner: &ScoredResult) {
    let m = &winner.record;
    println!();
    println!("  RECOMMENDATIONS");
    println!("  ───────────────────────────────────");
    println!("  PnL:       {}", pnl_assessment(m.total_pnl));
    println!("  Win Rate:  {}", win_rate_assessment(m.win_rate));
    println!("  Drawdown:  {}", drawdown_assessment(m.max_drawdown));
    println!();
}

fn pnl_assessment(pnl: f64) -> &'static str {
    if pnl > 0.0 {
        "positive - viable for production"
    } else {
        "negative - needs optimization before going live"
    }
}

fn win_rate_assessment(win_rate: f64) -> &'static str {
    if win_rate >= 55.0 {
        "strong (>=55%)"
    } else if win_rate >= 50.0 {
        "moderate (50-55%) - room for improvement"
    } else {
        "low (<50%) - revisit entry filters"
    }
}

fn drawdown_assessment(max_drawdown: f64) -> &'static str {
    if max_drawdown < 5.0 {
        "low (<5%) - safe to scale"
    } else if max_drawdown < 10.0 {
        "moderate (5-10%) - scale cautiously"
    } else {
        "high (>10%) - reduce position sizes"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pnl_thresholds() {
        assert!(pnl_assessment(0.01).starts_with("positive"));
        assert!(pnl_assessment(0.0).starts_with("negative"));
        assert!(pnl_assessment(-5.0).starts_with("negative"));
    }

    #[test]
    fn win_rate_thresholds() {
        assert!(win_rate_assessment(55.0).starts_with("strong"));
        assert!(win_rate_assessment(50.0).starts_with("moderate"));
        assert!(win_rate_assessment(49.9).starts_with("low"));
    }

    #[test]
    fn drawdown_thresholds() {
        assert!(drawdown_assessment(4.9).starts_with("low"));
        assert!(drawdown_assessment(5.0).starts_with("moderate"));
        assert!(drawdown_assessment(10.0).starts_with("high"));
    }
}

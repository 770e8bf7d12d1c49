// Fixed calibration: a coefficient of variation of 10 maps to zero
// consistency. Changing it changes every historical score.
const CV_SCALE: f64 = 10.0;

/// Consistency of trade outcomes, 0-100, from the coefficient of
/// variation of trade-level PnL. Tight clustering around the mean
/// magnitude scores high; wide dispersion scores low.
///
/// Uses sample variance (n-1 divisor). Fewer than two trades carry no
/// dispersion information and score zero, as does an all-zero history.
pub fn consistency_score(trade_pnls: &[f64]) -> f64 {
    if trade_pnls.len() < 2 {
        return 0.0;
    }

    let n = trade_pnls.len() as f64;
    let mean = trade_pnls.iter().sum::<f64>() / n;
    let variance = trade_pnls
        .iter()
        .map(|p| (p - mean).powi(2))
        .sum::<f64>()
        / (n - 1.0);

    let mean_abs = trade_pnls.iter().map(|p| p.abs()).sum::<f64>() / n;
    if mean_abs == 0.0 {
        return 0.0;
    }

    let cv = variance.sqrt() / mean_abs;
    (100.0 - cv * CV_SCALE).clamp(0.0, 100.0)
}

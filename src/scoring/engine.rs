use thiserror::Error;

use crate::models::{MetricRecord, ScoredResult};

// Weights must sum to 1.0 so composite scores stay on the 0-100 scale.
const WEIGHT_PNL: f64 = 0.40;
const WEIGHT_WIN_RATE: f64 = 0.20;
const WEIGHT_MAX_DRAWDOWN: f64 = 0.20;
const WEIGHT_SHARPE: f64 = 0.10;
const WEIGHT_CONSISTENCY: f64 = 0.10;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("cannot score an empty batch of metric records")]
    EmptyBatch,
}

#[derive(Debug, Clone, Copy)]
pub struct MetricRange {
    pub min: f64,
    pub max: f64,
}

impl MetricRange {
    fn over<F>(records: &[MetricRecord], field: F) -> Self
    where
        F: Fn(&MetricRecord) -> f64,
    {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for r in records {
            let v = field(r);
            min = min.min(v);
            max = max.max(v);
        }
        Self { min, max }
    }
}

/// Observed {min, max} per metric across one batch.
///
/// Scores are only meaningful relative to the batch being compared, so
/// ranges are recomputed on every run and never persisted. Consistency
/// is absent on purpose: it is already 0-100 by construction.
#[derive(Debug, Clone, Copy)]
pub struct MetricRanges {
    pub pnl: MetricRange,
    pub win_rate: MetricRange,
    pub max_drawdown: MetricRange,
    pub sharpe_ratio: MetricRange,
}

impl MetricRanges {
    pub fn from_records(records: &[MetricRecord]) -> Result<Self, ScoringError> {
        if records.is_empty() {
            return Err(ScoringError::EmptyBatch);
        }
        Ok(Self {
            pnl: MetricRange::over(records, |r| r.total_pnl),
            win_rate: MetricRange::over(records, |r| r.win_rate),
            max_drawdown: MetricRange::over(records, |r| r.max_drawdown),
            sharpe_ratio: MetricRange::over(records, |r| r.sharpe_ratio),
        })
    }
}

/// Linear rescale of `value` to 0-100 within `[min, max]`.
///
/// A degenerate range means the metric carries no discriminating
/// information in this batch; every record lands on the neutral
/// midpoint rather than being biased toward either end.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if max == min {
        return 50.0;
    }
    ((value - min) / (max - min)) * 100.0
}

/// Weighted composite for one record against batch-wide ranges.
pub fn composite_score(record: &MetricRecord, ranges: &MetricRanges) -> f64 {
    let pnl = normalize(record.total_pnl, ranges.pnl.min, ranges.pnl.max);
    let win_rate = normalize(record.win_rate, ranges.win_rate.min, ranges.win_rate.max);
    // Inverted: the smallest drawdown in the batch contributes maximally
    let drawdown = 100.0
        - normalize(
            record.max_drawdown,
            ranges.max_drawdown.min,
            ranges.max_drawdown.max,
        );
    let sharpe = normalize(
        record.sharpe_ratio,
        ranges.sharpe_ratio.min,
        ranges.sharpe_ratio.max,
    );

    pnl * WEIGHT_PNL
        + win_rate * WEIGHT_WIN_RATE
        + drawdown * WEIGHT_MAX_DRAWDOWN
        + sharpe * WEIGHT_SHARPE
        + record.consistency * WEIGHT_CONSISTENCY
}

/// Score every record against ranges computed once over the full batch,
/// sorted descending. The sort is stable, so equal scores keep their
/// input order; rank is position + 1.
pub fn rank(records: &[MetricRecord]) -> Result<Vec<ScoredResult>, ScoringError> {
    let ranges = MetricRanges::from_records(records)?;

    let mut results: Vec<ScoredResult> = records
        .iter()
        .map(|r| ScoredResult {
            identifier: r.identifier.clone(),
            composite_score: composite_score(r, &ranges),
            record: r.clone(),
        })
        .collect();

    results.sort_by(|a, b| b.composite_score.partial_cmp(&a.composite_score).unwrap());

    Ok(results)
}

pub mod consistency;
pub mod engine;

pub use consistency::consistency_score;
pub use engine::{composite_score, normalize, rank, MetricRange, MetricRanges, ScoringError};

pub mod metric_record;

pub use metric_record::{MetricRecord, ScoredResult};

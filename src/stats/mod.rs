//! Stats module - Metric derivation and ledger aggregation

mod calculator;
mod summary;

pub use calculator::{
    format_decimal, CalculatorError, MetricCalculator, MetricEntry, MetricKind, MetricResult,
};
pub use summary::{format_rupiah, MetricSummary, ProfitStatus};

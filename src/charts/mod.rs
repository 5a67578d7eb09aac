//! Charts module - Chart rendering

mod plotter;
mod renderer;

pub use plotter::ChartPlotter;
pub use renderer::StaticChartRenderer;

use crate::stats::{MetricEntry, MetricKind};

/// Date label for an x-axis position; points sit on integer positions.
pub fn date_label_at(dates: &[String], x: f64) -> String {
    let idx = x.round();
    if (x - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    dates.get(idx as usize).cloned().unwrap_or_default()
}

/// Padded y-axis range for a metric; never empty.
pub fn value_range(kind: MetricKind, entries: &[MetricEntry]) -> (f64, f64) {
    let (min, max) = entries
        .iter()
        .map(|e| kind.value_of(e))
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if !min.is_finite() {
        return (0.0, 1.0);
    }

    let span = max - min;
    let pad = if span > 0.0 {
        span * 0.1
    } else {
        (max.abs() * 0.1).max(1.0)
    };
    (min - pad, max + pad)
}

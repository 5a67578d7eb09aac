//! Metric Calculator Module
//! Derives FCR, HDA, feed cost and profit from a single production record.

use crate::data::ProductionRecord;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    #[error("Egg count and average egg weight must be greater than zero (eggs: {egg_count}, weight: {avg_egg_weight})")]
    NonPositiveProduction { egg_count: f64, avg_egg_weight: f64 },
    #[error("Herd count must be greater than zero (herd: {0})")]
    NonPositiveHerd(f64),
}

/// One ledger row: the persisted metrics of a single date.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricEntry {
    pub date: String,
    pub fcr: f64,
    pub hda: f64,
    pub feed_cost: f64,
    pub profit: f64,
}

/// Calculator output: the ledger entry plus the money figures behind the profit.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricResult {
    pub entry: MetricEntry,
    pub revenue: f64,
    pub total_feed_cost: f64,
}

/// Metrics that are charted per date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    Fcr,
    Hda,
    FeedCost,
}

impl MetricKind {
    pub const ALL: [MetricKind; 3] = [MetricKind::Fcr, MetricKind::Hda, MetricKind::FeedCost];

    /// Ledger column name, also used as the chart label.
    pub fn label(&self) -> &'static str {
        match self {
            MetricKind::Fcr => "FCR",
            MetricKind::Hda => "HDA",
            MetricKind::FeedCost => "Feed Cost",
        }
    }

    /// Short identifier for widget ids and file names.
    pub fn key(&self) -> &'static str {
        match self {
            MetricKind::Fcr => "fcr",
            MetricKind::Hda => "hda",
            MetricKind::FeedCost => "feed_cost",
        }
    }

    pub fn value_of(&self, entry: &MetricEntry) -> f64 {
        match self {
            MetricKind::Fcr => entry.fcr,
            MetricKind::Hda => entry.hda,
            MetricKind::FeedCost => entry.feed_cost,
        }
    }

    /// Decimal places shown on screen.
    pub fn display_decimals(&self) -> usize {
        match self {
            MetricKind::Hda => 2,
            MetricKind::Fcr | MetricKind::FeedCost => 4,
        }
    }
}

/// Fixed-place display text. Persisted values are never rounded.
pub fn format_decimal(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// Applies the fixed production formulas.
pub struct MetricCalculator;

impl MetricCalculator {
    /// Compute the derived metrics for one record.
    ///
    /// Refuses records whose egg count, average egg weight or herd count is not
    /// strictly positive; nothing is divided by zero.
    pub fn compute(record: &ProductionRecord) -> Result<MetricResult, CalculatorError> {
        let eggs = record.egg_count;
        let weight = record.avg_egg_weight;

        if !(eggs > 0.0 && weight > 0.0) {
            return Err(CalculatorError::NonPositiveProduction {
                egg_count: eggs,
                avg_egg_weight: weight,
            });
        }
        if !(record.herd_count > 0.0) {
            return Err(CalculatorError::NonPositiveHerd(record.herd_count));
        }

        let egg_mass = eggs * weight;
        let total_feed_cost = record.feed_consumption * record.feed_price;
        let revenue = eggs * record.egg_price;

        Ok(MetricResult {
            entry: MetricEntry {
                date: record.date.clone(),
                fcr: record.feed_consumption / egg_mass,
                hda: (eggs / record.herd_count) * 100.0,
                feed_cost: total_feed_cost / egg_mass,
                profit: revenue - total_feed_cost,
            },
            revenue,
            total_feed_cost,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ProductionRecord {
        ProductionRecord {
            date: "2024-01-01".to_string(),
            herd_count: 100.0,
            egg_count: 90.0,
            avg_egg_weight: 0.06,
            feed_consumption: 10.0,
            feed_price: 5000.0,
            egg_price: 2000.0,
        }
    }

    #[test]
    fn test_reference_record() {
        let result = MetricCalculator::compute(&sample_record()).unwrap();

        assert_eq!(format_decimal(result.entry.fcr, 4), "1.8519");
        assert_eq!(format_decimal(result.entry.hda, 2), "90.00");
        assert_eq!(result.entry.profit, 130_000.0);
        assert_eq!(result.revenue, 180_000.0);
        assert_eq!(result.total_feed_cost, 50_000.0);
        assert_eq!(format_decimal(result.entry.feed_cost, 4), "9259.2593");
    }

    #[test]
    fn test_stored_values_are_full_precision() {
        let result = MetricCalculator::compute(&sample_record()).unwrap();
        assert_eq!(result.entry.fcr, 10.0 / (90.0 * 0.06));
        assert_ne!(result.entry.fcr, 1.8519);
    }

    #[test]
    fn test_profit_identity() {
        let cases = [
            (120.0, 0.055, 12.5, 7300.0, 1850.0),
            (3.0, 1.0, 100.0, 9000.0, 10.0),
            (1.0, 0.01, 0.0, 0.0, 0.0),
        ];

        for (eggs, weight, feed, feed_price, egg_price) in cases {
            let record = ProductionRecord {
                egg_count: eggs,
                avg_egg_weight: weight,
                feed_consumption: feed,
                feed_price,
                egg_price,
                ..sample_record()
            };
            let result = MetricCalculator::compute(&record).unwrap();
            assert_eq!(result.entry.profit, eggs * egg_price - feed * feed_price);
        }
    }

    #[test]
    fn test_zero_eggs_or_weight_is_refused() {
        let no_eggs = ProductionRecord {
            egg_count: 0.0,
            ..sample_record()
        };
        let no_weight = ProductionRecord {
            avg_egg_weight: 0.0,
            ..sample_record()
        };
        let negative = ProductionRecord {
            egg_count: -5.0,
            ..sample_record()
        };

        for record in [no_eggs, no_weight, negative] {
            assert!(matches!(
                MetricCalculator::compute(&record),
                Err(CalculatorError::NonPositiveProduction { .. })
            ));
        }
    }

    #[test]
    fn test_zero_herd_is_refused() {
        let record = ProductionRecord {
            herd_count: 0.0,
            ..sample_record()
        };
        assert_eq!(
            MetricCalculator::compute(&record),
            Err(CalculatorError::NonPositiveHerd(0.0))
        );
    }

    #[test]
    fn test_display_rounding() {
        assert_eq!(format_decimal(1.851851, 4), "1.8519");
        assert_eq!(format_decimal(89.996, 2), "90.00");
        assert_eq!(format_decimal(90.0, 2), "90.00");
        assert_eq!(MetricKind::Hda.display_decimals(), 2);
        assert_eq!(MetricKind::FeedCost.display_decimals(), 4);
    }
}

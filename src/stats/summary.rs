//! Ledger Summary
//! Aggregates persisted metrics into totals, averages and a profit status.

use crate::stats::MetricEntry;
use statrs::statistics::Statistics;
use std::fmt;

/// Overall business outcome of the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfitStatus {
    Profit,
    Loss,
    BreakEven,
}

impl ProfitStatus {
    pub fn from_total(total_profit: f64) -> Self {
        if total_profit > 0.0 {
            ProfitStatus::Profit
        } else if total_profit < 0.0 {
            ProfitStatus::Loss
        } else {
            ProfitStatus::BreakEven
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProfitStatus::Profit => "PROFIT",
            ProfitStatus::Loss => "LOSS",
            ProfitStatus::BreakEven => "BREAK-EVEN",
        }
    }
}

impl fmt::Display for ProfitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricSummary {
    pub entry_count: usize,
    pub total_profit: f64,
    pub avg_fcr: f64,
    pub avg_hda: f64,
    pub status: ProfitStatus,
}

impl MetricSummary {
    /// Summarize ledger entries. An empty ledger has no summary.
    pub fn from_entries(entries: &[MetricEntry]) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }

        let total_profit: f64 = entries.iter().map(|e| e.profit).sum();
        let avg_fcr = entries.iter().map(|e| e.fcr).mean();
        let avg_hda = entries.iter().map(|e| e.hda).mean();

        Some(Self {
            entry_count: entries.len(),
            total_profit,
            avg_fcr,
            avg_hda,
            status: ProfitStatus::from_total(total_profit),
        })
    }
}

/// Format money as `Rp 130,000` (no decimals, comma thousands separators).
pub fn format_rupiah(value: f64) -> String {
    let rounded = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(rounded.len() + rounded.len() / 3);
    for (i, digit) in rounded.chars().enumerate() {
        if i > 0 && (rounded.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if value < 0.0 && rounded != "0" {
        format!("Rp -{grouped}")
    } else {
        format!("Rp {grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(profit: f64, fcr: f64, hda: f64) -> MetricEntry {
        MetricEntry {
            date: "2024-01-01".to_string(),
            fcr,
            hda,
            feed_cost: 0.0,
            profit,
        }
    }

    #[test]
    fn test_offsetting_profits_break_even() {
        let entries = vec![
            entry(100.0, 1.0, 80.0),
            entry(-50.0, 2.0, 90.0),
            entry(-50.0, 3.0, 100.0),
        ];
        let summary = MetricSummary::from_entries(&entries).unwrap();

        assert_eq!(summary.total_profit, 0.0);
        assert_eq!(summary.status, ProfitStatus::BreakEven);
        assert_eq!(summary.status.label(), "BREAK-EVEN");
        assert!((summary.avg_fcr - 2.0).abs() < 1e-12);
        assert!((summary.avg_hda - 90.0).abs() < 1e-12);
        assert_eq!(summary.entry_count, 3);
    }

    #[test]
    fn test_status_classification() {
        assert_eq!(ProfitStatus::from_total(130_000.0), ProfitStatus::Profit);
        assert_eq!(ProfitStatus::from_total(-0.5), ProfitStatus::Loss);
        assert_eq!(ProfitStatus::from_total(0.0), ProfitStatus::BreakEven);
        assert_eq!(ProfitStatus::Loss.to_string(), "LOSS");
    }

    #[test]
    fn test_empty_ledger_has_no_summary() {
        assert!(MetricSummary::from_entries(&[]).is_none());
    }

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(130_000.0), "Rp 130,000");
        assert_eq!(format_rupiah(1_250_000.4), "Rp 1,250,000");
        assert_eq!(format_rupiah(999.0), "Rp 999");
        assert_eq!(format_rupiah(0.0), "Rp 0");
        assert_eq!(format_rupiah(-50_000.0), "Rp -50,000");
        assert_eq!(format_rupiah(-0.2), "Rp 0");
    }
}

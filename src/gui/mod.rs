//! GUI module - User interface components

mod app;
mod chart_viewer;
mod control_panel;
mod input_view;
mod productivity_view;
mod summary_view;

pub use app::LayerDashboardApp;

use crate::stats::MetricEntry;

/// Ledger contents as last read for a view, or the user-facing read error.
pub type LedgerSnapshot = Result<Vec<MetricEntry>, String>;

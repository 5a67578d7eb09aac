//! Chart Plotter Module
//! Creates interactive scatter charts of ledger metrics using egui_plot.

use crate::charts::date_label_at;
use crate::stats::{format_decimal, MetricEntry, MetricKind};
use egui::Color32;
use egui_plot::{Plot, PlotPoints, Points};

/// One color per charted metric
pub const FCR_COLOR: Color32 = Color32::from_rgb(231, 76, 60); // Red
pub const HDA_COLOR: Color32 = Color32::from_rgb(46, 204, 113); // Green
pub const FEED_COST_COLOR: Color32 = Color32::from_rgb(52, 152, 219); // Blue

const CHART_HEIGHT: f32 = 260.0;

/// Creates metric visualization charts using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    pub fn metric_color(kind: MetricKind) -> Color32 {
        match kind {
            MetricKind::Fcr => FCR_COLOR,
            MetricKind::Hda => HDA_COLOR,
            MetricKind::FeedCost => FEED_COST_COLOR,
        }
    }

    /// Draw a scatter chart of one metric against ledger dates.
    /// X-axis: entry position labelled with its date, Y-axis: metric value
    pub fn draw_scatter_chart(ui: &mut egui::Ui, kind: MetricKind, entries: &[MetricEntry]) {
        let dates: Vec<String> = entries.iter().map(|e| e.date.clone()).collect();
        let hover_dates = dates.clone();
        let decimals = kind.display_decimals();

        let points: PlotPoints = entries
            .iter()
            .enumerate()
            .map(|(i, e)| [i as f64, kind.value_of(e)])
            .collect();

        Plot::new(format!("scatter_{}", kind.key()))
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .x_axis_label("tanggal")
            .y_axis_label(kind.label())
            .x_axis_formatter(move |mark, _range| date_label_at(&dates, mark.value))
            .label_formatter(move |name, value| {
                let date = date_label_at(&hover_dates, value.x);
                if name.is_empty() || date.is_empty() {
                    String::new()
                } else {
                    format!("{}\n{}: {}", date, name, format_decimal(value.y, decimals))
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.points(
                    Points::new(points)
                        .radius(4.0)
                        .color(Self::metric_color(kind))
                        .name(kind.label()),
                );
            });
    }
}

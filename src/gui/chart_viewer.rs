//! Chart Viewer Widget
//! One scatter chart card per ledger metric.

use crate::charts::ChartPlotter;
use crate::gui::control_panel::StatusKind;
use crate::gui::LedgerSnapshot;
use crate::stats::{MetricEntry, MetricKind};
use egui::RichText;

/// Chart card configuration
const CHART_SPACING: f32 = 15.0;

/// Actions triggered from the chart viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartViewerAction {
    None,
    ExportPng,
}

pub struct ChartViewer;

impl ChartViewer {
    /// Draw the chart viewer
    pub fn show(ui: &mut egui::Ui, snapshot: &LedgerSnapshot) -> ChartViewerAction {
        let mut action = ChartViewerAction::None;

        ui.horizontal(|ui| {
            ui.heading("📊 Visualisasi Scatter Plot");
            if matches!(snapshot, Ok(entries) if !entries.is_empty()) {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("🖼 Export PNG").clicked() {
                        action = ChartViewerAction::ExportPng;
                    }
                });
            }
        });
        ui.add_space(8.0);

        let entries = match snapshot {
            Err(error) => {
                ui.label(RichText::new(error).color(StatusKind::Error.color()));
                return action;
            }
            Ok(entries) if entries.is_empty() => {
                ui.label(
                    RichText::new("Belum ada data untuk divisualisasikan.")
                        .color(StatusKind::Warning.color()),
                );
                return action;
            }
            Ok(entries) => entries,
        };

        for kind in MetricKind::ALL {
            Self::draw_chart_card(ui, kind, entries);
            ui.add_space(CHART_SPACING);
        }

        action
    }

    /// Draw a single chart card
    fn draw_chart_card(ui: &mut egui::Ui, kind: MetricKind, entries: &[MetricEntry]) {
        let border_color = ChartPlotter::metric_color(kind);

        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(2.0, border_color))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(
                    RichText::new(format!("Scatter Plot {}", kind.label()))
                        .size(18.0)
                        .strong()
                        .color(border_color),
                );
                ui.add_space(8.0);
                ChartPlotter::draw_scatter_chart(ui, kind, entries);
            });
    }
}

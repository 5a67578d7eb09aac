//! Summary View
//! Profit/loss totals, averages and the PDF download.

use crate::gui::control_panel::StatusKind;
use crate::gui::input_view::InputView;
use crate::gui::LedgerSnapshot;
use crate::stats::{format_decimal, format_rupiah, MetricSummary, ProfitStatus};
use egui::RichText;

/// Actions triggered from the summary view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryAction {
    None,
    ExportPdf,
}

pub struct SummaryView;

impl SummaryView {
    fn status_banner(status: ProfitStatus) -> (StatusKind, &'static str) {
        match status {
            ProfitStatus::Profit => (StatusKind::Success, "Usaha mengalami KEUNTUNGAN."),
            ProfitStatus::Loss => (StatusKind::Error, "Usaha mengalami KERUGIAN."),
            ProfitStatus::BreakEven => (StatusKind::Info, "Usaha berada pada titik impas."),
        }
    }

    pub fn show(ui: &mut egui::Ui, snapshot: &LedgerSnapshot) -> SummaryAction {
        let mut action = SummaryAction::None;

        ui.heading("📋 Summary Keuntungan & Kerugian");
        ui.add_space(8.0);

        let entries = match snapshot {
            Err(error) => {
                ui.label(RichText::new(error).color(StatusKind::Error.color()));
                return action;
            }
            Ok(entries) => entries,
        };

        let Some(summary) = MetricSummary::from_entries(entries) else {
            ui.label(
                RichText::new("Belum ada data untuk dianalisis.")
                    .color(StatusKind::Warning.color()),
            );
            return action;
        };

        ui.columns(3, |cols| {
            InputView::metric_card(&mut cols[0], "Total Profit", format_rupiah(summary.total_profit));
            InputView::metric_card(
                &mut cols[1],
                "Rata-rata FCR",
                format_decimal(summary.avg_fcr, 4),
            );
            InputView::metric_card(
                &mut cols[2],
                "Rata-rata HDA (%)",
                format_decimal(summary.avg_hda, 2),
            );
        });
        ui.add_space(10.0);

        let (kind, text) = Self::status_banner(summary.status);
        egui::Frame::none()
            .rounding(5.0)
            .stroke(egui::Stroke::new(1.5, kind.color()))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(
                    RichText::new(format!("{} ({})", text, summary.status))
                        .size(14.0)
                        .color(kind.color()),
                );
            });
        ui.add_space(6.0);
        ui.label(
            RichText::new(format!("Based on {} saved entries", summary.entry_count))
                .size(11.0)
                .color(egui::Color32::GRAY),
        );
        ui.add_space(12.0);

        if ui.button("📥 Download as PDF").clicked() {
            action = SummaryAction::ExportPdf;
        }

        action
    }
}

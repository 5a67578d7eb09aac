//! Productivity View
//! Tabular display of the ledger with a clear-all button.

use crate::gui::control_panel::StatusKind;
use crate::gui::LedgerSnapshot;
use crate::ledger::LEDGER_COLUMNS;
use crate::stats::{format_decimal, format_rupiah, MetricEntry, MetricKind};
use egui::{RichText, ScrollArea};

const TABLE_HEIGHT: f32 = 420.0;

/// Actions triggered from the productivity view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductivityAction {
    None,
    ClearLedger,
}

pub struct ProductivityView;

impl ProductivityView {
    pub fn show(ui: &mut egui::Ui, snapshot: &LedgerSnapshot) -> ProductivityAction {
        let mut action = ProductivityAction::None;

        ui.heading("📈 Data Produktivitas");
        ui.add_space(8.0);

        let entries = match snapshot {
            Err(error) => {
                ui.label(RichText::new(error).color(StatusKind::Error.color()));
                return action;
            }
            Ok(entries) if entries.is_empty() => {
                ui.label(
                    RichText::new("Belum ada data yang disimpan.")
                        .color(StatusKind::Warning.color()),
                );
                return action;
            }
            Ok(entries) => entries,
        };

        ui.label(
            RichText::new(format!("{} entries", entries.len()))
                .size(11.0)
                .color(egui::Color32::GRAY),
        );
        Self::draw_ledger_table(ui, entries);
        ui.add_space(12.0);

        if ui.button("🗑 Hapus Semua Data").clicked() {
            action = ProductivityAction::ClearLedger;
        }

        action
    }

    fn draw_ledger_table(ui: &mut egui::Ui, entries: &[MetricEntry]) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ScrollArea::vertical()
                    .id_salt("ledger_table")
                    .max_height(TABLE_HEIGHT)
                    .show(ui, |ui| {
                        egui::Grid::new("ledger_grid")
                            .striped(true)
                            .min_col_width(90.0)
                            .spacing([12.0, 4.0])
                            .show(ui, |ui| {
                                for header in LEDGER_COLUMNS {
                                    ui.label(RichText::new(header).strong().size(12.0));
                                }
                                ui.end_row();

                                for entry in entries {
                                    ui.label(RichText::new(&entry.date).size(12.0));
                                    for kind in MetricKind::ALL {
                                        let value = format_decimal(
                                            kind.value_of(entry),
                                            kind.display_decimals(),
                                        );
                                        ui.label(RichText::new(value).size(12.0));
                                    }
                                    ui.label(RichText::new(format_rupiah(entry.profit)).size(12.0));
                                    ui.end_row();
                                }
                            });
                    });
            });
    }
}

//! Input CSV View
//! Upload a production CSV, pick a date, review its metrics and save them.

use crate::data::{ProductionDataset, ProductionRecord, NUMERIC_COLUMNS};
use crate::gui::control_panel::StatusKind;
use crate::stats::{format_decimal, format_rupiah, CalculatorError, MetricResult};
use egui::{ComboBox, RichText, ScrollArea};
use std::path::Path;

const PREVIEW_ROWS: usize = 200;

/// Actions triggered from the input view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    BrowseCsv,
    DateChanged,
    SaveEntry,
}

#[derive(Default)]
pub struct InputView {
    pub selected_date: Option<String>,
    pub result: Option<Result<MetricResult, CalculatorError>>,
    /// Upload failure shown in place of the dataset
    pub load_error: Option<String>,
}

impl InputView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset selection for a freshly loaded dataset.
    pub fn reset(&mut self, dataset: Option<&ProductionDataset>) {
        self.selected_date = dataset.and_then(|d| d.dates().into_iter().next());
        self.result = None;
        self.load_error = None;
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        dataset: Option<&ProductionDataset>,
        csv_path: Option<&Path>,
    ) -> InputAction {
        let mut action = InputAction::None;

        ui.heading("📂 Upload Dataset");
        ui.add_space(8.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let path_text = csv_path
                        .and_then(|p| p.file_name())
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "No file selected".to_string());
                    ui.label(RichText::new(path_text).size(12.0));

                    if ui.button("📂 Upload file CSV").clicked() {
                        action = InputAction::BrowseCsv;
                    }
                });
            });
        ui.add_space(10.0);

        if let Some(error) = &self.load_error {
            ui.label(RichText::new(error).color(StatusKind::Error.color()));
            return action;
        }

        let Some(dataset) = dataset else {
            ui.label(
                RichText::new("Silakan upload dataset terlebih dahulu.")
                    .color(StatusKind::Info.color()),
            );
            return action;
        };

        ui.label(RichText::new("Preview Dataset").size(16.0).strong());
        ui.label(
            RichText::new(format!(
                "{} rows kept, {} dropped during cleaning",
                dataset.len(),
                dataset.rows_dropped
            ))
            .size(11.0)
            .color(egui::Color32::GRAY),
        );
        Self::draw_preview(ui, &dataset.records);
        ui.add_space(12.0);

        if dataset.is_empty() {
            ui.label(
                RichText::new("No usable rows after cleaning.")
                    .color(StatusKind::Warning.color()),
            );
            return action;
        }

        ui.horizontal(|ui| {
            ui.label("Pilih Tanggal:");
            let selected_text = self.selected_date.clone().unwrap_or_default();
            ComboBox::from_id_salt("selected_date")
                .width(180.0)
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    for date in dataset.dates() {
                        let is_selected = self.selected_date.as_deref() == Some(date.as_str());
                        if ui.selectable_label(is_selected, date.as_str()).clicked() && !is_selected {
                            self.selected_date = Some(date);
                            action = InputAction::DateChanged;
                        }
                    }
                });
        });
        ui.add_space(12.0);

        match &self.result {
            Some(Ok(result)) => {
                Self::draw_result(ui, result);
                ui.add_space(10.0);
                if ui.button("💾 Simpan Data").clicked() {
                    action = InputAction::SaveEntry;
                }
            }
            Some(Err(CalculatorError::NonPositiveProduction { .. })) => {
                ui.label(
                    RichText::new("Jumlah telur atau berat telur tidak boleh 0.")
                        .color(StatusKind::Warning.color()),
                );
            }
            Some(Err(err)) => {
                ui.label(RichText::new(err.to_string()).color(StatusKind::Warning.color()));
            }
            None => {}
        }

        action
    }

    fn draw_preview(ui: &mut egui::Ui, records: &[ProductionRecord]) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ScrollArea::both()
                    .id_salt("dataset_preview")
                    .max_height(240.0)
                    .show(ui, |ui| {
                        egui::Grid::new("dataset_preview_grid")
                            .striped(true)
                            .min_col_width(70.0)
                            .spacing([10.0, 4.0])
                            .show(ui, |ui| {
                                ui.label(RichText::new("tanggal").strong().size(11.0));
                                for col in NUMERIC_COLUMNS {
                                    ui.label(RichText::new(col).strong().size(11.0));
                                }
                                ui.end_row();

                                for r in records.iter().take(PREVIEW_ROWS) {
                                    ui.label(RichText::new(&r.date).size(11.0));
                                    for v in [
                                        r.herd_count,
                                        r.egg_count,
                                        r.avg_egg_weight,
                                        r.feed_consumption,
                                        r.feed_price,
                                        r.egg_price,
                                    ] {
                                        ui.label(RichText::new(v.to_string()).size(11.0));
                                    }
                                    ui.end_row();
                                }
                            });
                    });
            });
    }

    fn draw_result(ui: &mut egui::Ui, result: &MetricResult) {
        ui.label(RichText::new("📊 Hasil Perhitungan").size(16.0).strong());
        ui.add_space(6.0);

        let entry = &result.entry;
        ui.columns(3, |cols| {
            Self::metric_card(&mut cols[0], "FCR (kg)", format_decimal(entry.fcr, 4));
            Self::metric_card(&mut cols[1], "HDA (%)", format_decimal(entry.hda, 2));
            Self::metric_card(
                &mut cols[2],
                "Feed Cost",
                format_decimal(entry.feed_cost, 4),
            );
        });
        ui.add_space(6.0);

        ui.columns(3, |cols| {
            Self::metric_card(&mut cols[0], "Revenue", format_rupiah(result.revenue));
            Self::metric_card(
                &mut cols[1],
                "Total Feed Cost",
                format_rupiah(result.total_feed_cost),
            );
            Self::metric_card(&mut cols[2], "Profit / Loss", format_rupiah(entry.profit));
        });
    }

    pub(crate) fn metric_card(ui: &mut egui::Ui, label: &str, value: String) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(8.0)
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(label).size(12.0).color(egui::Color32::GRAY));
                ui.label(RichText::new(value).size(20.0).strong());
            });
    }
}

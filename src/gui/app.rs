//! Layer Dashboard Main Application
//! Main window with the menu panel and the active view.

use crate::charts::StaticChartRenderer;
use crate::config::AppConfig;
use crate::data::DataLoader;
use crate::gui::chart_viewer::{ChartViewer, ChartViewerAction};
use crate::gui::control_panel::{ControlPanel, ControlPanelAction, MenuMode, StatusKind};
use crate::gui::input_view::{InputAction, InputView};
use crate::gui::productivity_view::{ProductivityAction, ProductivityView};
use crate::gui::summary_view::{SummaryAction, SummaryView};
use crate::gui::LedgerSnapshot;
use crate::ledger::Ledger;
use crate::report::PdfReport;
use crate::stats::{MetricCalculator, MetricSummary};
use egui::{RichText, SidePanel};
use std::fs;
use std::path::Path;
use tracing::{debug, error, info, warn};

/// Main application window.
pub struct LayerDashboardApp {
    config: AppConfig,
    ledger: Ledger,
    loader: DataLoader,
    control_panel: ControlPanel,
    input_view: InputView,

    // Ledger contents for the ledger views, re-read after every change
    snapshot: Option<LedgerSnapshot>,
}

impl LayerDashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let ledger = Ledger::new(config.ledger_path.clone());
        info!(
            ledger = %ledger.path().display(),
            exists = ledger.exists(),
            "dashboard started"
        );

        Self {
            config,
            ledger,
            loader: DataLoader::new(),
            control_panel: ControlPanel::new(),
            input_view: InputView::new(),
            snapshot: None,
        }
    }

    /// Ledger contents, read from disk on first use after an invalidation.
    fn ledger_snapshot(&mut self) -> &LedgerSnapshot {
        let ledger = &self.ledger;
        self.snapshot.get_or_insert_with(|| {
            ledger.load().map_err(|e| {
                error!(error = %e, "failed to read ledger");
                e.to_string()
            })
        })
    }

    fn handle_menu_changed(&mut self, mode: MenuMode) {
        debug!(menu = mode.label(), "menu changed");
        if mode.reads_ledger() {
            self.snapshot = None;
        }
    }

    /// Handle CSV file selection
    fn handle_browse_csv(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        else {
            return; // User cancelled
        };

        match self.loader.load_csv(&path) {
            Ok(dataset) => {
                let message = format!(
                    "Loaded {} rows ({} dropped during cleaning)",
                    dataset.len(),
                    dataset.rows_dropped
                );
                self.input_view.reset(Some(dataset));
                self.control_panel.set_status(StatusKind::Success, message);
                self.refresh_calculation();
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "CSV upload failed");
                self.input_view.reset(None);
                self.input_view.load_error = Some(e.to_string());
                self.control_panel.set_status(StatusKind::Error, e.to_string());
            }
        }
    }

    /// Recompute metrics for the selected date
    fn refresh_calculation(&mut self) {
        let result = match (self.loader.dataset(), self.input_view.selected_date.as_deref()) {
            (Some(dataset), Some(date)) => dataset
                .record_for_date(date)
                .map(MetricCalculator::compute),
            _ => None,
        };

        if let Some(Err(e)) = &result {
            warn!(date = ?self.input_view.selected_date, error = %e, "metrics not computed");
            self.control_panel.set_status(StatusKind::Warning, e.to_string());
        }
        self.input_view.result = result;
    }

    fn handle_save_entry(&mut self) {
        let Some(Ok(result)) = &self.input_view.result else {
            return;
        };
        let entry = result.entry.clone();

        match self.ledger.append(entry) {
            Ok(total) => self.control_panel.set_status(
                StatusKind::Success,
                format!("Data berhasil disimpan! ({} entries in ledger)", total),
            ),
            Err(e) => {
                error!(error = %e, "failed to save entry");
                self.control_panel.set_status(StatusKind::Error, e.to_string());
            }
        }
        self.snapshot = None;
    }

    fn handle_clear_ledger(&mut self) {
        match self.ledger.clear() {
            Ok(()) => self
                .control_panel
                .set_status(StatusKind::Success, "Semua data berhasil dihapus."),
            Err(e) => {
                error!(error = %e, "failed to clear ledger");
                self.control_panel.set_status(StatusKind::Error, e.to_string());
            }
        }
        self.snapshot = None;
    }

    /// Handle PDF export - render the summary and save it where the user chooses
    fn handle_export_pdf(&mut self) {
        let summary = match self.ledger_snapshot() {
            Ok(entries) => MetricSummary::from_entries(entries),
            Err(_) => None,
        };
        let Some(summary) = summary else {
            self.control_panel
                .set_status(StatusKind::Warning, "Belum ada data untuk dianalisis.");
            return;
        };

        let bytes = match PdfReport::render_summary(&summary) {
            Ok(bytes) => bytes,
            Err(e) => {
                error!(error = %e, "PDF rendering failed");
                self.control_panel
                    .set_status(StatusKind::Error, format!("PDF error: {}", e));
                return;
            }
        };

        let Some(output_path) = rfd::FileDialog::new()
            .add_filter("PDF", &["pdf"])
            .set_file_name(&self.config.report_file_name)
            .save_file()
        else {
            return; // User cancelled
        };

        match PdfReport::save(&bytes, &output_path) {
            Ok(()) => {
                self.control_panel.set_status(
                    StatusKind::Success,
                    format!("PDF exported: {}", output_path.display()),
                );
                self.open_exported(&output_path);
            }
            Err(e) => {
                error!(error = %e, "PDF save failed");
                self.control_panel
                    .set_status(StatusKind::Error, format!("PDF error: {}", e));
            }
        }
    }

    /// Handle PNG export - render every metric chart into a chosen folder
    fn handle_export_png(&mut self) {
        let entries = match self.ledger_snapshot() {
            Ok(entries) if !entries.is_empty() => entries.clone(),
            _ => {
                self.control_panel
                    .set_status(StatusKind::Warning, "No charts to export");
                return;
            }
        };

        let Some(dir) = rfd::FileDialog::new().pick_folder() else {
            return; // User cancelled
        };

        let images = match StaticChartRenderer::render_all(
            &entries,
            self.config.chart_width,
            self.config.chart_height,
        ) {
            Ok(images) => images,
            Err(e) => {
                error!(error = %e, "chart rendering failed");
                self.control_panel
                    .set_status(StatusKind::Error, format!("Render error: {}", e));
                return;
            }
        };

        for (kind, png) in &images {
            let path = dir.join(StaticChartRenderer::file_name(*kind));
            if let Err(e) = fs::write(&path, png) {
                error!(path = %path.display(), error = %e, "chart save failed");
                self.control_panel
                    .set_status(StatusKind::Error, format!("Failed to save {}: {}", path.display(), e));
                return;
            }
        }

        info!(dir = %dir.display(), charts = images.len(), "charts exported");
        self.control_panel.set_status(
            StatusKind::Success,
            format!("{} charts exported to {}", images.len(), dir.display()),
        );
        self.open_exported(&dir);
    }

    fn open_exported(&self, path: &Path) {
        if !self.config.open_after_export {
            return;
        }
        if let Err(e) = open::that(path) {
            warn!(path = %path.display(), error = %e, "could not open exported file");
        }
    }

    fn show_active_view(&mut self, ui: &mut egui::Ui) {
        match self.control_panel.menu {
            MenuMode::InputCsv => {
                let action = self.input_view.show(
                    ui,
                    self.loader.dataset(),
                    self.loader.file_path().map(|p| p.as_path()),
                );
                match action {
                    InputAction::BrowseCsv => self.handle_browse_csv(),
                    InputAction::DateChanged => self.refresh_calculation(),
                    InputAction::SaveEntry => self.handle_save_entry(),
                    InputAction::None => {}
                }
            }
            MenuMode::Productivity => {
                let action = ProductivityView::show(ui, self.ledger_snapshot());
                if action == ProductivityAction::ClearLedger {
                    self.handle_clear_ledger();
                }
            }
            MenuMode::Visualization => {
                let action = ChartViewer::show(ui, self.ledger_snapshot());
                if action == ChartViewerAction::ExportPng {
                    self.handle_export_png();
                }
            }
            MenuMode::Summary => {
                let action = SummaryView::show(ui, self.ledger_snapshot());
                if action == SummaryAction::ExportPdf {
                    self.handle_export_pdf();
                }
            }
        }
    }
}

impl eframe::App for LayerDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(220.0)
            .max_width(280.0)
            .show(ctx, |ui| {
                if let ControlPanelAction::MenuChanged(mode) = self.control_panel.show(ui) {
                    self.handle_menu_changed(mode);
                }
            });

        // Central panel - active view
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(
                RichText::new("🐔 Sistem Data Science Ayam Layer")
                    .size(24.0)
                    .strong(),
            );
            ui.separator();
            ui.add_space(6.0);

            egui::ScrollArea::vertical()
                .id_salt("active_view")
                .auto_shrink([false, false])
                .show(ui, |ui| self.show_active_view(ui));
        });
    }
}

//! Control Panel Widget
//! Left side panel with the menu and the status line.

use egui::{Color32, RichText};

/// Dashboard menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuMode {
    #[default]
    InputCsv,
    Productivity,
    Visualization,
    Summary,
}

impl MenuMode {
    pub const ALL: [MenuMode; 4] = [
        MenuMode::InputCsv,
        MenuMode::Productivity,
        MenuMode::Visualization,
        MenuMode::Summary,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuMode::InputCsv => "Input CSV",
            MenuMode::Productivity => "Produktivitas",
            MenuMode::Visualization => "Visualisasi Data",
            MenuMode::Summary => "Summary",
        }
    }

    /// Views that read the ledger.
    pub fn reads_ledger(&self) -> bool {
        !matches!(self, MenuMode::InputCsv)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Warning,
    Error,
}

impl StatusKind {
    pub fn color(&self) -> Color32 {
        match self {
            StatusKind::Info => Color32::from_rgb(100, 149, 237),
            StatusKind::Success => Color32::from_rgb(40, 167, 69),
            StatusKind::Warning => Color32::from_rgb(243, 156, 18),
            StatusKind::Error => Color32::from_rgb(220, 53, 69),
        }
    }
}

/// Last user-visible outcome of an action.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Actions triggered from the control panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPanelAction {
    None,
    MenuChanged(MenuMode),
}

/// Left side control panel with the menu and the current status.
pub struct ControlPanel {
    pub menu: MenuMode,
    pub status: StatusMessage,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            menu: MenuMode::default(),
            status: StatusMessage::new(StatusKind::Info, "Ready"),
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status = StatusMessage::new(kind, text);
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🐔 Ayam Layer")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Sistem Data Science")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Menu Section =====
        ui.label(RichText::new("Pilih Menu").size(14.0).strong());
        ui.add_space(5.0);

        for mode in MenuMode::ALL {
            let selected = self.menu == mode;
            if ui
                .selectable_label(selected, RichText::new(mode.label()).size(13.0))
                .clicked()
                && !selected
            {
                self.menu = mode;
                action = ControlPanelAction::MenuChanged(mode);
            }
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Status Section =====
        ui.label(RichText::new("Status").size(14.0).strong());
        ui.add_space(5.0);
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.label(
                    RichText::new(&self.status.text)
                        .size(12.0)
                        .color(self.status.kind.color()),
                );
            });

        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_labels_and_order() {
        let labels: Vec<&str> = MenuMode::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(
            labels,
            vec!["Input CSV", "Produktivitas", "Visualisasi Data", "Summary"]
        );
        assert_eq!(MenuMode::default(), MenuMode::InputCsv);
    }

    #[test]
    fn test_only_input_view_skips_ledger() {
        assert!(!MenuMode::InputCsv.reads_ledger());
        assert!(MenuMode::Productivity.reads_ledger());
        assert!(MenuMode::Visualization.reads_ledger());
        assert!(MenuMode::Summary.reads_ledger());
    }
}

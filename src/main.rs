//! Layer Dashboard - Poultry Production Records & Profit Summary
//!
//! A Rust application for computing layer-farm production metrics from CSV
//! records, keeping a ledger of results, charting it and exporting a PDF summary.

mod charts;
mod config;
mod data;
mod gui;
mod ledger;
mod report;
mod stats;

use anyhow::Context;
use config::AppConfig;
use eframe::egui;
use gui::LayerDashboardApp;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::load_default().context("failed to load configuration")?;
    info!(?config, "configuration loaded");

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([960.0, 600.0])
            .with_title("Sistem Data Science Ayam Layer"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Sistem Data Science Ayam Layer",
        options,
        Box::new(move |cc| Ok(Box::new(LayerDashboardApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("dashboard failed: {e}"))
}

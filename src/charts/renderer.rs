//! Static Chart Renderer
//! Renders metric scatter charts to PNG bytes for export.
//!
//! Layout per image:
//! 1. Caption: "Scatter Plot {metric}"
//! 2. Mesh with date labels on the x-axis and metric values on the y-axis
//! 3. One filled circle per ledger entry

use crate::charts::{date_label_at, value_range};
use crate::stats::{MetricEntry, MetricKind};
use image::{ImageFormat, RgbImage};
use plotters::prelude::*;
use rayon::prelude::*;
use std::io::Cursor;
use thiserror::Error;

// Colors (RGB), matching the interactive chart palette
const FCR_RGB: RGBColor = RGBColor(231, 76, 60);
const HDA_RGB: RGBColor = RGBColor(46, 204, 113);
const FEED_COST_RGB: RGBColor = RGBColor(52, 152, 219);

const MAX_X_LABELS: usize = 12;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("No ledger entries to chart")]
    NoData,
    #[error("Invalid chart size {0}x{1}")]
    InvalidSize(u32, u32),
    #[error("Chart drawing failed: {0}")]
    Draw(String),
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

fn draw_err<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> RenderError {
    RenderError::Draw(err.to_string())
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    fn metric_rgb(kind: MetricKind) -> RGBColor {
        match kind {
            MetricKind::Fcr => FCR_RGB,
            MetricKind::Hda => HDA_RGB,
            MetricKind::FeedCost => FEED_COST_RGB,
        }
    }

    /// Render one metric's scatter chart as PNG bytes.
    pub fn render_scatter_png(
        kind: MetricKind,
        entries: &[MetricEntry],
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>, RenderError> {
        if entries.is_empty() {
            return Err(RenderError::NoData);
        }
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidSize(width, height));
        }

        let mut pixels = vec![0u8; width as usize * height as usize * 3];
        Self::draw_scatter(&mut pixels, kind, entries, width, height)?;

        let img = RgbImage::from_raw(width, height, pixels)
            .ok_or(RenderError::InvalidSize(width, height))?;
        let mut png = Vec::new();
        img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
        Ok(png)
    }

    /// Render every metric chart in parallel, in `MetricKind::ALL` order.
    pub fn render_all(
        entries: &[MetricEntry],
        width: u32,
        height: u32,
    ) -> Result<Vec<(MetricKind, Vec<u8>)>, RenderError> {
        MetricKind::ALL
            .par_iter()
            .map(|&kind| Self::render_scatter_png(kind, entries, width, height).map(|png| (kind, png)))
            .collect()
    }

    /// File name used when exporting a metric chart.
    pub fn file_name(kind: MetricKind) -> String {
        format!("scatter_{}.png", kind.key())
    }

    fn draw_scatter(
        pixels: &mut [u8],
        kind: MetricKind,
        entries: &[MetricEntry],
        width: u32,
        height: u32,
    ) -> Result<(), RenderError> {
        let dates: Vec<String> = entries.iter().map(|e| e.date.clone()).collect();
        let x_formatter = |x: &f64| date_label_at(&dates, *x);
        let (y_min, y_max) = value_range(kind, entries);
        let color = Self::metric_rgb(kind);

        let root = BitMapBackend::with_buffer(pixels, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(format!("Scatter Plot {}", kind.label()), ("sans-serif", 28))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(80)
            .build_cartesian_2d(-0.5f64..(entries.len() as f64 - 0.5), y_min..y_max)
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .x_labels(entries.len().min(MAX_X_LABELS))
            .x_label_formatter(&x_formatter)
            .x_desc("tanggal")
            .y_desc(kind.label())
            .draw()
            .map_err(draw_err)?;

        chart
            .draw_series(entries.iter().enumerate().map(|(i, e)| {
                Circle::new((i as f64, kind.value_of(e)), 5, color.filled())
            }))
            .map_err(draw_err)?;

        root.present().map_err(draw_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ledger_is_not_rendered() {
        let err = StaticChartRenderer::render_scatter_png(MetricKind::Fcr, &[], 800, 600)
            .unwrap_err();
        assert!(matches!(err, RenderError::NoData));
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let entries = vec![MetricEntry {
            date: "2024-01-01".to_string(),
            fcr: 1.85,
            hda: 90.0,
            feed_cost: 9259.26,
            profit: 130_000.0,
        }];
        let err =
            StaticChartRenderer::render_scatter_png(MetricKind::Hda, &entries, 0, 600).unwrap_err();
        assert!(matches!(err, RenderError::InvalidSize(0, 600)));
    }

    #[test]
    fn test_file_names() {
        assert_eq!(StaticChartRenderer::file_name(MetricKind::Fcr), "scatter_fcr.png");
        assert_eq!(
            StaticChartRenderer::file_name(MetricKind::FeedCost),
            "scatter_feed_cost.png"
        );
    }

    #[test]
    fn test_render_all_produces_png_per_metric() {
        let entries: Vec<MetricEntry> = [("2024-01-01", 1.85), ("2024-01-02", 2.1)]
            .into_iter()
            .map(|(date, fcr)| MetricEntry {
                date: date.to_string(),
                fcr,
                hda: 90.0,
                feed_cost: 9259.26,
                profit: 130_000.0,
            })
            .collect();

        let images = StaticChartRenderer::render_all(&entries, 800, 600).unwrap();

        let kinds: Vec<MetricKind> = images.iter().map(|(kind, _)| *kind).collect();
        assert_eq!(kinds, MetricKind::ALL.to_vec());
        for (_, png) in &images {
            assert!(png.starts_with(b"\x89PNG"));
        }
    }
}

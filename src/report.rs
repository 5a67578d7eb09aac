//! PDF Summary Report Module
//! Generates a one-page A4 summary of the ledger.
//!
//! Builds the PDF object graph directly with lopdf: one page, two standard
//! Type1 fonts, one content stream. No pagination is needed.

use crate::stats::{format_decimal, format_rupiah, MetricSummary};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

pub const REPORT_TITLE: &str = "LAPORAN SUMMARY AYAM LAYER";

/// A4 in PDF points
const PAGE_WIDTH: i64 = 595;
const PAGE_HEIGHT: i64 = 842;
const MARGIN: i64 = 72;
const TITLE_SIZE: i64 = 18;
const BODY_SIZE: i64 = 11;
const BODY_LEADING: i64 = 16;
/// 0.3 inch
const TITLE_SPACER: i64 = 22;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to build PDF: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// PDF generator for the ledger summary
pub struct PdfReport;

impl PdfReport {
    /// The four body lines under the title.
    pub fn summary_lines(summary: &MetricSummary) -> [String; 4] {
        [
            format!("Total Profit: {}", format_rupiah(summary.total_profit)),
            format!("Rata-rata FCR: {}", format_decimal(summary.avg_fcr, 4)),
            format!("Rata-rata HDA: {}%", format_decimal(summary.avg_hda, 2)),
            format!("Status Usaha: {}", summary.status),
        ]
    }

    /// Render the summary page into PDF bytes.
    pub fn render_summary(summary: &MetricSummary) -> Result<Vec<u8>, ReportError> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let body_font = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let title_font = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica-Bold",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => body_font,
                "F2" => title_font,
            },
        });

        let content = Self::page_content(summary);
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)?;
        Ok(buffer)
    }

    /// Write rendered PDF bytes to disk.
    pub fn save(bytes: &[u8], output_path: &Path) -> Result<(), ReportError> {
        fs::write(output_path, bytes)?;
        info!(path = %output_path.display(), size = bytes.len(), "PDF summary saved");
        Ok(())
    }

    fn page_content(summary: &MetricSummary) -> Content {
        let mut operations = Vec::new();
        let mut y = PAGE_HEIGHT - MARGIN;

        // Title centered using an average glyph width estimate
        let title_width = REPORT_TITLE.len() as i64 * TITLE_SIZE * 2 / 3;
        let title_x = ((PAGE_WIDTH - title_width) / 2).max(MARGIN);
        Self::push_text(&mut operations, "F2", TITLE_SIZE, title_x, y, REPORT_TITLE);
        y -= TITLE_SIZE + TITLE_SPACER;

        for line in Self::summary_lines(summary) {
            Self::push_text(&mut operations, "F1", BODY_SIZE, MARGIN, y, &line);
            y -= BODY_LEADING;
        }

        Content { operations }
    }

    fn push_text(ops: &mut Vec<Operation>, font: &str, size: i64, x: i64, y: i64, text: &str) {
        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new("Tf", vec![Object::Name(font.as_bytes().to_vec()), size.into()]));
        ops.push(Operation::new("Td", vec![x.into(), y.into()]));
        ops.push(Operation::new("Tj", vec![Object::string_literal(text)]));
        ops.push(Operation::new("ET", vec![]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::ProfitStatus;

    fn summary() -> MetricSummary {
        MetricSummary {
            entry_count: 2,
            total_profit: 130_000.0,
            avg_fcr: 1.851_851_851,
            avg_hda: 90.0,
            status: ProfitStatus::Profit,
        }
    }

    fn contains(haystack: &[u8], needle: &str) -> bool {
        haystack
            .windows(needle.len())
            .any(|w| w == needle.as_bytes())
    }

    #[test]
    fn test_summary_lines() {
        let lines = PdfReport::summary_lines(&summary());
        assert_eq!(lines[0], "Total Profit: Rp 130,000");
        assert_eq!(lines[1], "Rata-rata FCR: 1.8519");
        assert_eq!(lines[2], "Rata-rata HDA: 90.00%");
        assert_eq!(lines[3], "Status Usaha: PROFIT");
    }

    #[test]
    fn test_render_is_single_a4_page() {
        let bytes = PdfReport::render_summary(&summary()).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));

        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_render_contains_title_and_status() {
        let bytes = PdfReport::render_summary(&MetricSummary {
            total_profit: 0.0,
            status: ProfitStatus::BreakEven,
            ..summary()
        })
        .unwrap();

        assert!(contains(&bytes, REPORT_TITLE));
        assert!(contains(&bytes, "Status Usaha: BREAK-EVEN"));
        assert!(contains(&bytes, "Total Profit: Rp 0"));
    }
}

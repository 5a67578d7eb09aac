//! CSV Data Loader Module
//! Handles production CSV loading, validation and cleaning using Polars.

use super::processor::DataProcessor;
use super::record::ProductionDataset;
use polars::prelude::*;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Required columns not found: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

/// Read CSV bytes with every cell kept as text.
///
/// Schema inference is disabled so currency-formatted cells survive until cleaning.
pub fn read_text_frame(bytes: Vec<u8>) -> PolarsResult<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()
}

/// Holds the most recently uploaded production dataset.
pub struct DataLoader {
    dataset: Option<ProductionDataset>,
    file_path: Option<PathBuf>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    pub fn new() -> Self {
        Self {
            dataset: None,
            file_path: None,
        }
    }

    /// Load and clean a production CSV from disk.
    pub fn load_csv(&mut self, file_path: &Path) -> Result<&ProductionDataset, LoaderError> {
        // A failed upload must not leave the previous dataset selectable
        self.dataset = None;
        self.file_path = Some(file_path.to_path_buf());

        let bytes = fs::read(file_path).map_err(|source| LoaderError::Io {
            path: file_path.to_path_buf(),
            source,
        })?;

        let dataset = Self::parse(bytes)?;
        info!(
            path = %file_path.display(),
            kept = dataset.len(),
            dropped = dataset.rows_dropped,
            "production CSV loaded"
        );

        Ok(&*self.dataset.insert(dataset))
    }

    /// Validate and clean CSV bytes into typed records.
    pub fn parse(bytes: Vec<u8>) -> Result<ProductionDataset, LoaderError> {
        let df = read_text_frame(bytes)?;
        let headers = DataProcessor::header_map(&df);

        let missing = DataProcessor::missing_columns(&headers);
        if !missing.is_empty() {
            warn!(?missing, "upload rejected: required columns missing");
            return Err(LoaderError::MissingColumns(missing));
        }

        Ok(DataProcessor::extract_records(&df, &headers)?)
    }

    /// Get the loaded dataset.
    pub fn dataset(&self) -> Option<&ProductionDataset> {
        self.dataset.as_ref()
    }

    /// Get file path.
    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Tanggal, Jumlah Ternak ,Jumlah Telur,Berat Telur Rata-Rata,Konsumsi Pakan,Harga Pakan,Harga Telur\n";

    fn parse(body: &str) -> Result<ProductionDataset, LoaderError> {
        DataLoader::parse(format!("{HEADER}{body}").into_bytes())
    }

    #[test]
    fn test_parse_normalizes_headers_and_cleans_currency() {
        let dataset = parse("2024-01-01,100,90,0.06,10,\"Rp 5,000\",\"Rp 2,000\"\n").unwrap();

        assert_eq!(dataset.len(), 1);
        let record = &dataset.records[0];
        assert_eq!(record.date, "2024-01-01");
        assert_eq!(record.herd_count, 100.0);
        assert_eq!(record.egg_count, 90.0);
        assert_eq!(record.avg_egg_weight, 0.06);
        assert_eq!(record.feed_price, 5000.0);
        assert_eq!(record.egg_price, 2000.0);
    }

    #[test]
    fn test_parse_drops_unparseable_rows() {
        let dataset = parse(
            "2024-01-01,100,90,0.06,10,\"Rp 1,200\",2000\n\
             2024-01-02,100,abc,0.06,10,5000,2000\n\
             2024-01-03,100,85,,10,5000,2000\n",
        )
        .unwrap();

        assert_eq!(dataset.rows_read, 3);
        assert_eq!(dataset.rows_dropped, 2);
        assert_eq!(dataset.dates(), vec!["2024-01-01"]);
        assert_eq!(dataset.records[0].feed_price, 1200.0);
    }

    #[test]
    fn test_parse_reports_every_missing_column() {
        let csv = "tanggal,jumlah telur,harga telur\n2024-01-01,90,2000\n";
        let err = DataLoader::parse(csv.as_bytes().to_vec()).unwrap_err();

        match err {
            LoaderError::MissingColumns(cols) => assert_eq!(
                cols,
                vec![
                    "jumlah ternak",
                    "berat telur rata-rata",
                    "konsumsi pakan",
                    "harga pakan",
                ]
            ),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_csv_missing_file() {
        let mut loader = DataLoader::new();
        let err = loader
            .load_csv(Path::new("/nonexistent/produksi.csv"))
            .unwrap_err();

        assert!(matches!(err, LoaderError::Io { .. }));
        assert!(loader.dataset().is_none());
    }

    #[test]
    fn test_failed_reload_clears_previous_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("produksi.csv");
        fs::write(&path, format!("{HEADER}2024-01-01,100,90,0.06,10,5000,2000\n")).unwrap();

        let mut loader = DataLoader::new();
        assert_eq!(loader.load_csv(&path).unwrap().len(), 1);

        let missing = dir.path().join("hilang.csv");
        assert!(matches!(
            loader.load_csv(&missing),
            Err(LoaderError::Io { .. })
        ));
        assert!(loader.dataset().is_none());
        assert_eq!(loader.file_path(), Some(&missing));
    }
}

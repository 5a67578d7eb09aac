//! Metrics Ledger
//! Append-only CSV history of computed metrics.
//!
//! Every append rewrites the whole file through a uniquely named temporary
//! sibling that is renamed over the ledger, so a crash mid-write never
//! truncates history. Appends and clears hold an exclusive OS lock on
//! `<ledger>.lock`, which serializes writers across handles and processes.
//! A ledger that exists but cannot be parsed is reported, never replaced.

use crate::data::read_text_frame;
use crate::stats::MetricEntry;
use fs4::fs_std::FileExt;
use polars::prelude::*;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Ledger header, in file order.
pub const LEDGER_COLUMNS: [&str; 5] = ["tanggal", "FCR", "HDA", "Feed Cost", "Profit"];

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Ledger I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Ledger file {path} is corrupt: {reason}. Delete it and save the data again.")]
    Corrupt { path: PathBuf, reason: String },
    #[error("Failed to write ledger: {0}")]
    Write(#[from] PolarsError),
}

/// Handle to the ledger file.
pub struct Ledger {
    path: PathBuf,
}

impl Ledger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read every entry. A missing or zero-byte ledger is empty.
    pub fn load(&self) -> Result<Vec<MetricEntry>, LedgerError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(self.io_error(source)),
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        let df = read_text_frame(bytes).map_err(|e| self.corrupt(e.to_string()))?;
        let entries = self.frame_to_entries(&df)?;
        debug!(path = %self.path.display(), entries = entries.len(), "ledger loaded");
        Ok(entries)
    }

    /// Append one entry and return the new number of rows.
    pub fn append(&self, entry: MetricEntry) -> Result<usize, LedgerError> {
        self.append_all(std::slice::from_ref(&entry))
    }

    /// Append entries in order and return the new number of rows.
    ///
    /// Fails without touching the file when the existing ledger is unreadable.
    pub fn append_all(&self, entries: &[MetricEntry]) -> Result<usize, LedgerError> {
        self.ensure_parent_dir()?;
        let _lock = self.lock()?;

        let mut all = self.load().inspect_err(|e| {
            warn!(error = %e, "append refused: existing ledger unreadable");
        })?;
        all.extend_from_slice(entries);

        self.write_atomic(&all)?;
        info!(
            path = %self.path.display(),
            appended = entries.len(),
            total = all.len(),
            "ledger updated"
        );
        Ok(all.len())
    }

    /// Delete the ledger file. Clearing a missing ledger succeeds.
    pub fn clear(&self) -> Result<(), LedgerError> {
        if !self.exists() {
            return Ok(());
        }
        let _lock = self.lock()?;

        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "ledger cleared");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(self.io_error(source)),
        }
    }

    /// Exclusive lock held until the returned file is dropped.
    fn lock(&self) -> Result<File, LedgerError> {
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.lock_path())
            .map_err(|source| self.io_error(source))?;
        FileExt::lock_exclusive(&file).map_err(|source| self.io_error(source))?;
        Ok(file)
    }

    fn lock_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".lock");
        self.path.with_file_name(name)
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }

    fn ensure_parent_dir(&self) -> Result<(), LedgerError> {
        fs::create_dir_all(self.parent_dir()).map_err(|source| self.io_error(source))
    }

    /// The temp file is removed on drop if anything fails before the rename.
    fn write_atomic(&self, entries: &[MetricEntry]) -> Result<(), LedgerError> {
        let mut df = Self::entries_to_frame(entries)?;
        let mut tmp =
            NamedTempFile::new_in(self.parent_dir()).map_err(|source| self.io_error(source))?;

        CsvWriter::new(tmp.as_file_mut())
            .include_header(true)
            .finish(&mut df)?;
        tmp.as_file()
            .sync_all()
            .map_err(|source| self.io_error(source))?;

        tmp.persist(&self.path)
            .map_err(|e| self.io_error(e.error))?;
        Ok(())
    }

    fn entries_to_frame(entries: &[MetricEntry]) -> PolarsResult<DataFrame> {
        let dates: Vec<&str> = entries.iter().map(|e| e.date.as_str()).collect();
        let fcr: Vec<f64> = entries.iter().map(|e| e.fcr).collect();
        let hda: Vec<f64> = entries.iter().map(|e| e.hda).collect();
        let feed_cost: Vec<f64> = entries.iter().map(|e| e.feed_cost).collect();
        let profit: Vec<f64> = entries.iter().map(|e| e.profit).collect();

        DataFrame::new(vec![
            Column::new(LEDGER_COLUMNS[0].into(), dates),
            Column::new(LEDGER_COLUMNS[1].into(), fcr),
            Column::new(LEDGER_COLUMNS[2].into(), hda),
            Column::new(LEDGER_COLUMNS[3].into(), feed_cost),
            Column::new(LEDGER_COLUMNS[4].into(), profit),
        ])
    }

    fn frame_to_entries(&self, df: &DataFrame) -> Result<Vec<MetricEntry>, LedgerError> {
        let column = |name: &str| {
            df.column(name)
                .and_then(|c| c.str())
                .map_err(|_| self.corrupt(format!("missing column '{name}'")))
        };

        let dates = column(LEDGER_COLUMNS[0])?;
        let metrics = [
            column(LEDGER_COLUMNS[1])?,
            column(LEDGER_COLUMNS[2])?,
            column(LEDGER_COLUMNS[3])?,
            column(LEDGER_COLUMNS[4])?,
        ];

        let mut entries = Vec::with_capacity(df.height());
        for row in 0..df.height() {
            let mut values = [0.0f64; 4];
            for (slot, (ca, name)) in values
                .iter_mut()
                .zip(metrics.iter().zip(&LEDGER_COLUMNS[1..]))
            {
                *slot = ca
                    .get(row)
                    .and_then(|raw| raw.trim().parse::<f64>().ok())
                    .ok_or_else(|| {
                        self.corrupt(format!("row {} has an invalid '{name}' value", row + 1))
                    })?;
            }

            entries.push(MetricEntry {
                date: dates.get(row).unwrap_or_default().to_string(),
                fcr: values[0],
                hda: values[1],
                feed_cost: values[2],
                profit: values[3],
            });
        }

        Ok(entries)
    }

    fn io_error(&self, source: io::Error) -> LedgerError {
        LedgerError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn corrupt(&self, reason: String) -> LedgerError {
        LedgerError::Corrupt {
            path: self.path.clone(),
            reason,
        }
    }
}

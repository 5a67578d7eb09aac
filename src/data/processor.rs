//! Data Processor Module
//! Handles header normalization, currency cleaning and row extraction.

use crate::data::{ProductionDataset, ProductionRecord};
use polars::prelude::*;
use std::collections::HashMap;

/// Date column (kept as text).
pub const DATE_COLUMN: &str = "tanggal";

/// Numeric columns, in `ProductionRecord` field order.
pub const NUMERIC_COLUMNS: [&str; 6] = [
    "jumlah ternak",
    "jumlah telur",
    "berat telur rata-rata",
    "konsumsi pakan",
    "harga pakan",
    "harga telur",
];

const CURRENCY_MARKER: &str = "Rp";
const THOUSANDS_SEPARATOR: char = ',';

/// Handles data cleaning and transformation operations.
pub struct DataProcessor;

impl DataProcessor {
    /// Trim and lowercase a header name.
    pub fn normalize_header(name: &str) -> String {
        name.trim().to_lowercase()
    }

    /// Map normalized header names to the names actually present in the frame.
    /// When two headers normalize to the same name the first one wins.
    pub fn header_map(df: &DataFrame) -> HashMap<String, String> {
        let mut map = HashMap::new();
        for name in df.get_column_names() {
            map.entry(Self::normalize_header(name))
                .or_insert_with(|| name.to_string());
        }
        map
    }

    /// Required columns absent from the header map, in canonical order.
    pub fn missing_columns(headers: &HashMap<String, String>) -> Vec<String> {
        std::iter::once(DATE_COLUMN)
            .chain(NUMERIC_COLUMNS)
            .filter(|c| !headers.contains_key(*c))
            .map(str::to_string)
            .collect()
    }

    /// Strip the currency marker and thousands separators, then parse.
    ///
    /// `"Rp 1,200"` becomes `1200.0`; anything unparseable or non-finite is `None`.
    pub fn clean_numeric(raw: &str) -> Option<f64> {
        let cleaned: String = raw
            .replace(CURRENCY_MARKER, "")
            .chars()
            .filter(|&c| c != THOUSANDS_SEPARATOR)
            .collect();

        let value: f64 = cleaned.trim().parse().ok()?;
        value.is_finite().then_some(value)
    }

    fn lookup<'a>(headers: &'a HashMap<String, String>, canonical: &str) -> PolarsResult<&'a str> {
        headers
            .get(canonical)
            .map(String::as_str)
            .ok_or_else(|| PolarsError::ColumnNotFound(canonical.to_string().into()))
    }

    /// Build records from a text frame, dropping rows with any absent numeric value.
    ///
    /// Callers must check `missing_columns` first.
    pub fn extract_records(
        df: &DataFrame,
        headers: &HashMap<String, String>,
    ) -> PolarsResult<ProductionDataset> {
        let dates = df.column(Self::lookup(headers, DATE_COLUMN)?)?.str()?;
        let numeric: Vec<&StringChunked> = NUMERIC_COLUMNS
            .iter()
            .map(|c| df.column(Self::lookup(headers, c)?)?.str())
            .collect::<PolarsResult<_>>()?;

        let mut records = Vec::with_capacity(df.height());
        let mut rows_dropped = 0;

        for i in 0..df.height() {
            let values: Option<Vec<f64>> = numeric
                .iter()
                .map(|ca| ca.get(i).and_then(Self::clean_numeric))
                .collect();

            let Some(v) = values else {
                rows_dropped += 1;
                continue;
            };

            records.push(ProductionRecord {
                date: dates.get(i).unwrap_or_default().trim().to_string(),
                herd_count: v[0],
                egg_count: v[1],
                avg_egg_weight: v[2],
                feed_consumption: v[3],
                feed_price: v[4],
                egg_price: v[5],
            });
        }

        Ok(ProductionDataset {
            records,
            rows_read: df.height(),
            rows_dropped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_numeric_strips_currency_and_separators() {
        assert_eq!(DataProcessor::clean_numeric("Rp 1,200"), Some(1200.0));
        assert_eq!(DataProcessor::clean_numeric("Rp1,250,000"), Some(1_250_000.0));
        assert_eq!(DataProcessor::clean_numeric(" 0.06 "), Some(0.06));
        assert_eq!(DataProcessor::clean_numeric("90"), Some(90.0));
    }

    #[test]
    fn test_clean_numeric_rejects_garbage() {
        assert_eq!(DataProcessor::clean_numeric("abc"), None);
        assert_eq!(DataProcessor::clean_numeric(""), None);
        assert_eq!(DataProcessor::clean_numeric("Rp"), None);
        assert_eq!(DataProcessor::clean_numeric("inf"), None);
        assert_eq!(DataProcessor::clean_numeric("NaN"), None);
    }

    #[test]
    fn test_normalize_header() {
        assert_eq!(DataProcessor::normalize_header("  Jumlah Telur "), "jumlah telur");
        assert_eq!(DataProcessor::normalize_header("TANGGAL"), "tanggal");
    }

    #[test]
    fn test_missing_columns_lists_every_absent_column() {
        let mut headers = HashMap::new();
        headers.insert("tanggal".to_string(), "Tanggal".to_string());
        headers.insert("jumlah telur".to_string(), "Jumlah Telur".to_string());

        let missing = DataProcessor::missing_columns(&headers);
        assert_eq!(
            missing,
            vec![
                "jumlah ternak",
                "berat telur rata-rata",
                "konsumsi pakan",
                "harga pakan",
                "harga telur",
            ]
        );
    }
}

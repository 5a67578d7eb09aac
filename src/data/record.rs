//! Production Records
//! Typed rows of a cleaned daily production upload.

/// One cleaned CSV row.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductionRecord {
    /// Date text exactly as written in the upload.
    pub date: String,
    pub herd_count: f64,
    pub egg_count: f64,
    pub avg_egg_weight: f64,
    pub feed_consumption: f64,
    pub feed_price: f64,
    pub egg_price: f64,
}

/// Cleaned records of one upload plus ingest counts.
#[derive(Debug, Clone, Default)]
pub struct ProductionDataset {
    pub records: Vec<ProductionRecord>,
    pub rows_read: usize,
    pub rows_dropped: usize,
}

impl ProductionDataset {
    /// Distinct dates in first-occurrence order, for the date picker.
    pub fn dates(&self) -> Vec<String> {
        let mut dates: Vec<String> = Vec::new();
        for record in &self.records {
            if !dates.contains(&record.date) {
                dates.push(record.date.clone());
            }
        }
        dates
    }

    /// First record carrying the given date.
    pub fn record_for_date(&self, date: &str) -> Option<&ProductionRecord> {
        self.records.iter().find(|r| r.date == date)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, eggs: f64) -> ProductionRecord {
        ProductionRecord {
            date: date.to_string(),
            herd_count: 100.0,
            egg_count: eggs,
            avg_egg_weight: 0.06,
            feed_consumption: 10.0,
            feed_price: 5000.0,
            egg_price: 2000.0,
        }
    }

    #[test]
    fn test_dates_keep_first_occurrence_order() {
        let dataset = ProductionDataset {
            records: vec![
                record("2024-01-02", 90.0),
                record("2024-01-01", 80.0),
                record("2024-01-02", 70.0),
            ],
            rows_read: 3,
            rows_dropped: 0,
        };

        assert_eq!(dataset.dates(), vec!["2024-01-02", "2024-01-01"]);
    }

    #[test]
    fn test_duplicate_date_resolves_to_first_row() {
        let dataset = ProductionDataset {
            records: vec![record("2024-01-02", 90.0), record("2024-01-02", 70.0)],
            rows_read: 2,
            rows_dropped: 0,
        };

        let found = dataset.record_for_date("2024-01-02").unwrap();
        assert_eq!(found.egg_count, 90.0);
        assert!(dataset.record_for_date("2024-02-01").is_none());
    }
}

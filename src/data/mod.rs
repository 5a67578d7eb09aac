//! Data module - CSV loading and cleaning

mod loader;
mod processor;
mod record;

pub use loader::{read_text_frame, DataLoader};
pub use processor::NUMERIC_COLUMNS;
pub use record::{ProductionDataset, ProductionRecord};

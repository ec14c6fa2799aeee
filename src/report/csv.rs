use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use csv::WriterBuilder;

use crate::listing::models::ListingRecord;

const COLUMNS: [&str; 14] = [
    "score",
    "floor",
    "viewing",
    "view_time",
    "address",
    "area",
    "price",
    "living_area",
    "rooms",
    "monthly_fee",
    "price_per_m2",
    "features",
    "agent",
    "url",
];

pub struct CsvReport {
    path: PathBuf,
}

impl CsvReport {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Writes the ranked records to the report file in one pass.
    /// Returns the number of data rows written.
    pub fn write(&self, records: &[ListingRecord]) -> Result<usize> {
        let file = std::fs::File::create(&self.path)
            .with_context(|| format!("cannot create {}", self.path.display()))?;
        write_records(file, records)
    }
}

/// Header row is written unconditionally, so an empty batch still produces
/// a valid one-line report.
pub fn write_records<W: Write>(out: W, records: &[ListingRecord]) -> Result<usize> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(out);
    writer.write_record(COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(records.len())
}

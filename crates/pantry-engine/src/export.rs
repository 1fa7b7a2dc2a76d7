//! CSV projection of a filtered location collection.
//!
//! Rows come out in the order the filter pass produced; sorting is not
//! applied here. Every field is quoted, and each day gets a `Y`/`N`
//! column followed by its hours text.

use std::io::Write;

use chrono::Weekday;
use csv::{QuoteStyle, WriterBuilder};
use pantry_api_rs::models::Location;
use thiserror::Error;

/// Column headers of the CSV projection, in output order.
pub const CSV_HEADERS: [&str; 20] = [
    "Name",
    "Location",
    "Phone",
    "Type",
    "Schedule",
    "Eligibility",
    "Mon",
    "Mon Hours",
    "Tue",
    "Tue Hours",
    "Wed",
    "Wed Hours",
    "Thu",
    "Thu Hours",
    "Fri",
    "Fri Hours",
    "Sat",
    "Sat Hours",
    "Sun",
    "Sun Hours",
];

/// Day columns in header order.
const DAY_COLUMNS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Errors that can occur while writing the CSV projection.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization failure.
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    /// I/O failure on the underlying writer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes the collection as CSV to the given writer.
pub fn write_csv<W: Write>(locations: &[&Location], writer: W) -> Result<(), ExportError> {
    let mut csv_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADERS)?;

    for loc in locations {
        let mut record: Vec<&str> = Vec::with_capacity(CSV_HEADERS.len());
        record.push(&loc.name);
        record.push(loc.location.as_deref().unwrap_or(""));
        record.push(loc.phone.as_deref().unwrap_or(""));
        record.push(loc.site_type.as_deref().unwrap_or(""));
        record.push(loc.schedule.as_deref().unwrap_or(""));
        record.push(loc.eligibility.as_deref().unwrap_or(""));
        for day in DAY_COLUMNS {
            record.push(if loc.open_on(day) { "Y" } else { "N" });
            record.push(loc.hours_on(day).unwrap_or(""));
        }
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

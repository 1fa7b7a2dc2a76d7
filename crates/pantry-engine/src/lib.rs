//! Recurrence-aware filtering, sorting, and storage for the pantry
//! location directory.
//!
//! This crate holds the core engine: deciding whether a location is
//! actually open on a given date ([`recurrence`]), composing day/search/
//! open-today predicates over a collection ([`filter`]), ordering results
//! ([`sort`]), projecting them to CSV ([`export`]), and loading the
//! directory from the feed with a local cache fallback ([`loader`],
//! [`store`]).

use chrono::{DateTime, Utc};
use pantry_api_rs::models::Location;
use serde::{Deserialize, Serialize};

pub mod export;
pub mod filter;
pub mod loader;
pub mod recurrence;
pub mod sort;
pub mod store;

pub use export::{write_csv, ExportError, CSV_HEADERS};
pub use filter::{filter_locations, DaySet, FilterState, ViewMode};
pub use loader::{LoadError, Loader};
pub use recurrence::{is_open_on, WeekOfMonth};
pub use sort::{sorted_by, SortField};
pub use store::{DirectoryStore, StoreError};

/// The loaded location collection.
///
/// Mirrors the on-disk cache layout: the location array plus a timestamp
/// of the last successful fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Directory {
    /// UTC timestamp of the last successful feed fetch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetched_at: Option<DateTime<Utc>>,

    /// The location records, in feed order.
    #[serde(default)]
    pub locations: Vec<Location>,
}

impl Directory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory from a location array, with no fetch timestamp.
    pub fn from_locations(locations: Vec<Location>) -> Self {
        Self {
            fetched_at: None,
            locations,
        }
    }

    /// Returns the number of locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns true if the directory holds no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_default_is_empty() {
        let directory = Directory::new();
        assert!(directory.is_empty());
        assert_eq!(directory.len(), 0);
        assert!(directory.fetched_at.is_none());
    }

    #[test]
    fn test_directory_serde_round_trip() {
        let directory = Directory::from_locations(vec![Location {
            name: "Pantry A".to_string(),
            monday: true,
            ..Default::default()
        }]);

        let json = serde_json::to_string(&directory).unwrap();
        let parsed: Directory = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, directory);
    }

    #[test]
    fn test_directory_deserialize_missing_fields() {
        let directory: Directory = serde_json::from_str("{}").unwrap();
        assert!(directory.is_empty());
    }
}

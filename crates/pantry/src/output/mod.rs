//! Output formatting for the pantry CLI.

pub mod helpers;
pub mod locations;

pub use locations::{
    format_location_details, format_locations_json, format_locations_table, format_markers_json,
    format_markers_table,
};

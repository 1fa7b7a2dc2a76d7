//! Data models for the pantry feed.

mod location;
mod recurrence;

pub use location::{ByDay, Location};
pub use recurrence::{OccurrenceSet, Recurrence, RecurrenceKind};

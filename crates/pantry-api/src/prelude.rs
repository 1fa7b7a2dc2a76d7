//! Convenient re-exports of the most commonly used types.

pub use crate::client::FeedClient;
pub use crate::error::{ApiError, Error, Result};
pub use crate::models::{ByDay, Location, Recurrence, RecurrenceKind};

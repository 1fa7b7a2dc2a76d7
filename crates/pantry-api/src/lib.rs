//! Feed client and data models for the pantry location directory.
//!
//! # Quick Start
//!
//! For convenient imports, use the prelude:
//!
//! ```
//! use pantry_api_rs::prelude::*;
//! ```
//!
//! This re-exports the most commonly used types including [`FeedClient`],
//! error types, and the [`Location`] data model.
//!
//! [`FeedClient`]: client::FeedClient
//! [`Location`]: models::Location

pub mod client;
pub mod error;
pub mod models;
pub mod prelude;

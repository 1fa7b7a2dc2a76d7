//! HTTP client for the location feed.

use crate::error::{ApiError, Error, Result};
use crate::models::Location;

/// Default URL of the published location feed.
pub const DEFAULT_FEED_URL: &str = "https://feedingsd.org/feeding_sd_locations.json";

/// Client for fetching the location feed.
///
/// The feed is a single JSON resource holding an array of location
/// records. There is no authentication.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http_client: reqwest::Client,
    feed_url: String,
}

impl FeedClient {
    /// Creates a new client for the given feed URL.
    pub fn new(feed_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            feed_url: feed_url.into(),
        }
    }

    /// Returns the configured feed URL.
    pub fn feed_url(&self) -> &str {
        &self.feed_url
    }

    /// Fetches the full location array from the feed.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Network` when the feed is unreachable,
    /// `ApiError::Http` for non-success responses, and a JSON error when
    /// the body is not a location array.
    pub async fn fetch_locations(&self) -> Result<Vec<Location>> {
        let response = self
            .http_client
            .get(&self.feed_url)
            .send()
            .await
            .map_err(into_network_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Api(ApiError::Http {
                status: status.as_u16(),
                message,
            }));
        }

        let body = response.text().await.map_err(into_network_error)?;
        let locations = serde_json::from_str(&body)?;
        Ok(locations)
    }
}

impl Default for FeedClient {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_URL)
    }
}

/// Classifies transport failures as network errors.
fn into_network_error(err: reqwest::Error) -> Error {
    if err.is_connect() || err.is_timeout() {
        Error::Api(ApiError::Network {
            message: err.to_string(),
        })
    } else {
        Error::Http(err)
    }
}

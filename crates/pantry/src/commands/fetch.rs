//! Fetch command implementation.
//!
//! Explicitly refreshes the local cache from the feed. Unlike the
//! read-path commands this surfaces fetch failures: the user asked for
//! the refresh.

use pantry_api_rs::client::FeedClient;
use pantry_engine_rs::{DirectoryStore, Loader};

use super::{resolve_feed_url, CommandContext, Result};

/// Executes the fetch command.
///
/// # Errors
///
/// Returns the feed or cache failure.
pub async fn execute(ctx: &CommandContext) -> Result<()> {
    let url = resolve_feed_url(ctx);
    if ctx.verbose {
        eprintln!("Fetching locations from {url}...");
    }

    let store = DirectoryStore::new()?;
    let loader = Loader::new(FeedClient::new(url), store);
    let directory = loader.refresh().await?;

    if ctx.json_output {
        let output = serde_json::json!({
            "count": directory.len(),
            "fetched_at": directory.fetched_at,
            "cache_path": loader.store().path(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        let noun = if directory.len() == 1 {
            "location"
        } else {
            "locations"
        };
        println!("Fetched {} {}.", directory.len(), noun);
    }

    Ok(())
}

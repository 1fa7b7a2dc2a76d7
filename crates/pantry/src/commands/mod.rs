//! Command implementations for the pantry CLI.
//!
//! This module contains the actual command handlers that are invoked by
//! the CLI, plus the shared context, error type, and directory resolution
//! used by all of them.

use std::path::PathBuf;

use pantry_api_rs::client::{FeedClient, DEFAULT_FEED_URL};
use pantry_engine_rs::{Directory, DirectoryStore, FilterState, LoadError, Loader};

use crate::cli::{Cli, FilterArgs};

pub mod completions;
pub mod config;
pub mod export;
pub mod fetch;
pub mod list;
pub mod map;
pub mod show;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Feed error.
    #[error("feed error: {0}")]
    Api(#[from] pantry_api_rs::error::Error),

    /// Cache store error.
    #[error("cache error: {0}")]
    Store(#[from] pantry_engine_rs::StoreError),

    /// CSV export error.
    #[error("export error: {0}")]
    Export(#[from] pantry_engine_rs::ExportError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Lookup miss (with an optional "did you mean" suggestion baked in).
    #[error("{0}")]
    NotFound(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<LoadError> for CommandError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::Feed(e) => CommandError::Api(e),
            LoadError::Store(e) => CommandError::Store(e),
        }
    }
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Whether to be verbose.
    pub verbose: bool,
    /// Refresh from the feed before running.
    pub refresh: bool,
    /// Feed URL override from flag/env.
    pub feed_url: Option<String>,
    /// Local JSON file to read instead of the feed.
    pub file: Option<PathBuf>,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            json_output: cli.json,
            use_colors: !cli.no_color,
            quiet: cli.quiet,
            verbose: cli.verbose,
            refresh: cli.refresh,
            feed_url: cli.url.clone(),
            file: cli.file.clone(),
        }
    }
}

/// Builds the filter state from the shared filter flags.
///
/// The composite shortcuts reset the state before applying their
/// selection; explicit `--day` toggles and the search text layer on top.
pub fn build_filter_state(args: &FilterArgs) -> FilterState {
    let mut state = FilterState::new();

    if args.weekdays {
        state.select_weekdays();
    }
    if args.weekends {
        state.select_weekends();
    }
    if args.today {
        state.select_today();
    }
    for day in &args.day {
        state.toggle_day((*day).into());
    }
    if let Some(query) = &args.search {
        state.search = query.clone();
    }

    state
}

/// Resolves the feed URL: flag/env > config file > built-in default.
pub fn resolve_feed_url(ctx: &CommandContext) -> String {
    if let Some(url) = &ctx.feed_url {
        return url.clone();
    }

    config::load_config()
        .ok()
        .and_then(|config| config.feed_url)
        .unwrap_or_else(|| DEFAULT_FEED_URL.to_string())
}

/// Resolves the location directory for a command.
///
/// An explicit `--file` wins and is read directly (errors surface — the
/// user named the file). Otherwise the local cache is used, refreshed
/// from the feed when `--refresh` is given or the cache is empty; feed
/// failures degrade to the cached (possibly empty) directory with a
/// diagnostic on stderr, never an error.
pub async fn resolve_directory(ctx: &CommandContext) -> Result<Directory> {
    if let Some(path) = &ctx.file {
        let contents = tokio::fs::read_to_string(path).await?;
        let locations = serde_json::from_str(&contents)?;
        return Ok(Directory::from_locations(locations));
    }

    let store = DirectoryStore::new()?;
    let loader = Loader::new(FeedClient::new(resolve_feed_url(ctx)), store);

    let cached = loader.cached();
    if !ctx.refresh && !cached.is_empty() {
        return Ok(cached);
    }

    if ctx.verbose {
        eprintln!("Fetching locations from the feed...");
    }
    let (directory, warning) = loader.load_or_cached().await;
    if let Some(warn) = warning {
        if !ctx.quiet {
            eprintln!("Warning: could not refresh locations: {warn}");
        }
    }
    Ok(directory)
}

//! List command implementation.
//!
//! Renders the filtered (and optionally sorted) locations as cards or
//! JSON, with a per-location open-today badge.

use chrono::Local;
use pantry_engine_rs::{filter_locations, sorted_by};

use super::{build_filter_state, resolve_directory, CommandContext, Result};
use crate::cli::{FilterArgs, SortArg};
use crate::output::{format_locations_json, format_locations_table};

/// Options for the list command.
#[derive(Debug)]
pub struct ListOptions {
    /// Shared filter flags.
    pub filters: FilterArgs,
    /// Sort field.
    pub sort: Option<SortArg>,
    /// Reverse sort order.
    pub reverse: bool,
    /// Limit results.
    pub limit: u32,
    /// Show all locations (no limit).
    pub all: bool,
}

/// Executes the list command.
///
/// # Errors
///
/// Returns an error only for explicit-input failures (an unreadable
/// `--file`); feed failures degrade to cached or empty data.
pub async fn execute(ctx: &CommandContext, opts: &ListOptions) -> Result<()> {
    let directory = resolve_directory(ctx).await?;
    let state = build_filter_state(&opts.filters);
    let today = Local::now().date_naive();

    let mut locations = filter_locations(&directory.locations, &state, today);

    if let Some(sort) = opts.sort {
        locations = sorted_by(locations, sort.into());
        if opts.reverse {
            locations.reverse();
        }
    }

    if !opts.all {
        locations.truncate(opts.limit as usize);
    }

    if ctx.json_output {
        println!("{}", format_locations_json(&locations, today)?);
    } else if !ctx.quiet {
        print!(
            "{}",
            format_locations_table(&locations, &state, today, ctx.use_colors)
        );
    }

    Ok(())
}

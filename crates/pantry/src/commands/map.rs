//! Map command implementation.
//!
//! Projects the filtered locations as map markers. Locations without
//! coordinates are skipped here but still appear in the list and CSV
//! projections.

use chrono::Local;
use pantry_engine_rs::{filter_locations, ViewMode};

use super::{build_filter_state, resolve_directory, CommandContext, Result};
use crate::cli::FilterArgs;
use crate::output::{format_markers_json, format_markers_table};

/// Executes the map command.
pub async fn execute(ctx: &CommandContext, filters: &FilterArgs) -> Result<()> {
    let directory = resolve_directory(ctx).await?;
    let mut state = build_filter_state(filters);
    state.view = ViewMode::Map;
    let today = Local::now().date_naive();

    let locations = filter_locations(&directory.locations, &state, today);

    if ctx.json_output {
        println!("{}", format_markers_json(&locations, today)?);
    } else if !ctx.quiet {
        print!("{}", format_markers_table(&locations, today, ctx.use_colors));
    }

    Ok(())
}

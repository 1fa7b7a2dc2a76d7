//! Export command implementation.
//!
//! Writes the filtered locations as CSV, in filter order, to stdout or a
//! file.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use chrono::Local;
use pantry_engine_rs::{filter_locations, write_csv};

use super::{build_filter_state, resolve_directory, CommandContext, Result};
use crate::cli::FilterArgs;

/// Executes the export command.
pub async fn execute(
    ctx: &CommandContext,
    filters: &FilterArgs,
    output: Option<&Path>,
) -> Result<()> {
    let directory = resolve_directory(ctx).await?;
    let state = build_filter_state(filters);
    let today = Local::now().date_naive();

    let locations = filter_locations(&directory.locations, &state, today);

    match output {
        Some(path) => {
            let file = File::create(path)?;
            write_csv(&locations, file)?;
            if !ctx.quiet {
                let noun = if locations.len() == 1 {
                    "location"
                } else {
                    "locations"
                };
                eprintln!(
                    "Exported {} {} to {}",
                    locations.len(),
                    noun,
                    path.display()
                );
            }
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_csv(&locations, &mut handle)?;
            handle.flush()?;
        }
    }

    Ok(())
}

//! Show command implementation.
//!
//! Displays the full details for a single location looked up by name,
//! with a fuzzy "did you mean" suggestion on a miss.

use chrono::Local;
use pantry_api_rs::models::Location;
use strsim::levenshtein;

use super::{resolve_directory, CommandContext, CommandError, Result};
use crate::output::{format_location_details, format_locations_json};

/// Maximum Levenshtein distance to consider a name as a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Executes the show command.
///
/// # Errors
///
/// Returns `CommandError::NotFound` when no location matches the name.
pub async fn execute(ctx: &CommandContext, name: &str) -> Result<()> {
    let directory = resolve_directory(ctx).await?;

    // Names are not guaranteed unique: show every exact match.
    let matches = find_by_name(&directory.locations, name);
    if matches.is_empty() {
        let suggestion =
            find_similar_name(name, directory.locations.iter().map(|l| l.name.as_str()));
        return Err(CommandError::NotFound(format_not_found(
            name,
            suggestion.as_deref(),
        )));
    }

    let today = Local::now().date_naive();
    if ctx.json_output {
        println!("{}", format_locations_json(&matches, today)?);
    } else if !ctx.quiet {
        for (i, loc) in matches.iter().enumerate() {
            if i > 0 {
                println!();
            }
            print!("{}", format_location_details(loc, today, ctx.use_colors));
        }
    }

    Ok(())
}

/// Case-insensitive exact name lookup.
fn find_by_name<'a>(locations: &'a [Location], name: &str) -> Vec<&'a Location> {
    let name_lower = name.to_lowercase();
    locations
        .iter()
        .filter(|loc| loc.name.to_lowercase() == name_lower)
        .collect()
}

/// Formats the "not found" error message, optionally including a
/// suggestion.
fn format_not_found(name: &str, suggestion: Option<&str>) -> String {
    let base = format!(
        "location '{}' not found. Try running 'pantry fetch' to refresh the directory.",
        name
    );
    match suggestion {
        Some(s) => format!("{} Did you mean '{}'?", base, s),
        None => base,
    }
}

/// Finds the best matching name from a list of candidates using
/// Levenshtein distance.
///
/// Returns the best match if its edit distance is within the threshold,
/// otherwise returns `None`.
fn find_similar_name<'a>(
    query: &str,
    candidates: impl Iterator<Item = &'a str>,
) -> Option<String> {
    let query_lower = query.to_lowercase();

    let (best_match, best_distance) = candidates
        .filter(|name| !name.is_empty())
        .map(|name| {
            let distance = levenshtein(&query_lower, &name.to_lowercase());
            (name.to_string(), distance)
        })
        .min_by_key(|(_, d)| *d)?;

    if best_distance > 0 && best_distance <= MAX_SUGGESTION_DISTANCE {
        Some(best_match)
    } else {
        None
    }
}

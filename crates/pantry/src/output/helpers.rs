//! Common helper functions for output formatting.

use chrono::Weekday;
use pantry_api_rs::models::Location;

/// All weekdays in display order (Monday first).
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Three-letter uppercase day abbreviation.
pub fn day_abbrev(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "MON",
        Weekday::Tue => "TUE",
        Weekday::Wed => "WED",
        Weekday::Thu => "THU",
        Weekday::Fri => "FRI",
        Weekday::Sat => "SAT",
        Weekday::Sun => "SUN",
    }
}

/// Full lowercase day name, matching the feed's keys.
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// Display name for a record, falling back for unnamed sites.
pub fn display_name(loc: &Location) -> &str {
    if loc.name.is_empty() {
        "Unknown Location"
    } else {
        &loc.name
    }
}

/// Joins the present address parts with commas.
pub fn format_address(loc: &Location) -> Option<String> {
    let parts: Vec<&str> = [
        loc.location.as_deref(),
        loc.city.as_deref(),
        loc.state.as_deref(),
        loc.zip.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

/// Summarizes opening hours for popup-style display: per-day entries when
/// present, otherwise the free-text schedule.
pub fn hours_summary(loc: &Location) -> Option<String> {
    let entries: Vec<String> = WEEK
        .into_iter()
        .filter(|day| loc.open_on(*day))
        .filter_map(|day| {
            loc.hours_on(day)
                .map(|hours| format!("{}: {}", capitalize(day_name(day)), hours))
        })
        .collect();

    if entries.is_empty() {
        loc.schedule.clone()
    } else {
        Some(entries.join("; "))
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

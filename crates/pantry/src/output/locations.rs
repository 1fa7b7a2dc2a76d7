//! Location output formatting.

use chrono::NaiveDate;
use owo_colors::OwoColorize;
use pantry_api_rs::models::Location;
use pantry_engine_rs::{is_open_on, FilterState};
use serde::Serialize;

use super::helpers::{
    day_abbrev, day_name, display_name, format_address, hours_summary, WEEK,
};

/// JSON output structure for the list command.
#[derive(Serialize)]
pub struct ListOutput<'a> {
    pub count: usize,
    pub locations: Vec<LocationOutput<'a>>,
}

/// JSON output structure for a single location.
#[derive(Serialize)]
pub struct LocationOutput<'a> {
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<&'a str>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub site_type: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligibility: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    pub open_today: bool,
    pub days: Vec<DayOutput<'a>>,
}

/// JSON output for one open day of a location.
#[derive(Serialize)]
pub struct DayOutput<'a> {
    pub day: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<&'a str>,
}

/// JSON output structure for the map command.
#[derive(Serialize)]
pub struct MarkerListOutput<'a> {
    pub count: usize,
    pub markers: Vec<MarkerOutput<'a>>,
}

/// JSON output for a single map marker.
#[derive(Serialize)]
pub struct MarkerOutput<'a> {
    pub name: &'a str,
    pub lat: f64,
    pub lng: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub site_type: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
    pub open_today: bool,
}

fn to_location_output<'a>(loc: &'a Location, today: NaiveDate) -> LocationOutput<'a> {
    let days = WEEK
        .into_iter()
        .filter(|day| loc.open_on(*day))
        .map(|day| DayOutput {
            day: day_name(day),
            hours: loc.hours_on(day),
            frequency: loc.frequency_on(day).map(|f| f.as_str()),
        })
        .collect();

    LocationOutput {
        name: display_name(loc),
        location: loc.location.as_deref(),
        city: loc.city.as_deref(),
        state: loc.state.as_deref(),
        zip: loc.zip.as_deref(),
        site_type: loc.site_type.as_deref(),
        schedule: loc.schedule.as_deref(),
        eligibility: loc.eligibility.as_deref(),
        phone: loc.phone.as_deref(),
        lat: loc.lat,
        lng: loc.lng,
        open_today: is_open_on(loc, today),
        days,
    }
}

/// Formats locations as JSON.
pub fn format_locations_json(
    locations: &[&Location],
    today: NaiveDate,
) -> Result<String, serde_json::Error> {
    let output = ListOutput {
        count: locations.len(),
        locations: locations
            .iter()
            .map(|loc| to_location_output(loc, today))
            .collect(),
    };
    serde_json::to_string_pretty(&output)
}

/// Formats locations as human-readable cards.
pub fn format_locations_table(
    locations: &[&Location],
    state: &FilterState,
    today: NaiveDate,
    use_colors: bool,
) -> String {
    let mut output = String::new();
    output.push_str(&format_count_line(locations.len()));
    output.push('\n');

    if locations.is_empty() {
        output.push_str("\nNo locations found\n");
        output.push_str("Try adjusting your filters or search terms\n");
        return output;
    }

    for loc in locations {
        output.push('\n');
        output.push_str(&format_card(loc, state, today, use_colors));
    }

    output
}

/// The "Showing N locations" header line.
fn format_count_line(count: usize) -> String {
    let noun = if count == 1 { "location" } else { "locations" };
    format!("Showing {} {}\n", count, noun)
}

/// One location card.
fn format_card(loc: &Location, state: &FilterState, today: NaiveDate, use_colors: bool) -> String {
    let mut card = String::new();

    let name = display_name(loc);
    let open_today = is_open_on(loc, today);
    let header = if use_colors {
        if open_today {
            format!("{}  {}", name.bold(), "[OPEN TODAY]".green().bold())
        } else {
            name.bold().to_string()
        }
    } else if open_today {
        format!("{}  [OPEN TODAY]", name)
    } else {
        name.to_string()
    };
    card.push_str(&header);
    card.push('\n');

    if let Some(address) = format_address(loc) {
        card.push_str(&format!("  {}\n", address));
    }
    if let Some(schedule) = &loc.schedule {
        card.push_str(&format!("  Schedule: {}\n", schedule));
    }
    if let Some(site_type) = &loc.site_type {
        card.push_str(&format!("  Type: {}\n", site_type));
    }
    if let Some(eligibility) = &loc.eligibility {
        card.push_str(&format!("  Eligibility: {}\n", eligibility));
    }
    if let Some(phone) = &loc.phone {
        card.push_str(&format!("  Phone: {}\n", phone));
    }

    let badges = format_day_badges(loc, state, use_colors);
    if !badges.is_empty() {
        card.push_str(&format!("  Open: {}\n", badges));
    }

    card
}

/// Per-day badges with hours; selected days are highlighted.
fn format_day_badges(loc: &Location, state: &FilterState, use_colors: bool) -> String {
    WEEK.into_iter()
        .filter(|day| loc.open_on(*day))
        .map(|day| {
            let text = match loc.hours_on(day) {
                Some(hours) => format!("{}: {}", day_abbrev(day), hours),
                None => day_abbrev(day).to_string(),
            };
            if use_colors && state.days.contains(day) {
                text.cyan().bold().to_string()
            } else {
                text
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Formats a full detail view for the show command.
pub fn format_location_details(
    loc: &Location,
    today: NaiveDate,
    use_colors: bool,
) -> String {
    let mut output = format_card(loc, &FilterState::new(), today, use_colors);

    // Per-day detail lines, including the recurrence pattern text.
    for day in WEEK {
        if !loc.open_on(day) {
            continue;
        }
        let mut line = format!("  {}", day_abbrev(day));
        if let Some(hours) = loc.hours_on(day) {
            line.push_str(&format!("  {}", hours));
        }
        if let Some(frequency) = loc.frequency_on(day) {
            if !frequency.as_str().is_empty() {
                line.push_str(&format!("  ({})", frequency.as_str()));
            }
        }
        line.push('\n');
        output.push_str(&line);
    }

    output
}

/// Formats map markers as JSON.
pub fn format_markers_json(
    locations: &[&Location],
    today: NaiveDate,
) -> Result<String, serde_json::Error> {
    let markers: Vec<MarkerOutput> = locations
        .iter()
        .filter_map(|loc| to_marker_output(loc, today))
        .collect();

    let output = MarkerListOutput {
        count: markers.len(),
        markers,
    };
    serde_json::to_string_pretty(&output)
}

fn to_marker_output<'a>(loc: &'a Location, today: NaiveDate) -> Option<MarkerOutput<'a>> {
    let (lat, lng) = (loc.lat?, loc.lng?);
    Some(MarkerOutput {
        name: display_name(loc),
        lat,
        lng,
        address: format_address(loc),
        site_type: loc.site_type.as_deref(),
        hours: hours_summary(loc),
        open_today: is_open_on(loc, today),
    })
}

/// Formats map markers as human-readable lines.
pub fn format_markers_table(
    locations: &[&Location],
    today: NaiveDate,
    use_colors: bool,
) -> String {
    let markers: Vec<&&Location> = locations.iter().filter(|l| l.has_coordinates()).collect();

    let mut output = String::new();
    let noun = if markers.len() == 1 { "location" } else { "locations" };
    output.push_str(&format!("Showing {} {} on the map\n", markers.len(), noun));

    if markers.is_empty() {
        output.push_str("\nNo locations with map coordinates found\n");
        return output;
    }

    for loc in markers {
        // Coordinates checked above.
        let (Some(lat), Some(lng)) = (loc.lat, loc.lng) else {
            continue;
        };
        output.push('\n');

        let name = display_name(loc);
        let header = if use_colors {
            format!("{:.5}, {:.5}  {}", lat, lng, name.bold())
        } else {
            format!("{:.5}, {:.5}  {}", lat, lng, name)
        };
        output.push_str(&header);
        output.push('\n');

        if let Some(address) = format_address(loc) {
            output.push_str(&format!("  {}\n", address));
        }
        if let Some(hours) = hours_summary(loc) {
            output.push_str(&format!("  Hours: {}\n", hours));
        }
        if let Some(site_type) = &loc.site_type {
            output.push_str(&format!("  Type: {}\n", site_type));
        }
    }

    output
}

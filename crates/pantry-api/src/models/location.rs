//! Location model for the pantry feed.
//!
//! This module defines the `Location` struct representing one
//! food-distribution site from the feed JSON, plus the per-day `ByDay`
//! container used for hours and recurrence patterns.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::recurrence::Recurrence;

/// Seven optional slots keyed by weekday.
///
/// The feed stores per-day hours and recurrence patterns as sparse objects
/// with lowercase day-name keys; only present days carry entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: Deserialize<'de>"
))]
pub struct ByDay<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monday: Option<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuesday: Option<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wednesday: Option<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thursday: Option<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friday: Option<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturday: Option<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunday: Option<T>,
}

impl<T> Default for ByDay<T> {
    fn default() -> Self {
        Self {
            monday: None,
            tuesday: None,
            wednesday: None,
            thursday: None,
            friday: None,
            saturday: None,
            sunday: None,
        }
    }
}

impl<T> ByDay<T> {
    /// Returns the entry for the given weekday, if any.
    pub fn get(&self, day: Weekday) -> Option<&T> {
        match day {
            Weekday::Mon => self.monday.as_ref(),
            Weekday::Tue => self.tuesday.as_ref(),
            Weekday::Wed => self.wednesday.as_ref(),
            Weekday::Thu => self.thursday.as_ref(),
            Weekday::Fri => self.friday.as_ref(),
            Weekday::Sat => self.saturday.as_ref(),
            Weekday::Sun => self.sunday.as_ref(),
        }
    }

    /// Sets the entry for the given weekday.
    pub fn set(&mut self, day: Weekday, value: T) {
        match day {
            Weekday::Mon => self.monday = Some(value),
            Weekday::Tue => self.tuesday = Some(value),
            Weekday::Wed => self.wednesday = Some(value),
            Weekday::Thu => self.thursday = Some(value),
            Weekday::Fri => self.friday = Some(value),
            Weekday::Sat => self.saturday = Some(value),
            Weekday::Sun => self.sunday = Some(value),
        }
    }

    /// Returns true if no day has an entry.
    pub fn is_empty(&self) -> bool {
        self.monday.is_none()
            && self.tuesday.is_none()
            && self.wednesday.is_none()
            && self.thursday.is_none()
            && self.friday.is_none()
            && self.saturday.is_none()
            && self.sunday.is_none()
    }
}

/// One food-distribution site.
///
/// Every field is optional in the feed; consumers treat absence as
/// falsy/empty. A location with no geolocation still appears in list and
/// CSV projections and is only skipped by the map view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Location {
    /// Display name. Not guaranteed unique.
    #[serde(default)]
    pub name: String,

    /// Street address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// City.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// State.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// ZIP code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,

    /// Kind of distribution site (e.g. "Food Pantry").
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub site_type: Option<String>,

    /// Free-text schedule summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,

    /// Eligibility requirements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eligibility: Option<String>,

    /// Contact phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Latitude. Absent means the site is skipped by the map view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,

    /// Longitude.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,

    /// Open on Mondays.
    #[serde(default)]
    pub monday: bool,

    /// Open on Tuesdays.
    #[serde(default)]
    pub tuesday: bool,

    /// Open on Wednesdays.
    #[serde(default)]
    pub wednesday: bool,

    /// Open on Thursdays.
    #[serde(default)]
    pub thursday: bool,

    /// Open on Fridays.
    #[serde(default)]
    pub friday: bool,

    /// Open on Saturdays.
    #[serde(default)]
    pub saturday: bool,

    /// Open on Sundays.
    #[serde(default)]
    pub sunday: bool,

    /// Per-day hours text, sparse.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<ByDay<String>>,

    /// Per-day recurrence pattern, sparse. Meaningful only for days whose
    /// weekday flag is true; absent means weekly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<ByDay<Recurrence>>,
}

impl Location {
    /// Returns true if the weekday flag for the given day is set.
    pub fn open_on(&self, day: Weekday) -> bool {
        match day {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }

    /// Returns the hours text for the given day, if any.
    pub fn hours_on(&self, day: Weekday) -> Option<&str> {
        self.hours
            .as_ref()
            .and_then(|h| h.get(day))
            .map(String::as_str)
    }

    /// Returns the recurrence pattern for the given day, if any.
    pub fn frequency_on(&self, day: Weekday) -> Option<&Recurrence> {
        self.frequency.as_ref().and_then(|f| f.get(day))
    }

    /// Returns true if the site has both latitude and longitude.
    pub fn has_coordinates(&self) -> bool {
        self.lat.is_some() && self.lng.is_some()
    }

    /// Returns true if the site is open on at least one day of the week.
    pub fn open_any_day(&self) -> bool {
        self.monday
            || self.tuesday
            || self.wednesday
            || self.thursday
            || self.friday
            || self.saturday
            || self.sunday
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecurrenceKind;

    #[test]
    fn test_location_deserialize_minimal() {
        let loc: Location = serde_json::from_str("{}").unwrap();
        assert_eq!(loc.name, "");
        assert!(loc.location.is_none());
        assert!(!loc.monday);
        assert!(!loc.open_any_day());
        assert!(loc.hours.is_none());
        assert!(loc.frequency.is_none());
        assert!(!loc.has_coordinates());
    }

    #[test]
    fn test_location_deserialize_full() {
        let json = r#"{
            "name": "Community Food Pantry",
            "location": "123 Main St",
            "city": "San Diego",
            "state": "CA",
            "zip": "92101",
            "type": "Food Pantry",
            "schedule": "2nd and 4th Tuesday",
            "eligibility": "Open to all",
            "phone": "(619) 555-0100",
            "lat": 32.7157,
            "lng": -117.1611,
            "tuesday": true,
            "saturday": true,
            "hours": {
                "tuesday": "9am-12pm",
                "saturday": "10am-1pm"
            },
            "frequency": {
                "tuesday": "2nd,4th"
            }
        }"#;

        let loc: Location = serde_json::from_str(json).unwrap();
        assert_eq!(loc.name, "Community Food Pantry");
        assert_eq!(loc.site_type.as_deref(), Some("Food Pantry"));
        assert_eq!(loc.zip.as_deref(), Some("92101"));
        assert!(loc.open_on(Weekday::Tue));
        assert!(loc.open_on(Weekday::Sat));
        assert!(!loc.open_on(Weekday::Mon));
        assert_eq!(loc.hours_on(Weekday::Tue), Some("9am-12pm"));
        assert_eq!(loc.hours_on(Weekday::Mon), None);
        assert!(loc.has_coordinates());

        let pattern = loc.frequency_on(Weekday::Tue).unwrap();
        match pattern.kind() {
            RecurrenceKind::Monthly { occurrences, last } => {
                assert!(occurrences.contains(2));
                assert!(occurrences.contains(4));
                assert!(!last);
            }
            other => panic!("expected monthly pattern, got {:?}", other),
        }
        assert!(loc.frequency_on(Weekday::Sat).is_none());
    }

    #[test]
    fn test_location_serialize_skips_absent_fields() {
        let loc = Location {
            name: "Test Site".to_string(),
            monday: true,
            ..Default::default()
        };

        let json = serde_json::to_string(&loc).unwrap();
        assert!(json.contains("\"name\":\"Test Site\""));
        assert!(json.contains("\"monday\":true"));
        assert!(!json.contains("zip"));
        assert!(!json.contains("hours"));
        assert!(!json.contains("frequency"));
    }

    #[test]
    fn test_location_serialize_renames_type() {
        let loc = Location {
            site_type: Some("Mobile Pantry".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&loc).unwrap();
        assert!(json.contains("\"type\":\"Mobile Pantry\""));
        assert!(!json.contains("site_type"));
    }

    #[test]
    fn test_location_round_trip_preserves_frequency_text() {
        let json = r#"{"name":"A","monday":true,"frequency":{"monday":"1st, 3rd"}}"#;
        let loc: Location = serde_json::from_str(json).unwrap();
        let out = serde_json::to_string(&loc).unwrap();
        assert!(out.contains("\"1st, 3rd\""));
    }

    #[test]
    fn test_by_day_get_and_set() {
        let mut hours: ByDay<String> = ByDay::default();
        assert!(hours.is_empty());

        hours.set(Weekday::Wed, "8am-11am".to_string());
        assert!(!hours.is_empty());
        assert_eq!(hours.get(Weekday::Wed).map(String::as_str), Some("8am-11am"));
        assert!(hours.get(Weekday::Thu).is_none());
    }

    #[test]
    fn test_coordinates_require_both_axes() {
        let loc = Location {
            lat: Some(32.7),
            ..Default::default()
        };
        assert!(!loc.has_coordinates());
    }
}

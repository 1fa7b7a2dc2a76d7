//! Recurrence pattern model.
//!
//! Feed records carry a free-text recurrence pattern per weekday, e.g.
//! `"weekly"`, `"1st,3rd"`, `"last"`, or `"2nd,4th"`. The pattern is parsed
//! once when the record is deserialized; the raw text is kept so records
//! serialize back unchanged.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Set of 1-based week-of-month occurrence indices (1–5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OccurrenceSet(u8);

impl OccurrenceSet {
    /// The empty set.
    pub const EMPTY: OccurrenceSet = OccurrenceSet(0);

    /// Adds an occurrence index to the set. Indices outside 1–5 are ignored.
    pub fn insert(&mut self, occurrence: u8) {
        if (1..=5).contains(&occurrence) {
            self.0 |= 1 << (occurrence - 1);
        }
    }

    /// Returns true if the set contains the given occurrence index.
    pub fn contains(&self, occurrence: u8) -> bool {
        (1..=5).contains(&occurrence) && self.0 & (1 << (occurrence - 1)) != 0
    }

    /// Returns true if no occurrence index is set.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterates the occurrence indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (1..=5).filter(|occ| self.contains(*occ))
    }
}

/// Parsed form of a recurrence pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecurrenceKind {
    /// Open every week on the flagged weekday.
    Weekly,

    /// Open on specific week-of-month occurrences, and/or the last
    /// occurrence of the weekday in the month.
    Monthly {
        /// Matching occurrence indices (1st–5th).
        occurrences: OccurrenceSet,
        /// Matches the last occurrence of the weekday in the month.
        last: bool,
    },
}

/// A per-day recurrence pattern.
///
/// Missing or empty pattern text means weekly. Unrecognized tokens simply
/// never match; parsing cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recurrence {
    raw: String,
    kind: RecurrenceKind,
}

impl Recurrence {
    /// Parses a pattern string.
    ///
    /// Empty text and `"weekly"` (case-insensitive) mean weekly. Anything
    /// else is a monthly pattern: `last` is detected by substring on the
    /// whole text (so `"1st,last"` still sets it), and the remaining
    /// comma-separated tokens name occurrence indices as ordinal words
    /// (`"1st"`…`"5th"`) or plain digits (`"1"`…`"5"`).
    pub fn parse(pattern: &str) -> Self {
        let raw = pattern.to_string();
        let trimmed = pattern.trim();

        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("weekly") {
            return Self {
                raw,
                kind: RecurrenceKind::Weekly,
            };
        }

        let lower = trimmed.to_lowercase();
        let last = lower.contains("last");

        let mut occurrences = OccurrenceSet::EMPTY;
        for token in lower.split(',') {
            if let Some(occ) = parse_occurrence_token(token.trim()) {
                occurrences.insert(occ);
            }
        }

        Self {
            raw,
            kind: RecurrenceKind::Monthly { occurrences, last },
        }
    }

    /// A weekly recurrence.
    pub fn weekly() -> Self {
        Self {
            raw: "weekly".to_string(),
            kind: RecurrenceKind::Weekly,
        }
    }

    /// The parsed pattern.
    pub fn kind(&self) -> RecurrenceKind {
        self.kind
    }

    /// The raw pattern text as it appeared in the feed.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns true if this pattern is active for the given week of the
    /// month.
    ///
    /// `occurrence` is the 1-based index of the weekday within its month;
    /// `is_last` is true when no later same-weekday date exists in the
    /// month. The last-occurrence match is independent of the occurrence
    /// set: `"1st,last"` matches if either condition holds.
    pub fn matches(&self, occurrence: u8, is_last: bool) -> bool {
        match self.kind {
            RecurrenceKind::Weekly => true,
            RecurrenceKind::Monthly { occurrences, last } => {
                (last && is_last) || occurrences.contains(occurrence)
            }
        }
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for Recurrence {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Recurrence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Recurrence::parse(&raw))
    }
}

/// Maps a single lowercased pattern token to an occurrence index.
fn parse_occurrence_token(token: &str) -> Option<u8> {
    match token {
        "1st" | "1" => Some(1),
        "2nd" | "2" => Some(2),
        "3rd" | "3" => Some(3),
        "4th" | "4" => Some(4),
        "5th" | "5" => Some(5),
        _ => None,
    }
}

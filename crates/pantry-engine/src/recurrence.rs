//! Week-of-month arithmetic and the open-on-date decision.
//!
//! A location's weekday flag says it is recognized as open on that
//! weekday; the recurrence pattern says which weeks of the month it is
//! actually active. This module combines the two for a concrete date.

use chrono::{Datelike, Days, Months, NaiveDate};
use pantry_api_rs::models::Location;

/// Position of a date's weekday within its month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekOfMonth {
    /// 1-based occurrence index of the weekday within the month (1–5).
    pub occurrence: u8,

    /// True when no later same-weekday date exists in the month.
    pub is_last: bool,
}

impl WeekOfMonth {
    /// Computes the week-of-month position for a date.
    ///
    /// Days 1–7 are the 1st occurrence, 8–14 the 2nd, and so on up to 5.
    /// `is_last` is independent of the occurrence index: the 4th
    /// occurrence is the last one in a month with only four of that
    /// weekday.
    pub fn of(date: NaiveDate) -> Self {
        let day = date.day();
        let occurrence = day.div_ceil(7) as u8;
        let is_last = day + 7 > days_in_month(date);
        Self {
            occurrence,
            is_last,
        }
    }
}

/// Number of days in the date's month.
fn days_in_month(date: NaiveDate) -> u32 {
    let first = date.with_day(1).unwrap_or(date);
    (first + Months::new(1) - Days::new(1)).day()
}

/// Decides whether a location is actually open on the given date.
///
/// Returns false when the location's weekday flag for the date is unset,
/// regardless of pattern. An absent or weekly pattern means open every
/// week; otherwise the date's week-of-month position is matched against
/// the parsed pattern.
pub fn is_open_on(location: &Location, date: NaiveDate) -> bool {
    let day = date.weekday();
    if !location.open_on(day) {
        return false;
    }

    let Some(pattern) = location.frequency_on(day) else {
        return true;
    };

    let week = WeekOfMonth::of(date);
    pattern.matches(week.occurrence, week.is_last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use pantry_api_rs::models::{ByDay, Recurrence};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn monday_site(pattern: Option<&str>) -> Location {
        let mut loc = Location {
            name: "Test Site".to_string(),
            monday: true,
            ..Default::default()
        };
        if let Some(text) = pattern {
            let mut frequency: ByDay<Recurrence> = ByDay::default();
            frequency.set(Weekday::Mon, Recurrence::parse(text));
            loc.frequency = Some(frequency);
        }
        loc
    }

    #[test]
    fn test_occurrence_boundaries() {
        // Feb 2026: the 1st is a Sunday.
        assert_eq!(WeekOfMonth::of(date(2026, 2, 7)).occurrence, 1);
        assert_eq!(WeekOfMonth::of(date(2026, 2, 8)).occurrence, 2);
        assert_eq!(WeekOfMonth::of(date(2026, 2, 14)).occurrence, 2);
        assert_eq!(WeekOfMonth::of(date(2026, 2, 15)).occurrence, 3);
        assert_eq!(WeekOfMonth::of(date(2026, 2, 28)).occurrence, 4);
    }

    #[test]
    fn test_fifth_occurrence() {
        // Mar 2026 has five Mondays: 2, 9, 16, 23, 30.
        assert_eq!(WeekOfMonth::of(date(2026, 3, 30)).occurrence, 5);
        assert!(WeekOfMonth::of(date(2026, 3, 30)).is_last);
        assert!(!WeekOfMonth::of(date(2026, 3, 23)).is_last);
    }

    #[test]
    fn test_is_last_in_four_occurrence_month() {
        // Feb 2026 has four Mondays: 2, 9, 16, 23. The 4th is the last.
        let week = WeekOfMonth::of(date(2026, 2, 23));
        assert_eq!(week.occurrence, 4);
        assert!(week.is_last);
        assert!(!WeekOfMonth::of(date(2026, 2, 16)).is_last);
    }

    #[test]
    fn test_is_last_leap_february() {
        // Feb 2024 has 29 days; Thursdays fall on 1, 8, 15, 22, 29.
        assert!(!WeekOfMonth::of(date(2024, 2, 22)).is_last);
        let week = WeekOfMonth::of(date(2024, 2, 29));
        assert_eq!(week.occurrence, 5);
        assert!(week.is_last);
    }

    #[test]
    fn test_closed_weekday_is_never_open() {
        let loc = monday_site(None);
        // A Tuesday: the Monday flag doesn't apply.
        assert!(!is_open_on(&loc, date(2026, 2, 3)));
        // Even a weekly pattern can't override an unset flag.
        let mut closed = monday_site(Some("weekly"));
        closed.monday = false;
        assert!(!is_open_on(&closed, date(2026, 2, 2)));
    }

    #[test]
    fn test_no_pattern_means_weekly() {
        let loc = monday_site(None);
        for day in [2, 9, 16, 23] {
            assert!(is_open_on(&loc, date(2026, 2, day)));
        }
    }

    #[test]
    fn test_empty_and_weekly_patterns_always_open() {
        for pattern in ["", "weekly", "Weekly"] {
            let loc = monday_site(Some(pattern));
            assert!(is_open_on(&loc, date(2026, 2, 9)), "pattern {:?}", pattern);
        }
    }

    #[test]
    fn test_second_and_fourth_mondays() {
        let loc = monday_site(Some("2nd,4th"));
        assert!(!is_open_on(&loc, date(2026, 2, 2)));
        assert!(is_open_on(&loc, date(2026, 2, 9)));
        assert!(!is_open_on(&loc, date(2026, 2, 16)));
        assert!(is_open_on(&loc, date(2026, 2, 23)));
    }

    #[test]
    fn test_last_pattern_matches_only_true_last() {
        let loc = monday_site(Some("last"));
        // Feb 23 2026 is both the 4th and the last Monday.
        assert!(is_open_on(&loc, date(2026, 2, 23)));
        assert!(!is_open_on(&loc, date(2026, 2, 16)));
        // Mar 2026 has five Mondays; the 4th is not the last.
        assert!(!is_open_on(&loc, date(2026, 3, 23)));
        assert!(is_open_on(&loc, date(2026, 3, 30)));
    }

    #[test]
    fn test_first_or_last_combination() {
        let loc = monday_site(Some("1st,last"));
        assert!(is_open_on(&loc, date(2026, 3, 2)));
        assert!(is_open_on(&loc, date(2026, 3, 30)));
        assert!(!is_open_on(&loc, date(2026, 3, 16)));
    }

    #[test]
    fn test_fifth_pattern_never_matches_short_month() {
        let loc = monday_site(Some("5th"));
        // Feb 2026 has only four Mondays.
        for day in [2, 9, 16, 23] {
            assert!(!is_open_on(&loc, date(2026, 2, day)));
        }
        // But the fifth Monday of March matches.
        assert!(is_open_on(&loc, date(2026, 3, 30)));
    }

    #[test]
    fn test_unrecognized_pattern_never_matches() {
        let loc = monday_site(Some("every full moon"));
        for day in [2, 9, 16, 23] {
            assert!(!is_open_on(&loc, date(2026, 2, day)));
        }
    }
}

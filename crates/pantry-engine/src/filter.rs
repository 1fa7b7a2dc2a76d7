//! Filter state and the filter pass over a location collection.
//!
//! The filter state is an explicit value sampled afresh on every render
//! pass; callers mutate it through the operations below and hand it to
//! [`filter_locations`] together with the reference date for the
//! open-today predicate.

use chrono::{NaiveDate, Weekday};
use pantry_api_rs::models::Location;

use crate::recurrence::is_open_on;

/// All weekdays in Monday-first order.
const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// A set of selected weekdays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DaySet(u8);

impl DaySet {
    /// The empty set.
    pub const EMPTY: DaySet = DaySet(0);

    /// Monday through Friday.
    pub const WEEKDAYS: DaySet = DaySet(0b0001_1111);

    /// Saturday and Sunday.
    pub const WEEKEND: DaySet = DaySet(0b0110_0000);

    fn bit(day: Weekday) -> u8 {
        1 << day.num_days_from_monday()
    }

    /// Adds a day to the set.
    pub fn insert(&mut self, day: Weekday) {
        self.0 |= Self::bit(day);
    }

    /// Removes a day from the set.
    pub fn remove(&mut self, day: Weekday) {
        self.0 &= !Self::bit(day);
    }

    /// Adds the day if absent, removes it if present.
    pub fn toggle(&mut self, day: Weekday) {
        self.0 ^= Self::bit(day);
    }

    /// Returns true if the set contains the day.
    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & Self::bit(day) != 0
    }

    /// Returns true if no day is selected.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of selected days.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates the selected days in Monday-first order.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        WEEK.into_iter().filter(|day| self.contains(*day))
    }
}

impl FromIterator<Weekday> for DaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = DaySet::EMPTY;
        for day in iter {
            set.insert(day);
        }
        set
    }
}

/// Which projection the results are rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Card list.
    #[default]
    List,
    /// Map markers (locations without coordinates are skipped).
    Map,
}

/// The current filter selection.
///
/// Initialized empty/off; mutated by user actions; read (never mutated) by
/// the filter pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    /// Selected days of the week.
    pub days: DaySet,

    /// Free-text search query.
    pub search: String,

    /// Restrict results to locations actually open on the reference date.
    pub open_today: bool,

    /// Current display mode.
    pub view: ViewMode,
}

impl FilterState {
    /// Creates the initial state: no days, no search, open-today off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles a single day selection.
    pub fn toggle_day(&mut self, day: Weekday) {
        self.days.toggle(day);
    }

    /// Resets, then selects Monday through Friday.
    pub fn select_weekdays(&mut self) {
        self.reset();
        self.days = DaySet::WEEKDAYS;
    }

    /// Resets, then selects Saturday and Sunday.
    pub fn select_weekends(&mut self) {
        self.reset();
        self.days = DaySet::WEEKEND;
    }

    /// Resets, then turns on the open-today filter.
    pub fn select_today(&mut self) {
        self.reset();
        self.open_today = true;
    }

    /// Clears selected days, search text, and the open-today toggle.
    /// The view mode is untouched.
    pub fn reset(&mut self) {
        self.days = DaySet::EMPTY;
        self.search.clear();
        self.open_today = false;
    }
}

/// Runs the filter pass over a collection.
///
/// Active predicates AND-combine; inactive ones (empty day set, empty
/// search, open-today off) pass everything. Relative input order is
/// preserved — sorting is a separate step.
///
/// `today` is the reference date for the open-today predicate; callers
/// pass the local current date.
pub fn filter_locations<'a>(
    locations: &'a [Location],
    state: &FilterState,
    today: NaiveDate,
) -> Vec<&'a Location> {
    locations
        .iter()
        .filter(|loc| matches(loc, state, today))
        .collect()
}

fn matches(loc: &Location, state: &FilterState, today: NaiveDate) -> bool {
    if state.open_today && !is_open_on(loc, today) {
        return false;
    }

    // Any selected day suffices: selecting more days widens the set.
    if !state.days.is_empty() && !state.days.iter().any(|day| loc.open_on(day)) {
        return false;
    }

    if !state.search.is_empty() && !matches_search(loc, &state.search) {
        return false;
    }

    true
}

/// Case-insensitive substring match on name and address, plus a raw
/// substring match on the ZIP code.
fn matches_search(loc: &Location, query: &str) -> bool {
    let query_lower = query.to_lowercase();

    loc.name.to_lowercase().contains(&query_lower)
        || loc
            .location
            .as_deref()
            .is_some_and(|address| address.to_lowercase().contains(&query_lower))
        || loc.zip.as_deref().is_some_and(|zip| zip.contains(query))
}

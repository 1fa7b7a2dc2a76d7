//! Ordering of a location collection by a chosen field.

use pantry_api_rs::models::Location;

/// Sortable location fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    /// Site name.
    Name,
    /// City.
    City,
    /// ZIP code.
    Zip,
    /// Kind of distribution site.
    Type,
}

impl SortField {
    /// Extracts the sort key from a record; absent fields sort as empty.
    fn key<'a>(&self, loc: &'a Location) -> &'a str {
        match self {
            SortField::Name => &loc.name,
            SortField::City => loc.city.as_deref().unwrap_or(""),
            SortField::Zip => loc.zip.as_deref().unwrap_or(""),
            SortField::Type => loc.site_type.as_deref().unwrap_or(""),
        }
    }
}

/// Returns a new ordering of the given locations, ascending by the chosen
/// field.
///
/// Comparison is case-insensitive with a raw-value tie-break; the standard
/// library's stable sort keeps equal keys in their input order.
pub fn sorted_by(mut locations: Vec<&Location>, field: SortField) -> Vec<&Location> {
    locations.sort_by(|a, b| {
        let a_key = field.key(a);
        let b_key = field.key(b);
        a_key
            .to_lowercase()
            .cmp(&b_key.to_lowercase())
            .then_with(|| a_key.cmp(b_key))
    });
    locations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(name: &str, city: Option<&str>) -> Location {
        Location {
            name: name.to_string(),
            city: city.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_sort_by_name_ascending() {
        let locations = vec![
            site("Harbor Kitchen", None),
            site("Downtown Pantry", None),
            site("Weekend Market", None),
        ];
        let refs: Vec<&Location> = locations.iter().collect();

        let sorted = sorted_by(refs, SortField::Name);
        let names: Vec<_> = sorted.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Downtown Pantry", "Harbor Kitchen", "Weekend Market"]);
    }

    #[test]
    fn test_sort_is_case_insensitive() {
        let locations = vec![site("banana", None), site("Apple", None)];
        let refs: Vec<&Location> = locations.iter().collect();

        let sorted = sorted_by(refs, SortField::Name);
        let names: Vec<_> = sorted.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Apple", "banana"]);
    }

    #[test]
    fn test_missing_field_sorts_as_empty() {
        let locations = vec![
            site("A", Some("Vista")),
            site("B", None),
            site("C", Some("Chula Vista")),
        ];
        let refs: Vec<&Location> = locations.iter().collect();

        let sorted = sorted_by(refs, SortField::City);
        let names: Vec<_> = sorted.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let locations = vec![
            site("First", Some("San Diego")),
            site("Second", Some("San Diego")),
            site("Third", Some("San Diego")),
        ];
        let refs: Vec<&Location> = locations.iter().collect();

        let sorted = sorted_by(refs, SortField::City);
        let names: Vec<_> = sorted.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let locations = vec![site("B", None), site("A", None)];
        let refs: Vec<&Location> = locations.iter().collect();

        let _sorted = sorted_by(refs, SortField::Name);
        // The canonical collection keeps its original order.
        assert_eq!(locations[0].name, "B");
        assert_eq!(locations[1].name, "A");
    }
}

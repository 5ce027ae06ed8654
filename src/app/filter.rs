//! Name filter over the directory store.

use crate::domain::UserRecord;

/// A borrowed subset of the store, in store order.
///
/// Computed on demand and dropped after rendering.
pub type FilteredView<'a> = Vec<&'a UserRecord>;

/// Selects the records whose display name contains `term`.
///
/// - Returns `None` if `store` is empty: there is nothing to filter or
///   render, which is different from an empty match.
/// - A `term` that is blank after trimming selects the whole store.
/// - Otherwise the lower-cased trimmed term must be a substring of the
///   lower-cased `"{first} {last}"`. The test is a plain substring test on
///   the joined name, so `"n j"` matches `"John Jones"` but `"n  j"` does not.
///
/// Order is preserved.
///
/// # Example
///
/// ```
/// use userdeck::app::filter::filter;
///
/// assert!(filter("anything", &[]).is_none());
/// ```
#[must_use]
pub fn filter<'a>(term: &str, store: &'a [UserRecord]) -> Option<FilteredView<'a>> {
    if store.is_empty() {
        return None;
    }

    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return Some(store.iter().collect());
    }

    Some(
        store
            .iter()
            .filter(|record| record.display_name().to_lowercase().contains(&term))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Location, Name, Picture};

    fn record(first: &str, last: &str) -> UserRecord {
        UserRecord {
            name: Name { first: first.into(), last: last.into() },
            email: format!("{}@example.com", first.to_lowercase()),
            picture: Picture { medium: "https://example.com/p.jpg".into() },
            location: Location { city: "Oslo".into(), country: "Norway".into() },
        }
    }

    fn store() -> Vec<UserRecord> {
        vec![
            record("John", "Jones"),
            record("Johanna", "Berg"),
            record("Mika", "Johnson"),
            record("Lea", "Weiß"),
        ]
    }

    fn names(view: &FilteredView<'_>) -> Vec<String> {
        view.iter().map(|r| r.display_name()).collect()
    }

    #[test]
    fn empty_store_is_a_no_op() {
        assert!(filter("", &[]).is_none());
        assert!(filter("john", &[]).is_none());
    }

    #[test]
    fn blank_term_returns_whole_store() {
        let store = store();
        assert_eq!(filter("", &store).unwrap().len(), 4);
        assert_eq!(filter("   ", &store).unwrap().len(), 4);
        assert_eq!(
            names(&filter("\t", &store).unwrap()),
            ["John Jones", "Johanna Berg", "Mika Johnson", "Lea Weiß"]
        );
    }

    #[test]
    fn matches_case_insensitive_substring_in_order() {
        let store = store();
        assert_eq!(
            names(&filter("JOH", &store).unwrap()),
            ["John Jones", "Johanna Berg", "Mika Johnson"]
        );
        assert_eq!(names(&filter("  weiß ", &store).unwrap()), ["Lea Weiß"]);
    }

    #[test]
    fn matches_across_the_joining_space() {
        let store = store();
        assert_eq!(names(&filter("n j", &store).unwrap()), ["John Jones"]);
        assert!(filter("n  j", &store).unwrap().is_empty());
    }

    #[test]
    fn no_match_is_an_empty_view() {
        let store = store();
        assert_eq!(filter("zzz", &store), Some(vec![]));
    }

    #[test]
    fn selection_is_exactly_the_matching_records() {
        let store = store();
        for term in ["o", "jo", "ber", "a", "x", "son"] {
            let view = filter(term, &store).unwrap();
            let expected: Vec<&UserRecord> = store
                .iter()
                .filter(|r| r.display_name().to_lowercase().contains(term))
                .collect();
            assert_eq!(view, expected, "term {term:?}");
        }
    }
}

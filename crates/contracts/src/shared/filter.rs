//! Record filter: free-text search combined with a status category.
//!
//! Pages call [`filter_records`] on every keystroke and select change. The
//! function is pure and keeps the input order.

use crate::domain::common::{Categorized, Searchable};
use crate::enums::StatusCode;

/// Select value meaning "every status".
pub const CATEGORY_ALL: &str = "all";

/// Status category chosen in a filter select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter<S: StatusCode> {
    /// Wildcard, bypasses the status test.
    All,
    Only(S),
    /// A value that is neither "all" nor a known status code; matches nothing.
    Unknown(String),
}

impl<S: StatusCode> CategoryFilter<S> {
    /// Parse a select value: "all" or an exact status code.
    pub fn parse(value: &str) -> Self {
        if value == CATEGORY_ALL {
            return CategoryFilter::All;
        }
        match S::from_code(value) {
            Some(status) => CategoryFilter::Only(status),
            None => CategoryFilter::Unknown(value.to_string()),
        }
    }

    /// Select value this filter was parsed from.
    pub fn code(&self) -> &str {
        match self {
            CategoryFilter::All => CATEGORY_ALL,
            CategoryFilter::Only(status) => status.code(),
            CategoryFilter::Unknown(value) => value,
        }
    }

    pub fn accepts(&self, status: S) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == status,
            CategoryFilter::Unknown(_) => false,
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, CategoryFilter::All)
    }
}

impl<S: StatusCode> Default for CategoryFilter<S> {
    fn default() -> Self {
        CategoryFilter::All
    }
}

/// Records whose search fields contain `query` (case-insensitive) and whose
/// status passes `category`, in original order.
pub fn filter_records<R>(records: &[R], query: &str, category: &CategoryFilter<R::Status>) -> Vec<R>
where
    R: Searchable + Categorized + Clone,
{
    let matched: Vec<R> = records
        .iter()
        .filter(|record| category.accepts(record.status()) && record.matches_query(query))
        .cloned()
        .collect();
    log::debug!(
        "filter_records: query='{}' category='{}' -> {}/{}",
        query,
        category.code(),
        matched.len(),
        records.len()
    );
    matched
}

/// Same as [`filter_records`] with the category given as a raw select value.
pub fn filter_by_code<R>(records: &[R], query: &str, category: &str) -> Vec<R>
where
    R: Searchable + Categorized + Clone,
{
    filter_records(records, query, &CategoryFilter::parse(category))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{Priority, Tone};

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        text: &'static str,
        tags: Vec<&'static str>,
        priority: Priority,
    }

    impl Searchable for Note {
        fn search_fields(&self) -> Vec<&str> {
            let mut fields = vec![self.text];
            fields.extend(self.tags.iter().copied());
            fields
        }
    }

    impl Categorized for Note {
        type Status = Priority;

        fn status(&self) -> Priority {
            self.priority
        }
    }

    fn notes() -> Vec<Note> {
        vec![
            Note { text: "Order bearings", tags: vec!["Components"], priority: Priority::High },
            Note { text: "Check steel quote", tags: vec![], priority: Priority::Low },
            Note { text: "Call vendor", tags: vec!["Steel Fabrication"], priority: Priority::High },
        ]
    }

    #[test]
    fn test_empty_query_and_all_returns_input_unchanged() {
        let input = notes();
        assert_eq!(filter_by_code(&input, "", "all"), input);
    }

    #[test]
    fn test_query_is_case_insensitive_and_ors_fields() {
        let result = filter_by_code(&notes(), "STEEL", "all");
        let texts: Vec<_> = result.iter().map(|n| n.text).collect();
        assert_eq!(texts, vec!["Check steel quote", "Call vendor"]);
    }

    #[test]
    fn test_category_and_query_are_combined() {
        let result = filter_by_code(&notes(), "steel", "high");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "Call vendor");
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        assert!(filter_by_code(&notes(), "", "urgent").is_empty());
        assert!(filter_by_code(&notes(), "", "High").is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let once = filter_by_code(&notes(), "o", "high");
        let twice = filter_by_code(&once, "o", "high");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_parse_round_trips_code() {
        assert_eq!(CategoryFilter::<Priority>::parse("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::<Priority>::parse("low").code(), "low");
        assert!(!CategoryFilter::<Priority>::default().is_active());
        assert_eq!(Priority::Low.tone(), Tone::Success);
    }
}

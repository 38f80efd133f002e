use crate::enums::StatusCode;

/// Records that take part in free-text search.
pub trait Searchable {
    /// Text fields the search query is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match against any search field.
    ///
    /// An empty query matches every record.
    fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Records that carry a status tag used for category filtering and bucket counts.
pub trait Categorized {
    type Status: StatusCode;

    fn status(&self) -> Self::Status;
}

use thiserror::Error;

/// Failure to obtain a record collection from a data provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    /// Fixture document does not match the record shape (missing or mistyped field).
    #[error("malformed {collection} fixture: {message}")]
    MalformedFixture {
        collection: &'static str,
        message: String,
    },
}

/// Aggregate that has no defined value for its input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummaryError {
    #[error("cannot average `{field}` over an empty collection")]
    EmptyCollection { field: &'static str },
}

/// Editor draft rejected before it reaches a save handler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    #[error("draft does not match the record shape: {0}")]
    InvalidDraft(String),
}

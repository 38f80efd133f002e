//! Save contract offered to record editors.
//!
//! Nothing is persisted: an accepted record is logged and dropped.

use super::error::SaveError;
use serde::de::DeserializeOwned;
use std::fmt::Debug;

/// Receiver of records created or edited in the UI.
pub trait SaveHandler<T> {
    fn on_save(&self, record: T);
}

/// Logs the record and discards it.
#[derive(Debug, Clone, Copy)]
pub struct LoggingSaveHandler {
    pub collection: &'static str,
}

impl LoggingSaveHandler {
    pub fn new(collection: &'static str) -> Self {
        Self { collection }
    }
}

impl<T: Debug> SaveHandler<T> for LoggingSaveHandler {
    fn on_save(&self, record: T) {
        log::info!("Saving {}: {:?}", self.collection, record);
    }
}

/// Parse an editor draft into a record of the expected shape.
pub fn parse_draft<T: DeserializeOwned>(draft: &str) -> Result<T, SaveError> {
    serde_json::from_str(draft).map_err(|e| SaveError::InvalidDraft(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::cell::RefCell;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Part {
        number: String,
        qty: u32,
    }

    struct Collect(RefCell<Vec<Part>>);

    impl SaveHandler<Part> for Collect {
        fn on_save(&self, record: Part) {
            self.0.borrow_mut().push(record);
        }
    }

    #[test]
    fn test_parse_draft() {
        let part: Part = parse_draft(r#"{"number":"ST-001","qty":5}"#).unwrap();
        assert_eq!(part, Part { number: "ST-001".to_string(), qty: 5 });
        let err = parse_draft::<Part>(r#"{"number":"ST-001"}"#).unwrap_err();
        assert!(matches!(err, SaveError::InvalidDraft(ref m) if m.contains("qty")));
    }

    #[test]
    fn test_handlers_accept_records() {
        let sink = Collect(RefCell::new(vec![]));
        sink.on_save(Part { number: "A".to_string(), qty: 1 });
        assert_eq!(sink.0.borrow().len(), 1);
        LoggingSaveHandler::new("parts").on_save(Part { number: "B".to_string(), qty: 2 });
    }
}

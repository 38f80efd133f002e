use super::{StatusCode, Tone};
use serde::{Deserialize, Serialize};

/// Priority of an RFQ, purchase order, production job or task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl StatusCode for Priority {
    fn all() -> &'static [Self] {
        &[Priority::High, Priority::Medium, Priority::Low]
    }

    fn code(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    fn tone(&self) -> Tone {
        match self {
            Priority::High => Tone::Danger,
            Priority::Medium => Tone::Warning,
            Priority::Low => Tone::Success,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_from_code() {
        for p in Priority::all() {
            assert_eq!(Priority::from_code(p.code()), Some(*p));
        }
        assert_eq!(Priority::from_code("urgent"), None);
        assert_eq!(Priority::from_code("HIGH"), None);
    }

    #[test]
    fn test_deserialize_from_fixture_code() {
        let p: Priority = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(p, Priority::Medium);
    }
}

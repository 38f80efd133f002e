use crate::domain::common::{AggregateRoot, Categorized, Searchable};
use crate::enums::{Priority, StatusCode, Tone};
use crate::shared::summary::{sum_by, StatusCounts, Summarize};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RfqStatus {
    PendingAnalysis,
    SupplierSelection,
    Completed,
}

impl StatusCode for RfqStatus {
    fn all() -> &'static [Self] {
        &[
            RfqStatus::PendingAnalysis,
            RfqStatus::SupplierSelection,
            RfqStatus::Completed,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            RfqStatus::PendingAnalysis => "pending_analysis",
            RfqStatus::SupplierSelection => "supplier_selection",
            RfqStatus::Completed => "completed",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            RfqStatus::PendingAnalysis => "Pending Analysis",
            RfqStatus::SupplierSelection => "Supplier Selection",
            RfqStatus::Completed => "Completed",
        }
    }

    fn tone(&self) -> Tone {
        match self {
            RfqStatus::PendingAnalysis => Tone::Warning,
            RfqStatus::SupplierSelection => Tone::Informative,
            RfqStatus::Completed => Tone::Success,
        }
    }
}

/// Bill of materials line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BomItem {
    pub part_number: String,
    pub description: String,
    pub quantity: u32,
}

/// Request for quote (aggregate a002)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rfq {
    pub id: String,
    pub title: String,
    pub customer: String,
    #[serde(default)]
    pub description: String,
    pub status: RfqStatus,
    pub priority: Priority,
    pub created_date: NaiveDate,
    pub due_date: NaiveDate,
    pub estimated_value: f64,
    #[serde(default)]
    pub attachments: Vec<String>,
    pub supplier_matches: u32,
    #[serde(default)]
    pub technical_requirements: Vec<String>,
    #[serde(default)]
    pub bom_items: Vec<BomItem>,
}

impl Rfq {
    /// Days between creation and the quote deadline
    pub fn lead_days(&self) -> i64 {
        (self.due_date - self.created_date).num_days()
    }
}

impl Searchable for Rfq {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.customer.as_str()]
    }
}

impl Categorized for Rfq {
    type Status = RfqStatus;

    fn status(&self) -> RfqStatus {
        self.status
    }
}

impl AggregateRoot for Rfq {
    fn id(&self) -> &str {
        &self.id
    }

    fn code(&self) -> &str {
        &self.id
    }

    fn description(&self) -> &str {
        &self.title
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "rfq"
    }

    fn element_name() -> &'static str {
        "RFQ"
    }

    fn list_name() -> &'static str {
        "RFQs"
    }
}

/// Stat tiles of the RFQs page
#[derive(Debug, Clone, PartialEq)]
pub struct RfqSummary {
    pub total: usize,
    pub by_status: StatusCounts<RfqStatus>,
    pub total_estimated_value: f64,
}

impl Summarize for Rfq {
    type Metrics = RfqSummary;

    fn summarize(records: &[Self]) -> RfqSummary {
        RfqSummary {
            total: records.len(),
            by_status: StatusCounts::tally(records),
            total_estimated_value: sum_by(records, |r| r.estimated_value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rfq(title: &str, customer: &str, status: RfqStatus, value: f64) -> Rfq {
        Rfq {
            id: "RFQ-1".to_string(),
            title: title.to_string(),
            customer: customer.to_string(),
            description: "Machined parts".to_string(),
            status,
            priority: Priority::Medium,
            created_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2024, 1, 25).unwrap(),
            estimated_value: value,
            attachments: vec![],
            supplier_matches: 0,
            technical_requirements: vec![],
            bom_items: vec![],
        }
    }

    #[test]
    fn test_matches_title_or_customer_only() {
        let r = rfq("Aerospace Components", "Acme Industries", RfqStatus::Completed, 1.0);
        assert!(r.matches_query("aerospace"));
        assert!(r.matches_query("ACME"));
        assert!(!r.matches_query("RFQ-1"));
        assert!(!r.matches_query("Machined"));
    }

    #[test]
    fn test_deserialize_fixture_shape() {
        let json = r#"{
            "id": "RFQ-2024-002",
            "title": "Steel Fabrication Project",
            "customer": "BuildCorp",
            "status": "supplier_selection",
            "priority": "medium",
            "createdDate": "2024-01-08",
            "dueDate": "2024-01-22",
            "estimatedValue": 78000,
            "supplierMatches": 3,
            "bomItems": [{"partNumber": "SF-001", "description": "I-beam", "quantity": 20}]
        }"#;
        let r: Rfq = serde_json::from_str(json).unwrap();
        assert_eq!(r.status, RfqStatus::SupplierSelection);
        assert_eq!(r.bom_items[0].quantity, 20);
        assert_eq!(r.lead_days(), 14);
    }

    #[test]
    fn test_summary() {
        let records = vec![
            rfq("a", "x", RfqStatus::PendingAnalysis, 45000.0),
            rfq("b", "y", RfqStatus::Completed, 22000.0),
        ];
        let summary = Rfq::summarize(&records);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.by_status.count(RfqStatus::SupplierSelection), 0);
        assert_eq!(summary.by_status.total(), 2);
        assert_eq!(summary.total_estimated_value, 67000.0);
    }
}

use crate::domain::common::{AggregateRoot, Categorized, Searchable};
use crate::enums::{StatusCode, Tone};
use crate::shared::scale::scale;
use crate::shared::summary::{average_by, sum_by, StatusCounts, Summarize};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerStatus {
    Active,
    Inactive,
}

impl StatusCode for CustomerStatus {
    fn all() -> &'static [Self] {
        &[CustomerStatus::Active, CustomerStatus::Inactive]
    }

    fn code(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "active",
            CustomerStatus::Inactive => "inactive",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "Active",
            CustomerStatus::Inactive => "Inactive",
        }
    }

    fn tone(&self) -> Tone {
        match self {
            CustomerStatus::Active => Tone::Success,
            CustomerStatus::Inactive => Tone::Subtle,
        }
    }
}

/// Customer account (aggregate a006)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub industry: String,
    pub location: String,
    pub status: CustomerStatus,
    pub total_rfqs: u32,
    pub active_rfqs: u32,
    pub completed_rfqs: u32,
    pub total_spend: f64,
    pub average_order_value: f64,
    /// Months
    pub relationship_duration: u32,
    #[serde(default)]
    pub preferred_categories: Vec<String>,
    pub payment_terms: String,
    pub credit_limit: f64,
    pub last_order_date: NaiveDate,
    /// 0.0 – 5.0
    pub satisfaction_score: f64,
}

impl Customer {
    /// Credit gauge fill: total spend against the credit limit.
    pub fn credit_utilization_percent(&self) -> f64 {
        scale(self.total_spend, self.credit_limit)
    }
}

impl Searchable for Customer {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.company_name.as_str(),
            self.contact_name.as_str(),
            self.industry.as_str(),
        ]
    }
}

impl Categorized for Customer {
    type Status = CustomerStatus;

    fn status(&self) -> CustomerStatus {
        self.status
    }
}

impl AggregateRoot for Customer {
    fn id(&self) -> &str {
        &self.id
    }

    fn code(&self) -> &str {
        &self.company_name
    }

    fn description(&self) -> &str {
        &self.contact_name
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "customer"
    }

    fn element_name() -> &'static str {
        "Customer"
    }

    fn list_name() -> &'static str {
        "Customers"
    }
}

/// Stat tiles of the Customers page
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerSummary {
    pub total: usize,
    pub by_status: StatusCounts<CustomerStatus>,
    pub total_spend: f64,
    pub average_satisfaction: Option<f64>,
}

impl Summarize for Customer {
    type Metrics = CustomerSummary;

    fn summarize(records: &[Self]) -> CustomerSummary {
        CustomerSummary {
            total: records.len(),
            by_status: StatusCounts::tally(records),
            total_spend: sum_by(records, |c| c.total_spend),
            average_satisfaction: average_by(records, "satisfactionScore", |c| {
                c.satisfaction_score
            })
            .ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(name: &str, contact: &str, industry: &str, spend: f64, limit: f64) -> Customer {
        Customer {
            id: name.to_string(),
            company_name: name.to_string(),
            contact_name: contact.to_string(),
            email: String::new(),
            phone: String::new(),
            industry: industry.to_string(),
            location: "Denver, CO".to_string(),
            status: CustomerStatus::Active,
            total_rfqs: 8,
            active_rfqs: 2,
            completed_rfqs: 6,
            total_spend: spend,
            average_order_value: 0.0,
            relationship_duration: 18,
            preferred_categories: vec![],
            payment_terms: "Net 45".to_string(),
            credit_limit: limit,
            last_order_date: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
            satisfaction_score: 4.6,
        }
    }

    #[test]
    fn test_credit_utilization() {
        assert_eq!(customer("B", "M", "C", 320_000.0, 400_000.0).credit_utilization_percent(), 80.0);
        assert_eq!(customer("B", "M", "C", 500_000.0, 400_000.0).credit_utilization_percent(), 100.0);
        assert_eq!(customer("B", "M", "C", 1.0, 0.0).credit_utilization_percent(), 0.0);
    }

    #[test]
    fn test_search_fields() {
        let c = customer("BuildCorp", "Michael Chen", "Construction", 0.0, 1.0);
        assert!(c.matches_query("build"));
        assert!(c.matches_query("chen"));
        assert!(c.matches_query("CONSTRUCT"));
        assert!(!c.matches_query("Denver"));
    }

    #[test]
    fn test_summary() {
        let records = vec![
            customer("A", "a", "x", 485_000.0, 1.0),
            customer("B", "b", "y", 320_000.0, 1.0),
            customer("C", "c", "z", 275_000.0, 1.0),
        ];
        let summary = Customer::summarize(&records);
        assert_eq!(summary.total_spend, 1_080_000.0);
        assert_eq!(summary.by_status.count(CustomerStatus::Active), 3);
        assert_eq!(summary.by_status.count(CustomerStatus::Inactive), 0);
        assert!((summary.average_satisfaction.unwrap() - 4.6).abs() < 1e-9);
    }
}

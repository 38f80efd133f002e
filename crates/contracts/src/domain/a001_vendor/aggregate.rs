use crate::domain::common::{AggregateRoot, Categorized, Searchable};
use crate::enums::{StatusCode, Tone};
use crate::shared::summary::{average_by, sum_by, StatusCounts, Summarize};
use serde::{Deserialize, Serialize};

/// Vendor lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VendorStatus {
    Active,
    Inactive,
    Pending,
}

impl StatusCode for VendorStatus {
    fn all() -> &'static [Self] {
        &[
            VendorStatus::Active,
            VendorStatus::Inactive,
            VendorStatus::Pending,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            VendorStatus::Active => "active",
            VendorStatus::Inactive => "inactive",
            VendorStatus::Pending => "pending",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            VendorStatus::Active => "Active",
            VendorStatus::Inactive => "Inactive",
            VendorStatus::Pending => "Pending",
        }
    }

    fn tone(&self) -> Tone {
        match self {
            VendorStatus::Active => Tone::Success,
            VendorStatus::Inactive => Tone::Subtle,
            VendorStatus::Pending => Tone::Warning,
        }
    }
}

/// Supplier record (aggregate a001)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: String,
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    /// Distance from the plant, miles
    pub distance: f64,
    /// 0.0 – 5.0
    pub rating: f64,
    pub capabilities: Vec<String>,
    #[serde(default)]
    pub industries: Vec<String>,
    pub certifications: Vec<String>,
    pub recent_projects: u32,
    /// Percent of orders delivered on time
    pub on_time_delivery: u32,
    /// Percent
    pub quality_score: u32,
    pub total_spend: f64,
    pub status: VendorStatus,
}

impl Searchable for Vendor {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = Vec::with_capacity(1 + self.capabilities.len());
        fields.push(self.company_name.as_str());
        fields.extend(self.capabilities.iter().map(String::as_str));
        fields
    }
}

impl Categorized for Vendor {
    type Status = VendorStatus;

    fn status(&self) -> VendorStatus {
        self.status
    }
}

impl AggregateRoot for Vendor {
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
        "a001"
    }

    fn collection_name() -> &'static str {
        "vendor"
    }

    fn element_name() -> &'static str {
        "Vendor"
    }

    fn list_name() -> &'static str {
        "Vendors"
    }
}

/// Stat tiles of the Vendors page
#[derive(Debug, Clone, PartialEq)]
pub struct VendorSummary {
    pub total: usize,
    pub by_status: StatusCounts<VendorStatus>,
    pub total_spend: f64,
    /// `None` when there are no vendors
    pub average_rating: Option<f64>,
    pub average_on_time_delivery: Option<f64>,
    pub average_distance: Option<f64>,
}

impl Summarize for Vendor {
    type Metrics = VendorSummary;

    fn summarize(records: &[Self]) -> VendorSummary {
        VendorSummary {
            total: records.len(),
            by_status: StatusCounts::tally(records),
            total_spend: sum_by(records, |v| v.total_spend),
            average_rating: average_by(records, "rating", |v| v.rating).ok(),
            average_on_time_delivery: average_by(records, "onTimeDelivery", |v| {
                f64::from(v.on_time_delivery)
            })
            .ok(),
            average_distance: average_by(records, "distance", |v| v.distance).ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vendor(name: &str, caps: &[&str], status: VendorStatus) -> Vendor {
        Vendor {
            id: name.to_string(),
            company_name: name.to_string(),
            contact_name: "Contact".to_string(),
            email: String::new(),
            phone: String::new(),
            location: "Detroit, MI".to_string(),
            distance: 10.0,
            rating: 4.0,
            capabilities: caps.iter().map(|c| c.to_string()).collect(),
            industries: vec![],
            certifications: vec![],
            recent_projects: 1,
            on_time_delivery: 90,
            quality_score: 95,
            total_spend: 1000.0,
            status,
        }
    }

    #[test]
    fn test_matches_company_name_or_any_capability() {
        let v = vendor("Acme Tooling", &["CNC Machining", "Welding"], VendorStatus::Active);
        assert!(v.matches_query("acme"));
        assert!(v.matches_query("WELD"));
        assert!(v.matches_query(""));
        assert!(!v.matches_query("Detroit"));
        assert!(!v.matches_query("Contact"));
    }

    #[test]
    fn test_summary_of_empty_list_has_no_averages() {
        let summary = Vendor::summarize(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.total_spend, 0.0);
        assert_eq!(summary.average_rating, None);
        assert_eq!(summary.average_distance, None);
    }

    #[test]
    fn test_summary_averages() {
        let mut a = vendor("A", &[], VendorStatus::Active);
        a.rating = 4.8;
        a.on_time_delivery = 96;
        let mut b = vendor("B", &[], VendorStatus::Pending);
        b.rating = 4.4;
        b.on_time_delivery = 88;
        let summary = Vendor::summarize(&[a, b]);
        assert_eq!(summary.by_status.count(VendorStatus::Active), 1);
        assert_eq!(summary.by_status.count(VendorStatus::Pending), 1);
        assert_eq!(summary.by_status.count(VendorStatus::Inactive), 0);
        assert!((summary.average_rating.unwrap() - 4.6).abs() < 1e-9);
        assert_eq!(summary.average_on_time_delivery, Some(92.0));
    }
}

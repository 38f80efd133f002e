use crate::domain::common::{AggregateRoot, Categorized, Searchable};
use crate::enums::{Priority, StatusCode, Tone};
use crate::shared::scale::scale;
use crate::shared::summary::{average_by, percent_of_total, StatusCounts, Summarize};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductionStatus {
    Planning,
    InProgress,
    Completed,
}

impl StatusCode for ProductionStatus {
    fn all() -> &'static [Self] {
        &[
            ProductionStatus::Planning,
            ProductionStatus::InProgress,
            ProductionStatus::Completed,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            ProductionStatus::Planning => "planning",
            ProductionStatus::InProgress => "in_progress",
            ProductionStatus::Completed => "completed",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            ProductionStatus::Planning => "Planning",
            ProductionStatus::InProgress => "In Progress",
            ProductionStatus::Completed => "Completed",
        }
    }

    fn tone(&self) -> Tone {
        match self {
            ProductionStatus::Planning => Tone::Warning,
            ProductionStatus::InProgress => Tone::Informative,
            ProductionStatus::Completed => Tone::Success,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneStatus {
    Pending,
    InProgress,
    Completed,
}

impl StatusCode for MilestoneStatus {
    fn all() -> &'static [Self] {
        &[
            MilestoneStatus::Pending,
            MilestoneStatus::InProgress,
            MilestoneStatus::Completed,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            MilestoneStatus::Pending => "pending",
            MilestoneStatus::InProgress => "in_progress",
            MilestoneStatus::Completed => "completed",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            MilestoneStatus::Pending => "Pending",
            MilestoneStatus::InProgress => "In Progress",
            MilestoneStatus::Completed => "Completed",
        }
    }

    fn tone(&self) -> Tone {
        match self {
            MilestoneStatus::Pending => Tone::Subtle,
            MilestoneStatus::InProgress => Tone::Informative,
            MilestoneStatus::Completed => Tone::Success,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: String,
    pub name: String,
    pub status: MilestoneStatus,
    pub date: NaiveDate,
}

/// Percentages measured by quality control
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityMetrics {
    pub defect_rate: f64,
    pub rework_rate: f64,
    pub pass_rate: f64,
}

impl QualityMetrics {
    /// All zeros until the first inspection
    pub fn is_measured(&self) -> bool {
        self.pass_rate > 0.0 || self.defect_rate > 0.0 || self.rework_rate > 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionItem {
    pub part_number: String,
    pub description: String,
    pub quantity: u32,
    pub completed: u32,
}

impl ProductionItem {
    pub fn completion_percent(&self) -> f64 {
        scale(f64::from(self.completed), f64::from(self.quantity))
    }
}

/// Production job (aggregate a005)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionJob {
    pub id: String,
    pub po_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub vendor: String,
    pub status: ProductionStatus,
    pub priority: Priority,
    pub start_date: NaiveDate,
    pub estimated_completion: NaiveDate,
    pub actual_completion: Option<NaiveDate>,
    /// 0 – 100
    pub progress: u8,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub quality_metrics: QualityMetrics,
    #[serde(default)]
    pub items: Vec<ProductionItem>,
}

impl ProductionJob {
    pub fn completed_milestones(&self) -> usize {
        self.milestones
            .iter()
            .filter(|m| m.status == MilestoneStatus::Completed)
            .count()
    }

    /// Finished no later than estimated. Unfinished jobs are not on time.
    pub fn is_on_time(&self) -> bool {
        self.actual_completion
            .is_some_and(|actual| actual <= self.estimated_completion)
    }
}

impl Searchable for ProductionJob {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.vendor.as_str(), self.id.as_str()]
    }
}

impl Categorized for ProductionJob {
    type Status = ProductionStatus;

    fn status(&self) -> ProductionStatus {
        self.status
    }
}

impl AggregateRoot for ProductionJob {
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
        "a005"
    }

    fn collection_name() -> &'static str {
        "production_job"
    }

    fn element_name() -> &'static str {
        "Production Job"
    }

    fn list_name() -> &'static str {
        "Production"
    }
}

/// Stat tiles of the Production page
#[derive(Debug, Clone, PartialEq)]
pub struct ProductionSummary {
    pub total: usize,
    pub by_status: StatusCounts<ProductionStatus>,
    /// Share of all jobs finished on time, whole percent
    pub on_time_percent: u32,
    pub average_progress: Option<f64>,
}

impl Summarize for ProductionJob {
    type Metrics = ProductionSummary;

    fn summarize(records: &[Self]) -> ProductionSummary {
        let on_time = records.iter().filter(|job| job.is_on_time()).count();
        ProductionSummary {
            total: records.len(),
            by_status: StatusCounts::tally(records),
            on_time_percent: percent_of_total(on_time, records.len()),
            average_progress: average_by(records, "progress", |job| f64::from(job.progress)).ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn job(id: &str, status: ProductionStatus, progress: u8, actual: Option<NaiveDate>) -> ProductionJob {
        ProductionJob {
            id: id.to_string(),
            po_id: "PO-1".to_string(),
            title: "Injection Molded Components".to_string(),
            description: String::new(),
            vendor: "Advanced Components Inc.".to_string(),
            status,
            priority: Priority::Low,
            start_date: date(1, 5),
            estimated_completion: date(1, 22),
            actual_completion: actual,
            progress,
            milestones: vec![],
            quality_metrics: QualityMetrics::default(),
            items: vec![],
        }
    }

    #[test]
    fn test_on_time_requires_actual_completion() {
        assert!(job("1", ProductionStatus::Completed, 100, Some(date(1, 20))).is_on_time());
        assert!(job("2", ProductionStatus::Completed, 100, Some(date(1, 22))).is_on_time());
        assert!(!job("3", ProductionStatus::Completed, 100, Some(date(1, 23))).is_on_time());
        assert!(!job("4", ProductionStatus::InProgress, 65, None).is_on_time());
    }

    #[test]
    fn test_summary() {
        let records = vec![
            job("1", ProductionStatus::Planning, 15, None),
            job("2", ProductionStatus::InProgress, 65, None),
            job("3", ProductionStatus::Completed, 100, Some(date(1, 20))),
        ];
        let summary = ProductionJob::summarize(&records);
        assert_eq!(summary.on_time_percent, 33);
        assert_eq!(summary.by_status.count(ProductionStatus::InProgress), 1);
        let avg = summary.average_progress.unwrap();
        assert!((avg - 60.0).abs() < 1e-9);

        let empty = ProductionJob::summarize(&[]);
        assert_eq!(empty.on_time_percent, 0);
        assert_eq!(empty.average_progress, None);
    }

    #[test]
    fn test_milestones_and_items() {
        let mut j = job("1", ProductionStatus::InProgress, 65, None);
        j.milestones = vec![
            Milestone { id: "1".into(), name: "Material Procurement".into(), status: MilestoneStatus::Completed, date: date(1, 8) },
            Milestone { id: "2".into(), name: "Welding".into(), status: MilestoneStatus::InProgress, date: date(1, 15) },
        ];
        assert_eq!(j.completed_milestones(), 1);

        let item = ProductionItem {
            part_number: "SF-002".into(),
            description: "Angle iron".into(),
            quantity: 50,
            completed: 30,
        };
        assert_eq!(item.completion_percent(), 60.0);
    }

    #[test]
    fn test_search_title_vendor_id() {
        let j = job("PROD-2024-003", ProductionStatus::Completed, 100, None);
        assert!(j.matches_query("prod-2024"));
        assert!(j.matches_query("advanced"));
        assert!(j.matches_query("molded"));
        assert!(!j.matches_query("PO-1"));
    }
}

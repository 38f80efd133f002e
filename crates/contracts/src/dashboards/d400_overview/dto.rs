use crate::dashboards::common::{ChartPoint, StatTile};
use crate::enums::{Priority, StatusCode, Tone};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Content of the Dashboard page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub stats: Vec<StatTile>,
    /// Procurement volume per month, thousands of dollars
    pub monthly_volume: Vec<ChartPoint>,
    pub recent_activity: Vec<ActivityEntry>,
    pub tasks: Vec<TaskEntry>,
}

impl DashboardOverview {
    /// Tasks still to be done, in list order
    pub fn open_tasks(&self) -> impl Iterator<Item = &TaskEntry> {
        self.tasks
            .iter()
            .filter(|t| t.status != TaskStatus::Completed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    RfqCreated,
    PoApproved,
    VendorRegistered,
    InventoryAlert,
}

impl ActivityKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ActivityKind::RfqCreated => "file-text",
            ActivityKind::PoApproved => "check-circle",
            ActivityKind::VendorRegistered => "building",
            ActivityKind::InventoryAlert => "alert-triangle",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            ActivityKind::RfqCreated => Tone::Informative,
            ActivityKind::PoApproved => Tone::Success,
            ActivityKind::VendorRegistered => Tone::Brand,
            ActivityKind::InventoryAlert => Tone::Warning,
        }
    }
}

/// Recent activity feed entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub id: String,
    pub kind: ActivityKind,
    pub title: String,
    pub description: String,
    /// Relative time as shown ("2 hours ago")
    pub timestamp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl StatusCode for TaskStatus {
    fn all() -> &'static [Self] {
        &[TaskStatus::Pending, TaskStatus::InProgress, TaskStatus::Completed]
    }

    fn code(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }

    fn tone(&self) -> Tone {
        match self {
            TaskStatus::Pending => Tone::Warning,
            TaskStatus::InProgress => Tone::Informative,
            TaskStatus::Completed => Tone::Success,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub due_date: NaiveDate,
    pub assignee: String,
    pub status: TaskStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, status: TaskStatus) -> TaskEntry {
        TaskEntry {
            id: id.to_string(),
            title: "Review RFQ responses".to_string(),
            description: String::new(),
            priority: Priority::High,
            due_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            assignee: "John Doe".to_string(),
            status,
        }
    }

    #[test]
    fn test_open_tasks_skip_completed() {
        let overview = DashboardOverview {
            stats: vec![],
            monthly_volume: vec![],
            recent_activity: vec![],
            tasks: vec![
                task("1", TaskStatus::Pending),
                task("2", TaskStatus::Completed),
                task("3", TaskStatus::InProgress),
            ],
        };
        let ids: Vec<_> = overview.open_tasks().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_activity_kind_codes() {
        let kind: ActivityKind = serde_json::from_str("\"inventory_alert\"").unwrap();
        assert_eq!(kind, ActivityKind::InventoryAlert);
        assert_eq!(kind.tone(), Tone::Warning);
    }
}

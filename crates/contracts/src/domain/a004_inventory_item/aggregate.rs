use crate::domain::common::{AggregateRoot, Categorized, Searchable};
use crate::enums::{StatusCode, Tone};
use crate::shared::scale::scale;
use crate::shared::summary::{sum_by, StatusCounts, Summarize};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    Critical,
    Low,
    Adequate,
    High,
}

impl StatusCode for StockStatus {
    fn all() -> &'static [Self] {
        &[
            StockStatus::Critical,
            StockStatus::Low,
            StockStatus::Adequate,
            StockStatus::High,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            StockStatus::Critical => "critical",
            StockStatus::Low => "low",
            StockStatus::Adequate => "adequate",
            StockStatus::High => "high",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            StockStatus::Critical => "Critical",
            StockStatus::Low => "Low Stock",
            StockStatus::Adequate => "Adequate",
            StockStatus::High => "High Stock",
        }
    }

    fn tone(&self) -> Tone {
        match self {
            StockStatus::Critical => Tone::Danger,
            StockStatus::Low => Tone::Warning,
            StockStatus::Adequate => Tone::Success,
            StockStatus::High => Tone::Informative,
        }
    }
}

/// Stock position (aggregate a004)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub part_number: String,
    pub description: String,
    pub category: String,
    pub current_stock: u32,
    pub reserved_stock: u32,
    pub available_stock: u32,
    pub reorder_point: u32,
    pub reorder_quantity: u32,
    pub unit_cost: f64,
    pub total_value: f64,
    pub location: String,
    pub supplier: String,
    pub last_restocked: NaiveDate,
    pub stock_status: StockStatus,
}

impl InventoryItem {
    /// Stock gauge fill: current stock against `factor × reorder point`.
    pub fn stock_level_percent(&self, factor: f64) -> f64 {
        scale(
            f64::from(self.current_stock),
            factor * f64::from(self.reorder_point),
        )
    }

    /// `available = current - reserved`
    pub fn has_consistent_stock(&self) -> bool {
        let consistent = i64::from(self.current_stock) - i64::from(self.reserved_stock)
            == i64::from(self.available_stock);
        if !consistent {
            log::warn!(
                "Inventory {}: available {} != current {} - reserved {}",
                self.part_number,
                self.available_stock,
                self.current_stock,
                self.reserved_stock
            );
        }
        consistent
    }

    pub fn needs_reorder(&self) -> bool {
        matches!(self.stock_status, StockStatus::Critical | StockStatus::Low)
    }
}

impl Searchable for InventoryItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.part_number.as_str(), self.description.as_str()]
    }
}

impl Categorized for InventoryItem {
    type Status = StockStatus;

    fn status(&self) -> StockStatus {
        self.stock_status
    }
}

impl AggregateRoot for InventoryItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn code(&self) -> &str {
        &self.part_number
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "inventory_item"
    }

    fn element_name() -> &'static str {
        "Inventory Item"
    }

    fn list_name() -> &'static str {
        "Inventory"
    }
}

/// Stat tiles of the Inventory page
#[derive(Debug, Clone, PartialEq)]
pub struct InventorySummary {
    pub total: usize,
    pub by_status: StatusCounts<StockStatus>,
    pub total_value: f64,
    pub needs_reorder: usize,
}

impl Summarize for InventoryItem {
    type Metrics = InventorySummary;

    fn summarize(records: &[Self]) -> InventorySummary {
        InventorySummary {
            total: records.len(),
            by_status: StatusCounts::tally(records),
            total_value: sum_by(records, |i| i.total_value),
            needs_reorder: records.iter().filter(|i| i.needs_reorder()).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(part: &str, current: u32, reserved: u32, reorder_point: u32, status: StockStatus) -> InventoryItem {
        InventoryItem {
            id: part.to_string(),
            part_number: part.to_string(),
            description: "Ball bearings 608ZZ".to_string(),
            category: "Components".to_string(),
            current_stock: current,
            reserved_stock: reserved,
            available_stock: current.saturating_sub(reserved),
            reorder_point,
            reorder_quantity: 100,
            unit_cost: 3.75,
            total_value: f64::from(current) * 3.75,
            location: "D3-E1".to_string(),
            supplier: "Steel Solutions LLC".to_string(),
            last_restocked: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            stock_status: status,
        }
    }

    #[test]
    fn test_stock_gauge_uses_twice_the_reorder_point() {
        let bearings = item("BR-004", 15, 10, 25, StockStatus::Critical);
        assert_eq!(bearings.stock_level_percent(2.0), 30.0);
        let bolts = item("ST-001", 250, 50, 100, StockStatus::Low);
        assert_eq!(bolts.stock_level_percent(2.0), 100.0);
        let no_point = item("X", 10, 0, 0, StockStatus::High);
        assert_eq!(no_point.stock_level_percent(2.0), 0.0);
    }

    #[test]
    fn test_stock_consistency() {
        let mut i = item("BR-004", 15, 10, 25, StockStatus::Critical);
        assert!(i.has_consistent_stock());
        i.available_stock = 6;
        assert!(!i.has_consistent_stock());
    }

    #[test]
    fn test_stored_status_drives_reorder_count() {
        let records = vec![
            item("A", 250, 50, 100, StockStatus::Low),
            item("B", 45, 20, 20, StockStatus::Adequate),
            item("C", 800, 200, 300, StockStatus::High),
            item("D", 15, 10, 25, StockStatus::Critical),
        ];
        let summary = InventoryItem::summarize(&records);
        assert_eq!(summary.needs_reorder, 2);
        for status in StockStatus::all() {
            assert_eq!(summary.by_status.count(*status), 1);
        }
    }

    #[test]
    fn test_search_part_number_and_description() {
        let i = item("BR-004", 1, 0, 1, StockStatus::Adequate);
        assert!(i.matches_query("br-0"));
        assert!(i.matches_query("608zz"));
        assert!(!i.matches_query("Components"));
        assert!(!i.matches_query("D3-E1"));
    }
}

use crate::domain::common::{AggregateRoot, Categorized, Searchable};
use crate::enums::{Priority, StatusCode, Tone};
use crate::shared::summary::{sum_by, StatusCounts, Summarize};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseOrderStatus {
    Pending,
    InProduction,
    Completed,
}

impl StatusCode for PurchaseOrderStatus {
    fn all() -> &'static [Self] {
        &[
            PurchaseOrderStatus::Pending,
            PurchaseOrderStatus::InProduction,
            PurchaseOrderStatus::Completed,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            PurchaseOrderStatus::Pending => "pending",
            PurchaseOrderStatus::InProduction => "in_production",
            PurchaseOrderStatus::Completed => "completed",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            PurchaseOrderStatus::Pending => "Pending",
            PurchaseOrderStatus::InProduction => "In Production",
            PurchaseOrderStatus::Completed => "Completed",
        }
    }

    fn tone(&self) -> Tone {
        match self {
            PurchaseOrderStatus::Pending => Tone::Warning,
            PurchaseOrderStatus::InProduction => Tone::Informative,
            PurchaseOrderStatus::Completed => Tone::Success,
        }
    }
}

/// Order line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderLine {
    pub id: String,
    pub part_number: String,
    pub description: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub total_price: f64,
}

impl PurchaseOrderLine {
    /// `total_price == quantity * unit_price`, to the cent
    pub fn is_consistent(&self) -> bool {
        (f64::from(self.quantity) * self.unit_price - self.total_price).abs() < 0.005
    }
}

/// Purchase order (aggregate a003)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    pub id: String,
    pub rfq_id: String,
    pub vendor_name: String,
    pub vendor_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: PurchaseOrderStatus,
    pub priority: Priority,
    pub order_date: NaiveDate,
    pub delivery_date: NaiveDate,
    pub total_amount: f64,
    pub currency: String,
    #[serde(default)]
    pub items: Vec<PurchaseOrderLine>,
    /// 0 – 100
    pub delivery_progress: u8,
    /// 0 – 100, zero until the first inspection
    pub quality_score: u8,
}

impl PurchaseOrder {
    /// Sum of line totals; should equal `total_amount`
    pub fn lines_total(&self) -> f64 {
        sum_by(&self.items, |line| line.total_price)
    }
}

impl Searchable for PurchaseOrder {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.vendor_name.as_str(),
            self.id.as_str(),
        ]
    }
}

impl Categorized for PurchaseOrder {
    type Status = PurchaseOrderStatus;

    fn status(&self) -> PurchaseOrderStatus {
        self.status
    }
}

impl AggregateRoot for PurchaseOrder {
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
        "a003"
    }

    fn collection_name() -> &'static str {
        "purchase_order"
    }

    fn element_name() -> &'static str {
        "Purchase Order"
    }

    fn list_name() -> &'static str {
        "Purchase Orders"
    }
}

/// Stat tiles of the Purchase Orders page
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseOrderSummary {
    pub total: usize,
    pub by_status: StatusCounts<PurchaseOrderStatus>,
    pub total_amount: f64,
}

impl Summarize for PurchaseOrder {
    type Metrics = PurchaseOrderSummary;

    fn summarize(records: &[Self]) -> PurchaseOrderSummary {
        PurchaseOrderSummary {
            total: records.len(),
            by_status: StatusCounts::tally(records),
            total_amount: sum_by(records, |po| po.total_amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(qty: u32, unit: f64, total: f64) -> PurchaseOrderLine {
        PurchaseOrderLine {
            id: "1".to_string(),
            part_number: "AC-001".to_string(),
            description: "Main housing".to_string(),
            quantity: qty,
            unit_price: unit,
            total_price: total,
        }
    }

    fn order(id: &str, vendor: &str, status: PurchaseOrderStatus, amount: f64) -> PurchaseOrder {
        PurchaseOrder {
            id: id.to_string(),
            rfq_id: "RFQ-1".to_string(),
            vendor_name: vendor.to_string(),
            vendor_id: "1".to_string(),
            title: "Aerospace Components".to_string(),
            description: String::new(),
            status,
            priority: Priority::High,
            order_date: NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
            delivery_date: NaiveDate::from_ymd_opt(2024, 2, 15).unwrap(),
            total_amount: amount,
            currency: "USD".to_string(),
            items: vec![],
            delivery_progress: 0,
            quality_score: 0,
        }
    }

    #[test]
    fn test_line_consistency() {
        assert!(line(2000, 3.5, 7000.0).is_consistent());
        assert!(!line(2000, 3.5, 7001.0).is_consistent());
    }

    #[test]
    fn test_matches_title_vendor_or_id() {
        let po = order("PO-2024-001", "Precision Manufacturing Co.", PurchaseOrderStatus::Pending, 1.0);
        assert!(po.matches_query("po-2024"));
        assert!(po.matches_query("precision"));
        assert!(po.matches_query("aerospace"));
        assert!(!po.matches_query("RFQ-1"));
    }

    #[test]
    fn test_summary_sums_amounts() {
        let mut first = order("PO-1", "A", PurchaseOrderStatus::Pending, 45000.0);
        first.items = vec![line(100, 350.0, 35000.0), line(200, 50.0, 10000.0)];
        assert_eq!(first.lines_total(), first.total_amount);

        let records = vec![
            first,
            order("PO-2", "B", PurchaseOrderStatus::InProduction, 78000.0),
            order("PO-3", "C", PurchaseOrderStatus::Completed, 22000.0),
        ];
        let summary = PurchaseOrder::summarize(&records);
        assert_eq!(summary.total_amount, 145000.0);
        assert_eq!(summary.by_status.count(PurchaseOrderStatus::InProduction), 1);
    }
}

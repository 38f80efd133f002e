//! Tab titles, keyed by tab key.
//!
//! Aggregate tabs take `list_name` from the contracts; dashboards are listed here.

use contracts::domain::a001_vendor::Vendor;
use contracts::domain::a002_rfq::Rfq;
use contracts::domain::a003_purchase_order::PurchaseOrder;
use contracts::domain::a004_inventory_item::InventoryItem;
use contracts::domain::a005_production_job::ProductionJob;
use contracts::domain::a006_customer::Customer;
use contracts::domain::common::AggregateRoot;

/// Readable title for a tab key. Fallback: "Page".
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Dashboards (d4xx) ─────────────────────────────────────────────
        "d400_overview" => "Dashboard",
        "d401_analytics" => "Analytics",

        // ── Aggregates ────────────────────────────────────────────────────
        k if k == Vendor::full_name() => Vendor::list_name(),
        k if k == Rfq::full_name() => Rfq::list_name(),
        k if k == PurchaseOrder::full_name() => PurchaseOrder::list_name(),
        k if k == InventoryItem::full_name() => InventoryItem::list_name(),
        k if k == ProductionJob::full_name() => ProductionJob::list_name(),
        k if k == Customer::full_name() => Customer::list_name(),

        _ => "Page",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(tab_label_for_key("d400_overview"), "Dashboard");
        assert_eq!(tab_label_for_key("a001_vendor"), "Vendors");
        assert_eq!(tab_label_for_key("a003_purchase_order"), "Purchase Orders");
        assert_eq!(tab_label_for_key("a004_inventory_item"), "Inventory");
        assert_eq!(tab_label_for_key("unknown"), "Page");
    }
}

//! Page scenarios over the bundled sample data.

use contracts::domain::a001_vendor::{Vendor, VendorStatus};
use contracts::domain::a003_purchase_order::PurchaseOrder;
use contracts::domain::a004_inventory_item::{InventoryItem, StockStatus};
use contracts::domain::a005_production_job::ProductionJob;
use contracts::domain::a006_customer::Customer;
use contracts::domain::common::Searchable;
use contracts::enums::StatusCode;
use contracts::shared::config::AppConfig;
use contracts::shared::data::{DataProvider, SampleDataProvider};
use contracts::shared::filter::{filter_by_code, filter_records, CategoryFilter};
use contracts::shared::scale::{scale, scale_series};
use contracts::shared::summary::Summarize;

#[test]
fn test_inventory_has_one_item_per_stock_status() {
    let items = SampleDataProvider.inventory_items().unwrap();
    let summary = InventoryItem::summarize(items);
    assert_eq!(summary.by_status.count(StockStatus::Critical), 1);
    assert_eq!(summary.by_status.count(StockStatus::Low), 1);
    assert_eq!(summary.by_status.count(StockStatus::Adequate), 1);
    assert_eq!(summary.by_status.count(StockStatus::High), 1);
    assert_eq!(summary.total_value, 5943.75);
    assert_eq!(summary.needs_reorder, 2);
}

#[test]
fn test_inventory_fixture_is_consistent() {
    let items = SampleDataProvider.inventory_items().unwrap();
    for item in items {
        assert!(item.has_consistent_stock(), "{}", item.part_number);
        assert_eq!(
            f64::from(item.current_stock) * item.unit_cost,
            item.total_value,
            "{}",
            item.part_number
        );
    }
}

#[test]
fn test_steel_query_finds_only_steel_solutions() {
    let vendors = SampleDataProvider.vendors().unwrap();
    let found = filter_by_code(vendors, "steel", "all");
    let names: Vec<&str> = found.iter().map(|v| v.company_name.as_str()).collect();
    assert_eq!(names, vec!["Steel Solutions LLC"]);
}

#[test]
fn test_capability_query_matches_vendor() {
    let vendors = SampleDataProvider.vendors().unwrap();
    let found = filter_by_code(vendors, "injection", "all");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].company_name, "Advanced Components Inc.");
}

#[test]
fn test_filter_all_with_empty_query_is_identity() {
    let orders = SampleDataProvider.purchase_orders().unwrap();
    assert_eq!(filter_by_code(orders, "", "all"), orders.to_vec());
    let customers = SampleDataProvider.customers().unwrap();
    assert_eq!(filter_by_code(customers, "", "all"), customers.to_vec());
}

#[test]
fn test_filter_result_is_subset_that_matches() {
    let jobs = SampleDataProvider.production_jobs().unwrap();
    for query in ["prod", "steel", "components", "zzz", ""] {
        let found = filter_by_code(jobs, query, "all");
        assert!(found.len() <= jobs.len());
        assert!(found.iter().all(|j| j.matches_query(query)));
        assert!(found.iter().all(|j| jobs.contains(j)));
    }
}

#[test]
fn test_category_filter_by_status_code() {
    let rfqs = SampleDataProvider.rfqs().unwrap();
    let completed = filter_by_code(rfqs, "", "completed");
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].id, "RFQ-2024-003");
    assert!(filter_by_code(rfqs, "", "archived").is_empty());
}

#[test]
fn test_unfiltered_summary_is_independent_of_filter() {
    let vendors = SampleDataProvider.vendors().unwrap();
    let _visible = filter_records(vendors, "precision", &CategoryFilter::Only(VendorStatus::Active));
    let summary = Vendor::summarize(vendors);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.by_status.count(VendorStatus::Active), 3);
    assert_eq!(summary.total_spend, 745_000.0);
    assert!((summary.average_rating.unwrap() - 4.6).abs() < 1e-9);
    assert_eq!(summary.average_on_time_delivery, Some(92.0));
    assert_eq!(summary.average_distance, Some(60.0));
}

#[test]
fn test_status_counts_sum_to_collection_size() {
    let data = SampleDataProvider;
    let orders = data.purchase_orders().unwrap();
    assert_eq!(PurchaseOrder::summarize(orders).by_status.total(), orders.len());
    let jobs = data.production_jobs().unwrap();
    assert_eq!(ProductionJob::summarize(jobs).by_status.total(), jobs.len());
    let customers = data.customers().unwrap();
    assert_eq!(Customer::summarize(customers).by_status.total(), customers.len());
}

#[test]
fn test_purchase_order_total() {
    let orders = SampleDataProvider.purchase_orders().unwrap();
    assert_eq!(PurchaseOrder::summarize(orders).total_amount, 145_000.0);
    for order in orders {
        assert!(order.items.iter().all(|line| line.is_consistent()));
        assert_eq!(order.lines_total(), order.total_amount);
    }
}

#[test]
fn test_production_on_time_rate() {
    let jobs = SampleDataProvider.production_jobs().unwrap();
    let summary = ProductionJob::summarize(jobs);
    assert_eq!(summary.on_time_percent, 33);
    let milestones: Vec<usize> = jobs.iter().map(|j| j.completed_milestones()).collect();
    assert_eq!(milestones, vec![1, 2, 5]);
}

#[test]
fn test_customer_totals() {
    let customers = SampleDataProvider.customers().unwrap();
    let summary = Customer::summarize(customers);
    assert_eq!(summary.total_spend, 1_080_000.0);
    let utilization: Vec<f64> = customers.iter().map(|c| c.credit_utilization_percent()).collect();
    assert_eq!(utilization[1], 80.0);
}

#[test]
fn test_scale_properties() {
    assert_eq!(scale(15.0, 50.0), 30.0);
    assert_eq!(scale(7.0, 0.0), 0.0);
    assert_eq!(scale(50.0, 50.0), 100.0);
    assert_eq!(scale(0.0, 50.0), 0.0);
    for v in 0..=50 {
        let s = scale(f64::from(v), 50.0);
        assert!((0.0..=100.0).contains(&s));
    }
}

#[test]
fn test_stock_gauge_of_bearings() {
    let config = AppConfig::embedded();
    let items = SampleDataProvider.inventory_items().unwrap();
    let bearings = items.iter().find(|i| i.part_number == "BR-004").unwrap();
    assert_eq!(bearings.stock_level_percent(config.inventory.gauge_capacity_factor), 30.0);
}

#[test]
fn test_dashboard_chart_heights() {
    let overview = SampleDataProvider.dashboard().unwrap();
    let values: Vec<f64> = overview.monthly_volume.iter().map(|p| p.value).collect();
    let heights = scale_series(&values);
    assert_eq!(heights.len(), 6);
    assert_eq!(heights[4], 100.0);
    assert!(heights.iter().all(|h| (0.0..=100.0).contains(h)));
    assert_eq!(overview.open_tasks().count(), 3);
}

#[test]
fn test_every_status_has_a_display_name() {
    for status in StockStatus::all() {
        assert!(!status.display_name().is_empty());
        assert_eq!(StockStatus::from_code(status.code()), Some(*status));
    }
}

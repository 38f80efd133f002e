//! Tab content registry: the single mapping from tab.key to a page view.

use crate::dashboards::d400_overview::DashboardPage;
use crate::dashboards::d401_analytics::AnalyticsPage;
use crate::domain::a001_vendor::ui::VendorList;
use crate::domain::a002_rfq::ui::RfqList;
use crate::domain::a003_purchase_order::ui::PurchaseOrderList;
use crate::domain::a004_inventory_item::ui::InventoryList;
use crate::domain::a005_production_job::ui::ProductionList;
use crate::domain::a006_customer::ui::CustomerList;
use crate::shared::components::empty_state::EmptyState;
use leptos::logging::log;
use leptos::prelude::*;

pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "d400_overview" => view! { <DashboardPage /> }.into_any(),
        "d401_analytics" => view! { <AnalyticsPage /> }.into_any(),
        "a001_vendor" => view! { <VendorList /> }.into_any(),
        "a002_rfq" => view! { <RfqList /> }.into_any(),
        "a003_purchase_order" => view! { <PurchaseOrderList /> }.into_any(),
        "a004_inventory_item" => view! { <InventoryList /> }.into_any(),
        "a005_production_job" => view! { <ProductionList /> }.into_any(),
        "a006_customer" => view! { <CustomerList /> }.into_any(),
        _ => {
            log!("Unknown tab key: '{}'", key);
            view! { <EmptyState message=format!("Unknown page: {}", key) /> }.into_any()
        }
    }
}

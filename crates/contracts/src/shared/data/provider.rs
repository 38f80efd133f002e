use crate::dashboards::d400_overview::DashboardOverview;
use crate::dashboards::d401_analytics::AnalyticsReport;
use crate::domain::a001_vendor::Vendor;
use crate::domain::a002_rfq::Rfq;
use crate::domain::a003_purchase_order::PurchaseOrder;
use crate::domain::a004_inventory_item::InventoryItem;
use crate::domain::a005_production_job::ProductionJob;
use crate::domain::a006_customer::Customer;
use crate::shared::error::DataError;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;

/// Source of every collection the pages display.
pub trait DataProvider {
    fn vendors(&self) -> Result<&[Vendor], DataError>;
    fn rfqs(&self) -> Result<&[Rfq], DataError>;
    fn purchase_orders(&self) -> Result<&[PurchaseOrder], DataError>;
    fn inventory_items(&self) -> Result<&[InventoryItem], DataError>;
    fn production_jobs(&self) -> Result<&[ProductionJob], DataError>;
    fn customers(&self) -> Result<&[Customer], DataError>;
    fn dashboard(&self) -> Result<&DashboardOverview, DataError>;
    fn analytics(&self) -> Result<&AnalyticsReport, DataError>;
}

/// Raw JSON documents, one per collection.
#[derive(Debug, Clone, Copy)]
pub struct FixtureSources<'a> {
    pub vendors: &'a str,
    pub rfqs: &'a str,
    pub purchase_orders: &'a str,
    pub inventory_items: &'a str,
    pub production_jobs: &'a str,
    pub customers: &'a str,
    pub dashboard: &'a str,
    pub analytics: &'a str,
}

impl FixtureSources<'static> {
    /// Sample documents compiled into the binary
    pub fn bundled() -> Self {
        Self {
            vendors: include_str!("fixtures/vendors.json"),
            rfqs: include_str!("fixtures/rfqs.json"),
            purchase_orders: include_str!("fixtures/purchase_orders.json"),
            inventory_items: include_str!("fixtures/inventory_items.json"),
            production_jobs: include_str!("fixtures/production_jobs.json"),
            customers: include_str!("fixtures/customers.json"),
            dashboard: include_str!("fixtures/dashboard.json"),
            analytics: include_str!("fixtures/analytics.json"),
        }
    }
}

/// Collections parsed once from JSON documents.
///
/// A malformed document fails its own collection only; the others stay usable.
#[derive(Debug, Clone)]
pub struct JsonDataProvider {
    vendors: Result<Vec<Vendor>, DataError>,
    rfqs: Result<Vec<Rfq>, DataError>,
    purchase_orders: Result<Vec<PurchaseOrder>, DataError>,
    inventory_items: Result<Vec<InventoryItem>, DataError>,
    production_jobs: Result<Vec<ProductionJob>, DataError>,
    customers: Result<Vec<Customer>, DataError>,
    dashboard: Result<DashboardOverview, DataError>,
    analytics: Result<AnalyticsReport, DataError>,
}

fn parse<T: DeserializeOwned>(collection: &'static str, json: &str) -> Result<T, DataError> {
    let parsed = serde_json::from_str(json).map_err(|e| DataError::MalformedFixture {
        collection,
        message: e.to_string(),
    });
    match &parsed {
        Ok(_) => log::debug!("Loaded {} fixture", collection),
        Err(e) => log::error!("{}", e),
    }
    parsed
}

fn records<T>(collection: &Result<Vec<T>, DataError>) -> Result<&[T], DataError> {
    collection.as_deref().map_err(Clone::clone)
}

impl JsonDataProvider {
    pub fn from_sources(sources: &FixtureSources<'_>) -> Self {
        Self {
            vendors: parse("vendors", sources.vendors),
            rfqs: parse("rfqs", sources.rfqs),
            purchase_orders: parse("purchase_orders", sources.purchase_orders),
            inventory_items: parse("inventory_items", sources.inventory_items),
            production_jobs: parse("production_jobs", sources.production_jobs),
            customers: parse("customers", sources.customers),
            dashboard: parse("dashboard", sources.dashboard),
            analytics: parse("analytics", sources.analytics),
        }
    }
}

impl DataProvider for JsonDataProvider {
    fn vendors(&self) -> Result<&[Vendor], DataError> {
        records(&self.vendors)
    }

    fn rfqs(&self) -> Result<&[Rfq], DataError> {
        records(&self.rfqs)
    }

    fn purchase_orders(&self) -> Result<&[PurchaseOrder], DataError> {
        records(&self.purchase_orders)
    }

    fn inventory_items(&self) -> Result<&[InventoryItem], DataError> {
        records(&self.inventory_items)
    }

    fn production_jobs(&self) -> Result<&[ProductionJob], DataError> {
        records(&self.production_jobs)
    }

    fn customers(&self) -> Result<&[Customer], DataError> {
        records(&self.customers)
    }

    fn dashboard(&self) -> Result<&DashboardOverview, DataError> {
        self.dashboard.as_ref().map_err(Clone::clone)
    }

    fn analytics(&self) -> Result<&AnalyticsReport, DataError> {
        self.analytics.as_ref().map_err(Clone::clone)
    }
}

static SAMPLE: Lazy<JsonDataProvider> =
    Lazy::new(|| JsonDataProvider::from_sources(&FixtureSources::bundled()));

/// Bundled sample data, parsed on first access and shared for the process lifetime.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleDataProvider;

impl DataProvider for SampleDataProvider {
    fn vendors(&self) -> Result<&[Vendor], DataError> {
        SAMPLE.vendors()
    }

    fn rfqs(&self) -> Result<&[Rfq], DataError> {
        SAMPLE.rfqs()
    }

    fn purchase_orders(&self) -> Result<&[PurchaseOrder], DataError> {
        SAMPLE.purchase_orders()
    }

    fn inventory_items(&self) -> Result<&[InventoryItem], DataError> {
        SAMPLE.inventory_items()
    }

    fn production_jobs(&self) -> Result<&[ProductionJob], DataError> {
        SAMPLE.production_jobs()
    }

    fn customers(&self) -> Result<&[Customer], DataError> {
        SAMPLE.customers()
    }

    fn dashboard(&self) -> Result<&DashboardOverview, DataError> {
        SAMPLE.dashboard()
    }

    fn analytics(&self) -> Result<&AnalyticsReport, DataError> {
        SAMPLE.analytics()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_fixtures_parse() {
        let data = SampleDataProvider;
        assert_eq!(data.vendors().unwrap().len(), 3);
        assert_eq!(data.rfqs().unwrap().len(), 3);
        assert_eq!(data.purchase_orders().unwrap().len(), 3);
        assert_eq!(data.inventory_items().unwrap().len(), 4);
        assert_eq!(data.production_jobs().unwrap().len(), 3);
        assert_eq!(data.customers().unwrap().len(), 3);
        assert_eq!(data.dashboard().unwrap().stats.len(), 6);
        assert_eq!(data.analytics().unwrap().procurement_volume.len(), 12);
    }

    #[test]
    fn test_malformed_collection_fails_alone() {
        let mut sources = FixtureSources::bundled();
        sources.vendors = r#"[{"id": "1", "companyName": "No rating"}]"#;
        let data = JsonDataProvider::from_sources(&sources);
        match data.vendors() {
            Err(DataError::MalformedFixture { collection, .. }) => assert_eq!(collection, "vendors"),
            other => panic!("expected malformed fixture, got {:?}", other),
        }
        assert_eq!(data.customers().unwrap().len(), 3);
    }

    #[test]
    fn test_injected_empty_collection() {
        let mut sources = FixtureSources::bundled();
        sources.inventory_items = "[]";
        let data = JsonDataProvider::from_sources(&sources);
        assert!(data.inventory_items().unwrap().is_empty());
    }
}

pub mod a001_vendor;
pub mod a002_rfq;
pub mod a003_purchase_order;
pub mod a004_inventory_item;
pub mod a005_production_job;
pub mod a006_customer;
pub mod common;

//! Inventory Item Domain Module
//!
//! Stock positions per part number. Stock status is recorded by the warehouse
//! and read as-is.

pub mod aggregate;

pub use aggregate::{InventoryItem, InventorySummary, StockStatus};

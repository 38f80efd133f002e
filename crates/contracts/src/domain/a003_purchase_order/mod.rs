//! Purchase Order Domain Module

pub mod aggregate;

pub use aggregate::{PurchaseOrder, PurchaseOrderLine, PurchaseOrderStatus, PurchaseOrderSummary};

//! Vendor Domain Module
//!
//! Suppliers in the procurement network with their capabilities,
//! certifications and delivery performance.

pub mod aggregate;

pub use aggregate::{Vendor, VendorStatus, VendorSummary};

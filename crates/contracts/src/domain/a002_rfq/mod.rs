//! RFQ Domain Module
//!
//! Requests for quote received from customers, with technical requirements
//! and bill of materials.

pub mod aggregate;

pub use aggregate::{BomItem, Rfq, RfqStatus, RfqSummary};

//! Customer Domain Module

pub mod aggregate;

pub use aggregate::{Customer, CustomerStatus, CustomerSummary};

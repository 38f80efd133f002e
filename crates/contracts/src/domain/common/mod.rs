//! Common types and traits for all aggregates

pub mod aggregate_root;
pub mod record;

// Re-exports
pub use aggregate_root::AggregateRoot;
pub use record::{Categorized, Searchable};

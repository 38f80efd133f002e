//! Production Job Domain Module
//!
//! Manufacturing jobs opened against purchase orders, tracked through
//! milestones and quality metrics.

pub mod aggregate;

pub use aggregate::{
    Milestone, MilestoneStatus, ProductionItem, ProductionJob, ProductionStatus,
    ProductionSummary, QualityMetrics,
};

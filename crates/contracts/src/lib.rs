//! Shared contracts for the procurement dashboard.
//!
//! Holds the domain records rendered by the frontend together with the pure
//! functions that every list page runs over them: record filtering, aggregate
//! summaries and proportional scaling for gauges and charts.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;

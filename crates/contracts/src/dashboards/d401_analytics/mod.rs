pub mod dto;

pub use dto::{AnalyticsReport, CategorySpend, ReportPeriod, SupplierPerformance, VolumePoint};

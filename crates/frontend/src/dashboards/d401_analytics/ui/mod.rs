pub mod dashboard;

pub use dashboard::AnalyticsPage;

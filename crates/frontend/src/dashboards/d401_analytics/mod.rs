pub mod ui;

pub use ui::AnalyticsPage;

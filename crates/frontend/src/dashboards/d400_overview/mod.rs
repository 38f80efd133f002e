pub mod ui;

pub use ui::DashboardPage;

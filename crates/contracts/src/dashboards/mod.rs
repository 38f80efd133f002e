//! Dashboard content: KPI tiles, chart series, activity and analytics tables.

pub mod common;
pub mod d400_overview;
pub mod d401_analytics;

pub use common::{ChartPoint, StatTile, ValueFormat};

pub mod dto;

pub use dto::{ActivityEntry, ActivityKind, DashboardOverview, TaskEntry, TaskStatus};

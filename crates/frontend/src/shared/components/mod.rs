pub mod chart;
pub mod empty_state;
pub mod progress_gauge;
pub mod record_editor;
pub mod stat_card;
pub mod status_badge;
pub mod status_filter;
pub mod tag_list;

//! Tab management module
//!
//! - `page` - TabPage wrapper for tab content
//! - `registry` - tab.key → View mapping
//! - `strip` - the clickable tab headers
//! - `tab_labels` - tab titles

pub mod page;
pub mod registry;
pub mod strip;
pub mod tab_labels;

pub use page::TabPage;
pub use strip::TabStrip;
pub use tab_labels::tab_label_for_key;

//! Page category constants.
//!
//! Every page rendered inside a tab declares an HTML `id` in the format
//! `{entity}--{category}` (e.g. `"a001_vendor--list"`) and a
//! `data-page-category` with one of the constants below.

/// Collection of records with search and status filter.
pub const PAGE_CAT_LIST: &str = "list";

/// Read-only charts and tiles.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Sign-in and other pages outside the tab shell.
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DASHBOARD, PAGE_CAT_SYSTEM];

/// Validate that a page id matches the `{entity}--{category}` format
/// with a known category.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && ALL_CATEGORIES.contains(&category),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_ids() {
        assert!(is_valid_page_id("a001_vendor--list"));
        assert!(is_valid_page_id("d400_overview--dashboard"));
        assert!(!is_valid_page_id("a001_vendor"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_vendor--detail"));
    }
}

//! Page category constants.
//!
//! Every content page declares an HTML `id` in the format
//! `{entity}--{category}` (e.g. `"a002_station--list"`) and a
//! `data-page-category` with one of the constants below.

/// List of records: table with search and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Portal overview with stat cards.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Multi-step wizard or other action form.
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Account and settings pages.
pub const PAGE_CAT_SYSTEM: &str = "system";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_USECASE,
    PAGE_CAT_SYSTEM,
];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && ALL_CATEGORIES.contains(&parts[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a002_station--list"));
        assert!(is_valid_page_id("u501_workshop_registration--usecase"));
        assert!(!is_valid_page_id("a002_station"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a002_station--detail"));
    }
}

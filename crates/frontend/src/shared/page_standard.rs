//! Page metadata conventions
//!
//! Every page root carries an HTML `id` of the form `{entity}--{category}`
//! (e.g. `"a003_component--list"`) and a `data-page-category` attribute, so
//! the DOM inspector leads straight to the `domain/{entity}/` directory.

/// Table of records with filters and paging
pub const PAGE_CAT_LIST: &str = "list";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((entity, category)) if !entity.is_empty() && !category.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a003_component--list"));
        assert!(!is_valid_page_id("a003_component"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a003_component--"));
    }
}

use crate::layout::pages::Page;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// URL query of the shell: `?page=a003_component`
#[derive(Debug, Default, Serialize, Deserialize)]
struct ShellQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    page: Option<String>,
}

/// Page named by a location search string, if any
pub fn page_from_search(search: &str) -> Option<Page> {
    let query: ShellQuery = serde_qs::from_str(search.trim_start_matches('?')).ok()?;
    query.page.as_deref().and_then(Page::from_key)
}

/// Search string selecting `page`
pub fn search_for_page(page: Page) -> String {
    let query = ShellQuery {
        page: Some(page.key().to_string()),
    };
    format!("?{}", serde_qs::to_string(&query).unwrap_or_default())
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::default()),
            left_open: RwSignal::new(true),
        }
    }

    /// Restore the active page from the URL and keep the URL in sync
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(page) = page_from_search(&search) {
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = search_for_page(this.active.get());

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn open_page(&self, page: Page) {
        if self.active.get_untracked() != page {
            log::debug!("open_page: {}", page.key());
            self.active.set(page);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_search() {
        assert_eq!(page_from_search("?page=a001_component_type"), Some(Page::ComponentTypes));
        assert_eq!(page_from_search("page=a002_property_type"), Some(Page::PropertyTypes));
        assert_eq!(page_from_search(""), None);
        assert_eq!(page_from_search("?page=unknown"), None);
    }

    #[test]
    fn test_search_round_trip() {
        for page in Page::ALL {
            assert_eq!(page_from_search(&search_for_page(page)), Some(page));
        }
        assert_eq!(search_for_page(Page::Components), "?page=a003_component");
    }
}

//! PageFrame: standard root wrapper for every page rendered in the center area.
//!
//! ```ignore
//! view! {
//!     <PageFrame page_id="a003_component--list" category=PAGE_CAT_LIST>
//!         <div class="page__header">...</div>
//!         <div class="page__content">...</div>
//!     </PageFrame>
//! }
//! ```

use super::page_standard::is_valid_page_id;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`
    category: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(page_id) {
        log::warn!("page id '{}' does not follow the entity--category format", page_id);
    }

    view! {
        <div id=page_id class="page" data-page-category=category>
            {children()}
        </div>
    }
}

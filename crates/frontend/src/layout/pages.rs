//! Page registry: the single mapping from page key to label, icon and view

use crate::domain::a001_component_type::ui::list::ComponentTypeList;
use crate::domain::a002_property_type::ui::list::PropertyTypeList;
use crate::domain::a003_component::ui::list::ComponentList;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Components,
    ComponentTypes,
    PropertyTypes,
}

impl Page {
    /// Sidebar order
    pub const ALL: [Page; 3] = [Page::Components, Page::ComponentTypes, Page::PropertyTypes];

    /// Key used in the URL (`?page=...`)
    pub fn key(&self) -> &'static str {
        match self {
            Page::Components => "a003_component",
            Page::ComponentTypes => "a001_component_type",
            Page::PropertyTypes => "a002_property_type",
        }
    }

    pub fn from_key(key: &str) -> Option<Page> {
        Self::ALL.into_iter().find(|page| page.key() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Components => "Components",
            Page::ComponentTypes => "Component types",
            Page::PropertyTypes => "Property types",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Components => "components",
            Page::ComponentTypes => "component-types",
            Page::PropertyTypes => "property-types",
        }
    }
}

pub fn render_page(page: Page) -> AnyView {
    match page {
        Page::Components => view! { <ComponentList /> }.into_any(),
        Page::ComponentTypes => view! { <ComponentTypeList /> }.into_any(),
        Page::PropertyTypes => view! { <PropertyTypeList /> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_key(page.key()), Some(page));
        }
        assert_eq!(Page::from_key("a022_kit_variant"), None);
    }
}

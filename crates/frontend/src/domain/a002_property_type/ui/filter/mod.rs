use crate::domain::a001_component_type::api::type_options;
use crate::shared::components::ui::Select;
use crate::shared::list_resource::{filter_value, set_filter_value};
use crate::shared::list_utils::SearchInput;
use contracts::domain::a001_component_type::ComponentTypeRevisions;
use contracts::domain::a002_property_type::PropertyType;
use contracts::shared::list::ListState;
use leptos::prelude::*;
use uuid::Uuid;

/// One property type filter row: name substring and allowed component type
#[component]
pub fn PropertyTypeFilterRow(
    state: RwSignal<ListState<PropertyType>>,
    row_id: Uuid,
    #[prop(into)]
    types: Signal<Vec<ComponentTypeRevisions>>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">"Name contains"</label>
            <SearchInput
                value=Signal::derive(move || filter_value(state, row_id, "name"))
                on_change=Callback::new(move |v: String| set_filter_value(state, row_id, "name", &v))
                placeholder="Property type name"
            />
        </div>
        <Select
            label="Component type"
            value=Signal::derive(move || filter_value(state, row_id, "type"))
            on_change=Callback::new(move |v: String| set_filter_value(state, row_id, "type", &v))
            options=Signal::derive(move || types.with(|t| type_options(t)))
        />
    }
}

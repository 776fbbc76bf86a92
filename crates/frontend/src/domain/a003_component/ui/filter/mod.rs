use crate::domain::a001_component_type::api::type_options;
use crate::shared::components::ui::Select;
use crate::shared::list_resource::{filter_value, set_filter_value};
use crate::shared::list_utils::SearchInput;
use contracts::domain::a001_component_type::{revisions_of, ComponentTypeRevisions};
use contracts::domain::a003_component::Component;
use contracts::shared::list::ListState;
use leptos::prelude::*;
use uuid::Uuid;

/// One component filter row: name substring, type and revision
///
/// The server ignores a revision without a type, so the revision select stays
/// disabled until a type is chosen and is cleared whenever the type changes.
#[component]
pub fn ComponentFilterRow(
    state: RwSignal<ListState<Component>>,
    row_id: Uuid,
    #[prop(into)]
    types: Signal<Vec<ComponentTypeRevisions>>,
) -> impl IntoView {
    let selected_type = Signal::derive(move || filter_value(state, row_id, "type"));

    let on_type_change = Callback::new(move |v: String| {
        state.update(|s| {
            if let Some(index) = s.filters.iter().position(|row| row.id == row_id) {
                s.set_filter_value(index, "type", &v);
                s.set_filter_value(index, "revision", "");
            }
        });
    });

    let revision_options = Signal::derive(move || {
        let type_name = selected_type.get();
        types.with(|t| {
            revisions_of(t, &type_name)
                .iter()
                .map(|r| (r.clone(), r.clone()))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="form__group">
            <label class="form__label">"Name contains"</label>
            <SearchInput
                value=Signal::derive(move || filter_value(state, row_id, "name"))
                on_change=Callback::new(move |v: String| set_filter_value(state, row_id, "name", &v))
                placeholder="Component name"
            />
        </div>
        <Select
            label="Type"
            value=selected_type
            on_change=on_type_change
            options=Signal::derive(move || types.with(|t| type_options(t)))
        />
        <Select
            label="Revision"
            value=Signal::derive(move || filter_value(state, row_id, "revision"))
            on_change=Callback::new(move |v: String| set_filter_value(state, row_id, "revision", &v))
            options=revision_options
            disabled=Signal::derive(move || selected_type.get().is_empty())
        />
    }
}

use super::add_dialog::AddPropertyTypeDialog;
use super::filter::PropertyTypeFilterRow;
use crate::domain::a001_component_type::api::load_types_and_revisions;
use crate::shared::components::element_table::{Column, ElementTable};
use crate::shared::components::filter_panel::{FilterPanel, FilterRows};
use crate::shared::components::range_panel::RangePanel;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::shared::list_resource::{bind_list, create_list_state, remove_filter};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_component_type::ComponentTypeRevisions;
use contracts::domain::a002_property_type::PropertyType;
use leptos::prelude::*;
use thaw::*;
use uuid::Uuid;

#[component]
pub fn PropertyTypeList() -> impl IntoView {
    let state = create_list_state::<PropertyType>();
    bind_list(state);

    let types = RwSignal::new(Vec::<ComponentTypeRevisions>::new());
    let lookup_error = RwSignal::new(None::<String>);
    load_types_and_revisions(types, lookup_error);

    let is_filter_expanded = RwSignal::new(false);
    let show_add = RwSignal::new(false);

    let columns = vec![
        Column::sortable("Name", "name", 160.0, |p: &PropertyType| {
            view! { <span class="table__strong">{p.name.clone()}</span> }.into_any()
        }),
        Column::sortable("Allowed types", "allowed_type", 180.0, |p: &PropertyType| {
            p.allowed_types_label().into_any()
        }),
        Column::plain("Units", 80.0, |p: &PropertyType| p.units.clone().into_any()),
        Column::plain("Allowed regex", 140.0, |p: &PropertyType| {
            view! { <code>{p.allowed_regex.clone()}</code> }.into_any()
        }),
        Column::plain("Values", 70.0, |p: &PropertyType| p.n_values.to_string().into_any()),
        Column::plain("Comments", 220.0, |p: &PropertyType| p.comments.clone().into_any()),
    ];

    let on_saved = Callback::new(move |_: ()| {
        show_add.set(false);
        state.update(|s| s.request_reload());
    });

    let row_editor = Callback::new(move |row_id: Uuid| {
        view! {
            <PropertyTypeFilterRow state=state row_id=row_id types=types />
        }
        .into_any()
    });

    view! {
        <PageFrame page_id="a002_property_type--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Property types"</h1>
                    <Badge variant="primary">
                        {move || state.with(|s| s.window.count).to_string()}
                    </Badge>
                </div>
            </div>

            <div class="page__content">
                <FilterPanel
                    is_expanded=is_filter_expanded
                    active_filters_count=Signal::derive(move || state.with(|s| s.active_filters_count()))
                    pagination_controls=move || view! {
                        <RangePanel
                            window=Signal::derive(move || state.with(|s| s.window))
                            on_back=Callback::new(move |_| state.update(|s| s.back()))
                            on_forward=Callback::new(move |_| state.update(|s| s.forward()))
                            on_range_change=Callback::new(move |range| state.update(|s| s.set_range(range)))
                        />
                    }
                    actions=move || view! {
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| state.update(|s| s.request_reload())
                        >
                            {icon("refresh")}
                            " Refresh"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| show_add.set(true)
                        >
                            {icon("plus")}
                            " Add"
                        </Button>
                    }
                    filter_content=move || view! {
                        <FilterRows
                            rows=Signal::derive(move || state.with(|s| s.filters.clone()))
                            on_add=Callback::new(move |_| state.update(|s| s.add_filter()))
                            on_remove=Callback::new(move |id| remove_filter(state, id))
                            on_clear=Callback::new(move |_| state.update(|s| s.clear_filters()))
                            row_editor=row_editor
                        />
                    }
                />

                {move || lookup_error.get().map(|err| view! {
                    <div class="alert alert--warning">{err}</div>
                })}
                {move || state.with(|s| s.error()).map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <ElementTable
                    columns=columns
                    items=Signal::derive(move || state.with(|s| s.items.clone()))
                    loading=Signal::derive(move || state.with(|s| s.is_loading()))
                    order_by=Signal::derive(move || state.with(|s| s.order_by.clone()))
                    order_direction=Signal::derive(move || state.with(|s| s.order_direction))
                    on_sort=Callback::new(move |key: String| state.update(|s| s.toggle_sort(&key)))
                />
            </div>

            <Show when=move || show_add.get()>
                <AddPropertyTypeDialog
                    types=types
                    on_saved=on_saved
                    on_cancel=Callback::new(move |_| show_add.set(false))
                />
            </Show>
        </PageFrame>
    }
}

use super::filter::ComponentFilterRow;
use crate::domain::a001_component_type::api::load_types_and_revisions;
use crate::shared::components::element_table::{Column, ElementTable};
use crate::shared::components::filter_panel::{FilterPanel, FilterRows};
use crate::shared::components::range_panel::RangePanel;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_optional;
use crate::shared::icons::icon;
use crate::shared::list_resource::{bind_list, create_list_state, remove_filter};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_component_type::ComponentTypeRevisions;
use contracts::domain::a003_component::{Component, REVISION_SORT_KEY};
use leptos::prelude::*;
use thaw::*;
use uuid::Uuid;

#[component]
pub fn ComponentList() -> impl IntoView {
    let state = create_list_state::<Component>();
    bind_list(state);

    let types = RwSignal::new(Vec::<ComponentTypeRevisions>::new());
    let lookup_error = RwSignal::new(None::<String>);
    load_types_and_revisions(types, lookup_error);

    let is_filter_expanded = RwSignal::new(false);

    let columns = vec![
        Column::sortable("Name", "name", 200.0, |c: &Component| {
            view! { <span class="table__strong">{c.name.clone()}</span> }.into_any()
        }),
        Column::sortable("Type", "type", 140.0, |c: &Component| c.component_type.clone().into_any()),
        Column::sortable("Revision", REVISION_SORT_KEY, 100.0, |c: &Component| {
            c.revision.clone().unwrap_or_else(|| "—".to_string()).into_any()
        }),
        Column::plain("Added", 140.0, |c: &Component| format_optional(c.added_at()).into_any()),
    ];

    let row_editor = Callback::new(move |row_id: Uuid| {
        view! {
            <ComponentFilterRow state=state row_id=row_id types=types />
        }
        .into_any()
    });

    view! {
        <PageFrame page_id="a003_component--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Components"</h1>
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
        </PageFrame>
    }
}

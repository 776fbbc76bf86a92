use crate::shared::icons::icon;
use contracts::shared::filter::FilterRow;
use leptos::prelude::*;
use uuid::Uuid;

/// Collapsible filter panel with the range panel and page actions in its header
#[component]
pub fn FilterPanel(
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    /// Shown as a badge next to the title
    #[prop(into)]
    active_filters_count: Signal<usize>,

    #[prop(into)]
    pagination_controls: ViewFn,

    /// Buttons on the right of the header (Refresh, Add ...)
    #[prop(into)]
    actions: ViewFn,

    #[prop(into)]
    filter_content: ViewFn,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left" on:click=toggle_expanded>
                    <svg
                        width="16"
                        height="16"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        class=move || {
                            if is_expanded.get() {
                                "filter-panel__chevron filter-panel__chevron--expanded"
                            } else {
                                "filter-panel__chevron"
                            }
                        }
                    >
                        <polyline points="6 9 12 15 18 9"></polyline>
                    </svg>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! {
                            <span class="badge badge--primary">{count}</span>
                        })
                    }}
                </div>
                <div class="filter-panel-header__center">
                    {pagination_controls.run()}
                </div>
                <div class="filter-panel-header__right">
                    {actions.run()}
                </div>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    {filter_content.run()}
                </div>
            </div>
        </div>
    }
}

/// Editable list of filter rows
///
/// Rows are keyed by their id, so editing or removing one row never rebuilds
/// the others. `row_editor` renders the entity-specific fields of one row.
#[component]
pub fn FilterRows(
    #[prop(into)]
    rows: Signal<Vec<FilterRow>>,

    on_add: Callback<()>,

    on_remove: Callback<Uuid>,

    on_clear: Callback<()>,

    row_editor: Callback<Uuid, AnyView>,
) -> impl IntoView {
    view! {
        <div class="filter-rows">
            <For
                each=move || rows.get()
                key=|row| row.id
                children=move |row| {
                    let id = row.id;
                    view! {
                        <div class="filter-row">
                            <div class="filter-row__fields">{row_editor.run(id)}</div>
                            <button
                                class="button button--icon filter-row__remove"
                                title="Remove filter"
                                on:click=move |_| on_remove.run(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
            <Show when=move || rows.with(|r| r.is_empty())>
                <div class="filter-rows__empty">"No filters: every record is listed."</div>
            </Show>
            <div class="filter-rows__actions">
                <button class="button button--secondary" on:click=move |_| on_add.run(())>
                    {icon("plus")}
                    "Add filter"
                </button>
                <button
                    class="button button--secondary"
                    disabled=move || rows.with(|r| r.is_empty())
                    on:click=move |_| on_clear.run(())
                >
                    "Clear all"
                </button>
            </div>
        </div>
    }
}

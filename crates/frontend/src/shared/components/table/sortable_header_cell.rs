//! Sortable table header cell
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Name"
//!     sort_field="name"
//!     current_sort_field=Signal::derive(move || state.with(|s| s.order_by.clone()))
//!     order_direction=Signal::derive(move || state.with(|s| s.order_direction))
//!     on_sort=Callback::new(move |field: String| state.update(|s| s.toggle_sort(&field)))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::shared::list::OrderDirection;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,

    /// Sort key sent as `orderBy`
    #[prop(into)]
    sort_field: String,

    #[prop(into)]
    current_sort_field: Signal<String>,

    #[prop(into)]
    order_direction: Signal<OrderDirection>,

    on_sort: Callback<String>,

    #[prop(optional, default = 100.0)]
    min_width: f64,
) -> impl IntoView {
    let sort_field_for_click = sort_field.clone();
    let sort_field_for_indicator = sort_field.clone();
    let sort_field_for_class = sort_field;

    let handle_click = move |_| on_sort.run(sort_field_for_click.clone());

    view! {
        <TableHeaderCell min_width=min_width>
            <div class="table__sortable-header" style="cursor: pointer;" on:click=handle_click>
                {label}
                <span class=move || get_sort_class(&current_sort_field.get(), &sort_field_for_class)>
                    {move || {
                        get_sort_indicator(
                            &current_sort_field.get(),
                            &sort_field_for_indicator,
                            order_direction.get(),
                        )
                    }}
                </span>
            </div>
        </TableHeaderCell>
    }
}

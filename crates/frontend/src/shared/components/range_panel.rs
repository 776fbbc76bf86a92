use crate::shared::icons::icon;
use contracts::shared::list::{Window, RANGE_OPTIONS};
use leptos::prelude::*;

/// Paging controls for a list window: back, `first–last of count`, forward
/// and the window size selector.
#[component]
pub fn RangePanel(
    #[prop(into)]
    window: Signal<Window>,

    on_back: Callback<()>,

    on_forward: Callback<()>,

    /// Called with the new window size
    on_range_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_back.run(())
                disabled=move || !window.get().can_back()
                title="Previous"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || window.get().label()}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_forward.run(())
                disabled=move || !window.get().can_forward()
                title="Next"
            >
                {icon("chevron-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(range) = event_target_value(&ev).parse() {
                        on_range_change.run(range);
                    }
                }
                prop:value=move || window.get().range.to_string()
            >
                {RANGE_OPTIONS.iter().map(|&size| {
                    view! {
                        <option value=size.to_string() selected=move || window.get().range == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

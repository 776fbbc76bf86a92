/// List helpers shared by the entity pages (sorting indicators, search box)
use contracts::shared::list::OrderDirection;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Sort indicator shown next to a column header
pub fn get_sort_indicator(current_field: &str, field: &str, direction: OrderDirection) -> &'static str {
    if current_field == field {
        if direction.is_ascending() { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

/// CSS class of the indicator: active columns are highlighted
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-icon table__sort-icon--active"
    } else {
        "table__sort-icon"
    }
}

/// Debounce bookkeeping: only the latest keystroke's timer may commit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebounceTicket {
    latest: u64,
    pending: bool,
}

impl DebounceTicket {
    /// A keystroke: returns the ticket its timer must present
    pub fn start(&mut self) -> u64 {
        self.latest = self.latest.wrapping_add(1);
        self.pending = true;
        self.latest
    }

    /// The timer for `ticket` elapsed; true when it may commit
    pub fn fire(&mut self, ticket: u64) -> bool {
        if self.pending && self.latest == ticket {
            self.pending = false;
            true
        } else {
            false
        }
    }

    /// Drop any running timer
    pub fn cancel(&mut self) {
        self.latest = self.latest.wrapping_add(1);
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Search input with debounce and a clear button
///
/// The box follows outside changes of `value` (e.g. "Clear all") unless the
/// user is mid-typing.
#[component]
pub fn SearchInput(
    /// Current committed value
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new value once typing pauses
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    let debounce = StoredValue::new(DebounceTicket::default());

    Effect::new(move |_| {
        let committed = value.get();
        let typing = debounce.try_with_value(|d| d.is_pending()).unwrap_or(false);
        if !typing && input_value.get_untracked() != committed {
            set_input_value.set(committed);
        }
    });

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let ticket = debounce.try_update_value(|d| d.start());
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            let fire = ticket
                .and_then(|t| debounce.try_update_value(|d| d.fire(t)))
                .unwrap_or(false);
            if fire {
                on_change.run(new_value);
            }
        });
    };

    let clear_filter = move |_| {
        debounce.update_value(|d| d.cancel());
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class=move || if value.get().is_empty() {
                    "search-input__field"
                } else {
                    "search-input__field search-input__field--active"
                }
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", OrderDirection::Asc), " ▲");
        assert_eq!(get_sort_indicator("name", "name", OrderDirection::Desc), " ▼");
        assert_eq!(get_sort_indicator("type", "name", OrderDirection::Asc), " ⇅");
    }

    #[test]
    fn test_sort_class() {
        assert!(get_sort_class("name", "name").ends_with("--active"));
        assert_eq!(get_sort_class("type", "name"), "table__sort-icon");
    }

    #[test]
    fn test_debounce_only_latest_fires() {
        let mut d = DebounceTicket::default();
        let first = d.start();
        let second = d.start();
        assert!(d.is_pending());
        assert!(!d.fire(first));
        assert!(d.fire(second));
        assert!(!d.is_pending());
        assert!(!d.fire(second));
    }

    #[test]
    fn test_debounce_cancel_allows_outside_sync() {
        let mut d = DebounceTicket::default();
        let ticket = d.start();
        d.cancel();
        assert!(!d.is_pending());
        assert!(!d.fire(ticket));
    }
}

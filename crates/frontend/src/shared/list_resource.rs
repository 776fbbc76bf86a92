//! Reactive wiring between a [`ListState`] signal and the list/count endpoints
//!
//! Each effect tracks a memoised request key, so only sort, filter, paging and
//! reload changes reach the network. Responses are tagged with the generation
//! of their request and dropped when a newer request has started.

use crate::shared::api_utils::{get_count, get_json};
use contracts::shared::filter::FilterRow;
use contracts::shared::list::{ListState, ListedEntity};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use uuid::Uuid;

pub fn create_list_state<T>() -> RwSignal<ListState<T>>
where
    T: ListedEntity + Send + Sync,
{
    RwSignal::new(ListState::default())
}

/// Start the list and count effects for `state`
pub fn bind_list<T>(state: RwSignal<ListState<T>>)
where
    T: ListedEntity + DeserializeOwned + Send + Sync,
{
    let list_key = Memo::new(move |_| state.with(|s| s.list_key()));
    let count_key = Memo::new(move |_| state.with(|s| s.count_key()));

    Effect::new(move |_| {
        let key = list_key.get();
        let Some(generation) = state.try_update(|s| s.begin_list_request()) else {
            return;
        };
        spawn_local(async move {
            let result = get_json::<Vec<T>, _>(T::LIST_PATH, &key.query).await;
            if let Err(e) = &result {
                log::error!("{} failed: {}", T::LIST_PATH, e);
            }
            let applied = state
                .try_update(|s| s.apply_list(generation, result))
                .unwrap_or(false);
            if !applied {
                log::debug!("{}: dropped stale response #{}", T::LIST_PATH, generation);
            }
        });
    });

    Effect::new(move |_| {
        let key = count_key.get();
        let Some(generation) = state.try_update(|s| s.begin_count_request()) else {
            return;
        };
        spawn_local(async move {
            let result = get_count(T::COUNT_PATH, &key.query).await;
            if let Err(e) = &result {
                log::error!("{} failed: {}", T::COUNT_PATH, e);
            }
            let applied = state
                .try_update(|s| s.apply_count(generation, result))
                .unwrap_or(false);
            if !applied {
                log::debug!("{}: dropped stale response #{}", T::COUNT_PATH, generation);
            }
        });
    });
}

/// Current value of `field` in the filter row `id`
pub fn filter_value<T>(state: RwSignal<ListState<T>>, id: Uuid, field: &str) -> String
where
    T: ListedEntity + Send + Sync,
{
    state.with(|s| {
        s.filters
            .iter()
            .find(|row| row.id == id)
            .map(|row| row.get(field).to_string())
            .unwrap_or_default()
    })
}

/// Set `field` of the filter row `id`
pub fn set_filter_value<T>(state: RwSignal<ListState<T>>, id: Uuid, field: &str, value: &str)
where
    T: ListedEntity + Send + Sync,
{
    state.update(|s| {
        if let Some(index) = row_index(&s.filters, id) {
            s.set_filter_value(index, field, value);
        }
    });
}

pub fn remove_filter<T>(state: RwSignal<ListState<T>>, id: Uuid)
where
    T: ListedEntity + Send + Sync,
{
    state.update(|s| {
        if let Some(index) = row_index(&s.filters, id) {
            s.remove_filter(index);
        }
    });
}

fn row_index(rows: &[FilterRow], id: Uuid) -> Option<usize> {
    rows.iter().position(|row| row.id == id)
}

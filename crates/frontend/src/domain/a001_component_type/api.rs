use crate::shared::api_utils::get_json_at;
use contracts::domain::a001_component_type::{ComponentTypeRevisions, TYPES_AND_REVISIONS_PATH};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Fetch every component type with its revisions
pub async fn fetch_types_and_revisions() -> Result<Vec<ComponentTypeRevisions>, String> {
    get_json_at(TYPES_AND_REVISIONS_PATH).await
}

/// Fill `target` with the type/revision lookup, reporting failures into `error`
pub fn load_types_and_revisions(
    target: RwSignal<Vec<ComponentTypeRevisions>>,
    error: RwSignal<Option<String>>,
) {
    spawn_local(async move {
        match fetch_types_and_revisions().await {
            Ok(types) => {
                log::debug!("loaded {} component types", types.len());
                target.try_set(types);
            }
            Err(e) => {
                log::error!("{} failed: {}", TYPES_AND_REVISIONS_PATH, e);
                error.try_set(Some(format!("Failed to load component types: {}", e)));
            }
        }
    });
}

/// `(value, label)` options of a type dropdown
pub fn type_options(types: &[ComponentTypeRevisions]) -> Vec<(String, String)> {
    types
        .iter()
        .map(|t| (t.name.clone(), t.name.clone()))
        .collect()
}

use crate::shared::api_utils::post_query;
use contracts::domain::a001_component_type::{SetComponentTypeParams, SET_COMPONENT_TYPE_PATH};

pub async fn save_form(params: &SetComponentTypeParams) -> Result<(), String> {
    post_query(SET_COMPONENT_TYPE_PATH, params).await
}

use crate::shared::api_utils::post_query;
use contracts::domain::a002_property_type::{SetPropertyTypeParams, SET_PROPERTY_TYPE_PATH};

pub async fn save_form(params: &SetPropertyTypeParams) -> Result<(), String> {
    post_query(SET_PROPERTY_TYPE_PATH, params).await
}

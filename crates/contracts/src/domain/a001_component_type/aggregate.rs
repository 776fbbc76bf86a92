use crate::domain::common::name_ref;
use crate::shared::list::{FilterMode, ListedEntity};
use crate::shared::validation::{check_field, FieldErrors, ValidationRules};
use serde::{Deserialize, Serialize};

// ============================================================================
// Records
// ============================================================================

/// Category of components (e.g. "LNA", "feed")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentType {
    pub name: String,
    #[serde(default)]
    pub comments: String,
}

impl ListedEntity for ComponentType {
    const LIST_PATH: &'static str = "/api/component_type_list";
    const COUNT_PATH: &'static str = "/api/component_type_count";
    const SORT_KEYS: &'static [&'static str] = &["name"];
    const DEFAULT_SORT: &'static str = "name";
    const FILTER_MODE: FilterMode = FilterMode::NameSubstring;
}

/// Lookup row: a component type with the names of its revisions
///
/// Older servers call the revisions `versions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentTypeRevisions {
    pub name: String,
    #[serde(default, alias = "versions", deserialize_with = "name_ref::names")]
    pub revisions: Vec<String>,
}

pub const TYPES_AND_REVISIONS_PATH: &str = "/api/component_types_and_revisions";

/// Revisions of `type_name`, empty when the type is unknown
pub fn revisions_of<'a>(lookup: &'a [ComponentTypeRevisions], type_name: &str) -> &'a [String] {
    lookup
        .iter()
        .find(|t| t.name == type_name)
        .map(|t| t.revisions.as_slice())
        .unwrap_or(&[])
}

// ============================================================================
// Add form
// ============================================================================

pub const SET_COMPONENT_TYPE_PATH: &str = "/api/set_component_type";

/// Form state of the "add component type" dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewComponentType {
    pub name: String,
    pub comments: String,
}

/// Query parameters of `POST /api/set_component_type`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetComponentTypeParams {
    pub name: String,
    pub comments: String,
}

impl NewComponentType {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        check_field(&mut errors, "name", "Name", &self.name, ValidationRules::required());
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validated request parameters
    pub fn to_params(&self) -> Result<SetComponentTypeParams, FieldErrors> {
        self.validate()?;
        Ok(SetComponentTypeParams {
            name: self.name.trim().to_string(),
            comments: self.comments.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query::to_query_string;

    #[test]
    fn test_deserialize_list() {
        let items: Vec<ComponentType> =
            serde_json::from_str(r#"[{"name":"LNA","comments":"low noise"},{"name":"feed"}]"#)
                .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].comments, "");
    }

    #[test]
    fn test_revisions_lookup_accepts_versions_alias() {
        let lookup: Vec<ComponentTypeRevisions> = serde_json::from_str(
            r#"[{"name":"LNA","versions":["A","B"]},{"name":"feed","revisions":[]}]"#,
        )
        .unwrap();
        assert_eq!(revisions_of(&lookup, "LNA"), ["A", "B"]);
        assert!(revisions_of(&lookup, "feed").is_empty());
        assert!(revisions_of(&lookup, "missing").is_empty());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let form = NewComponentType {
            name: "  ".to_string(),
            comments: "anything".to_string(),
        };
        let errors = form.to_params().unwrap_err();
        assert_eq!(errors.get("name").map(String::as_str), Some("Name is required"));
    }

    #[test]
    fn test_params_are_trimmed_and_encoded() {
        let form = NewComponentType {
            name: " LNA ".to_string(),
            comments: String::new(),
        };
        let params = form.to_params().unwrap();
        assert_eq!(params.name, "LNA");
        assert_eq!(to_query_string(&params).unwrap(), "name=LNA&comments=");
    }
}

use crate::domain::common::name_ref;
use crate::shared::list::{FilterMode, ListedEntity};
use crate::shared::validation::{check_field, FieldErrors, ValidationRules};
use serde::{Deserialize, Serialize};

// ============================================================================
// Record
// ============================================================================

/// Named attribute schema applicable to some component types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyType {
    pub name: String,
    /// Names of the component types the property may be attached to
    #[serde(default, deserialize_with = "name_ref::names")]
    pub allowed_types: Vec<String>,
    #[serde(default)]
    pub units: String,
    #[serde(default)]
    pub allowed_regex: String,
    #[serde(default)]
    pub n_values: u32,
    #[serde(default)]
    pub comments: String,
}

/// Filter row fields, in wire order
pub const FILTER_FIELDS: &[&str] = &["name", "type"];

impl ListedEntity for PropertyType {
    const LIST_PATH: &'static str = "/api/property_type_list";
    const COUNT_PATH: &'static str = "/api/property_type_count";
    const SORT_KEYS: &'static [&'static str] = &["name", "allowed_type"];
    const DEFAULT_SORT: &'static str = "name";
    const FILTER_MODE: FilterMode = FilterMode::Rows(FILTER_FIELDS);
}

impl PropertyType {
    pub fn allowed_types_label(&self) -> String {
        self.allowed_types.join(", ")
    }
}

// ============================================================================
// Add form
// ============================================================================

pub const SET_PROPERTY_TYPE_PATH: &str = "/api/set_property_type";

/// Separator of `allowedTypes` in the POST parameters
pub const ALLOWED_TYPES_SEPARATOR: &str = ";";

/// Form state of the "add property type" dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPropertyType {
    pub name: String,
    pub units: String,
    pub allowed_regex: String,
    /// Kept as typed so partial input can be edited
    pub n_values: String,
    pub allowed_types: Vec<String>,
    pub comments: String,
}

/// Query parameters of `POST /api/set_property_type`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetPropertyTypeParams {
    pub name: String,
    pub units: String,
    pub allowed_regex: String,
    pub n_values: u32,
    pub allowed_types: String,
    pub comments: String,
}

impl NewPropertyType {
    pub fn toggle_allowed_type(&mut self, type_name: &str) {
        if let Some(pos) = self.allowed_types.iter().position(|t| t == type_name) {
            self.allowed_types.remove(pos);
        } else {
            self.allowed_types.push(type_name.to_string());
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        check_field(&mut errors, "name", "Name", &self.name, ValidationRules::required());
        check_field(&mut errors, "units", "Units", &self.units, ValidationRules::required());
        check_field(
            &mut errors,
            "allowed_regex",
            "Allowed regex",
            &self.allowed_regex,
            ValidationRules::required(),
        );
        check_field(
            &mut errors,
            "n_values",
            "Number of values",
            &self.n_values,
            ValidationRules::required_integer(1.0),
        );
        if self.allowed_types.is_empty() {
            errors.insert("allowed_types", "Select at least one component type".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validated request parameters
    pub fn to_params(&self) -> Result<SetPropertyTypeParams, FieldErrors> {
        self.validate()?;
        let n_values = self.n_values.trim().parse::<u32>().map_err(|_| {
            let mut errors = FieldErrors::new();
            errors.insert("n_values", "Number of values is too large".to_string());
            errors
        })?;

        Ok(SetPropertyTypeParams {
            name: self.name.trim().to_string(),
            units: self.units.trim().to_string(),
            allowed_regex: self.allowed_regex.trim().to_string(),
            n_values,
            allowed_types: self.allowed_types.join(ALLOWED_TYPES_SEPARATOR),
            comments: self.comments.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> NewPropertyType {
        NewPropertyType {
            name: "gain".to_string(),
            units: "dB".to_string(),
            allowed_regex: "^-?[0-9.]+$".to_string(),
            n_values: "1".to_string(),
            allowed_types: vec!["LNA".to_string(), "amp".to_string()],
            comments: String::new(),
        }
    }

    #[test]
    fn test_deserialize_with_object_types() {
        let json = r#"[{
            "name": "gain",
            "allowed_types": [{"name": "LNA", "comments": ""}, "amp"],
            "units": "dB",
            "allowed_regex": ".*",
            "n_values": 2,
            "comments": "x"
        }]"#;
        let items: Vec<PropertyType> = serde_json::from_str(json).unwrap();
        assert_eq!(items[0].allowed_types_label(), "LNA, amp");
        assert_eq!(items[0].n_values, 2);
    }

    #[test]
    fn test_filled_form_is_valid() {
        let params = filled().to_params().unwrap();
        assert_eq!(params.allowed_types, "LNA;amp");
        assert_eq!(params.n_values, 1);
    }

    #[test]
    fn test_each_required_field_is_checked() {
        let cases: [(&str, fn(&mut NewPropertyType)); 5] = [
            ("name", |f| f.name.clear()),
            ("units", |f| f.units.clear()),
            ("allowed_regex", |f| f.allowed_regex.clear()),
            ("n_values", |f| f.n_values.clear()),
            ("allowed_types", |f| f.allowed_types.clear()),
        ];
        for (field, blank) in cases {
            let mut form = filled();
            blank(&mut form);
            let errors = form.validate().unwrap_err();
            assert!(errors.contains_key(field), "missing error for {}", field);
            assert_eq!(errors.len(), 1);
        }
    }

    #[test]
    fn test_n_values_must_be_positive_integer() {
        let mut form = filled();
        form.n_values = "0".to_string();
        assert!(form.validate().is_err());
        form.n_values = "x".to_string();
        assert!(form.validate().is_err());
        form.n_values = "99999999999".to_string();
        assert!(form.validate().is_ok());
        assert!(form.to_params().unwrap_err().contains_key("n_values"));
    }

    #[test]
    fn test_toggle_allowed_type() {
        let mut form = NewPropertyType::default();
        form.toggle_allowed_type("LNA");
        form.toggle_allowed_type("feed");
        form.toggle_allowed_type("LNA");
        assert_eq!(form.allowed_types, vec!["feed"]);
    }

    #[test]
    fn test_param_names() {
        let qs = crate::shared::query::to_query_string(&filled().to_params().unwrap()).unwrap();
        assert!(qs.contains("allowedRegex="));
        assert!(qs.contains("nValues=1"));
        assert!(qs.contains("allowedTypes="));
    }
}

use crate::domain::common::name_ref;
use crate::shared::list::{FilterMode, ListedEntity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tracked physical item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    /// Component type name
    #[serde(rename = "type", deserialize_with = "name_ref::name")]
    pub component_type: String,
    #[serde(default, alias = "version", deserialize_with = "name_ref::optional_name")]
    pub revision: Option<String>,
    /// Unix timestamp (seconds) the component was added
    #[serde(default)]
    pub time_added: Option<f64>,
}

/// Sort key of the revision column; the API still calls revisions versions
pub const REVISION_SORT_KEY: &str = "version";

/// Filter row fields, in wire order
pub const FILTER_FIELDS: &[&str] = &["name", "type", "revision"];

impl ListedEntity for Component {
    const LIST_PATH: &'static str = "/api/component_list";
    const COUNT_PATH: &'static str = "/api/component_count";
    const SORT_KEYS: &'static [&'static str] = &["name", "type", REVISION_SORT_KEY];
    const DEFAULT_SORT: &'static str = "name";
    const FILTER_MODE: FilterMode = FilterMode::Rows(FILTER_FIELDS);
}

impl Component {
    pub fn added_at(&self) -> Option<DateTime<Utc>> {
        let ts = self.time_added?;
        if !ts.is_finite() {
            return None;
        }
        DateTime::from_timestamp(ts.trunc() as i64, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::ListState;
    use crate::shared::query::to_query_string;

    #[test]
    fn test_deserialize_components() {
        let json = r#"[
            {"name": "LNA-001", "type": "LNA", "revision": "B", "time_added": 1609459200.5},
            {"name": "FEED-7", "type": {"name": "feed", "comments": ""}, "revision": null},
            {"name": "FEED-8", "type": "feed", "version": {"name": "A"}}
        ]"#;
        let items: Vec<Component> = serde_json::from_str(json).unwrap();
        assert_eq!(items[0].component_type, "LNA");
        assert_eq!(items[0].revision.as_deref(), Some("B"));
        assert_eq!(
            items[0].added_at().unwrap().format("%Y-%m-%d").to_string(),
            "2021-01-01"
        );
        assert_eq!(items[1].component_type, "feed");
        assert_eq!(items[1].revision, None);
        assert_eq!(items[1].added_at(), None);
        assert_eq!(items[2].revision.as_deref(), Some("A"));
    }

    #[test]
    fn test_component_without_revision() {
        let json = r#"[{"name":"C1","type":{"name":"LNA","comments":""},"version":{},"time_added":1}]"#;
        let items: Vec<Component> = serde_json::from_str(json).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].component_type, "LNA");
        assert_eq!(items[0].revision, None);
    }

    #[test]
    fn test_revision_column_sorts_by_version() {
        let mut state = ListState::<Component>::default();
        state.toggle_sort(REVISION_SORT_KEY);
        let query = to_query_string(&state.list_key().query).unwrap();
        assert!(query.contains("orderBy=version"), "{}", query);

        state.toggle_sort("revision");
        assert_eq!(state.order_by, "version");
    }
}

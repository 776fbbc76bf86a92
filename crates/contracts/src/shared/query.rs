//! Query-string parameters of the list and count endpoints

use super::list::OrderDirection;
use serde::{Deserialize, Serialize};

/// Parameters of `*_list` endpoints
///
/// `range` is `min;max`; exactly one of `filters` / `name_substring` is set,
/// depending on the entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub range: String,
    pub order_by: String,
    pub order_direction: OrderDirection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_substring: Option<String>,
}

/// Parameters of `*_count` endpoints
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_substring: Option<String>,
}

/// Serialise parameters into a query string (without the leading `?`)
pub fn to_query_string<Q: Serialize>(params: &Q) -> Result<String, String> {
    serde_qs::to_string(params).map_err(|e| format!("Failed to encode query: {}", e))
}

/// Append serialised parameters to an endpoint path
pub fn with_query<Q: Serialize>(path: &str, params: &Q) -> Result<String, String> {
    let qs = to_query_string(params)?;
    if qs.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{}?{}", path, qs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_parameter_names() {
        let q = ListQuery {
            range: "0;50".to_string(),
            order_by: "name".to_string(),
            order_direction: OrderDirection::Desc,
            filters: Some("amp,LNA,".to_string()),
            name_substring: None,
        };
        let qs = to_query_string(&q).unwrap();
        assert!(qs.starts_with("range="));
        assert!(qs.contains("orderBy=name"));
        assert!(qs.contains("orderDirection=desc"));
        assert!(qs.contains("filters="));
        assert!(!qs.contains("nameSubstring"));

        let parsed: ListQuery = serde_qs::from_str(&qs).unwrap();
        assert_eq!(parsed, q);
    }

    #[test]
    fn test_count_query_with_name_substring() {
        let q = CountQuery {
            filters: None,
            name_substring: Some("feed horn".to_string()),
        };
        let qs = to_query_string(&q).unwrap();
        assert!(qs.starts_with("nameSubstring="));
        let parsed: CountQuery = serde_qs::from_str(&qs).unwrap();
        assert_eq!(parsed.name_substring.as_deref(), Some("feed horn"));
    }

    #[test]
    fn test_with_query_omits_question_mark_when_empty() {
        assert_eq!(
            with_query("/api/component_count", &CountQuery::default()).unwrap(),
            "/api/component_count"
        );
        let url = with_query(
            "/api/component_count",
            &CountQuery {
                filters: Some(String::new()),
                name_substring: None,
            },
        )
        .unwrap();
        assert_eq!(url, "/api/component_count?filters=");
    }
}

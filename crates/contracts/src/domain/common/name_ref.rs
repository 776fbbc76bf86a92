//! Lenient decoding of references to named entities
//!
//! The API returns related entities (a component's type, a property type's
//! allowed types) either as a bare name or as an object carrying `name`.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NameRef {
    Name(String),
    /// `{}` stands for "no reference" and decodes to an empty name
    Object {
        #[serde(default)]
        name: String,
    },
}

impl NameRef {
    fn into_name(self) -> String {
        match self {
            NameRef::Name(name) | NameRef::Object { name } => name,
        }
    }
}

/// `"LNA"` or `{"name": "LNA", ...}` -> `"LNA"`
pub fn name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    NameRef::deserialize(deserializer).map(NameRef::into_name)
}

/// Like [`name`], accepting `null` or a missing field
pub fn optional_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<NameRef>::deserialize(deserializer)?
        .map(NameRef::into_name)
        .filter(|name| !name.is_empty()))
}

/// A list of names or named objects
pub fn names<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<NameRef>>::deserialize(deserializer)?
        .unwrap_or_default()
        .into_iter()
        .map(NameRef::into_name)
        .collect())
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(deserialize_with = "super::name")]
        kind: String,
        #[serde(default, deserialize_with = "super::optional_name")]
        revision: Option<String>,
        #[serde(default, deserialize_with = "super::names")]
        allowed: Vec<String>,
    }

    #[test]
    fn test_bare_names() {
        let s: Sample =
            serde_json::from_str(r#"{"kind":"LNA","revision":"B","allowed":["a","b"]}"#).unwrap();
        assert_eq!(s.kind, "LNA");
        assert_eq!(s.revision.as_deref(), Some("B"));
        assert_eq!(s.allowed, vec!["a", "b"]);
    }

    #[test]
    fn test_objects() {
        let s: Sample = serde_json::from_str(
            r#"{"kind":{"name":"LNA","comments":""},"revision":{"name":"B"},"allowed":[{"name":"a"}]}"#,
        )
        .unwrap();
        assert_eq!(s.kind, "LNA");
        assert_eq!(s.revision.as_deref(), Some("B"));
        assert_eq!(s.allowed, vec!["a"]);
    }

    #[test]
    fn test_missing_and_null() {
        let s: Sample = serde_json::from_str(r#"{"kind":"LNA","revision":null}"#).unwrap();
        assert_eq!(s.revision, None);
        assert!(s.allowed.is_empty());

        let s: Sample = serde_json::from_str(r#"{"kind":"LNA","revision":"","allowed":null}"#).unwrap();
        assert_eq!(s.revision, None);
        assert!(s.allowed.is_empty());
    }

    #[test]
    fn test_empty_object_is_no_reference() {
        let s: Sample = serde_json::from_str(r#"{"kind":"LNA","revision":{}}"#).unwrap();
        assert_eq!(s.revision, None);
    }
}

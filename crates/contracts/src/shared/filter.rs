//! Filter rows and the `filters` query parameter codec
//!
//! Wire format: one row per `;`-separated segment, each row the values of the
//! entity's filter fields in their fixed order joined by `,`.
//!
//! ```text
//! name,type,revision;name,type,revision
//! ```
//!
//! The backend ORs rows together and ANDs the non-empty fields of a row. A row
//! with every field empty adds no clause, so it is sent as-is (`,,`) and the
//! string always decodes back to the rows it came from.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

pub const ROW_SEPARATOR: &str = ";";
pub const FIELD_SEPARATOR: &str = ",";

/// One filter criterion: field -> value
///
/// `id` only keys the row in the editor; two rows with the same values are
/// equal regardless of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterRow {
    pub id: Uuid,
    values: BTreeMap<String, String>,
}

impl PartialEq for FilterRow {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl Eq for FilterRow {}

impl Default for FilterRow {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterRow {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            values: BTreeMap::new(),
        }
    }

    /// Build a row from `(field, value)` pairs
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut row = Self::new();
        for (field, value) in pairs {
            row.set(field, value);
        }
        row
    }

    /// Value of `field`, empty when unset
    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    /// Set `field`; separators are stripped, an empty value unsets the field
    pub fn set(&mut self, field: &str, value: &str) {
        let value = sanitize_filter_value(value);
        if value.is_empty() {
            self.values.remove(field);
        } else {
            self.values.insert(field.to_string(), value);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn encode(&self, fields: &[&str]) -> String {
        fields
            .iter()
            .map(|field| self.get(field))
            .collect::<Vec<_>>()
            .join(FIELD_SEPARATOR)
    }
}

/// Remove the characters the wire format reserves
pub fn sanitize_filter_value(value: &str) -> String {
    value
        .chars()
        .filter(|c| !ROW_SEPARATOR.contains(*c) && !FIELD_SEPARATOR.contains(*c))
        .collect()
}

/// Encode rows for the `filters` query parameter
pub fn encode_filters(fields: &[&str], rows: &[FilterRow]) -> String {
    rows.iter()
        .map(|row| row.encode(fields))
        .collect::<Vec<_>>()
        .join(ROW_SEPARATOR)
}

/// Parse a `filters` string back into rows
pub fn decode_filters(fields: &[&str], encoded: &str) -> Result<Vec<FilterRow>> {
    if encoded.is_empty() {
        return Ok(Vec::new());
    }

    let mut rows = Vec::new();
    for (index, segment) in encoded.split(ROW_SEPARATOR).enumerate() {
        let parts: Vec<&str> = segment.split(FIELD_SEPARATOR).collect();
        if parts.len() != fields.len() {
            bail!(
                "filter row {} has {} values, expected {} ({})",
                index,
                parts.len(),
                fields.len(),
                fields.join(",")
            );
        }
        rows.push(FilterRow::from_pairs(fields.iter().copied().zip(parts)));
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[&str] = &["name", "type", "revision"];

    #[test]
    fn test_encode_exact_wire_format() {
        let rows = vec![
            FilterRow::from_pairs([("name", "amp"), ("type", "LNA"), ("revision", "B")]),
            FilterRow::from_pairs([("type", "FLA")]),
        ];
        assert_eq!(encode_filters(FIELDS, &rows), "amp,LNA,B;,FLA,");
    }

    #[test]
    fn test_encode_ignores_field_insertion_order() {
        let a = FilterRow::from_pairs([("revision", "B"), ("name", "amp"), ("type", "LNA")]);
        let b = FilterRow::from_pairs([("name", "amp"), ("type", "LNA"), ("revision", "B")]);
        assert_eq!(encode_filters(FIELDS, &[a]), encode_filters(FIELDS, &[b]));
    }

    #[test]
    fn test_empty_rows_keep_their_place() {
        assert_eq!(encode_filters(FIELDS, &[]), "");
        assert_eq!(encode_filters(FIELDS, &[FilterRow::new()]), ",,");
        let rows = vec![FilterRow::new(), FilterRow::from_pairs([("name", "x")])];
        let encoded = encode_filters(FIELDS, &rows);
        assert_eq!(encoded, ",,;x,,");
        assert_eq!(decode_filters(FIELDS, &encoded).unwrap(), rows);
    }

    #[test]
    fn test_fields_outside_schema_are_not_encoded() {
        let row = FilterRow::from_pairs([("comments", "ignored")]);
        assert_eq!(encode_filters(&["name", "type"], &[row]), ",");
    }

    #[test]
    fn test_round_trip() {
        let rows = vec![
            FilterRow::from_pairs([("name", "feed"), ("type", "antenna")]),
            FilterRow::from_pairs([("revision", "C")]),
            FilterRow::from_pairs([("name", "with space")]),
        ];
        let encoded = encode_filters(FIELDS, &rows);
        let decoded = decode_filters(FIELDS, &encoded).unwrap();
        assert_eq!(decoded, rows);
    }

    #[test]
    fn test_separators_are_stripped_on_set() {
        let mut row = FilterRow::new();
        row.set("name", "a,b;c");
        assert_eq!(row.get("name"), "abc");

        row.set("name", ",;");
        assert!(row.is_empty());
    }

    #[test]
    fn test_decode_rejects_wrong_arity() {
        let err = decode_filters(FIELDS, "a,b").unwrap_err();
        assert!(err.to_string().contains("expected 3"));
        assert!(decode_filters(FIELDS, "a,b,c;d").is_err());
    }

    #[test]
    fn test_decode_empty_string() {
        assert!(decode_filters(FIELDS, "").unwrap().is_empty());
    }

    #[test]
    fn test_row_equality_ignores_id() {
        let a = FilterRow::from_pairs([("name", "x")]);
        let b = FilterRow::from_pairs([("name", "x")]);
        assert_ne!(a.id, b.id);
        assert_eq!(a, b);
    }
}

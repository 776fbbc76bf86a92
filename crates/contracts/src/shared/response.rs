//! Decoding of endpoint responses that are not plain records

use serde_json::Value;

/// Parse a `*_count` response body
///
/// Accepts a bare integer (`42`), a string holding one (`"42"`) or an object
/// with a `count` field.
pub fn parse_count(body: &str) -> Result<usize, String> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| format!("Failed to parse count: {}", e))?;
    count_from_value(&value)
}

fn count_from_value(value: &Value) -> Result<usize, String> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .map(|n| n as usize)
            .ok_or_else(|| format!("Invalid count: {}", n)),
        Value::String(s) => s
            .trim()
            .parse::<usize>()
            .map_err(|_| format!("Invalid count: {:?}", s)),
        Value::Object(map) => match map.get("count") {
            Some(inner) => count_from_value(inner),
            None => Err("Count response has no `count` field".to_string()),
        },
        other => Err(format!("Unexpected count response: {}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count_forms() {
        assert_eq!(parse_count("42"), Ok(42));
        assert_eq!(parse_count("\"17\""), Ok(17));
        assert_eq!(parse_count(r#"{"count": 3}"#), Ok(3));
    }

    #[test]
    fn test_parse_count_rejects_garbage() {
        assert!(parse_count("-1").is_err());
        assert!(parse_count("\"many\"").is_err());
        assert!(parse_count("[1]").is_err());
        assert!(parse_count("not json").is_err());
        assert!(parse_count("{}").is_err());
    }
}

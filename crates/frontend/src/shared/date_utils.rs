/// Utilities for date and time formatting
use chrono::{DateTime, Utc};

/// Format a UTC instant as `YYYY-MM-DD HH:MM`
pub fn format_datetime(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

/// Format an optional instant, falling back to a dash
pub fn format_optional(at: Option<DateTime<Utc>>) -> String {
    at.map(format_datetime).unwrap_or_else(|| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime() {
        let at = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_datetime(at), "2024-03-15 14:02");
    }

    #[test]
    fn test_missing_value() {
        assert_eq!(format_optional(None), "—");
    }

    #[test]
    fn test_unix_timestamp() {
        let at = DateTime::from_timestamp(1_700_000_000, 0);
        assert_eq!(format_optional(at), "2023-11-14 22:13");
    }
}

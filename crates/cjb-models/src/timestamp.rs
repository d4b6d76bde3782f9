//! Timestamp parsing for backend-provided dates.
//!
//! The backend emits naive ISO-8601 timestamps (`2024-01-15T10:30:00.123456`)
//! for creation times and free-form `YYYY-MM-DD` strings for deadlines.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse a backend timestamp, accepting naive and offset-qualified forms.
pub fn parse_backend_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_utc()))
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Format a backend timestamp for display, falling back to the raw text.
pub fn display_timestamp(raw: &str) -> String {
    match parse_backend_timestamp(raw) {
        Some(ts) => ts.format("%Y-%m-%d %H:%M").to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_naive_iso() {
        let ts = parse_backend_timestamp("2024-01-15T10:30:00.123456").unwrap();
        assert_eq!(ts.format("%Y-%m-%d %H:%M").to_string(), "2024-01-15 10:30");
    }

    #[test]
    fn test_parse_rfc3339_and_date() {
        assert!(parse_backend_timestamp("2024-01-15T10:30:00Z").is_some());
        assert!(parse_backend_timestamp("2024-06-30").is_some());
    }

    #[test]
    fn test_display_keeps_unparseable_text() {
        assert_eq!(display_timestamp("next friday"), "next friday");
        assert!(parse_backend_timestamp("  ").is_none());
    }
}

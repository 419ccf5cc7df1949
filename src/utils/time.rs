//! Time utilities
//!
//! Instants cross the API boundary in exactly one canonical format, RFC 3339.
//! Ambiguous or locale-dependent inputs are rejected rather than coerced.

use chrono::{DateTime, Utc};

/// Get current UTC time
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Parse a timestamp string in RFC 3339 format, e.g. `2026-01-12T10:00:00Z`.
pub fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

/// Format an instant for API display as `DD Mon YYYY, HH:MM AM/PM`.
///
/// Presentation only; comparisons and storage always use the parsed instant.
pub fn format_display(dt: DateTime<Utc>) -> String {
    dt.format("%d %b %Y, %I:%M %p").to_string()
}

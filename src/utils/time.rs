//! Time utilities for block timestamps
//!
//! Block headers carry a Unix timestamp; these helpers render it for diagnostics.

use chrono::{TimeZone, Utc};

/// Convert Unix timestamp to ISO 8601 date string (YYYY-MM-DD)
///
/// Returns "1970-01-01" for invalid timestamps.
///
/// # Examples
/// ```
/// use tx_payload_forensics::utils::time::timestamp_to_iso;
/// assert_eq!(timestamp_to_iso(0), "1970-01-01");
/// assert_eq!(timestamp_to_iso(1704067200), "2024-01-01");
/// ```
pub fn timestamp_to_iso(timestamp: i64) -> String {
    Utc.timestamp_opt(timestamp, 0)
        .single()
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "1970-01-01".to_string())
}

/// Convert Unix timestamp to ISO 8601 UTC datetime (YYYY-MM-DDTHH:MM:SSZ)
///
/// Returns the epoch for invalid timestamps.
///
/// # Examples
/// ```
/// use tx_payload_forensics::utils::time::timestamp_to_iso_datetime;
/// assert_eq!(timestamp_to_iso_datetime(0), "1970-01-01T00:00:00Z");
/// ```
pub fn timestamp_to_iso_datetime(timestamp: i64) -> String {
    Utc.timestamp_opt(timestamp, 0)
        .single()
        .map(|dt| dt.format("%Y-%m-%dT%H:%M:%SZ").to_string())
        .unwrap_or_else(|| "1970-01-01T00:00:00Z".to_string())
}

//! Time helpers shared by the Lakeside crates.

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};

/// JST is UTC+9
const JST_OFFSET_SECS: i32 = 9 * 3600;

/// Get current Unix timestamp (milliseconds)
///
/// A Unix timestamp does not depend on the time zone, so the value is the
/// same whether it is read as UTC or JST.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Format a Unix timestamp (milliseconds) as an RFC 3339 string in JST.
///
/// Out-of-range timestamps are formatted as the Unix epoch.
pub fn timestamp_to_jst_rfc3339(timestamp_millis: i64) -> String {
    let utc = DateTime::<Utc>::from_timestamp_millis(timestamp_millis).unwrap_or_default();
    match FixedOffset::east_opt(JST_OFFSET_SECS) {
        Some(jst) => utc
            .with_timezone(&jst)
            .to_rfc3339_opts(SecondsFormat::Secs, false),
        None => utc.to_rfc3339_opts(SecondsFormat::Secs, false),
    }
}

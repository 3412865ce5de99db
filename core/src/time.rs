//! Time related utils.

use chrono::TimeZone;
use chrono::Utc;

use crate::{Error, Result};

/// DateTime is the alias for chrono::DateTime<Utc>.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Seconds since the unix epoch, as sent in `oauth_timestamp`.
pub fn unix_timestamp(t: DateTime) -> i64 {
    t.timestamp()
}

/// Build a datetime from seconds since the unix epoch.
pub fn from_unix_timestamp(secs: i64) -> Result<DateTime> {
    Utc.timestamp_opt(secs, 0)
        .single()
        .ok_or_else(|| Error::unexpected(format!("unix timestamp {secs} is out of range")))
}

/// Parse time from RFC3339.
///
/// All of them are valid time:
///
/// - `2011-10-14T20:09:18Z`
/// - `2011-10-14T20:09:18+00:00`
pub fn parse_rfc3339(s: &str) -> Result<DateTime> {
    Ok(chrono::DateTime::parse_from_rfc3339(s)
        .map_err(|e| Error::unexpected(format!("invalid rfc3339 time {s:?}")).with_source(e))?
        .with_timezone(&Utc))
}

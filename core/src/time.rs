//! Time related utils.
//!
//! Signing only ever deals with UTC. Values carrying any other offset are
//! rejected instead of being converted silently.

use crate::{Error, Result};
use chrono::{FixedOffset, NaiveDateTime, Utc};

/// DateTime used by signers, always in UTC.
pub type DateTime = chrono::DateTime<Utc>;

/// Create a new DateTime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into date: `20220301`
pub fn format_date(t: DateTime) -> String {
    t.format("%Y%m%d").to_string()
}

/// Format time into ISO8601 basic format: `20220313T072004Z`
pub fn format_iso8601(t: DateTime) -> String {
    t.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Format time into RFC3339: `2022-03-13T07:20:04Z`
pub fn format_rfc3339(t: DateTime) -> String {
    t.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Parse time in ISO8601 basic format: `20220313T072004Z`.
///
/// The trailing `Z` is required.
pub fn parse_iso8601(s: &str) -> Result<DateTime> {
    let Some(naive) = s.strip_suffix('Z') else {
        return Err(Error::timestamp_invalid(format!(
            "timestamp {s} is not in UTC"
        )));
    };

    let t = NaiveDateTime::parse_from_str(naive, "%Y%m%dT%H%M%S").map_err(|e| {
        Error::timestamp_invalid(format!("failed to parse timestamp {s}")).with_source(e)
    })?;
    Ok(t.and_utc())
}

/// Parse time from RFC3339, only UTC values are accepted.
///
/// `2022-03-13T07:20:04Z` and `2022-03-13T07:20:04+00:00` are valid,
/// `2022-03-13T15:20:04+08:00` is not.
pub fn parse_rfc3339(s: &str) -> Result<DateTime> {
    let t = chrono::DateTime::parse_from_rfc3339(s).map_err(|e| {
        Error::timestamp_invalid(format!("failed to parse timestamp {s}")).with_source(e)
    })?;
    to_utc(t)
}

/// Convert a time with offset into UTC, failing if the offset is not zero.
pub fn to_utc(t: chrono::DateTime<FixedOffset>) -> Result<DateTime> {
    if t.offset().local_minus_utc() != 0 {
        return Err(Error::timestamp_invalid(format!(
            "timestamp {t} has offset {}, only UTC is allowed",
            t.offset()
        )));
    }

    Ok(t.with_timezone(&Utc))
}

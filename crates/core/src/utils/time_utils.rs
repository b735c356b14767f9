use chrono::{DateTime, NaiveDate, NaiveDateTime, SubsecRound, Utc};

use crate::constants::TIMESTAMP_FORMAT;
use crate::errors::Result;

/// Current UTC instant truncated to whole seconds.
///
/// Timestamps are persisted with second precision, so anything handed back to
/// a caller must already be truncated or a later read would disagree with it.
pub fn now_utc_seconds() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}

/// Formats an instant in the storage format (`yyyy-MM-dd HH:mm:ss`, UTC).
pub fn format_timestamp(instant: &DateTime<Utc>) -> String {
    instant.format(TIMESTAMP_FORMAT).to_string()
}

/// Parses a stored timestamp back into a UTC instant.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)?;
    Ok(naive.and_utc())
}

/// UTC calendar date of an instant.
pub fn utc_date(instant: &DateTime<Utc>) -> NaiveDate {
    instant.date_naive()
}

/// Today's date in UTC.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

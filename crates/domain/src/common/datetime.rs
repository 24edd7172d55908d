//! DateTime parsing and day-boundary utilities.
//!
//! All day arithmetic happens on UTC civil dates. A timestamp carrying an
//! offset is converted to UTC before its day is taken, so `2025-06-10T01:00:00+02:00`
//! belongs to the UTC day 2025-06-09.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};

use crate::error::DomainError;

/// Latest calendar year accepted from clients. Stored dates are RFC3339,
/// which only has room for four-digit years.
pub const MAX_YEAR: i32 = 9999;

/// Parses an RFC3339 timestamp string, returning an error if parsing fails.
///
/// # Examples
///
/// ```
/// use cinemax_domain::parse_datetime;
/// use chrono::Datelike;
///
/// let dt = parse_datetime("2024-01-15T10:30:00Z").unwrap();
/// assert_eq!(dt.year(), 2024);
/// ```
///
/// # Errors
///
/// Returns `chrono::ParseError` if the string is not valid RFC3339.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s).map(|dt| dt.with_timezone(&Utc))
}

/// Parses either an RFC3339 timestamp or a bare `YYYY-MM-DD` date.
///
/// A bare date denotes midnight of that UTC day. Signed or five-digit years
/// outside `0000..=9999` are rejected.
///
/// ```
/// use cinemax_domain::parse_day_or_datetime;
/// use chrono::Timelike;
///
/// let day = parse_day_or_datetime("2025-06-10").unwrap();
/// assert_eq!(day.hour(), 0);
/// assert!(parse_day_or_datetime("10/06/2025").is_err());
/// assert!(parse_day_or_datetime("+262142-12-31").is_err());
/// ```
pub fn parse_day_or_datetime(s: &str) -> Result<DateTime<Utc>, DomainError> {
    let trimmed = s.trim();
    let parsed = match parse_datetime(trimmed) {
        Ok(dt) => dt,
        Err(rfc_err) => NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .map(|date| date.and_time(NaiveTime::MIN).and_utc())
            .map_err(|_| DomainError::parse(rfc_err.to_string()))?,
    };
    if !(0..=MAX_YEAR).contains(&parsed.year()) {
        return Err(DomainError::parse(format!("Year out of range: {trimmed}")));
    }
    Ok(parsed)
}

/// First instant (00:00:00.000) of the UTC day containing `at`.
pub fn start_of_day(at: DateTime<Utc>) -> DateTime<Utc> {
    at.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Last millisecond (23:59:59.999) of the UTC day containing `at`.
///
/// Saturates at `DateTime::<Utc>::MAX_UTC`, which is later than the last
/// millisecond of the last representable day.
pub fn end_of_day(at: DateTime<Utc>) -> DateTime<Utc> {
    let length = Duration::days(1) - Duration::milliseconds(1);
    start_of_day(at)
        .checked_add_signed(length)
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

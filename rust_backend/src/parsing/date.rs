//! Added-date parsing with sentinel fallback.
//!
//! Raw added-dates arrive as day-abbreviated month-two-digit year strings
//! ("9-Sep-19"), occasionally with one stray leading space. Parsing is a
//! total function in two explicit steps: first map every raw string to a
//! tagged `Option<NaiveDate>`, then substitute the sentinel date for `None`.
//! Derived year/month/day columns are computed from the FINAL date value,
//! never from the raw string, so they cannot disagree with it.

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use crate::core::domain::SENTINEL_DATE;

/// Input format of the catalog's added-date strings, e.g. "9-Sep-19".
pub const ADDED_DATE_FORMAT: &str = "%d-%b-%y";

static UNIX_EPOCH: Lazy<NaiveDate> =
    Lazy::new(|| NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());

/// Parse one raw added-date string.
///
/// Strips exactly one leading space if present, then parses with
/// [`ADDED_DATE_FORMAT`]. Anything unparseable - including the imputed
/// sentinel string - maps to `None`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use nci_rust::parsing::date::parse_added_date;
///
/// let expected = NaiveDate::from_ymd_opt(2019, 9, 9);
/// assert_eq!(parse_added_date("9-Sep-19"), expected);
/// assert_eq!(parse_added_date(" 9-Sep-19"), expected);
/// assert_eq!(parse_added_date("not a date"), None);
/// ```
pub fn parse_added_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.strip_prefix(' ').unwrap_or(raw);
    NaiveDate::parse_from_str(trimmed, ADDED_DATE_FORMAT).ok()
}

/// Substitute the sentinel date for an unparseable added-date.
pub fn date_or_sentinel(parsed: Option<NaiveDate>) -> NaiveDate {
    parsed.unwrap_or(*SENTINEL_DATE)
}

/// Days since the Unix epoch, the physical representation of the polars
/// `Date` dtype. Negative for the sentinel date.
pub fn to_epoch_days(date: NaiveDate) -> i32 {
    (date - *UNIX_EPOCH).num_days() as i32
}

/// Inverse of [`to_epoch_days`].
pub fn from_epoch_days(days: i32) -> NaiveDate {
    *UNIX_EPOCH + chrono::Duration::days(i64::from(days))
}

//! Duration-string parsing.
//!
//! Raw durations arrive as a leading integer followed by a unit word,
//! singular or plural ("1 Season", "3 Seasons"). Only the leading integer
//! carries signal; the unit word is dropped.

/// Parse the leading integer of a unit-suffixed duration string.
///
/// Takes the substring before the first space and parses it as an integer.
/// Returns `None` for any other shape; the caller decides whether that is
/// fatal (the normalization stage fails the run with a parse error rather
/// than inventing a sentinel count).
///
/// # Examples
///
/// ```
/// use nci_rust::parsing::duration::parse_duration_count;
///
/// assert_eq!(parse_duration_count("3 Seasons"), Some(3));
/// assert_eq!(parse_duration_count("1 Season"), Some(1));
/// assert_eq!(parse_duration_count("Seasons"), None);
/// ```
pub fn parse_duration_count(raw: &str) -> Option<i32> {
    let lead = raw.split(' ').next().unwrap_or(raw);
    lead.parse::<i32>().ok()
}

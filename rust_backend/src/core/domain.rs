//! Domain models for cleaned catalog titles.
//!
//! This module provides the typed view of one cleaned catalog row together
//! with the sentinel values used throughout the pipeline to stand in for
//! absent or unparseable data.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;

/// Sentinel substituted for absent free-text values (director, cast,
/// country, and the imputed category label).
pub const UNKNOWN: &str = "Unknown";

/// Sentinel substituted for an absent rating ("not rated").
pub const NOT_RATED: &str = "NR";

/// Raw sentinel string imputed into the added-date column. Deliberately
/// unparseable by the added-date format so it falls through to
/// [`SENTINEL_DATE`].
pub const SENTINEL_DATE_STRING: &str = "1800-1-1";

/// Calendar date substituted wherever the added-date could not be parsed.
/// Lies outside any real release window, so consumers can recognize
/// never-properly-dated titles by year 1800.
pub static SENTINEL_DATE: Lazy<NaiveDate> =
    Lazy::new(|| NaiveDate::from_ymd_opt(1800, 1, 1).unwrap());

/// One cleaned catalog title with all pipeline invariants established.
///
/// A `CleanedTitle` is the typed counterpart of one row of the cleaned
/// `DataFrame`: every field is present (imputation totality), the added
/// date is a real calendar date (possibly the sentinel), the duration is a
/// parsed season count, and the derived features are consistent with the
/// normalized columns they came from.
///
/// # Fields
///
/// * `title` - Title of the show
/// * `director` - Director name, `"Unknown"` if the source had none
/// * `cast` - Cast list as free text, `"Unknown"` if absent
/// * `country` - Production country, `"Unknown"` if absent
/// * `date_added` - Date the title entered the catalog; sentinel 1800-01-01
///   when the source string was missing or unparseable
/// * `release_year` - Release year of the most recent season
/// * `rating` - Canonicalized maturity rating, `"NR"` if absent
/// * `duration` - Season count parsed from the raw duration string
/// * `categories` - Active category labels, in the batch's vocabulary order
/// * `first_release_year` - `release_year - duration`
/// * `time_first_release_to_netflix` - Years from first release to catalog
///   arrival; skewed for sentinel-dated titles
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use nci_rust::core::domain::CleanedTitle;
///
/// let title = CleanedTitle {
///     title: "Example Show".to_string(),
///     director: "Unknown".to_string(),
///     cast: "Unknown".to_string(),
///     country: "Unknown".to_string(),
///     date_added: NaiveDate::from_ymd_opt(2021, 9, 24).unwrap(),
///     release_year: 2021,
///     rating: "TV-MA".to_string(),
///     duration: 2,
///     categories: vec!["Dramas".to_string()],
///     first_release_year: 2019,
///     time_first_release_to_netflix: 2,
/// };
///
/// assert!(!title.is_sentinel_dated());
/// assert_eq!(title.added_weekday(), 4); // 2021-09-24 is a Friday
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CleanedTitle {
    pub title: String,
    pub director: String,
    pub cast: String,
    pub country: String,
    pub date_added: NaiveDate,
    pub release_year: i32,
    pub rating: String,
    pub duration: i32,
    pub categories: Vec<String>,
    pub first_release_year: i32,
    pub time_first_release_to_netflix: i32,
}

impl CleanedTitle {
    /// Whether this title carries the never-properly-dated sentinel.
    ///
    /// # Examples
    ///
    /// ```
    /// use nci_rust::core::domain::{CleanedTitle, SENTINEL_DATE};
    /// # use chrono::NaiveDate;
    /// # let mut title = CleanedTitle {
    /// #     title: String::new(), director: String::new(), cast: String::new(),
    /// #     country: String::new(), date_added: *SENTINEL_DATE, release_year: 2020,
    /// #     rating: String::new(), duration: 1, categories: vec![],
    /// #     first_release_year: 2019, time_first_release_to_netflix: -219,
    /// # };
    /// assert!(title.is_sentinel_dated());
    /// title.date_added = NaiveDate::from_ymd_opt(2020, 1, 15).unwrap();
    /// assert!(!title.is_sentinel_dated());
    /// ```
    pub fn is_sentinel_dated(&self) -> bool {
        self.date_added == *SENTINEL_DATE
    }

    /// Day of week the title was added, Monday = 0 through Sunday = 6.
    pub fn added_weekday(&self) -> u32 {
        self.date_added.weekday().num_days_from_monday()
    }

    /// Year component of the added date.
    pub fn added_year(&self) -> i32 {
        self.date_added.year()
    }

    /// Number of active category labels on this title.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Whether the title carries the given category label.
    ///
    /// Labels are compared in their column-name form, i.e. with whitespace
    /// removed, because that is the only form the cleaned record set keeps.
    pub fn has_category(&self, label: &str) -> bool {
        self.categories.iter().any(|c| c == label)
    }
}

//! Cleaned-batch validation with error and warning reporting.
//!
//! The validator is the structured counterpart of eyeballing the cleaned
//! table: it re-checks the pipeline's invariants (no absent values in the
//! required columns, derived columns present) and reports data-quality
//! observations (sentinel-dated rows, implausible release gaps) that are
//! legitimate in the output but worth surfacing to consumers.

use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::domain::UNKNOWN;

/// Columns every cleaned record must carry a non-absent value for.
const REQUIRED_COLUMNS: [&str; 6] = [
    "director",
    "cast",
    "country",
    "date_added",
    "rating",
    "duration",
];

/// Derived columns the pipeline must have appended.
const DERIVED_COLUMNS: [&str; 6] = [
    "date_added_year",
    "date_added_month",
    "date_added_day",
    "date_added_weekday",
    "first_release_year",
    "time_first_release_to_netflix",
];

/// Validation outcome with categorized issues and batch statistics.
///
/// Errors make `is_valid` false and mean the batch violates a pipeline
/// invariant; warnings are informational.
///
/// # Examples
///
/// ```
/// use nci_rust::preprocessing::validator::ValidationResult;
///
/// let mut result = ValidationResult::new();
/// assert!(result.is_valid);
///
/// result.add_error("director column has absent values".to_string());
/// assert!(!result.is_valid);
/// assert_eq!(result.errors.len(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub stats: ValidationStats,
}

/// Batch statistics computed during validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationStats {
    pub total_titles: usize,
    pub sentinel_dated: usize,
    pub unknown_director: usize,
    pub unknown_cast: usize,
    pub unknown_country: usize,
    pub category_columns: usize,
    pub negative_release_gaps: usize,
}

impl ValidationResult {
    /// New result: valid, no issues, zeroed statistics.
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            stats: ValidationStats::default(),
        }
    }

    /// Record an invariant violation and mark the result invalid.
    pub fn add_error(&mut self, error: String) {
        self.is_valid = false;
        self.errors.push(error);
    }

    /// Record an informational observation.
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator over cleaned catalog DataFrames.
pub struct CatalogValidator;

impl CatalogValidator {
    /// Validate a cleaned batch.
    ///
    /// `label_column` is the pre-expansion name of the multi-valued column;
    /// it determines which boolean columns count as category columns.
    pub fn validate_dataframe(df: &DataFrame, label_column: &str) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.stats.total_titles = df.height();

        for column in REQUIRED_COLUMNS {
            match df.column(column) {
                Ok(values) => {
                    let nulls = values.null_count();
                    if nulls > 0 {
                        result.add_error(format!(
                            "column '{}' has {} absent value(s) after imputation",
                            column, nulls
                        ));
                    }
                }
                Err(_) => result.add_error(format!("required column '{}' is missing", column)),
            }
        }
        for column in DERIVED_COLUMNS {
            if df.column(column).is_err() {
                result.add_error(format!("derived column '{}' is missing", column));
            }
        }

        let label_prefix = format!("{label_column}_");
        result.stats.category_columns = df
            .get_column_names()
            .iter()
            .filter(|name| name.as_str().starts_with(&label_prefix))
            .count();
        if result.stats.category_columns == 0 {
            result.add_error(format!(
                "no '{}' category columns found; was the batch expanded?",
                label_prefix
            ));
        }

        result.stats.unknown_director = count_equal_str(df, "director", UNKNOWN);
        result.stats.unknown_cast = count_equal_str(df, "cast", UNKNOWN);
        result.stats.unknown_country = count_equal_str(df, "country", UNKNOWN);

        result.stats.sentinel_dated = count_equal_i32(df, "date_added_year", 1800);
        if result.stats.sentinel_dated > 0 {
            result.add_warning(format!(
                "{} title(s) carry the year-1800 never-dated sentinel",
                result.stats.sentinel_dated
            ));
        }

        result.stats.negative_release_gaps = count_negative_i32(df, "time_first_release_to_netflix");
        if result.stats.negative_release_gaps > 0 {
            result.add_warning(format!(
                "{} title(s) have a negative release-to-catalog gap",
                result.stats.negative_release_gaps
            ));
        }

        result
    }
}

fn count_equal_str(df: &DataFrame, column: &str, expected: &str) -> usize {
    match df.column(column).and_then(|c| Ok(c.str()?.clone())) {
        Ok(values) => (0..values.len())
            .filter(|&i| values.get(i) == Some(expected))
            .count(),
        Err(_) => 0,
    }
}

fn count_equal_i32(df: &DataFrame, column: &str, expected: i32) -> usize {
    match df.column(column).and_then(|c| Ok(c.i32()?.clone())) {
        Ok(values) => (0..values.len())
            .filter(|&i| values.get(i) == Some(expected))
            .count(),
        Err(_) => 0,
    }
}

fn count_negative_i32(df: &DataFrame, column: &str) -> usize {
    match df.column(column).and_then(|c| Ok(c.i32()?.clone())) {
        Ok(values) => (0..values.len())
            .filter(|&i| values.get(i).map(|v| v < 0).unwrap_or(false))
            .count(),
        Err(_) => 0,
    }
}

//! Missing-value imputation.
//!
//! Absent values are replaced per-column with a configured default before
//! any type coercion runs, so later stages never see a null in the columns
//! they normalize. Imputation is idempotent: a second pass over already
//! imputed data changes nothing.

use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::domain::{NOT_RATED, SENTINEL_DATE_STRING, UNKNOWN};
use crate::core::error::CatalogError;

/// Per-column default values applied to absent cells.
///
/// Backed by a `BTreeMap` so the fill order - and with it logging and error
/// reporting - is deterministic across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImputePolicy {
    pub defaults: BTreeMap<String, String>,
}

impl ImputePolicy {
    /// Empty policy; fills nothing.
    pub fn new() -> Self {
        Self {
            defaults: BTreeMap::new(),
        }
    }

    /// The catalog policy: descriptive free-text columns default to
    /// "Unknown", the added-date to the unparseable sentinel string, and
    /// the rating to "NR".
    pub fn catalog_defaults() -> Self {
        let mut policy = Self::new();
        for column in ["director", "cast", "country"] {
            policy
                .defaults
                .insert(column.to_string(), UNKNOWN.to_string());
        }
        policy
            .defaults
            .insert("date_added".to_string(), SENTINEL_DATE_STRING.to_string());
        policy
            .defaults
            .insert("rating".to_string(), NOT_RATED.to_string());
        policy
    }

    /// Add or replace one column default.
    pub fn with_default(mut self, column: &str, value: &str) -> Self {
        self.defaults.insert(column.to_string(), value.to_string());
        self
    }
}

impl Default for ImputePolicy {
    fn default() -> Self {
        Self::catalog_defaults()
    }
}

/// Fill absent values in every column the policy names.
///
/// Columns not named by the policy pass through untouched. Naming a column
/// the batch does not have is a schema error.
pub fn impute_missing(df: DataFrame, policy: &ImputePolicy) -> Result<DataFrame, CatalogError> {
    let present: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut lazy_df = df.lazy();
    for (column, default) in &policy.defaults {
        if !present.contains(column) {
            return Err(CatalogError::schema(column.clone()));
        }
        lazy_df = lazy_df.with_column(col(column.as_str()).fill_null(lit(default.clone())));
    }

    Ok(lazy_df.collect()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_df() -> DataFrame {
        df!(
            "director" => &[Some("Jane Doe"), None, None],
            "cast" => &[None, Some("A, B"), None],
            "country" => &[Some("Spain"), None, Some("Japan")],
            "date_added" => &[Some("9-Sep-19"), None, Some(" 23-Nov-20")],
            "rating" => &[Some("TV-MA"), None, Some("TV-14")],
            "duration" => &["1 Season", "3 Seasons", "2 Seasons"],
        )
        .unwrap()
    }

    #[test]
    fn test_named_columns_are_filled() {
        let df = impute_missing(sample_df(), &ImputePolicy::catalog_defaults()).unwrap();

        let directors = df.column("director").unwrap().str().unwrap();
        assert_eq!(directors.get(1), Some(UNKNOWN));
        let dates = df.column("date_added").unwrap().str().unwrap();
        assert_eq!(dates.get(1), Some(SENTINEL_DATE_STRING));
        let ratings = df.column("rating").unwrap().str().unwrap();
        assert_eq!(ratings.get(1), Some(NOT_RATED));
    }

    #[test]
    fn test_present_values_are_untouched() {
        let df = impute_missing(sample_df(), &ImputePolicy::catalog_defaults()).unwrap();

        let directors = df.column("director").unwrap().str().unwrap();
        assert_eq!(directors.get(0), Some("Jane Doe"));
        let dates = df.column("date_added").unwrap().str().unwrap();
        assert_eq!(dates.get(2), Some(" 23-Nov-20"));
    }

    #[test]
    fn test_unnamed_columns_pass_through() {
        let df = impute_missing(sample_df(), &ImputePolicy::catalog_defaults()).unwrap();
        let durations = df.column("duration").unwrap().str().unwrap();
        assert_eq!(durations.get(0), Some("1 Season"));
    }

    #[test]
    fn test_imputation_totality() {
        let df = impute_missing(sample_df(), &ImputePolicy::catalog_defaults()).unwrap();
        for column in ["director", "cast", "country", "date_added", "rating"] {
            assert_eq!(df.column(column).unwrap().null_count(), 0, "{column}");
        }
    }

    #[test]
    fn test_imputation_is_idempotent() {
        let policy = ImputePolicy::catalog_defaults();
        let once = impute_missing(sample_df(), &policy).unwrap();
        let twice = impute_missing(once.clone(), &policy).unwrap();
        assert!(once.equals(&twice));
    }

    #[test]
    fn test_policy_naming_missing_column_is_schema_error() {
        let policy = ImputePolicy::new().with_default("synopsis", UNKNOWN);
        let result = impute_missing(sample_df(), &policy);

        assert!(matches!(
            result,
            Err(CatalogError::Schema { column }) if column == "synopsis"
        ));
    }
}

//! Feature derivation over the normalized record set.
//!
//! Pure, per-record, total functions: the weekday the title entered the
//! catalog, the first-season release year, and the gap between first
//! release and catalog arrival. Values are not clamped; sentinel-dated
//! records produce the documented year-1800 skew and degenerate inputs can
//! produce implausible years. Consumers filter on the sentinel year.

use chrono::Datelike;
use polars::prelude::*;

use crate::core::domain::SENTINEL_DATE;
use crate::core::error::CatalogError;
use crate::parsing::date;

/// Column name of the first-release-year feature.
pub const FIRST_RELEASE_YEAR: &str = "first_release_year";

/// Column name of the release-to-catalog gap feature.
pub const TIME_FIRST_RELEASE_TO_NETFLIX: &str = "time_first_release_to_netflix";

/// Append the derived feature columns.
///
/// * `<date_column>_weekday` - day of week of the added date, Monday = 0
/// * `first_release_year` - `release_year - duration`
/// * `time_first_release_to_netflix` - `date_added_year - first_release_year`
pub fn derive_features(
    mut df: DataFrame,
    date_column: &str,
    release_year_column: &str,
    duration_column: &str,
) -> Result<DataFrame, CatalogError> {
    let height = df.height();
    let mut weekdays: Vec<i32> = Vec::with_capacity(height);
    let mut first_release_years: Vec<Option<i32>> = Vec::with_capacity(height);
    let mut gaps: Vec<Option<i32>> = Vec::with_capacity(height);

    {
        let dates = df
            .column(date_column)
            .map_err(|_| CatalogError::schema(date_column))?
            .date()?;
        let release_years_col = df
            .column(release_year_column)
            .map_err(|_| CatalogError::schema(release_year_column))?
            .cast(&DataType::Int32)?;
        let release_years = release_years_col.i32()?;
        let durations_col = df
            .column(duration_column)
            .map_err(|_| CatalogError::schema(duration_column))?
            .cast(&DataType::Int32)?;
        let durations = durations_col.i32()?;

        for i in 0..height {
            let added = dates
                .phys
                .get(i)
                .map(date::from_epoch_days)
                .unwrap_or(*SENTINEL_DATE);
            weekdays.push(added.weekday().num_days_from_monday() as i32);

            let first_release = match (release_years.get(i), durations.get(i)) {
                (Some(year), Some(count)) => Some(year - count),
                _ => None,
            };
            first_release_years.push(first_release);
            gaps.push(first_release.map(|year| added.year() - year));
        }
    }

    df.with_column(Column::new(
        format!("{date_column}_weekday").into(),
        weekdays,
    ))?;
    df.with_column(Column::new(FIRST_RELEASE_YEAR.into(), first_release_years))?;
    df.with_column(Column::new(TIME_FIRST_RELEASE_TO_NETFLIX.into(), gaps))?;
    Ok(df)
}

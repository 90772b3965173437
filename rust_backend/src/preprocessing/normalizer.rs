//! Type normalization for the duration and added-date columns.
//!
//! Both normalizations follow the same two-step discipline: parse every raw
//! value to a tagged result first, substitute defaults second. For dates the
//! substitution is the sentinel date and the derived year/month/day columns
//! are computed from the substituted value, so they can never disagree with
//! it. For durations there is no sentinel policy; a value without a leading
//! integer fails the run.

use chrono::Datelike;
use polars::prelude::*;

use crate::core::error::CatalogError;
use crate::parsing::{date, duration};

/// Replace the unit-suffixed duration column with its integer count.
///
/// "3 Seasons" becomes 3, "1 Season" becomes 1. A missing or malformed
/// value aborts the run with a parse error naming the column and value.
pub fn normalize_duration(mut df: DataFrame, column: &str) -> Result<DataFrame, CatalogError> {
    let counts: Vec<i32> = {
        let values = df
            .column(column)
            .map_err(|_| CatalogError::schema(column))?
            .str()?;
        let mut counts = Vec::with_capacity(values.len());
        for i in 0..values.len() {
            let raw = values
                .get(i)
                .ok_or_else(|| CatalogError::parse(column, "<missing>"))?;
            let count = duration::parse_duration_count(raw)
                .ok_or_else(|| CatalogError::parse(column, raw))?;
            counts.push(count);
        }
        counts
    };
    df.with_column(Column::new(column.into(), counts))?;
    Ok(df)
}

/// Replace the free-text added-date column with a typed date and append
/// its year/month/day components.
///
/// Unparseable strings (the imputed sentinel included) become the sentinel
/// date, and the component columns are derived from the final date value.
/// Total: no input that reached this stage can fail it.
pub fn normalize_date_added(mut df: DataFrame, column: &str) -> Result<DataFrame, CatalogError> {
    let dates: Vec<chrono::NaiveDate> = {
        let values = df
            .column(column)
            .map_err(|_| CatalogError::schema(column))?
            .str()?;
        (0..values.len())
            .map(|i| date::date_or_sentinel(values.get(i).and_then(date::parse_added_date)))
            .collect()
    };

    let days: Vec<i32> = dates.iter().map(|d| date::to_epoch_days(*d)).collect();
    let years: Vec<i32> = dates.iter().map(|d| d.year()).collect();
    let months: Vec<i32> = dates.iter().map(|d| d.month() as i32).collect();
    let days_of_month: Vec<i32> = dates.iter().map(|d| d.day() as i32).collect();

    df.with_column(
        Int32Chunked::from_vec(column.into(), days)
            .into_date()
            .into_series(),
    )?;
    df.with_column(Column::new(format!("{column}_year").into(), years))?;
    df.with_column(Column::new(format!("{column}_month").into(), months))?;
    df.with_column(Column::new(format!("{column}_day").into(), days_of_month))?;
    Ok(df)
}

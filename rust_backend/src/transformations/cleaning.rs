use polars::prelude::*;
use std::collections::BTreeMap;

use crate::core::error::CatalogError;

/// Remove the named columns from a DataFrame.
///
/// Naming a column the batch does not have is a schema error; projection is
/// meant to be exact, not best-effort.
pub fn drop_columns(df: DataFrame, columns: &[String]) -> Result<DataFrame, CatalogError> {
    let mut df = df;
    for column in columns {
        df = df
            .drop(column)
            .map_err(|_| CatalogError::schema(column.clone()))?;
    }
    Ok(df)
}

/// Remap string values of one column through a canonicalization table.
///
/// Values absent from the table pass through unchanged, nulls stay null.
/// Used to fold near-duplicate rating labels onto one representative.
pub fn remap_column_values(
    mut df: DataFrame,
    column: &str,
    remap: &BTreeMap<String, String>,
) -> Result<DataFrame, CatalogError> {
    let remapped: Vec<Option<String>> = {
        let values = df
            .column(column)
            .map_err(|_| CatalogError::schema(column))?
            .str()?;
        (0..values.len())
            .map(|i| {
                values
                    .get(i)
                    .map(|v| remap.get(v).cloned().unwrap_or_else(|| v.to_string()))
            })
            .collect()
    };
    df.with_column(Column::new(column.into(), remapped))?;
    Ok(df)
}

use polars::prelude::*;

use crate::core::error::CatalogError;

/// Keep only the rows whose kind column equals `kind`.
///
/// The catalog mixes several kinds of titles; the cleaning rules here are
/// written for exactly one of them, so the batch is restricted before any
/// other stage runs. Null kinds never match.
pub fn filter_by_kind(df: &DataFrame, column: &str, kind: &str) -> Result<DataFrame, CatalogError> {
    let mask = {
        let values = df
            .column(column)
            .map_err(|_| CatalogError::schema(column))?
            .str()?;
        let flags: Vec<bool> = (0..values.len()).map(|i| values.get(i) == Some(kind)).collect();
        Column::new("kind_mask".into(), flags)
    };
    Ok(df.filter(mask.bool()?)?)
}

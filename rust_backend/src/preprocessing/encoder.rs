//! Multi-label expansion of the category column.
//!
//! The category column holds a comma-space-separated list of labels per
//! record. Expansion is a whole-batch, two-phase operation: first a pure
//! reduction over every record builds the ordered label vocabulary, then a
//! pure per-record pass encodes each record as a boolean vector against
//! that fixed vocabulary. The output width is dataset-dependent.

use polars::prelude::*;
use std::collections::BTreeSet;

use crate::core::domain::UNKNOWN;
use crate::core::error::CatalogError;

/// Delimiter between labels within one cell.
pub const LABEL_DELIMITER: &str = ", ";

/// Labels of one cell; an absent cell imputes to the single "Unknown" label.
fn cell_labels(cell: Option<&str>) -> Vec<String> {
    match cell {
        Some(raw) => raw
            .split(LABEL_DELIMITER)
            .map(|label| label.to_string())
            .collect(),
        None => vec![UNKNOWN.to_string()],
    }
}

/// Phase one: the distinct labels observed across the whole batch,
/// lexicographically ordered.
pub fn label_vocabulary(df: &DataFrame, column: &str) -> Result<Vec<String>, CatalogError> {
    let values = df
        .column(column)
        .map_err(|_| CatalogError::schema(column))?
        .str()?;

    let mut labels = BTreeSet::new();
    for i in 0..values.len() {
        for label in cell_labels(values.get(i)) {
            labels.insert(label);
        }
    }
    Ok(labels.into_iter().collect())
}

/// Deterministic boolean-column name for one label: the source column name,
/// an underscore, and the label with all whitespace removed.
pub fn label_column_name(column: &str, label: &str) -> String {
    let squeezed: String = label.chars().filter(|c| !c.is_whitespace()).collect();
    format!("{column}_{squeezed}")
}

/// Phase two: replace the multi-valued column with one boolean column per
/// vocabulary label, in vocabulary order.
pub fn expand_labels(
    df: DataFrame,
    column: &str,
    vocabulary: &[String],
) -> Result<DataFrame, CatalogError> {
    let flag_columns: Vec<Vec<bool>> = {
        let values = df
            .column(column)
            .map_err(|_| CatalogError::schema(column))?
            .str()?;
        let row_labels: Vec<BTreeSet<String>> = (0..values.len())
            .map(|i| cell_labels(values.get(i)).into_iter().collect())
            .collect();
        vocabulary
            .iter()
            .map(|label| row_labels.iter().map(|set| set.contains(label)).collect())
            .collect()
    };

    let mut df = df.drop(column)?;
    for (label, flags) in vocabulary.iter().zip(flag_columns) {
        df.with_column(Column::new(label_column_name(column, label).into(), flags))?;
    }
    Ok(df)
}

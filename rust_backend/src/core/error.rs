//! Typed errors for the cleaning pipeline.
//!
//! Every stage failure is fatal to the run: the orchestrator aborts on the
//! first error and no partial output is exposed. `Schema` covers references
//! to columns that do not exist in the batch; `Parse` covers values that
//! failed their lossy-tolerant format after all documented fallbacks.

use polars::prelude::PolarsError;

/// Error type for catalog cleaning operations
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("column '{column}' not found in the record set")]
    Schema { column: String },

    #[error("could not parse {column} value '{value}'")]
    Parse { column: String, value: String },

    #[error(transparent)]
    Polars(#[from] PolarsError),
}

impl CatalogError {
    /// Schema error for a missing column reference.
    pub fn schema(column: impl Into<String>) -> Self {
        CatalogError::Schema {
            column: column.into(),
        }
    }

    /// Parse error for a value that failed its expected format.
    pub fn parse(column: impl Into<String>, value: impl Into<String>) -> Self {
        CatalogError::Parse {
            column: column.into(),
            value: value.into(),
        }
    }
}

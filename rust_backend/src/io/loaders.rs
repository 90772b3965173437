use anyhow::{Context, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

use crate::parsing::catalog_csv;

/// Result of loading a raw catalog
#[derive(Debug)]
pub struct CatalogLoadResult {
    pub dataframe: DataFrame,
    pub num_titles: usize,
}

impl CatalogLoadResult {
    pub fn new(dataframe: DataFrame) -> Self {
        let num_titles = dataframe.height();
        Self {
            dataframe,
            num_titles,
        }
    }
}

/// Loader for raw catalog CSV files
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a raw catalog from a CSV file.
    pub fn load_from_csv(csv_path: &Path) -> Result<CatalogLoadResult> {
        let df = catalog_csv::parse_catalog_csv(csv_path)
            .with_context(|| format!("Failed to load catalog from {}", csv_path.display()))?;

        Ok(CatalogLoadResult::new(df))
    }
}

/// Write a cleaned batch to a CSV file.
///
/// Booleans serialize as the literal pair `true`/`false` and dates as ISO
/// `YYYY-MM-DD`, so re-ingesting the output never confuses a false flag
/// with an absent value.
pub fn save_cleaned_csv(df: &mut DataFrame, csv_path: &Path) -> Result<()> {
    let mut file = File::create(csv_path)
        .with_context(|| format!("Failed to create output file {}", csv_path.display()))?;

    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .context("Failed to write cleaned catalog CSV")?;

    Ok(())
}

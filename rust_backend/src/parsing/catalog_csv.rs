use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;

use crate::core::domain::CleanedTitle;
use crate::parsing::date;

/// Parse a raw catalog CSV file into a Polars DataFrame.
///
/// Decoding is lossy-UTF-8 so Latin-1 bytes in cast and title text do not
/// abort the load. Columns polars infers too loosely are cast back to their
/// expected types afterwards.
pub fn parse_catalog_csv(csv_path: &Path) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_parse_options(CsvParseOptions::default().with_encoding(CsvEncoding::LossyUtf8))
        .try_into_reader_with_file_path(Some(csv_path.into()))?
        .finish()
        .context("Failed to parse catalog CSV into DataFrame")?;

    // Get existing column names
    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut lazy_df = df.lazy();

    // release_year is inferred as i64; year arithmetic downstream is Int32
    if column_names.contains(&"release_year".to_string()) {
        lazy_df = lazy_df.with_column(col("release_year").cast(DataType::Int32));
    }

    // show_id is an opaque identifier; some exports make it look numeric
    if column_names.contains(&"show_id".to_string()) {
        lazy_df = lazy_df.with_column(col("show_id").cast(DataType::String));
    }

    let df = lazy_df
        .collect()
        .context("Failed to cast catalog columns to expected types")?;

    Ok(df)
}

/// Convert a cleaned DataFrame to typed [`CleanedTitle`] records.
///
/// `label_column` is the name the multi-valued column had before expansion;
/// every boolean column prefixed with it is read back as a category flag.
/// Only meaningful on a frame the pipeline has fully processed - raw frames
/// are missing the normalized and derived columns this reads.
pub fn dataframe_to_titles(df: &DataFrame, label_column: &str) -> Result<Vec<CleanedTitle>> {
    let height = df.height();
    let label_prefix = format!("{label_column}_");

    let titles = df.column("title")?.str()?;
    let directors = df.column("director")?.str()?;
    let casts = df.column("cast")?.str()?;
    let countries = df.column("country")?.str()?;
    let dates = df.column("date_added")?.date()?;
    let release_years = df.column("release_year")?.i32()?;
    let ratings = df.column("rating")?.str()?;
    let durations = df.column("duration")?.i32()?;
    let first_release_years = df.column("first_release_year")?.i32()?;
    let gaps = df.column("time_first_release_to_netflix")?.i32()?;

    // Category flags, in frame order (which is the vocabulary order)
    let label_names: Vec<String> = df
        .get_column_names()
        .iter()
        .filter(|name| name.as_str().starts_with(&label_prefix))
        .map(|name| name.to_string())
        .collect();
    let mut category_flags = Vec::with_capacity(label_names.len());
    for name in &label_names {
        let label = name[label_prefix.len()..].to_string();
        category_flags.push((label, df.column(name)?.bool()?));
    }

    let mut records = Vec::with_capacity(height);
    for i in 0..height {
        let categories: Vec<String> = category_flags
            .iter()
            .filter(|(_, flags)| flags.get(i).unwrap_or(false))
            .map(|(label, _)| label.clone())
            .collect();

        let record = CleanedTitle {
            title: titles
                .get(i)
                .with_context(|| format!("Missing title at row {}", i))?
                .to_string(),
            director: directors
                .get(i)
                .with_context(|| format!("Missing director at row {}", i))?
                .to_string(),
            cast: casts
                .get(i)
                .with_context(|| format!("Missing cast at row {}", i))?
                .to_string(),
            country: countries
                .get(i)
                .with_context(|| format!("Missing country at row {}", i))?
                .to_string(),
            date_added: dates
                .phys
                .get(i)
                .map(date::from_epoch_days)
                .with_context(|| format!("Missing date_added at row {}", i))?,
            release_year: release_years
                .get(i)
                .with_context(|| format!("Missing release_year at row {}", i))?,
            rating: ratings
                .get(i)
                .with_context(|| format!("Missing rating at row {}", i))?
                .to_string(),
            duration: durations
                .get(i)
                .with_context(|| format!("Missing duration at row {}", i))?,
            categories,
            first_release_year: first_release_years
                .get(i)
                .with_context(|| format!("Missing first_release_year at row {}", i))?,
            time_first_release_to_netflix: gaps
                .get(i)
                .with_context(|| format!("Missing time_first_release_to_netflix at row {}", i))?,
        };

        records.push(record);
    }

    Ok(records)
}

use anyhow::{Context, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::io::loaders::CatalogLoader;
use crate::preprocessing::validator::{CatalogValidator, ValidationResult};
use crate::preprocessing::{deriver, encoder, imputer, normalizer};
use crate::transformations::{cleaning, filtering};

/// Restriction of the batch to one kind of title before cleaning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KindFilter {
    pub column: String,
    pub value: String,
}

/// Configuration for one cleaning run.
///
/// The default configuration encodes the catalog policy: keep TV shows
/// only, drop the identifier and kind columns, impute descriptive columns
/// to "Unknown" and the rating to "NR", expand `listed_in`, canonicalize
/// the two stray rating labels, and drop the redundant TV-Shows category
/// flag a mono-kind batch always produces.
///
/// Loadable from TOML; fields left out of the file keep their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrepConfig {
    pub kind: Option<KindFilter>,
    pub drop_columns: Vec<String>,
    pub impute: imputer::ImputePolicy,
    pub duration_column: String,
    pub date_column: String,
    pub release_year_column: String,
    pub multi_label_column: String,
    pub rating_column: String,
    pub rating_remap: BTreeMap<String, String>,
    pub post_drop_columns: Vec<String>,
    pub validate: bool,
}

impl Default for PrepConfig {
    fn default() -> Self {
        let mut rating_remap = BTreeMap::new();
        rating_remap.insert("R".to_string(), "TV-MA".to_string());
        rating_remap.insert("TV-Y7-FV".to_string(), "TV-Y7".to_string());

        Self {
            kind: Some(KindFilter {
                column: "type".to_string(),
                value: "TV Show".to_string(),
            }),
            drop_columns: vec!["show_id".to_string(), "type".to_string()],
            impute: imputer::ImputePolicy::catalog_defaults(),
            duration_column: "duration".to_string(),
            date_column: "date_added".to_string(),
            release_year_column: "release_year".to_string(),
            multi_label_column: "listed_in".to_string(),
            rating_column: "rating".to_string(),
            rating_remap,
            post_drop_columns: vec!["listed_in_TVShows".to_string()],
            validate: true,
        }
    }
}

impl PrepConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).context("Failed to parse cleaning configuration")
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&raw)
    }
}

/// Result of one cleaning run.
#[derive(Debug)]
pub struct PrepResult {
    pub dataframe: DataFrame,
    pub validation: ValidationResult,
    /// Rows in the raw batch, before the kind filter.
    pub total_titles: usize,
    /// Rows that survived the kind filter and were cleaned.
    pub kept_titles: usize,
    /// Ordered category vocabulary observed in this batch.
    pub category_labels: Vec<String>,
}

/// Main cleaning pipeline
pub struct PrepPipeline {
    config: PrepConfig,
}

impl PrepPipeline {
    /// Create a pipeline with the default catalog configuration.
    pub fn new() -> Self {
        Self {
            config: PrepConfig::default(),
        }
    }

    /// Create a pipeline with custom configuration.
    pub fn with_config(config: PrepConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PrepConfig {
        &self.config
    }

    /// Clean a raw catalog CSV file.
    pub fn process(&self, catalog_path: &Path) -> Result<PrepResult> {
        let loaded = CatalogLoader::load_from_csv(catalog_path)?;
        self.process_dataframe(loaded.dataframe)
    }

    /// Clean an already-loaded raw batch.
    ///
    /// Stages run in a fixed dependency order; the first failing stage
    /// aborts the run and no partial output is exposed.
    pub fn process_dataframe(&self, df: DataFrame) -> Result<PrepResult> {
        let total_titles = df.height();

        // Stage 1: restrict to one kind of title
        let mut df = match &self.config.kind {
            Some(kind) => filtering::filter_by_kind(&df, &kind.column, &kind.value)
                .context("Kind filter failed")?,
            None => df,
        };
        let kept_titles = df.height();
        log::info!("kind filter kept {} of {} titles", kept_titles, total_titles);

        // Stage 2: project away non-informative columns
        df = cleaning::drop_columns(df, &self.config.drop_columns)
            .context("Schema projection failed")?;

        // Stage 3: impute absent values
        df = imputer::impute_missing(df, &self.config.impute)
            .context("Missing-value imputation failed")?;

        // Stage 4: normalize loose text columns into typed columns
        df = normalizer::normalize_duration(df, &self.config.duration_column)
            .context("Duration normalization failed")?;
        df = normalizer::normalize_date_added(df, &self.config.date_column)
            .context("Added-date normalization failed")?;

        // Stage 5: expand the multi-valued column, whole batch at a time
        let category_labels = encoder::label_vocabulary(&df, &self.config.multi_label_column)
            .context("Category vocabulary computation failed")?;
        log::info!("expanding {} distinct category labels", category_labels.len());
        df = encoder::expand_labels(df, &self.config.multi_label_column, &category_labels)
            .context("Multi-label expansion failed")?;

        // Stage 6: derive features from the normalized columns
        df = deriver::derive_features(
            df,
            &self.config.date_column,
            &self.config.release_year_column,
            &self.config.duration_column,
        )
        .context("Feature derivation failed")?;

        // Stage 7: post-hoc cleanup
        df = cleaning::remap_column_values(df, &self.config.rating_column, &self.config.rating_remap)
            .context("Rating canonicalization failed")?;
        for column in &self.config.post_drop_columns {
            let present = df
                .get_column_names()
                .iter()
                .any(|name| name.as_str() == column);
            if present {
                df = df
                    .drop(column)
                    .with_context(|| format!("Post-hoc drop of '{}' failed", column))?;
            } else {
                // The one-hot width is batch-dependent; a configured label
                // may simply not occur in this batch.
                log::warn!("post-hoc drop skipped: column '{}' not in this batch", column);
            }
        }

        // Stage 8: validate the cleaned batch
        let validation = if self.config.validate {
            CatalogValidator::validate_dataframe(&df, &self.config.multi_label_column)
        } else {
            ValidationResult::new()
        };

        Ok(PrepResult {
            dataframe: df,
            validation,
            total_titles,
            kept_titles,
            category_labels,
        })
    }
}

impl Default for PrepPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to clean a catalog CSV with the default policy.
pub fn clean_catalog(catalog_path: &Path, validate: bool) -> Result<PrepResult> {
    let config = PrepConfig {
        validate,
        ..PrepConfig::default()
    };
    let pipeline = PrepPipeline::with_config(config);
    pipeline.process(catalog_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_batch() -> DataFrame {
        df!(
            "show_id" => &["s1", "s2", "s3", "s4"],
            "type" => &["TV Show", "TV Show", "Movie", "TV Show"],
            "title" => &["Alpha", "Beta", "Film", "Gamma"],
            "director" => &[Some("Jane Doe"), None, Some("Someone"), None],
            "cast" => &[Some("A, B"), Some("C"), None, None],
            "country" => &[Some("Spain"), None, Some("France"), Some("Japan")],
            "date_added" => &[Some("9-Sep-19"), Some(" 23-Nov-20"), Some("1-Jan-21"), None],
            "release_year" => &[2019i32, 2020, 2021, 2021],
            "rating" => &[Some("R"), Some("TV-14"), Some("PG-13"), None],
            "duration" => &["3 Seasons", "1 Season", "90 min", "2 Seasons"],
            "listed_in" => &[
                Some("Dramas, TV Mysteries"),
                Some("Kids' TV"),
                Some("Comedies"),
                None,
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_default_run_end_to_end() {
        let pipeline = PrepPipeline::new();
        let result = pipeline.process_dataframe(raw_batch()).unwrap();

        assert_eq!(result.total_titles, 4);
        assert_eq!(result.kept_titles, 3);
        assert_eq!(result.dataframe.height(), 3);
        assert!(result.validation.is_valid, "{:?}", result.validation.errors);

        // Movie-only categories never enter the vocabulary.
        assert_eq!(
            result.category_labels,
            vec![
                "Dramas".to_string(),
                "Kids' TV".to_string(),
                "TV Mysteries".to_string(),
                "Unknown".to_string(),
            ]
        );

        // Projected columns are gone.
        let names: Vec<String> = result
            .dataframe
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert!(!names.contains(&"show_id".to_string()));
        assert!(!names.contains(&"type".to_string()));
        assert!(!names.contains(&"listed_in".to_string()));
    }

    #[test]
    fn test_rating_canonicalization_and_imputation() {
        let pipeline = PrepPipeline::new();
        let result = pipeline.process_dataframe(raw_batch()).unwrap();

        let ratings = result.dataframe.column("rating").unwrap().str().unwrap();
        assert_eq!(ratings.get(0), Some("TV-MA")); // was "R"
        assert_eq!(ratings.get(1), Some("TV-14")); // untouched
        assert_eq!(ratings.get(2), Some("NR")); // was absent
    }

    #[test]
    fn test_sentinel_dated_row_flows_through() {
        let pipeline = PrepPipeline::new();
        let result = pipeline.process_dataframe(raw_batch()).unwrap();

        let years = result
            .dataframe
            .column("date_added_year")
            .unwrap()
            .i32()
            .unwrap();
        assert_eq!(years.get(2), Some(1800)); // the undated Gamma row
        assert_eq!(result.validation.stats.sentinel_dated, 1);
        assert!(!result.validation.warnings.is_empty());
    }

    #[test]
    fn test_malformed_duration_aborts_the_run() {
        let mut config = PrepConfig::default();
        config.kind = None;
        config.drop_columns = vec![];
        let pipeline = PrepPipeline::with_config(config);

        let df = df!(
            "title" => &["Broken"],
            "director" => &[Some("X")],
            "cast" => &[Some("Y")],
            "country" => &[Some("Z")],
            "date_added" => &[Some("9-Sep-19")],
            "release_year" => &[2019i32],
            "rating" => &[Some("TV-MA")],
            "duration" => &["Seasons"],
            "listed_in" => &[Some("Dramas")],
        )
        .unwrap();

        let result = pipeline.process_dataframe(df);
        assert!(result.is_err());
        let message = format!("{:#}", result.err().unwrap());
        assert!(message.contains("Duration normalization failed"), "{message}");
    }

    #[test]
    fn test_post_drop_removes_redundant_category_column() {
        let mut config = PrepConfig::default();
        config.post_drop_columns = vec!["listed_in_Dramas".to_string()];
        let pipeline = PrepPipeline::with_config(config);

        let result = pipeline.process_dataframe(raw_batch()).unwrap();
        let names: Vec<String> = result
            .dataframe
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert!(!names.contains(&"listed_in_Dramas".to_string()));
        // The vocabulary still records the label; only the column is gone.
        assert!(result.category_labels.contains(&"Dramas".to_string()));
    }

    #[test]
    fn test_post_drop_of_absent_column_is_skipped() {
        // Default config post-drops listed_in_TVShows, which this synthetic
        // batch never produces; the run must still succeed.
        let pipeline = PrepPipeline::new();
        assert!(pipeline.process_dataframe(raw_batch()).is_ok());
    }

    #[test]
    fn test_config_from_toml_overrides_and_defaults() {
        let config = PrepConfig::from_toml_str(
            r#"
            validate = false
            post_drop_columns = []

            [[drop_columns]]
            "#,
        );
        // Malformed drop_columns shape must fail loudly.
        assert!(config.is_err());

        let config = PrepConfig::from_toml_str(
            r#"
            validate = false
            post_drop_columns = []
            "#,
        )
        .unwrap();
        assert!(!config.validate);
        assert!(config.post_drop_columns.is_empty());
        // Untouched fields keep their defaults.
        assert_eq!(config.multi_label_column, "listed_in");
        assert_eq!(config.rating_remap.get("R"), Some(&"TV-MA".to_string()));
    }
}

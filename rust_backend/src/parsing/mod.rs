//! Parsers for raw catalog value formats.
//!
//! This module holds the scalar parsers the type-normalization stage is
//! built on, plus the CSV bridge between raw files, DataFrames and typed
//! [`CleanedTitle`](crate::core::domain::CleanedTitle) records.
//!
//! # Parsers
//!
//! - [`duration`]: unit-suffixed duration strings ("3 Seasons")
//! - [`date`]: added-date strings with sentinel fallback
//! - [`catalog_csv`]: catalog CSV files and DataFrame/record conversion

pub mod catalog_csv;
pub mod date;
pub mod duration;

#[cfg(test)]
mod catalog_csv_tests;

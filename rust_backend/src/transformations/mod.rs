//! Record-set transformation utilities.
//!
//! This module provides the column-level operations the pipeline composes:
//! schema projection, value canonicalization, and batch filtering.
//!
//! # Modules
//!
//! - [`cleaning`]: drop columns, remap near-duplicate values
//! - [`filtering`]: restrict a batch to a single title kind

pub mod cleaning;
pub mod filtering;

pub use cleaning::{drop_columns, remap_column_values};
pub use filtering::filter_by_kind;

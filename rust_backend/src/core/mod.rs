//! Core domain models for catalog cleaning.
//!
//! This module defines the typed representation of a cleaned catalog row,
//! the sentinel values the pipeline substitutes for absent data, and the
//! crate's error type.

pub mod domain;
pub mod error;

//! NCI Rust backend - catalog cleaning and feature engineering for
//! streaming-title analytics.
//!
//! The crate turns a raw, loosely-typed title catalog into a fully-typed,
//! imputed, one-hot-expanded and feature-augmented record set. The heart of
//! the crate is [`preprocessing::pipeline::PrepPipeline`], which threads a
//! polars `DataFrame` through a fixed sequence of cleaning stages; the
//! surrounding modules hold the individual stage implementations, scalar
//! parsers, and thin CSV collaborators.

pub mod core;
pub mod io;
pub mod parsing;
pub mod preprocessing;
pub mod transformations;

pub mod deriver;
pub mod encoder;
pub mod imputer;
pub mod normalizer;
pub mod pipeline;
pub mod validator;

pub use imputer::ImputePolicy;
pub use pipeline::{clean_catalog, PrepConfig, PrepPipeline, PrepResult};
pub use validator::{CatalogValidator, ValidationResult, ValidationStats};

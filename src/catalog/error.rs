use thiserror::Error;
use crate::domain::Category;

/// Errors raised while building or loading a scenario catalog.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("Catalog has no scenarios")]
    Empty,
    #[error("Unknown category code: {0}")]
    UnknownCategory(i32),
    #[error("Scenario {0} has an empty product pool")]
    EmptyProductPool(Category),
    #[error("Scenario {category} has an invalid price range {min}..={max}")]
    InvalidPriceRange { category: Category, min: f64, max: f64 },
    #[error("Scenario {category} has an invalid quantity range {min}..={max}")]
    InvalidQuantityRange { category: Category, min: u32, max: u32 },
    #[error("Scenario {0} has zero weight")]
    ZeroWeight(Category),
    #[error("Failed to read catalog file {path}: {reason}")]
    Io { path: String, reason: String },
    #[error("Failed to parse catalog file {path}: {reason}")]
    Parse { path: String, reason: String },
}

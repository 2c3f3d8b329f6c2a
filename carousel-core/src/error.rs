use thiserror::Error;

/// Errors raised while loading an item catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid item catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate item id {0}")]
    DuplicateId(u32),
}

/// Errors raised while loading or validating a carousel configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid carousel config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be a finite, non-negative number (got {value})")]
    OutOfRange { field: &'static str, value: f64 },
}

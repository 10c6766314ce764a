use thiserror::Error;
use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::stats::StatsError;
use crate::transport::TransportError;

/// Top-level error for the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Stats(#[from] StatsError),
}

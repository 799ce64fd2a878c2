//! Catalog service errors.

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum CatalogServiceError {
    #[error("catalog item not found")]
    NotFound,

    #[error("invalid catalog item: {0}")]
    InvalidData(String),

    #[error("store error")]
    Store(#[from] StoreError),
}

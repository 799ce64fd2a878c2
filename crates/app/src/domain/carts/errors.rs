//! Cart service errors.

use dbesto::SnapshotError;
use thiserror::Error;

use crate::domain::catalog::CatalogServiceError;

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("catalog item not found")]
    NotFound,

    #[error("cart is empty")]
    EmptyCart,

    #[error("order submission failed: {0}")]
    SubmissionFailed(String),

    #[error("catalog lookup failed")]
    Lookup(#[source] CatalogServiceError),
}

impl From<CatalogServiceError> for CartsServiceError {
    fn from(error: CatalogServiceError) -> Self {
        match error {
            CatalogServiceError::NotFound => Self::NotFound,
            other => Self::Lookup(other),
        }
    }
}

impl From<SnapshotError> for CartsServiceError {
    fn from(error: SnapshotError) -> Self {
        match error {
            SnapshotError::EmptyCart => Self::EmptyCart,
        }
    }
}

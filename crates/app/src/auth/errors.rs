//! Auth service errors.

use thiserror::Error;

use crate::{
    auth::{Capability, Role},
    store::StoreError,
};

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("not signed in")]
    Unauthenticated,

    #[error("{role} accounts cannot {capability}")]
    Forbidden { role: Role, capability: Capability },

    #[error("store error")]
    Store(#[source] StoreError),
}

impl From<StoreError> for AuthServiceError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Unauthorized => Self::Unauthenticated,
            other => Self::Store(other),
        }
    }
}

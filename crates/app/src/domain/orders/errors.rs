//! Orders service errors.

use dbesto::OrderStatus;
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("order not found")]
    NotFound,

    #[error("order is already {0}")]
    AlreadySettled(OrderStatus),

    #[error("store error")]
    Store(#[from] StoreError),
}

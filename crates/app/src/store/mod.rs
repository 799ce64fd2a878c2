//! Remote document store access.

mod client;
mod errors;
pub(crate) mod lenient;

pub use client::{StoreClient, StoreConfig};
pub use errors::StoreError;

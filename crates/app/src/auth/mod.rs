//! Authentication and role capabilities.

mod errors;
mod models;
mod records;
mod service;

pub use errors::*;
pub use models::*;
pub use service::*;

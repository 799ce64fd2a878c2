//! Domain services.

pub mod carts;
pub mod catalog;
pub mod orders;

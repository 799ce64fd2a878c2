//! Storefront services backed by the remote document store.

pub mod auth;
pub mod config;
pub mod context;
pub mod domain;
pub mod observability;
pub mod store;

#[cfg(test)]
mod test;

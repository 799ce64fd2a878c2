//! Dbesto
//!
//! Domain core for the Dbesto storefront: the menu catalog, the customer's
//! in-progress cart, and the immutable order snapshots submitted from it.

pub mod cart;
pub mod catalog;
pub mod orders;
pub mod uuids;

pub use cart::{Cart, CartLine, QuantityUpdate};
pub use catalog::{CatalogItem, CatalogItemUuid};
pub use orders::{
    CustomerRef, OrderLine, OrderRecord, OrderSnapshot, OrderStatus, OrderUuid, SnapshotError,
    UnknownStatus,
};

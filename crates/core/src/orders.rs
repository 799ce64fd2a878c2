//! Orders

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::Timestamp;
use thiserror::Error;

use crate::{cart::Cart, catalog::CatalogItemUuid, uuids::TypedUuid};

/// Errors raised while freezing a cart into an order.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnapshotError {
    /// There is nothing to order.
    #[error("cart is empty")]
    EmptyCart,
}

/// A single frozen order line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    /// Catalog item the line was taken from.
    pub item: CatalogItemUuid,

    /// Title at the time of capture.
    pub title: String,

    /// Unit price at the time of capture.
    pub price: u64,

    /// Ordered quantity.
    pub quantity: u32,

    /// `price * quantity`.
    pub line_total: u64,
}

/// Immutable capture of a cart, ready to be submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSnapshot {
    /// Captured lines in cart order.
    pub lines: Vec<OrderLine>,

    /// Sum of every line total.
    pub total_amount: u64,

    /// When the snapshot was taken.
    pub submitted_at: Timestamp,
}

impl OrderSnapshot {
    /// Freeze the current contents of `cart`.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::EmptyCart`] when the cart has no lines.
    pub fn capture(cart: &Cart, submitted_at: Timestamp) -> Result<Self, SnapshotError> {
        if cart.is_empty() {
            return Err(SnapshotError::EmptyCart);
        }

        let lines = cart
            .lines()
            .into_iter()
            .map(|line| OrderLine {
                item: line.item().uuid,
                title: line.item().title.clone(),
                price: line.item().price,
                quantity: line.quantity(),
                line_total: line.line_total(),
            })
            .collect();

        Ok(Self {
            lines,
            total_amount: cart.total(),
            submitted_at,
        })
    }

    /// Total number of units across all lines.
    pub fn units(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }
}

/// Order UUID
pub type OrderUuid = TypedUuid<OrderRecord>;

/// Lifecycle state of a submitted order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    /// Waiting to be prepared.
    #[default]
    Pending,

    /// Handed over to the customer.
    Completed,

    /// Abandoned before completion.
    Cancelled,
}

impl OrderStatus {
    /// Wire name of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Whether the order is still open.
    pub fn is_pending(self) -> bool {
        self == Self::Pending
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Unrecognised order status.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown order status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            "cancelled" | "canceled" => Ok(Self::Cancelled),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

/// Who placed an order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerRef {
    /// Identity assigned by the auth provider.
    pub uid: String,

    /// Sign-in email.
    pub email: String,
}

/// A submitted order as held by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord {
    /// Store identifier.
    pub uuid: OrderUuid,

    /// What was ordered.
    pub snapshot: OrderSnapshot,

    /// Current lifecycle state.
    pub status: OrderStatus,

    /// Customer who submitted it.
    pub customer: CustomerRef,
}

/// Sort orders so the most recently submitted come first.
pub fn newest_first(orders: &mut [OrderRecord]) {
    orders.sort_by(|a, b| b.snapshot.submitted_at.cmp(&a.snapshot.submitted_at));
}

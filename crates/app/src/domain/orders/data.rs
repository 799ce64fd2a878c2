//! Order Data

use dbesto::{CustomerRef, OrderRecord, OrderSnapshot, OrderStatus, OrderUuid};

/// New Order Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub uuid: OrderUuid,
    pub snapshot: OrderSnapshot,
    pub customer: CustomerRef,
}

impl NewOrder {
    /// The record as it looks right after creation.
    pub fn into_record(self) -> OrderRecord {
        OrderRecord {
            uuid: self.uuid,
            snapshot: self.snapshot,
            status: OrderStatus::Pending,
            customer: self.customer,
        }
    }
}

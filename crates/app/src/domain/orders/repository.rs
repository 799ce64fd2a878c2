//! Orders Repository

use dbesto::{OrderRecord, OrderStatus, OrderUuid};
use serde_json::Value;

use crate::{
    domain::orders::records::{OrderDocument, StatusPatch, order_records},
    store::{StoreClient, StoreError},
};

const ORDERS: &str = "orders";

#[derive(Debug, Clone)]
pub(crate) struct HttpOrdersRepository {
    client: StoreClient,
}

impl HttpOrdersRepository {
    #[must_use]
    pub(crate) fn new(client: StoreClient) -> Self {
        Self { client }
    }

    pub(crate) async fn create_order(&self, order: &OrderRecord) -> Result<(), StoreError> {
        self.client.post(ORDERS, &OrderDocument::from(order)).await
    }

    pub(crate) async fn list_orders(&self) -> Result<Vec<OrderRecord>, StoreError> {
        let documents: Vec<Value> = self.client.get(ORDERS).await?.unwrap_or_default();

        Ok(order_records(documents))
    }

    pub(crate) async fn update_status(
        &self,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<bool, StoreError> {
        self.client
            .patch(
                &format!("{ORDERS}/{order}"),
                &StatusPatch {
                    status: status.as_str(),
                },
            )
            .await
    }
}

//! Orders service.

use async_trait::async_trait;
use dbesto::{OrderRecord, OrderStatus, OrderUuid, orders::newest_first};
use mockall::automock;
use tracing::info;

use crate::{
    domain::orders::{
        data::NewOrder, errors::OrdersServiceError, repository::HttpOrdersRepository,
    },
    store::StoreClient,
};

#[derive(Debug, Clone)]
pub struct HttpOrdersService {
    repository: HttpOrdersRepository,
}

impl HttpOrdersService {
    #[must_use]
    pub fn new(client: StoreClient) -> Self {
        Self {
            repository: HttpOrdersRepository::new(client),
        }
    }
}

#[async_trait]
impl OrdersService for HttpOrdersService {
    #[tracing::instrument(
        name = "orders.service.create_order",
        skip(self, order),
        fields(
            order_uuid = %order.uuid,
            line_count = order.snapshot.lines.len(),
            total_amount = order.snapshot.total_amount
        ),
        err
    )]
    async fn create_order(&self, order: NewOrder) -> Result<OrderRecord, OrdersServiceError> {
        let record = order.into_record();

        self.repository.create_order(&record).await?;

        info!(order_uuid = %record.uuid, "created order");

        Ok(record)
    }

    #[tracing::instrument(name = "orders.service.list_orders", skip(self), err)]
    async fn list_orders(&self) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        Ok(self.repository.list_orders().await?)
    }

    #[tracing::instrument(
        name = "orders.service.update_status",
        skip(self),
        fields(order_uuid = %order, status = %status),
        err
    )]
    async fn update_status(
        &self,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<(), OrdersServiceError> {
        if !self.repository.update_status(order, status).await? {
            return Err(OrdersServiceError::NotFound);
        }

        info!(order_uuid = %order, %status, "updated order status");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Submits a new order.
    async fn create_order(&self, order: NewOrder) -> Result<OrderRecord, OrdersServiceError>;

    /// Retrieves every submitted order.
    async fn list_orders(&self) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// Overwrites the status of an order.
    async fn update_status(
        &self,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<(), OrdersServiceError>;
}

/// Orders for the employee view, most recent first.
///
/// # Errors
///
/// Propagates store failures.
pub async fn order_queue(
    orders: &dyn OrdersService,
    pending_only: bool,
) -> Result<Vec<OrderRecord>, OrdersServiceError> {
    let mut records = orders.list_orders().await?;

    if pending_only {
        records.retain(|record| record.status.is_pending());
    }

    newest_first(&mut records);

    Ok(records)
}

/// Move a pending order to `status`.
///
/// # Errors
///
/// Returns [`OrdersServiceError::NotFound`] for an unknown order and
/// [`OrdersServiceError::AlreadySettled`] when it is no longer pending.
pub async fn settle_order(
    orders: &dyn OrdersService,
    order: OrderUuid,
    status: OrderStatus,
) -> Result<OrderRecord, OrdersServiceError> {
    let mut record = orders
        .list_orders()
        .await?
        .into_iter()
        .find(|record| record.uuid == order)
        .ok_or(OrdersServiceError::NotFound)?;

    if !record.status.is_pending() {
        return Err(OrdersServiceError::AlreadySettled(record.status));
    }

    orders.update_status(order, status).await?;

    record.status = status;

    Ok(record)
}

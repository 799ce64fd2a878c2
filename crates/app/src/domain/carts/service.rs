//! Session cart.

use std::{fmt::Display, future::Future, sync::Arc};

use dbesto::{
    Cart, CartLine, CatalogItemUuid, CustomerRef, OrderRecord, OrderSnapshot, OrderUuid,
    QuantityUpdate,
};
use jiff::Timestamp;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::domain::{
    carts::errors::CartsServiceError,
    catalog::CatalogService,
    orders::{OrdersService, data::NewOrder},
};

/// The active user's cart, resolving items through the catalog.
///
/// Writes are applied one at a time under a lock that is never held across
/// a store call.
pub struct CartSession {
    catalog: Arc<dyn CatalogService>,
    cart: Mutex<Cart>,
}

impl CartSession {
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogService>) -> Self {
        Self::restore(catalog, Cart::new())
    }

    /// Continue editing a previously built cart.
    #[must_use]
    pub fn restore(catalog: Arc<dyn CatalogService>, cart: Cart) -> Self {
        Self {
            catalog,
            cart: Mutex::new(cart),
        }
    }

    /// Resolve `item` and add one of it to the cart.
    ///
    /// Returns the item's quantity after the merge.
    ///
    /// # Errors
    ///
    /// Returns [`CartsServiceError::NotFound`] when the catalog has no such
    /// item; the cart is left untouched on any error.
    #[tracing::instrument(name = "carts.session.add_item", skip(self), fields(item_uuid = %item), err)]
    pub async fn add_item(&self, item: CatalogItemUuid) -> Result<u32, CartsServiceError> {
        let resolved = self.catalog.get_item(item).await?;

        let quantity = self.cart.lock().await.add(resolved);

        debug!(item_uuid = %item, quantity, "added item to cart");

        Ok(quantity)
    }

    /// Replace the quantity of a line; zero removes it.
    pub async fn set_quantity(&self, item: CatalogItemUuid, quantity: u32) -> QuantityUpdate {
        let outcome = self.cart.lock().await.set_quantity(item, quantity);

        debug!(item_uuid = %item, quantity, ?outcome, "set cart quantity");

        outcome
    }

    /// Copy of the current lines.
    pub async fn current_lines(&self) -> Vec<CartLine> {
        self.cart.lock().await.lines()
    }

    /// Current cart total.
    pub async fn total(&self) -> u64 {
        self.cart.lock().await.total()
    }

    /// Remove every line.
    pub async fn clear(&self) {
        self.cart.lock().await.clear();
    }

    /// Submit the cart as a new order for `customer`.
    ///
    /// # Errors
    ///
    /// See [`build_and_submit`].
    pub async fn submit(
        &self,
        orders: &dyn OrdersService,
        customer: CustomerRef,
    ) -> Result<OrderRecord, CartsServiceError> {
        build_and_submit(self, |snapshot| async move {
            orders
                .create_order(NewOrder {
                    uuid: OrderUuid::new(),
                    snapshot,
                    customer,
                })
                .await
        })
        .await
    }
}

/// Freeze the session's cart, hand the snapshot to `submit`, and settle the
/// cart once `submit` reports success.
///
/// The cart lock is released while `submit` runs. On success exactly the
/// captured quantities are removed; on failure the cart is left as it is.
///
/// # Errors
///
/// Returns [`CartsServiceError::EmptyCart`] without calling `submit` when
/// there is nothing to order, and [`CartsServiceError::SubmissionFailed`]
/// when `submit` fails.
pub async fn build_and_submit<F, Fut, T, E>(
    session: &CartSession,
    submit: F,
) -> Result<T, CartsServiceError>
where
    F: FnOnce(OrderSnapshot) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let snapshot = OrderSnapshot::capture(&*session.cart.lock().await, Timestamp::now())?;

    info!(
        line_count = snapshot.lines.len(),
        total_amount = snapshot.total_amount,
        "submitting order"
    );

    let submitted = match submit(snapshot.clone()).await {
        Ok(submitted) => submitted,
        Err(error) => {
            warn!(%error, "order submission failed; cart left intact");

            return Err(CartsServiceError::SubmissionFailed(error.to_string()));
        }
    };

    session.cart.lock().await.settle(&snapshot);

    Ok(submitted)
}

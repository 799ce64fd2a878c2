//! App Context

use std::sync::Arc;

use crate::{
    auth::{AuthService, HttpAuthService},
    domain::{
        carts::CartSession,
        catalog::{CatalogService, HttpCatalogService},
        orders::{HttpOrdersService, OrdersService},
    },
    store::{StoreClient, StoreConfig},
};

#[derive(Clone)]
pub struct AppContext {
    pub catalog: Arc<dyn CatalogService>,
    pub orders: Arc<dyn OrdersService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Wire every service to the same document store.
    #[must_use]
    pub fn from_store_config(config: StoreConfig) -> Self {
        let client = StoreClient::new(config);

        Self {
            catalog: Arc::new(HttpCatalogService::new(client.clone())),
            orders: Arc::new(HttpOrdersService::new(client.clone())),
            auth: Arc::new(HttpAuthService::new(client)),
        }
    }

    /// A fresh, empty cart for the signed-in customer.
    #[must_use]
    pub fn cart_session(&self) -> CartSession {
        CartSession::new(self.catalog.clone())
    }
}

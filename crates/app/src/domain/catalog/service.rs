//! Catalog service.

use async_trait::async_trait;
use dbesto::{CatalogItem, CatalogItemUuid};
use mockall::automock;
use tracing::info;

use crate::{
    domain::catalog::{errors::CatalogServiceError, repository::HttpCatalogRepository},
    store::StoreClient,
};

#[derive(Debug, Clone)]
pub struct HttpCatalogService {
    repository: HttpCatalogRepository,
}

impl HttpCatalogService {
    #[must_use]
    pub fn new(client: StoreClient) -> Self {
        Self {
            repository: HttpCatalogRepository::new(client),
        }
    }
}

#[async_trait]
impl CatalogService for HttpCatalogService {
    #[tracing::instrument(name = "catalog.service.list_items", skip(self), err)]
    async fn list_items(&self) -> Result<Vec<CatalogItem>, CatalogServiceError> {
        Ok(self.repository.list_items().await?)
    }

    #[tracing::instrument(
        name = "catalog.service.get_item",
        skip(self),
        fields(item_uuid = %item),
        err
    )]
    async fn get_item(&self, item: CatalogItemUuid) -> Result<CatalogItem, CatalogServiceError> {
        self.repository
            .get_item(item)
            .await?
            .ok_or(CatalogServiceError::NotFound)
    }

    #[tracing::instrument(
        name = "catalog.service.save_item",
        skip(self, item),
        fields(item_uuid = %item.uuid),
        err
    )]
    async fn save_item(&self, item: CatalogItem) -> Result<CatalogItem, CatalogServiceError> {
        self.repository.put_item(&item).await?;

        info!(item_uuid = %item.uuid, price = item.price, "saved catalog item");

        Ok(item)
    }

    #[tracing::instrument(
        name = "catalog.service.delete_item",
        skip(self),
        fields(item_uuid = %item),
        err
    )]
    async fn delete_item(&self, item: CatalogItemUuid) -> Result<(), CatalogServiceError> {
        if !self.repository.delete_item(item).await? {
            return Err(CatalogServiceError::NotFound);
        }

        info!(item_uuid = %item, "deleted catalog item");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Retrieves every menu item.
    async fn list_items(&self) -> Result<Vec<CatalogItem>, CatalogServiceError>;

    /// Retrieve a single menu item.
    async fn get_item(&self, item: CatalogItemUuid) -> Result<CatalogItem, CatalogServiceError>;

    /// Creates the item, or replaces it when the identifier already exists.
    async fn save_item(&self, item: CatalogItem) -> Result<CatalogItem, CatalogServiceError>;

    /// Deletes the item with the given identifier.
    async fn delete_item(&self, item: CatalogItemUuid) -> Result<(), CatalogServiceError>;
}

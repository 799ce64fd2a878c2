//! Catalog Repository

use dbesto::{CatalogItem, CatalogItemUuid};
use serde_json::Value;

use crate::{
    domain::catalog::records::{MenuDocument, menu_item_at, menu_items},
    store::{StoreClient, StoreError},
};

const MENUS: &str = "menus";

#[derive(Debug, Clone)]
pub(crate) struct HttpCatalogRepository {
    client: StoreClient,
}

impl HttpCatalogRepository {
    #[must_use]
    pub(crate) fn new(client: StoreClient) -> Self {
        Self { client }
    }

    pub(crate) async fn list_items(&self) -> Result<Vec<CatalogItem>, StoreError> {
        let documents: Vec<Value> = self.client.get(MENUS).await?.unwrap_or_default();

        Ok(menu_items(documents))
    }

    pub(crate) async fn get_item(
        &self,
        item: CatalogItemUuid,
    ) -> Result<Option<CatalogItem>, StoreError> {
        let path = format!("{MENUS}/{item}");

        let Some(document) = self.client.get::<Value>(&path).await? else {
            return Ok(None);
        };

        menu_item_at(item, document)
            .map(Some)
            .map_err(|error| StoreError::UnexpectedResponse(format!("GET {path}: {error}")))
    }

    pub(crate) async fn put_item(&self, item: &CatalogItem) -> Result<(), StoreError> {
        self.client
            .put(&format!("{MENUS}/{}", item.uuid), &MenuDocument::from(item))
            .await
    }

    pub(crate) async fn delete_item(&self, item: CatalogItemUuid) -> Result<bool, StoreError> {
        self.client.delete(&format!("{MENUS}/{item}")).await
    }
}

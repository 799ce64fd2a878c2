//! Catalog Records

use dbesto::{CatalogItem, CatalogItemUuid};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;
use uuid::Uuid;

use crate::store::lenient;

/// Menu document as stored in the `menus` collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct MenuDocument {
    pub uuid: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: String,

    #[serde(deserialize_with = "lenient::amount")]
    pub price: u64,
}

impl MenuDocument {
    /// Documents without an identifier cannot be addressed and are dropped.
    pub(crate) fn into_item(self) -> Option<CatalogItem> {
        if self.uuid.is_nil() {
            return None;
        }

        Some(CatalogItem {
            uuid: CatalogItemUuid::from_uuid(self.uuid),
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            price: self.price,
        })
    }

    /// The document stored under `key`; the key is the item's identity
    /// whatever the body says.
    pub(crate) fn into_item_at(self, key: CatalogItemUuid) -> CatalogItem {
        CatalogItem {
            uuid: key,
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            price: self.price,
        }
    }
}

/// Read a `menus` listing one document at a time, skipping documents that
/// cannot be read or addressed.
pub(crate) fn menu_items(documents: Vec<Value>) -> Vec<CatalogItem> {
    documents
        .into_iter()
        .filter_map(|value| {
            let document = serde_json::from_value::<MenuDocument>(value)
                .inspect_err(|error| warn!(%error, "skipping unreadable menu document"))
                .ok()?;

            let title = document.title.clone();
            let item = document.into_item();

            if item.is_none() {
                warn!(%title, "skipping menu document without an id");
            }

            item
        })
        .collect()
}

/// Read the document stored under `menus/{key}`.
pub(crate) fn menu_item_at(
    key: CatalogItemUuid,
    document: Value,
) -> Result<CatalogItem, serde_json::Error> {
    Ok(serde_json::from_value::<MenuDocument>(document)?.into_item_at(key))
}

impl From<&CatalogItem> for MenuDocument {
    fn from(item: &CatalogItem) -> Self {
        Self {
            uuid: item.uuid.into_uuid(),
            title: item.title.clone(),
            description: item.description.clone(),
            image_url: item.image_url.clone(),
            price: item.price,
        }
    }
}

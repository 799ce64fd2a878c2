//! Catalog Data

use dbesto::{CatalogItem, CatalogItemUuid};

use crate::domain::catalog::errors::CatalogServiceError;

/// Owner-entered fields for a new menu item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCatalogItem {
    pub title: String,
    pub description: String,
    pub image_url: String,

    /// Raw price text as typed by the owner.
    pub price: String,
}

impl NewCatalogItem {
    /// Validate the form and assign it a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::InvalidData`] for a blank title or a
    /// price that is not a non-negative whole number.
    pub fn into_item(self) -> Result<CatalogItem, CatalogServiceError> {
        Ok(CatalogItem {
            uuid: CatalogItemUuid::new(),
            title: parse_title(&self.title)?,
            description: self.description.trim().to_string(),
            image_url: self.image_url.trim().to_string(),
            price: parse_price(&self.price)?,
        })
    }
}

/// Owner edits to an existing menu item; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogItemUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub price: Option<String>,
}

impl CatalogItemUpdate {
    /// Apply the edits on top of `item`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::InvalidData`] when an edited field fails
    /// the same checks as [`NewCatalogItem::into_item`].
    pub fn apply(self, item: CatalogItem) -> Result<CatalogItem, CatalogServiceError> {
        Ok(CatalogItem {
            uuid: item.uuid,
            title: match self.title {
                Some(title) => parse_title(&title)?,
                None => item.title,
            },
            description: self
                .description
                .map_or(item.description, |value| value.trim().to_string()),
            image_url: self
                .image_url
                .map_or(item.image_url, |value| value.trim().to_string()),
            price: match self.price {
                Some(price) => parse_price(&price)?,
                None => item.price,
            },
        })
    }
}

fn parse_title(title: &str) -> Result<String, CatalogServiceError> {
    let title = title.trim();

    if title.is_empty() {
        return Err(CatalogServiceError::InvalidData(
            "title cannot be empty".to_string(),
        ));
    }

    Ok(title.to_string())
}

fn parse_price(price: &str) -> Result<u64, CatalogServiceError> {
    price.trim().parse::<u64>().map_err(|error| {
        CatalogServiceError::InvalidData(format!("price {price:?} is not a whole amount: {error}"))
    })
}

//! Catalog

use crate::uuids::TypedUuid;

/// Catalog Item UUID
pub type CatalogItemUuid = TypedUuid<CatalogItem>;

/// A purchasable menu entry as fetched from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    /// Stable identifier, unique within the catalog.
    pub uuid: CatalogItemUuid,

    /// Display title.
    pub title: String,

    /// Longer description shown on the detail view.
    pub description: String,

    /// Image location, opaque to the core.
    pub image_url: String,

    /// Price in the smallest currency unit.
    pub price: u64,
}

/// Returns the items whose title contains `query`, ignoring case.
///
/// A blank query matches every item. Catalog order is preserved.
pub fn search<'a>(items: &'a [CatalogItem], query: &str) -> Vec<&'a CatalogItem> {
    let query = query.trim().to_lowercase();

    if query.is_empty() {
        return items.iter().collect();
    }

    items
        .iter()
        .filter(|item| item.title.to_lowercase().contains(&query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str) -> CatalogItem {
        CatalogItem {
            uuid: CatalogItemUuid::new(),
            title: title.to_string(),
            description: String::new(),
            image_url: String::new(),
            price: 1_000,
        }
    }

    #[test]
    fn search_ignores_case() {
        let items = [item("Iced Latte"), item("Espresso"), item("Hot LATTE")];

        let titles: Vec<_> = search(&items, "latte")
            .into_iter()
            .map(|item| item.title.as_str())
            .collect();

        assert_eq!(titles, ["Iced Latte", "Hot LATTE"]);
    }

    #[test]
    fn blank_query_returns_everything() {
        let items = [item("Iced Latte"), item("Espresso")];

        assert_eq!(search(&items, "   ").len(), 2);
    }

    #[test]
    fn no_match_returns_empty() {
        let items = [item("Espresso")];

        assert!(search(&items, "tea").is_empty());
    }
}

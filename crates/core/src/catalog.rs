//! Read-only menu catalog.
//!
//! The catalog is supplied by the surrounding application and never mutated
//! by the cart. Lookups and filters are linear scans; menus are small.

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::types::{Category, CategoryId, MenuItem, MenuItemId};

/// Category value that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

/// Errors that can occur when loading a [`Catalog`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog JSON could not be parsed.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two menu items share an identifier.
    #[error("duplicate menu item id: {0}")]
    DuplicateId(MenuItemId),
}

/// Menu filter parameters.
///
/// Both filters are optional and combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuQuery {
    /// Exact category id; `None` or `"all"` matches every category.
    pub category: Option<String>,
    /// Free-text search over name, description, and tags.
    pub search: Option<String>,
}

impl MenuQuery {
    /// Query for a single category.
    #[must_use]
    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            search: None,
        }
    }

    /// Query for a search term.
    #[must_use]
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            category: None,
            search: Some(term.into()),
        }
    }

    fn category_filter(&self) -> Option<&str> {
        self.category
            .as_deref()
            .filter(|category| !category.is_empty() && *category != ALL_CATEGORIES)
    }

    fn search_needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase)
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    categories: Vec<Category>,
    items: Vec<MenuItem>,
}

/// The set of purchasable menu items and their categories.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<MenuItem>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate item ids.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two items share an id.
    pub fn new(items: Vec<MenuItem>, categories: Vec<Category>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self { items, categories })
    }

    /// Parse a catalog from `{ "categories": [...], "items": [...] }`.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or contains duplicate ids.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.items, file.categories)
    }

    /// All items in catalog order.
    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// All categories in catalog order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up an item by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id.as_str() == id)
    }

    /// Look up a category by id.
    #[must_use]
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|category| category.id.as_str() == id)
    }

    /// Featured items in catalog order, at most `limit`.
    #[must_use]
    pub fn featured(&self, limit: usize) -> Vec<&MenuItem> {
        self.items
            .iter()
            .filter(|item| item.featured)
            .take(limit)
            .collect()
    }

    /// Items matching `query`, in catalog order.
    #[must_use]
    pub fn filter(&self, query: &MenuQuery) -> Vec<&MenuItem> {
        let category = query.category_filter();
        let needle = query.search_needle();

        self.items
            .iter()
            .filter(|item| category.is_none_or(|c| item.category.as_str() == c))
            .filter(|item| needle.as_deref().is_none_or(|n| item.matches_search(n)))
            .collect()
    }

    /// Other items in the same category as `id`, at most `limit`.
    #[must_use]
    pub fn related(&self, id: &str, limit: usize) -> Vec<&MenuItem> {
        let Some(item) = self.get(id) else {
            return Vec::new();
        };
        let category: &CategoryId = &item.category;

        self.items
            .iter()
            .filter(|other| other.category == *category && other.id.as_str() != id)
            .take(limit)
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{
        "categories": [
            { "id": "burgers", "name": "Burgers", "image": "burgers.jpg" },
            { "id": "pizza", "name": "Pizza", "image": "pizza.jpg" }
        ],
        "items": [
            {
                "id": "classic-burger", "name": "Classic Burger",
                "description": "Beef patty, cheddar, pickles", "price": 12.5,
                "image": "a.jpg", "category": "burgers", "tags": ["beef"],
                "featured": true, "prepTime": 15, "rating": 4.7, "reviews": 210
            },
            {
                "id": "veggie-burger", "name": "Garden Burger",
                "description": "Grilled halloumi", "price": 11,
                "image": "b.jpg", "category": "burgers", "tags": ["Vegetarian"],
                "featured": false, "discount": 10, "prepTime": 12, "rating": 4.4, "reviews": 98
            },
            {
                "id": "margherita", "name": "Margherita",
                "description": "Tomato, mozzarella, basil", "price": 14,
                "image": "c.jpg", "category": "pizza", "tags": ["vegetarian", "classic"],
                "featured": true, "prepTime": 20, "rating": 4.9, "reviews": 340
            }
        ]
    }"#;

    fn ids(items: &[&MenuItem]) -> Vec<String> {
        items.iter().map(|item| item.id.to_string()).collect()
    }

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        assert_eq!(catalog.items().len(), 3);
        assert_eq!(catalog.categories().len(), 2);
        assert_eq!(catalog.category("pizza").unwrap().name, "Pizza");
        assert!(catalog.get("margherita").is_some());
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        let mut items = catalog.items().to_vec();
        items.push(items[0].clone());
        assert!(matches!(
            Catalog::new(items, Vec::new()),
            Err(CatalogError::DuplicateId(id)) if id.as_str() == "classic-burger"
        ));
    }

    #[test]
    fn test_filter_by_category() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        assert_eq!(
            ids(&catalog.filter(&MenuQuery::category("burgers"))),
            vec!["classic-burger", "veggie-burger"]
        );
        assert_eq!(catalog.filter(&MenuQuery::category("all")).len(), 3);
        assert!(catalog.filter(&MenuQuery::category("desserts")).is_empty());
    }

    #[test]
    fn test_filter_by_search() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        // tag match, case-insensitive
        assert_eq!(
            ids(&catalog.filter(&MenuQuery::search("  VEGETARIAN "))),
            vec!["veggie-burger", "margherita"]
        );
        // description match
        assert_eq!(
            ids(&catalog.filter(&MenuQuery::search("halloumi"))),
            vec!["veggie-burger"]
        );
        // blank search is ignored
        assert_eq!(catalog.filter(&MenuQuery::search("   ")).len(), 3);
    }

    #[test]
    fn test_filter_combines_category_and_search() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        let query = MenuQuery {
            category: Some("pizza".to_string()),
            search: Some("vegetarian".to_string()),
        };
        assert_eq!(ids(&catalog.filter(&query)), vec!["margherita"]);
    }

    #[test]
    fn test_featured_and_related() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        assert_eq!(
            ids(&catalog.featured(4)),
            vec!["classic-burger", "margherita"]
        );
        assert_eq!(ids(&catalog.featured(1)), vec!["classic-burger"]);
        assert_eq!(
            ids(&catalog.related("classic-burger", 4)),
            vec!["veggie-burger"]
        );
        assert!(catalog.related("missing", 4).is_empty());
    }
}

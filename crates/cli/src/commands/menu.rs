//! Menu browsing commands.
//!
//! # Usage
//!
//! ```bash
//! tb-cli menu list --category pizza
//! tb-cli menu list --search vegetarian
//! tb-cli menu featured
//! tb-cli menu show margherita-pizza
//! tb-cli menu categories
//! ```

use tasty_bites_core::{Catalog, MenuItem, MenuQuery};
use tracing::info;

use super::CommandResult;

/// Items on the home page carousel.
pub const FEATURED_LIMIT: usize = 4;

/// Items listed under "you might also like".
const RELATED_LIMIT: usize = 3;

fn summary_line(item: &MenuItem) -> String {
    let price = item.effective_price();
    match item.discount {
        Some(discount) => format!(
            "{:<24} {:>8} (was {}, {discount})  [{}]",
            item.id, price, item.price, item.category
        ),
        None => format!("{:<24} {:>8}  [{}]", item.id, price, item.category),
    }
}

/// List items, optionally filtered by category and search text.
pub fn list(catalog: &Catalog, query: &MenuQuery) -> CommandResult {
    let items = catalog.filter(query);

    if items.is_empty() {
        info!("No items found. Try adjusting your search or filter.");
        return Ok(());
    }

    let heading = query
        .category
        .as_deref()
        .and_then(|id| catalog.category(id))
        .map_or("Our Menu", |category| category.name.as_str());
    info!("{heading} ({} items)", items.len());
    for item in items {
        info!("  {}", summary_line(item));
    }
    Ok(())
}

/// List featured items.
pub fn featured(catalog: &Catalog, limit: usize) -> CommandResult {
    for item in catalog.featured(limit) {
        info!("  {}", summary_line(item));
    }
    Ok(())
}

/// Show one item in detail.
pub fn show(catalog: &Catalog, id: &str) -> CommandResult {
    let item = catalog
        .get(id)
        .ok_or_else(|| format!("Menu item not found: {id}"))?;

    info!("{} ({})", item.name, item.id);
    info!("  {}", item.description);
    info!("  Price: {}", item.effective_price());
    if let Some(discount) = item.discount {
        info!("  Regular price: {} ({discount})", item.price);
    }
    info!(
        "  Rating: {} ({} reviews), ready in {} min",
        item.rating, item.reviews, item.prep_time
    );
    if !item.tags.is_empty() {
        info!("  Tags: {}", item.tags.join(", "));
    }

    let related = catalog.related(id, RELATED_LIMIT);
    if !related.is_empty() {
        info!("You might also like:");
        for other in related {
            info!("  {}", summary_line(other));
        }
    }
    Ok(())
}

/// List categories.
pub fn categories(catalog: &Catalog) -> CommandResult {
    for category in catalog.categories() {
        let count = catalog
            .filter(&MenuQuery::category(category.id.as_str()))
            .len();
        info!("  {:<12} {} ({count} items)", category.id, category.name);
    }
    Ok(())
}

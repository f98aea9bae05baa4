//! Subcommand implementations.
//!
//! Commands report through `tracing` at info level; run with the default
//! filter to see their output.

pub mod cart;
pub mod checkout;
pub mod menu;

use tasty_bites_cart::{CartStore, JsonFileStorage, Persisted};
use tasty_bites_core::Catalog;
use tracing::warn;

use crate::config::CliConfig;

/// Result type shared by all commands.
pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Menu shipped with the binary.
const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Load the configured catalog, or the bundled one.
///
/// # Errors
///
/// Returns an error if the catalog file cannot be read or parsed.
pub fn load_catalog(config: &CliConfig) -> Result<Catalog, Box<dyn std::error::Error>> {
    let catalog = match &config.catalog_path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .map_err(|e| format!("Failed to read catalog {}: {e}", path.display()))?;
            Catalog::from_json(&raw)?
        }
        None => Catalog::from_json(BUNDLED_CATALOG)?,
    };
    Ok(catalog)
}

/// Open the shopper's cart from the configured slot.
#[must_use]
pub fn open_store(config: &CliConfig) -> CartStore<JsonFileStorage> {
    CartStore::open(JsonFileStorage::new(&config.cart_path))
}

/// Surface a degraded write without failing the command.
fn report(persisted: &Persisted) {
    if let Some(warning) = persisted.warning() {
        warn!("{warning}; changes will be lost when this session ends");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_parses() {
        let catalog = Catalog::from_json(BUNDLED_CATALOG).unwrap();
        assert_eq!(catalog.categories().len(), 5);
        assert!(catalog.items().len() >= 10);
        for item in catalog.items() {
            assert!(
                catalog.category(item.category.as_str()).is_some(),
                "{} has unknown category {}",
                item.id,
                item.category
            );
        }
        assert_eq!(catalog.featured(4).len(), 4);
    }
}

//! Menu entries and cart line items.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::id::{CategoryId, MenuItemId};
use super::price::{Discount, Price};

/// A read-only catalog entry.
///
/// Field names serialize in camelCase (`prepTime`) so catalog files and
/// persisted carts share one JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    /// Unit price before any discount.
    pub price: Price,
    /// Image URL.
    pub image: String,
    pub category: CategoryId,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
    /// Preparation time in minutes.
    pub prep_time: u32,
    pub rating: Rating,
    /// Number of reviews behind `rating`.
    pub reviews: u32,
}

impl MenuItem {
    /// Unit price after the item's discount, if any.
    #[must_use]
    pub fn effective_price(&self) -> Price {
        self.price.discounted(self.discount)
    }

    /// Whether `needle` (already lowercased) occurs in the name, the
    /// description, or any tag, ignoring case.
    #[must_use]
    pub fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }
}

/// Errors that can occur when constructing a [`Rating`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RatingError {
    #[error("rating must be between 0 and 5 with at most 2 decimal places (got {0})")]
    Invalid(Decimal),
}

/// Average review score, 0 to 5 with at most two decimal places.
///
/// Serialized as a JSON number like [`Price`], under the same precision
/// limit so the value reloads unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Rating(Decimal);

impl Rating {
    pub const MAX: Decimal = Decimal::from_parts(5, 0, 0, false, 0);
    pub const MAX_SCALE: u32 = 2;

    /// # Errors
    ///
    /// Returns [`RatingError::Invalid`] if `value` is outside `0..=5` or has
    /// more than two significant decimal places.
    pub fn new(value: Decimal) -> Result<Self, RatingError> {
        if (value.is_sign_negative() && !value.is_zero())
            || value > Self::MAX
            || value.normalize().scale() > Self::MAX_SCALE
        {
            return Err(RatingError::Invalid(value));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0.normalize().to_string())
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value: Decimal = rust_decimal::serde::float::deserialize(deserializer)?;
        Self::new(value.round_dp(Self::MAX_SCALE)).map_err(serde::de::Error::custom)
    }
}

/// A menu category (e.g. burgers, pizza).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub image: String,
}

/// One catalog item plus a quantity, as tracked by the cart.
///
/// The item fields are a snapshot taken when the line was first added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(flatten)]
    pub item: MenuItem,
    pub quantity: u32,
}

impl LineItem {
    /// Create a line for `quantity` units of `item`.
    #[must_use]
    pub const fn new(item: MenuItem, quantity: u32) -> Self {
        Self { item, quantity }
    }

    /// The catalog identifier this line is keyed by.
    #[must_use]
    pub const fn id(&self) -> &MenuItemId {
        &self.item.id
    }

    /// Effective unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.item.effective_price() * self.quantity
    }
}

//! Type-safe price representation using decimal arithmetic.
//!
//! Prices and discounts are kept exact with [`Decimal`]; rounding to cents
//! only happens when a value is formatted for display.
//!
//! On the wire a price is a plain JSON number (`12.5`), matching the cart
//! slot written by earlier versions of the storefront. A [`Price`] is bounded
//! by [`Price::MAX`] and [`Price::MAX_SCALE`] so that every accepted value
//! survives the trip through an `f64`, and so that `price × u32::MAX` summed
//! over any realistic cart stays far below [`Decimal::MAX`].

use core::fmt;
use std::ops::Mul;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price cannot be negative (got {0})")]
    Negative(Decimal),

    /// The amount is above [`Price::MAX`].
    #[error("price cannot exceed 1000000 (got {0})")]
    TooLarge(Decimal),

    /// The amount has more than [`Price::MAX_SCALE`] decimal places.
    #[error("price cannot have more than 4 decimal places (got {0})")]
    TooPrecise(Decimal),
}

/// Errors that can occur when constructing a [`Discount`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DiscountError {
    /// The percentage is above 100.
    #[error("discount must be between 0 and 100 percent (got {0})")]
    OutOfRange(u8),
}

/// A non-negative unit price in the store currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Largest accepted unit price (1,000,000).
    pub const MAX: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

    /// Most decimal places a price may carry.
    pub const MAX_SCALE: u32 = 4;

    /// Create a new price.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `amount` is below zero,
    /// [`PriceError::TooLarge`] if it exceeds [`Price::MAX`], and
    /// [`PriceError::TooPrecise`] if it has more than [`Price::MAX_SCALE`]
    /// significant decimal places.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        if amount > Self::MAX {
            return Err(PriceError::TooLarge(amount));
        }
        if amount.normalize().scale() > Self::MAX_SCALE {
            return Err(PriceError::TooPrecise(amount));
        }
        Ok(Self(amount))
    }

    /// Create a price from a whole number of cents.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `cents` is below zero.
    pub fn from_cents(cents: i64) -> Result<Self, PriceError> {
        Self::new(Decimal::new(cents, 2))
    }

    /// The exact amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Effective unit price after applying an optional discount.
    #[must_use]
    pub fn discounted(self, discount: Option<Discount>) -> Self {
        match discount {
            Some(discount) => Self(discount.apply(self.0)),
            None => self,
        }
    }
}

// Bounded by `Price::MAX * u32::MAX`, roughly 4.3e15.
impl Mul<u32> for Price {
    type Output = Decimal;

    fn mul(self, quantity: u32) -> Decimal {
        self.0 * Decimal::from(quantity)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format_currency(self.0))
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

// Float noise beyond `MAX_SCALE` (e.g. `0.30000000000000004`) is rounded
// away before validation.
impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount: Decimal = rust_decimal::serde::float::deserialize(deserializer)?;
        Self::new(amount.round_dp(Self::MAX_SCALE)).map_err(serde::de::Error::custom)
    }
}

/// Format a monetary amount for display, e.g. `$12.50`.
#[must_use]
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${:.2}", rounded.abs())
    } else {
        format!("${:.2}", rounded.abs())
    }
}

/// A percentage discount between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Discount(u8);

impl Discount {
    /// Largest allowed percentage.
    pub const MAX_PERCENT: u8 = 100;

    /// Create a discount from a whole percentage.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::OutOfRange`] if `percent` exceeds 100.
    pub const fn new(percent: u8) -> Result<Self, DiscountError> {
        if percent > Self::MAX_PERCENT {
            return Err(DiscountError::OutOfRange(percent));
        }
        Ok(Self(percent))
    }

    /// The percentage taken off.
    #[must_use]
    pub const fn percent(&self) -> u8 {
        self.0
    }

    /// Apply the discount to an amount: `amount × (1 − percent/100)`.
    #[must_use]
    pub fn apply(&self, amount: Decimal) -> Decimal {
        amount * (Decimal::ONE_HUNDRED - Decimal::from(self.0)) / Decimal::ONE_HUNDRED
    }
}

impl TryFrom<u8> for Discount {
    type Error = DiscountError;

    fn try_from(percent: u8) -> Result<Self, Self::Error> {
        Self::new(percent)
    }
}

impl From<Discount> for u8 {
    fn from(discount: Discount) -> Self {
        discount.0
    }
}

impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}% off", self.0)
    }
}

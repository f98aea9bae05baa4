//! Core types for Tasty Bites.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod menu;
pub mod price;

pub use id::*;
pub use menu::{Category, LineItem, MenuItem, Rating, RatingError};
pub use price::{Discount, DiscountError, Price, PriceError, format_currency};

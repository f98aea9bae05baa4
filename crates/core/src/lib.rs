//! Tasty Bites Core - Shared types library.
//!
//! This crate provides common types used across all Tasty Bites components:
//! - `cart` - Cart store, persisted slot, and checkout simulation
//! - `cli` - Command-line front end for browsing the menu and ordering
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! storage, no clocks. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, prices, discounts, and menu entries
//! - [`catalog`] - Read-only menu catalog with lookup and filtering

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod types;

pub use catalog::{Catalog, CatalogError, MenuQuery};
pub use types::*;

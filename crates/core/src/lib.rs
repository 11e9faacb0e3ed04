//! Rocketshoes Core - Shared domain types.
//!
//! This crate provides the types the storefront is built from:
//! - catalog records as served by the catalog service, and their display form
//! - cart lines and the per-product quantity index derived from them
//! - type-safe product ids and currency-aware prices
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no async. Everything here is deterministic and cheap to test.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids and prices
//! - [`catalog`] - `CatalogRecord` and `DisplayRecord`
//! - [`cart`] - `CartLine` and `QuantityIndex`

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod types;

pub use cart::{CartLine, QuantityIndex};
pub use catalog::{CatalogRecord, DisplayRecord};
pub use types::*;

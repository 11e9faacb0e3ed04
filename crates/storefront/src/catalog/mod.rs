//! Catalog service access and the catalog-load pipeline.
//!
//! # Architecture
//!
//! - [`CatalogSource`] is the seam to the catalog service: one operation,
//!   fetch every product
//! - [`HttpCatalogClient`] implements it over `GET {CATALOG_API_URL}/products`
//!   with `reqwest`
//! - [`CatalogLoader`] fetches once, formats prices, publishes the display list
//!   and turns any failure into a single user notification
//!
//! The catalog is fetched on every page activation and never cached, so the
//! page always reflects the service.

mod client;
mod loader;

pub use client::HttpCatalogClient;
pub use loader::{CATALOG_LOAD_FAILED, CatalogLoader, LoadOutcome, ProductList};

use std::future::Future;

use rocketshoes_core::CatalogRecord;
use thiserror::Error;

/// Something that can hand out the full product catalog.
pub trait CatalogSource: Send + Sync {
    /// Fetch every catalog record.
    fn fetch_products(&self) -> impl Future<Output = Result<Vec<CatalogRecord>, CatalogError>> + Send;
}

/// Errors that can occur when fetching the catalog.
///
/// These only ever reach the logs: the loader collapses all of them into one
/// user-facing load failure.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed (connection, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Catalog service returned status {0}")]
    Status(u16),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A record decoded but violates the catalog contract.
    #[error("Invalid catalog record: {0}")]
    InvalidRecord(String),

    /// The products endpoint could not be derived from the base URL.
    #[error("Invalid catalog endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

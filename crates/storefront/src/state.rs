//! Application state shared across handlers.

use std::sync::Arc;

use crate::cart::InMemoryCart;
use crate::catalog::{CatalogError, CatalogLoader, HttpCatalogClient};
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// the catalog client, the cart, and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: HttpCatalogClient,
    cart: InMemoryCart,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog client cannot be built from the
    /// configured catalog URL.
    pub fn new(config: StorefrontConfig) -> Result<Self, CatalogError> {
        let catalog = HttpCatalogClient::new(&config.catalog)?;
        let cart = InMemoryCart::new(config.cart_max_lines);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                cart,
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog service client.
    #[must_use]
    pub fn catalog(&self) -> &HttpCatalogClient {
        &self.inner.catalog
    }

    /// Get a reference to the shopper's cart.
    #[must_use]
    pub fn cart(&self) -> &InMemoryCart {
        &self.inner.cart
    }

    /// A catalog loader formatting prices in the configured currency.
    #[must_use]
    pub fn catalog_loader(&self) -> CatalogLoader<HttpCatalogClient> {
        CatalogLoader::new(self.catalog().clone(), self.config().catalog.currency)
    }
}

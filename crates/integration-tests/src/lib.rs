//! Integration test harness for the Rocketshoes storefront.
//!
//! Every test runs two in-process servers on ephemeral ports: a stub catalog
//! service and the real storefront router pointed at it. Nothing external is
//! required.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p rocketshoes-integration-tests
//! ```

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use rocketshoes_core::CurrencyCode;
use rocketshoes_storefront::config::{CatalogConfig, StorefrontConfig};
use rocketshoes_storefront::routes;
use rocketshoes_storefront::state::AppState;
use url::Url;

/// Bind `router` to an ephemeral local port and serve it in the background.
///
/// # Panics
///
/// Panics if the listener cannot be bound.
pub async fn spawn(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no local address");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    addr
}

/// Configuration pointing the storefront at `catalog`.
///
/// # Panics
///
/// Panics if `catalog` does not form a valid URL.
#[must_use]
pub fn config_for(catalog: SocketAddr, currency: CurrencyCode) -> StorefrontConfig {
    StorefrontConfig {
        host: catalog.ip(),
        port: 0,
        catalog: CatalogConfig {
            api_url: Url::parse(&format!("http://{catalog}")).expect("Invalid catalog URL"),
            currency,
            timeout: Some(Duration::from_secs(5)),
        },
        cart_max_lines: 100,
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
        sentry_traces_sample_rate: 0.0,
    }
}

/// A running storefront backed by a stub catalog.
pub struct TestStorefront {
    pub base_url: String,
    pub client: reqwest::Client,
}

impl TestStorefront {
    /// Start a stub catalog from `catalog` and a storefront in front of it.
    ///
    /// # Panics
    ///
    /// Panics if either server cannot be started.
    pub async fn start(catalog: Router, currency: CurrencyCode) -> Self {
        let catalog_addr = spawn(catalog).await;
        let state = AppState::new(config_for(catalog_addr, currency))
            .expect("Failed to build storefront state");
        let storefront_addr = spawn(routes::app(state)).await;

        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: format!("http://{storefront_addr}"),
            client,
        }
    }

    /// GET a page and return its status and body.
    ///
    /// # Panics
    ///
    /// Panics if the request fails.
    pub async fn get(&self, path: &str) -> (reqwest::StatusCode, String) {
        let resp = self
            .client
            .get(format!("{}{path}", self.base_url))
            .send()
            .await
            .expect("Request failed");
        let status = resp.status();
        (status, resp.text().await.expect("Failed to read body"))
    }

    /// Submit the add-to-cart form for `product_id`.
    ///
    /// # Panics
    ///
    /// Panics if the request fails.
    pub async fn add_to_cart(&self, product_id: i64) -> reqwest::Response {
        let product_id = product_id.to_string();
        self.client
            .post(format!("{}/cart/add", self.base_url))
            .form(&[("product_id", product_id.as_str())])
            .send()
            .await
            .expect("Request failed")
    }
}

/// Extract the in-cart quantity rendered for `product_id`, if the product is on the page.
#[must_use]
pub fn rendered_quantity(body: &str, product_id: i64) -> Option<usize> {
    let marker = format!("data-product-id=\"{product_id}\" data-quantity=\"");
    let start = body.find(&marker)? + marker.len();
    let rest = body.get(start..)?;
    let end = rest.find('"')?;
    rest.get(..end)?.parse().ok()
}

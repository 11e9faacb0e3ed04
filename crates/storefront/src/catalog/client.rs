//! HTTP client for the catalog service.

use std::sync::Arc;

use reqwest::header::ACCEPT;
use rocketshoes_core::CatalogRecord;
use tracing::{debug, instrument};
use url::Url;

use super::{CatalogError, CatalogSource};
use crate::config::CatalogConfig;

/// Client for `GET {CATALOG_API_URL}/products`.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct HttpCatalogClient {
    inner: Arc<HttpCatalogClientInner>,
}

struct HttpCatalogClientInner {
    client: reqwest::Client,
    products_url: Url,
}

impl HttpCatalogClient {
    /// Create a new catalog client.
    ///
    /// # Errors
    ///
    /// Returns an error if the products endpoint cannot be derived from the
    /// configured base URL or the HTTP client cannot be built.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let products_url = products_endpoint(&config.api_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            inner: Arc::new(HttpCatalogClientInner {
                client: builder.build()?,
                products_url,
            }),
        })
    }

    /// The full URL products are fetched from.
    #[must_use]
    pub fn products_url(&self) -> &Url {
        &self.inner.products_url
    }
}

impl CatalogSource for HttpCatalogClient {
    #[instrument(skip(self), fields(endpoint = %self.inner.products_url))]
    async fn fetch_products(&self) -> Result<Vec<CatalogRecord>, CatalogError> {
        let response = self
            .inner
            .client
            .get(self.inner.products_url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();

        // Get response body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "Catalog service returned non-success status"
            );
            return Err(CatalogError::Status(status.as_u16()));
        }

        let records: Vec<CatalogRecord> = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(500).collect::<String>(),
                "Failed to parse catalog response"
            );
            CatalogError::Parse(e)
        })?;

        if let Some(record) = records
            .iter()
            .find(|r| r.price.is_sign_negative() && !r.price.is_zero())
        {
            return Err(CatalogError::InvalidRecord(format!(
                "product {} has a negative price",
                record.id
            )));
        }

        debug!(count = records.len(), "Fetched catalog");
        Ok(records)
    }
}

/// Resolve `{base}/products`, treating the base as a directory.
fn products_endpoint(base: &Url) -> Result<Url, url::ParseError> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join("products")
}

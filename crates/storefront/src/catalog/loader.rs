//! Catalog loading: fetch, format, publish.

use rocketshoes_core::{CurrencyCode, DisplayRecord};
use tracing::{info, instrument};

use super::CatalogSource;
use crate::notify::NotificationSink;

/// Message shown to the shopper when the catalog cannot be loaded.
pub const CATALOG_LOAD_FAILED: &str = "Aconteceu um erro ao tentar carregar os produtos!";

/// The display list published by [`CatalogLoader`].
///
/// Starts unloaded and empty. Only a successful load writes it, and it is
/// always replaced as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductList {
    records: Option<Vec<DisplayRecord>>,
}

impl ProductList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a load has ever succeeded.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.records.is_some()
    }

    #[must_use]
    pub fn records(&self) -> &[DisplayRecord] {
        self.records.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }

    fn replace(&mut self, records: Vec<DisplayRecord>) {
        self.records = Some(records);
    }
}

/// Result of one [`CatalogLoader::load`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The list was replaced with this many records.
    Loaded(usize),
    /// Nothing was published; the shopper was notified.
    Failed,
}

/// Fetches the catalog and publishes it with formatted prices.
pub struct CatalogLoader<S> {
    source: S,
    currency: CurrencyCode,
}

impl<S: CatalogSource> CatalogLoader<S> {
    #[must_use]
    pub const fn new(source: S, currency: CurrencyCode) -> Self {
        Self { source, currency }
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Fetch the catalog once and publish it into `products`.
    ///
    /// On success `products` is replaced as a whole. On any failure
    /// `products` is left untouched and exactly one error notice is raised.
    /// Failures are not retried.
    #[instrument(skip_all, fields(currency = %self.currency))]
    pub async fn load(
        &self,
        products: &mut ProductList,
        notifications: &mut impl NotificationSink,
    ) -> LoadOutcome {
        match self.source.fetch_products().await {
            Ok(records) => {
                let display: Vec<DisplayRecord> = records
                    .into_iter()
                    .map(|record| DisplayRecord::from_record(record, self.currency))
                    .collect();
                let count = display.len();
                products.replace(display);
                info!(count, "Catalog loaded");
                LoadOutcome::Loaded(count)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load catalog");
                notifications.error(CATALOG_LOAD_FAILED);
                LoadOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use rocketshoes_core::{CatalogRecord, ProductId};

    use super::*;
    use crate::catalog::CatalogError;
    use crate::notify::Notices;

    /// Catalog double that counts fetches.
    struct FakeCatalog {
        records: Option<Vec<CatalogRecord>>,
        fetches: AtomicUsize,
    }

    impl FakeCatalog {
        fn with(records: Vec<CatalogRecord>) -> Self {
            Self {
                records: Some(records),
                fetches: AtomicUsize::new(0),
            }
        }

        fn unavailable() -> Self {
            Self {
                records: None,
                fetches: AtomicUsize::new(0),
            }
        }
    }

    impl CatalogSource for FakeCatalog {
        async fn fetch_products(&self) -> Result<Vec<CatalogRecord>, CatalogError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            self.records.clone().ok_or(CatalogError::Status(503))
        }
    }

    fn record(id: i64, title: &str, price: &str) -> CatalogRecord {
        CatalogRecord {
            id: ProductId::new(id),
            title: title.to_string(),
            price: price.parse().unwrap(),
            image: format!("https://example.com/{id}.png"),
        }
    }

    #[tokio::test]
    async fn test_publishes_formatted_records() {
        let loader = CatalogLoader::new(
            FakeCatalog::with(vec![record(1, "Tênis", "179.9")]),
            CurrencyCode::BRL,
        );
        let mut products = ProductList::new();
        let mut notices = Notices::new();

        let outcome = loader.load(&mut products, &mut notices).await;

        assert_eq!(outcome, LoadOutcome::Loaded(1));
        assert!(products.is_loaded());
        let only = &products.records()[0];
        assert_eq!(only.id, ProductId::new(1));
        assert_eq!(only.title, "Tênis");
        assert_eq!(only.image, "https://example.com/1.png");
        assert_eq!(only.price_formatted, "R$\u{a0}179,90");
        assert!(notices.is_empty());
    }

    #[tokio::test]
    async fn test_publishes_every_record() {
        let records = vec![
            record(1, "A", "10"),
            record(2, "B", "20.5"),
            record(3, "C", "10.00"),
        ];
        let loader = CatalogLoader::new(FakeCatalog::with(records), CurrencyCode::BRL);
        let mut products = ProductList::new();
        let mut notices = Notices::new();

        let outcome = loader.load(&mut products, &mut notices).await;

        assert_eq!(outcome, LoadOutcome::Loaded(3));
        assert_eq!(products.len(), 3);
        // Same price, same string
        assert_eq!(
            products.records()[0].price_formatted,
            products.records()[2].price_formatted
        );
        assert_eq!(loader.source.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_catalog_is_loaded_and_empty() {
        let loader = CatalogLoader::new(FakeCatalog::with(Vec::new()), CurrencyCode::BRL);
        let mut products = ProductList::new();
        let mut notices = Notices::new();

        let outcome = loader.load(&mut products, &mut notices).await;

        assert_eq!(outcome, LoadOutcome::Loaded(0));
        assert!(products.is_loaded());
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_failure_notifies_once_and_publishes_nothing() {
        let loader = CatalogLoader::new(FakeCatalog::unavailable(), CurrencyCode::BRL);
        let mut products = ProductList::new();
        let mut notices = Notices::new();

        let outcome = loader.load(&mut products, &mut notices).await;

        assert_eq!(outcome, LoadOutcome::Failed);
        assert_eq!(products, ProductList::new());
        assert!(!products.is_loaded());
        assert_eq!(notices.len(), 1);
        assert_eq!(notices.as_slice()[0].message, CATALOG_LOAD_FAILED);
        assert_eq!(loader.source.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_list() {
        let mut products = ProductList::new();
        let mut notices = Notices::new();
        CatalogLoader::new(FakeCatalog::with(vec![record(1, "A", "1")]), CurrencyCode::BRL)
            .load(&mut products, &mut notices)
            .await;
        let before = products.clone();

        CatalogLoader::new(FakeCatalog::unavailable(), CurrencyCode::BRL)
            .load(&mut products, &mut notices)
            .await;

        assert_eq!(products, before);
        assert_eq!(notices.len(), 1);
    }

    #[tokio::test]
    async fn test_success_replaces_list_wholesale() {
        let mut products = ProductList::new();
        let mut notices = Notices::new();
        CatalogLoader::new(
            FakeCatalog::with(vec![record(1, "A", "1"), record(2, "B", "2")]),
            CurrencyCode::BRL,
        )
        .load(&mut products, &mut notices)
        .await;

        CatalogLoader::new(FakeCatalog::with(vec![record(9, "Z", "9")]), CurrencyCode::USD)
            .load(&mut products, &mut notices)
            .await;

        assert_eq!(products.len(), 1);
        assert_eq!(products.records()[0].id, ProductId::new(9));
        assert_eq!(products.records()[0].price_formatted, "$9.00");
    }
}

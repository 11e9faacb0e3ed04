//! The catalog page as a view: activation, state, and per-render tiles.
//!
//! A [`HomeView`] lives for one page activation. Activating it loads the
//! catalog exactly once; every render pairs the loaded products with a
//! [`QuantityIndex`] computed fresh from the cart snapshot it is given.

use rocketshoes_core::{CartLine, ProductId, QuantityIndex};

use crate::catalog::{CatalogLoader, CatalogSource, LoadOutcome, ProductList};
use crate::notify::Notices;

/// Whether the catalog has arrived.
///
/// A failed load stays in `Loading`; the failure itself is reported through
/// the view's notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Loaded,
}

/// One product as rendered, with the units already in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductTile {
    pub id: ProductId,
    pub title: String,
    pub image: String,
    pub price_formatted: String,
    pub quantity: usize,
}

/// State owned by one activation of the catalog page.
#[derive(Debug, Default)]
pub struct HomeView {
    products: ProductList,
    notices: Notices,
    activated: bool,
}

impl HomeView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the catalog for this activation.
    ///
    /// Only the first call fetches; later calls return `None` without
    /// touching the catalog service.
    pub async fn activate<S: CatalogSource>(
        &mut self,
        loader: &CatalogLoader<S>,
    ) -> Option<LoadOutcome> {
        if self.activated {
            return None;
        }
        self.activated = true;
        Some(loader.load(&mut self.products, &mut self.notices).await)
    }

    #[must_use]
    pub const fn state(&self) -> ViewState {
        if self.products.is_loaded() {
            ViewState::Loaded
        } else {
            ViewState::Loading
        }
    }

    #[must_use]
    pub const fn products(&self) -> &ProductList {
        &self.products
    }

    #[must_use]
    pub const fn notices(&self) -> &Notices {
        &self.notices
    }

    /// Pair every product with its quantity in `cart`.
    ///
    /// The quantity index is recomputed from `cart` on each call.
    #[must_use]
    pub fn render(&self, cart: &[CartLine]) -> Vec<ProductTile> {
        let index = QuantityIndex::compute(cart);
        self.products
            .records()
            .iter()
            .map(|record| ProductTile {
                id: record.id,
                title: record.title.clone(),
                image: record.image.clone(),
                price_formatted: record.price_formatted.clone(),
                quantity: index.quantity(record.id),
            })
            .collect()
    }
}

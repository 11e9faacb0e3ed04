//! Catalog page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::cart::CartStore;
use crate::notify::Notice;
use crate::state::AppState;
use crate::view::{HomeView, ProductTile};

/// Catalog page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Products paired with their in-cart quantity.
    pub tiles: Vec<ProductTile>,
    /// Toasts raised while loading the page.
    pub notices: Vec<Notice>,
}

/// Display the catalog page.
///
/// Each request is one activation of the page: the catalog is fetched once,
/// then paired with the current cart snapshot. A catalog failure still
/// renders the page, with an error toast and no products.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> HomeTemplate {
    let loader = state.catalog_loader();
    let mut view = HomeView::new();
    view.activate(&loader).await;

    let cart = state.cart().cart().await;

    HomeTemplate {
        tiles: view.render(&cart),
        notices: view.notices().as_slice().to_vec(),
    }
}

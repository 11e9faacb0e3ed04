//! Cart route handlers.

use axum::{Form, extract::State, response::Redirect};
use rocketshoes_core::ProductId;
use serde::Deserialize;
use tracing::instrument;

use crate::cart::AddToCartDispatcher;
use crate::error::{Result, add_breadcrumb};
use crate::state::AppState;

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: ProductId,
}

/// Add one unit of a product to the cart, then go back to the catalog.
#[instrument(skip(state))]
pub async fn add(State(state): State<AppState>, Form(form): Form<AddToCartForm>) -> Result<Redirect> {
    AddToCartDispatcher::new(state.cart())
        .request_add(form.product_id)
        .await?;

    let product_id = form.product_id.to_string();
    add_breadcrumb(
        "cart",
        "Added product to cart",
        Some(&[("product_id", product_id.as_str())]),
    );

    Ok(Redirect::to("/"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use rocketshoes_core::CartLine;
    use tower::ServiceExt;

    use super::*;
    use crate::cart::CartStore;
    use crate::config::StorefrontConfig;
    use crate::routes::app;

    fn add_request(product_id: &str) -> Request<Body> {
        Request::post("/cart/add")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(format!("product_id={product_id}")))
            .unwrap()
    }

    fn state_with_limit(limit: &str) -> AppState {
        let limit = limit.to_string();
        let config = StorefrontConfig::from_lookup(|key| {
            (key == "CART_MAX_LINES").then(|| limit.clone())
        })
        .unwrap();
        AppState::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_add_redirects_back_to_catalog() {
        let state = state_with_limit("10");

        let response = app(state.clone()).oneshot(add_request("7")).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
        assert_eq!(
            state.cart().cart().await,
            vec![CartLine::new(ProductId::new(7))]
        );
    }

    #[tokio::test]
    async fn test_full_cart_is_unprocessable() {
        let state = state_with_limit("1");
        app(state.clone()).oneshot(add_request("1")).await.unwrap();

        let response = app(state.clone()).oneshot(add_request("2")).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(state.cart().cart().await.len(), 1);
    }
}

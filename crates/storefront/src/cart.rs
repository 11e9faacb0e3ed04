//! Cart collaborator and the add-to-cart command.
//!
//! The page only ever reads a cart snapshot and asks the cart to add a
//! product. How a cart validates or stores additions is its own business;
//! [`InMemoryCart`] is the process-local implementation the server runs with.

use std::future::Future;
use std::sync::Arc;

use rocketshoes_core::{CartLine, ProductId};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

/// The two cart operations the storefront page depends on.
pub trait CartStore: Send + Sync {
    /// Error raised by [`CartStore::add_product`].
    type Error: std::error::Error + Send + Sync + 'static;

    /// Current cart contents, one line per unit, in insertion order.
    fn cart(&self) -> impl Future<Output = Vec<CartLine>> + Send;

    /// Add one unit of `product_id`.
    fn add_product(&self, product_id: ProductId)
    -> impl Future<Output = Result<(), Self::Error>> + Send;
}

/// Errors from [`InMemoryCart`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// The cart already holds its maximum number of units.
    #[error("Cart is full ({0} items)")]
    LimitReached(usize),
}

/// Cart held in process memory, shared by every request.
///
/// Cheaply cloneable via `Arc`. Nothing is persisted.
#[derive(Clone)]
pub struct InMemoryCart {
    inner: Arc<InMemoryCartInner>,
}

struct InMemoryCartInner {
    lines: RwLock<Vec<CartLine>>,
    max_lines: usize,
}

impl InMemoryCart {
    /// Create an empty cart holding at most `max_lines` units.
    #[must_use]
    pub fn new(max_lines: usize) -> Self {
        Self {
            inner: Arc::new(InMemoryCartInner {
                lines: RwLock::new(Vec::new()),
                max_lines,
            }),
        }
    }
}

impl CartStore for InMemoryCart {
    type Error = CartError;

    async fn cart(&self) -> Vec<CartLine> {
        self.inner.lines.read().await.clone()
    }

    async fn add_product(&self, product_id: ProductId) -> Result<(), CartError> {
        let mut lines = self.inner.lines.write().await;
        if lines.len() >= self.inner.max_lines {
            return Err(CartError::LimitReached(self.inner.max_lines));
        }
        lines.push(CartLine::new(product_id));
        Ok(())
    }
}

/// Forwards the shopper's "add to cart" to the cart collaborator.
///
/// No validation happens here; the cart's own errors are returned as-is.
pub struct AddToCartDispatcher<'a, C> {
    cart: &'a C,
}

impl<'a, C: CartStore> AddToCartDispatcher<'a, C> {
    #[must_use]
    pub const fn new(cart: &'a C) -> Self {
        Self { cart }
    }

    /// Ask the cart to add one unit of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns whatever error the cart collaborator raises.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn request_add(&self, product_id: ProductId) -> Result<(), C::Error> {
        debug!("Forwarding add to cart");
        self.cart.add_product(product_id).await
    }
}

//! Cart lines and the per-product quantity index.
//!
//! A cart is an ordered sequence of lines, one line per unit, so a product
//! added three times shows up as three lines. The [`QuantityIndex`] folds such
//! a snapshot into `product id -> units` and is rebuilt from scratch every
//! time the cart is observed. It never carries state between snapshots.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// One unit of a product sitting in the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,
}

impl CartLine {
    #[must_use]
    pub const fn new(product_id: ProductId) -> Self {
        Self { product_id }
    }
}

/// Units in the cart per product.
///
/// Only positive counts are stored; [`QuantityIndex::quantity`] answers 0 for
/// any product the cart does not contain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuantityIndex {
    counts: HashMap<ProductId, usize>,
}

impl QuantityIndex {
    /// Count the lines of a cart snapshot per product.
    ///
    /// The result does not depend on the order of `lines`.
    pub fn compute<'a>(lines: impl IntoIterator<Item = &'a CartLine>) -> Self {
        lines.into_iter().fold(Self::default(), |mut index, line| {
            *index.counts.entry(line.product_id).or_insert(0) += 1;
            index
        })
    }

    /// Units of `product_id` in the cart, 0 when absent.
    #[must_use]
    pub fn quantity(&self, product_id: ProductId) -> usize {
        self.counts.get(&product_id).copied().unwrap_or(0)
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(product, units)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (ProductId, usize)> + '_ {
        self.counts.iter().map(|(id, count)| (*id, *count))
    }
}

impl<'a> FromIterator<&'a CartLine> for QuantityIndex {
    fn from_iter<I: IntoIterator<Item = &'a CartLine>>(iter: I) -> Self {
        Self::compute(iter)
    }
}

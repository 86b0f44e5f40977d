use serde::{Deserialize, Serialize};

use chronolux_catalog::Product;
use chronolux_core::{Entity, ProductId, position_of};

/// Outcome of a wishlist toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WishlistChange {
    Added,
    Removed,
}

/// Saved products. Set semantics, insertion order preserved, no capacity bound.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wishlist {
    items: Vec<Product>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `product` if absent, remove it if present.
    pub fn toggle(&mut self, product: &Product) -> WishlistChange {
        match position_of(&self.items, product.id()) {
            Some(pos) => {
                self.items.remove(pos);
                WishlistChange::Removed
            }
            None => {
                self.items.push(product.clone());
                WishlistChange::Added
            }
        }
    }

    pub fn contains(&self, id: ProductId) -> bool {
        position_of(&self.items, id).is_some()
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

use serde::{Deserialize, Serialize};

use chronolux_catalog::Product;
use chronolux_core::{ProductId, StoreResult};

use crate::cart::{Cart, CartChange};
use crate::wishlist::{Wishlist, WishlistChange};

/// Cart and wishlist together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    pub cart: Cart,
    pub wishlist: Wishlist,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_to_cart(&mut self, product: &Product) -> StoreResult<CartChange> {
        self.cart.add(product)
    }

    pub fn update_quantity(&mut self, id: ProductId, delta: i64) -> StoreResult<CartChange> {
        self.cart.update_quantity(id, delta)
    }

    pub fn remove_from_cart(&mut self, id: ProductId) -> StoreResult<CartChange> {
        self.cart.remove(id)
    }

    pub fn toggle_wishlist(&mut self, product: &Product) -> WishlistChange {
        self.wishlist.toggle(product)
    }

    pub fn cart_total(&self) -> u64 {
        self.cart.total()
    }

    /// Read-only copy for the presentation layer.
    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            cart_lines: self
                .cart
                .lines()
                .iter()
                .map(|line| (line.product().id_typed(), line.quantity()))
                .collect(),
            wishlist: self.wishlist.items().iter().map(Product::id_typed).collect(),
            cart_total: self.cart.total(),
        }
    }
}

/// Id-level view of the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub cart_lines: Vec<(ProductId, u32)>,
    pub wishlist: Vec<ProductId>,
    pub cart_total: u64,
}

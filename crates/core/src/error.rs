//! Storefront error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the storefront core.
pub type StoreResult<T> = Result<T, StoreError>;

/// Storefront-level error.
///
/// Every variant is non-fatal: callers degrade to a no-op or a user-visible
/// notice, never a crash.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A referenced product id is absent from the catalog (or the cart).
    #[error("product {0} not found")]
    NotFound(ProductId),

    /// A quantity change would push a cart entry above the product's stock.
    #[error("stock exceeded for product {product_id}: requested {requested}, stock {stock}")]
    StockExceeded {
        product_id: ProductId,
        requested: u32,
        stock: u32,
    },

    /// An operation needs a non-empty collection (cart, wishlist).
    #[error("{0} is empty")]
    EmptyCollection(&'static str),

    /// A value failed validation (e.g. inverted price range, bad config value).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl StoreError {
    pub fn not_found(id: ProductId) -> Self {
        Self::NotFound(id)
    }

    pub fn stock_exceeded(product_id: ProductId, requested: u32, stock: u32) -> Self {
        Self::StockExceeded {
            product_id,
            requested,
            stock,
        }
    }

    pub fn empty(collection: &'static str) -> Self {
        Self::EmptyCollection(collection)
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Whether the error should surface to the user (as opposed to a silent no-op).
    pub fn is_user_visible(&self) -> bool {
        !matches!(self, StoreError::NotFound(_))
    }
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use chronolux_core::ProductId;
use chronolux_events::Event;

use crate::format::price_label;

/// How a notice should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

/// A discrete, user-visible outcome of a session operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    AddedToCart { product_id: ProductId, name: String },
    QuantityUpdated { product_id: ProductId, name: String, quantity: u32 },
    StockExceeded { product_id: ProductId, stock: u32 },
    RemovedFromCart { product_id: ProductId },
    WishlistAdded { product_id: ProductId, name: String },
    WishlistRemoved { product_id: ProductId, name: String },
    WishlistEmpty,
    ShowingWishlist { count: usize },
    FiltersReset,
    OrderPlaced { order_id: Uuid, total: u64 },
}

impl Notice {
    pub fn severity(&self) -> Severity {
        match self {
            Notice::StockExceeded { .. } | Notice::WishlistEmpty => Severity::Error,
            _ => Severity::Success,
        }
    }

    /// Toast text.
    pub fn message(&self) -> String {
        match self {
            Notice::AddedToCart { name, .. } => format!("{name} added to cart"),
            Notice::QuantityUpdated { name, .. } => format!("{name} quantity updated"),
            Notice::StockExceeded { .. } => "Maximum stock reached".to_string(),
            Notice::RemovedFromCart { .. } => "Item removed from cart".to_string(),
            Notice::WishlistAdded { name, .. } => format!("{name} added to wishlist"),
            Notice::WishlistRemoved { name, .. } => format!("{name} removed from wishlist"),
            Notice::WishlistEmpty => "Your wishlist is empty".to_string(),
            Notice::ShowingWishlist { count } => format!("Showing {count} wishlist items"),
            Notice::FiltersReset => "Filters reset".to_string(),
            Notice::OrderPlaced { total, .. } => {
                format!("Order placed successfully! Total: {}", price_label(*total))
            }
        }
    }
}

impl Event for Notice {
    fn event_type(&self) -> &'static str {
        match self {
            Notice::AddedToCart { .. } => "cart.item.added",
            Notice::QuantityUpdated { .. } => "cart.item.quantity_updated",
            Notice::StockExceeded { .. } => "cart.item.stock_exceeded",
            Notice::RemovedFromCart { .. } => "cart.item.removed",
            Notice::WishlistAdded { .. } => "wishlist.item.added",
            Notice::WishlistRemoved { .. } => "wishlist.item.removed",
            Notice::WishlistEmpty => "wishlist.empty",
            Notice::ShowingWishlist { .. } => "wishlist.shown",
            Notice::FiltersReset => "filters.reset",
            Notice::OrderPlaced { .. } => "order.placed",
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use chronolux_catalog::Product;
use chronolux_core::{Entity, ProductId, StoreError, StoreResult, position_of};

/// Cart line: product snapshot and quantity.
///
/// Invariant: `1 <= quantity <= product.stock()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    product: Product,
    quantity: u32,
}

impl CartLine {
    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `price * quantity`.
    pub fn subtotal(&self) -> u64 {
        self.product.price() * u64::from(self.quantity)
    }
}

impl Entity for CartLine {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.product.id()
    }
}

/// What a successful cart mutation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum CartChange {
    Added { product_id: ProductId },
    QuantityChanged { product_id: ProductId, quantity: u32 },
    Removed { product_id: ProductId },
}

/// Shopping cart. Lines keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id() == id)
    }

    pub fn quantity_of(&self, id: ProductId) -> u32 {
        self.line(id).map(CartLine::quantity).unwrap_or(0)
    }

    /// Number of distinct lines (the cart badge count).
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of line subtotals; 0 for an empty cart.
    pub fn total(&self) -> u64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Add one unit of `product`.
    ///
    /// Creates the line at quantity 1, or increments it while below stock.
    pub fn add(&mut self, product: &Product) -> StoreResult<CartChange> {
        let product_id = product.id();
        match position_of(&self.lines, product_id) {
            Some(pos) => {
                let line = &mut self.lines[pos];
                if line.quantity >= line.product.stock() {
                    return Err(StoreError::stock_exceeded(
                        product_id,
                        line.quantity + 1,
                        line.product.stock(),
                    ));
                }
                line.quantity += 1;
                Ok(CartChange::QuantityChanged {
                    product_id,
                    quantity: line.quantity,
                })
            }
            None => {
                self.lines.push(CartLine {
                    product: product.clone(),
                    quantity: 1,
                });
                Ok(CartChange::Added { product_id })
            }
        }
    }

    /// Shift a line's quantity by `delta`.
    ///
    /// Dropping to zero or below removes the line; rising above stock is
    /// rejected with the line unchanged.
    pub fn update_quantity(&mut self, id: ProductId, delta: i64) -> StoreResult<CartChange> {
        let pos = position_of(&self.lines, id).ok_or(StoreError::not_found(id))?;
        let line = &mut self.lines[pos];
        let new_quantity = i64::from(line.quantity).saturating_add(delta);

        if new_quantity <= 0 {
            return self.remove(id);
        }

        let stock = line.product.stock();
        if new_quantity > i64::from(stock) {
            let requested = u32::try_from(new_quantity).unwrap_or(u32::MAX);
            return Err(StoreError::stock_exceeded(id, requested, stock));
        }

        // In range (1..=stock), so the conversion cannot truncate.
        line.quantity = new_quantity as u32;
        Ok(CartChange::QuantityChanged {
            product_id: id,
            quantity: line.quantity,
        })
    }

    pub fn remove(&mut self, id: ProductId) -> StoreResult<CartChange> {
        let pos = position_of(&self.lines, id).ok_or(StoreError::not_found(id))?;
        self.lines.remove(pos);
        Ok(CartChange::Removed { product_id: id })
    }

    /// Empty the cart into a receipt. Fails on an empty cart.
    pub fn take_order(&mut self) -> StoreResult<OrderReceipt> {
        if self.lines.is_empty() {
            return Err(StoreError::empty("cart"));
        }
        let total = self.total();
        let lines = std::mem::take(&mut self.lines)
            .into_iter()
            .map(|line| ReceiptLine {
                product_id: line.id(),
                name: line.product.name().to_string(),
                unit_price: line.product.price(),
                quantity: line.quantity,
            })
            .collect();

        Ok(OrderReceipt {
            order_id: Uuid::now_v7(),
            lines,
            total,
            placed_at: Utc::now(),
        })
    }
}

/// One line of a placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: u64,
    pub quantity: u32,
}

/// Result of a completed checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub order_id: Uuid,
    pub lines: Vec<ReceiptLine>,
    /// Cart total at the moment the order was placed.
    pub total: u64,
    pub placed_at: DateTime<Utc>,
}

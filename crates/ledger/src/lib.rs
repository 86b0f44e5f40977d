//! Cart and wishlist ledger, plus the simulated checkout.
//!
//! Mutations report what they changed (`CartChange`, `WishlistChange`) or a
//! [`chronolux_core::StoreError`]; turning those into user-visible notices is
//! the caller's job.

pub mod cart;
pub mod checkout;
pub mod ledger;
pub mod wishlist;

pub use cart::{Cart, CartChange, CartLine, OrderReceipt, ReceiptLine};
pub use checkout::{DEFAULT_CHECKOUT_DELAY, checkout};
pub use ledger::{Ledger, LedgerSnapshot};
pub use wishlist::{Wishlist, WishlistChange};

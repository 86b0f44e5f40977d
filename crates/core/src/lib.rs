//! `chronolux-core`: storefront building blocks shared by every crate.
//!
//! This crate contains **pure domain** primitives (no IO, no rendering).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::{Entity, position_of};
pub use error::{StoreError, StoreResult};
pub use id::{IdSequence, ProductId};
pub use value_object::ValueObject;

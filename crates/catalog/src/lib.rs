//! Watch catalog: product model, lookup tables and the synthetic generator.
//!
//! Pure construction and lookup; no IO and no rendering.

pub mod catalog;
pub mod generator;
pub mod product;
pub mod tables;

pub use catalog::Catalog;
pub use product::{Brand, Category, Movement, NewProduct, Product};

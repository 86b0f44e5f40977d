//! Synthetic catalog generation.
//!
//! Shape is deterministic (fixed count, fixed field set, round-robin
//! categories); content is drawn from the supplied RNG, so a seeded RNG gives a
//! reproducible catalog.

use rand::Rng;

use chronolux_core::{IdSequence, StoreResult};

use crate::product::{Brand, Category, Movement, NewProduct, Product};
use crate::tables;

/// Probability that a generated product carries the "new" badge.
pub const NEW_PROBABILITY: f64 = 0.3;

/// Generate `count` products.
pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> StoreResult<Vec<Product>> {
    let mut ids = IdSequence::new();
    let mut products = Vec::with_capacity(count);

    for index in 0..count {
        let category = Category::ALL[index % Category::ALL.len()];
        let brand = Brand::ALL[rng.gen_range(0..Brand::ALL.len())];
        let movement = Movement::ALL[rng.gen_range(0..Movement::ALL.len())];
        let models = tables::models(category);
        let model = models[rng.gen_range(0..models.len())];

        let band = tables::price_band(category);
        let price = if band.spread == 0 {
            band.base
        } else {
            band.base + rng.gen_range(0..band.spread)
        };

        products.push(Product::new(NewProduct {
            id: ids.next_id(),
            name: format!("{brand} {model}"),
            category,
            brand,
            price,
            movement,
            image: tables::image_url(index),
            description: tables::description(category, brand, model),
            features: tables::features(category, movement),
            is_new: rng.gen_bool(NEW_PROBABILITY),
            stock: rng.gen_range(1..=Product::MAX_STOCK),
        })?);
    }

    tracing::debug!(count, "generated catalog products");
    Ok(products)
}

use std::collections::{BTreeSet, HashMap};

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use chronolux_core::{Entity, ProductId, StoreError, StoreResult};

use crate::generator;
use crate::product::{Brand, Movement, Product};

/// The full, immutable product set.
///
/// Built once and shared read-only (typically behind an `Arc`).
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    products: Vec<Product>,
    #[serde(skip)]
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Wrap an existing product list. Rejects duplicate ids.
    pub fn from_products(products: Vec<Product>) -> StoreResult<Self> {
        let mut index = HashMap::with_capacity(products.len());
        for (pos, product) in products.iter().enumerate() {
            if index.insert(product.id(), pos).is_some() {
                return Err(StoreError::validation(format!(
                    "duplicate product id {}",
                    product.id()
                )));
            }
        }
        Ok(Self { products, index })
    }

    /// Generate `count` products; `seed` makes the catalog reproducible.
    pub fn generate(count: usize, seed: Option<u64>) -> StoreResult<Self> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let catalog = Self::from_products(generator::generate(count, &mut rng)?)?;
        tracing::info!(products = catalog.len(), seeded = seed.is_some(), "catalog loaded");
        Ok(catalog)
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.index.get(&id).map(|&pos| &self.products[pos])
    }

    /// Like [`Catalog::get`], but a missing id is a [`StoreError::NotFound`].
    pub fn require(&self, id: ProductId) -> StoreResult<&Product> {
        self.get(id).ok_or(StoreError::not_found(id))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct brands present in the catalog, sorted by display name.
    pub fn brands(&self) -> Vec<Brand> {
        let names: BTreeSet<(&'static str, Brand)> =
            self.products.iter().map(|p| (p.brand().as_str(), p.brand())).collect();
        names.into_iter().map(|(_, brand)| brand).collect()
    }

    /// Distinct movements present in the catalog, sorted by display name.
    pub fn movements(&self) -> Vec<Movement> {
        let names: BTreeSet<(&'static str, Movement)> = self
            .products
            .iter()
            .map(|p| (p.movement().as_str(), p.movement()))
            .collect();
        names.into_iter().map(|(_, movement)| movement).collect()
    }
}

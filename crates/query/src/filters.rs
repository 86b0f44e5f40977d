use core::str::FromStr;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use chronolux_catalog::{Brand, Category, Movement, Product};
use chronolux_core::{StoreError, StoreResult, ValueObject};

/// Upper bound of the price slider and of the default range.
pub const DEFAULT_PRICE_CEILING: u64 = 500_000;

/// Inclusive price window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    min: u64,
    max: u64,
}

impl ValueObject for PriceRange {}

impl PriceRange {
    pub fn new(min: u64, max: u64) -> StoreResult<Self> {
        if min > max {
            return Err(StoreError::validation(format!(
                "price range minimum {min} exceeds maximum {max}"
            )));
        }
        Ok(Self { min, max })
    }

    /// `[0, ceiling]`.
    pub fn up_to(ceiling: u64) -> Self {
        Self { min: 0, max: ceiling }
    }

    pub fn min(&self) -> u64 {
        self.min
    }

    pub fn max(&self) -> u64 {
        self.max
    }

    pub fn with_min(self, min: u64) -> StoreResult<Self> {
        Self::new(min, self.max)
    }

    pub fn with_max(self, max: u64) -> StoreResult<Self> {
        Self::new(self.min, max)
    }

    pub fn contains(&self, price: u64) -> bool {
        (self.min..=self.max).contains(&price)
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::up_to(DEFAULT_PRICE_CEILING)
    }
}

/// Category selection: everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn admits(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category() == *category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        Category::from_str(s).map(CategoryFilter::Only)
    }
}

impl From<Category> for CategoryFilter {
    fn from(value: Category) -> Self {
        CategoryFilter::Only(value)
    }
}

/// Filter-panel state: price window plus brand and movement selections.
///
/// Empty brand/movement sets mean "no restriction".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub price_range: PriceRange,
    pub brands: BTreeSet<Brand>,
    pub movements: BTreeSet<Movement>,
    #[serde(skip)]
    ceiling: u64,
}

impl ValueObject for FilterState {}

impl FilterState {
    /// Defaults with a custom slider ceiling.
    pub fn with_ceiling(ceiling: u64) -> Self {
        Self {
            price_range: PriceRange::up_to(ceiling),
            brands: BTreeSet::new(),
            movements: BTreeSet::new(),
            ceiling,
        }
    }

    pub fn ceiling(&self) -> u64 {
        self.ceiling
    }

    /// Check or uncheck a brand box.
    pub fn set_brand(&mut self, brand: Brand, checked: bool) {
        if checked {
            self.brands.insert(brand);
        } else {
            self.brands.remove(&brand);
        }
    }

    /// Check or uncheck a movement box.
    pub fn set_movement(&mut self, movement: Movement, checked: bool) {
        if checked {
            self.movements.insert(movement);
        } else {
            self.movements.remove(&movement);
        }
    }

    /// Back to the full price window and no selections.
    pub fn reset(&mut self) {
        *self = Self::with_ceiling(self.ceiling);
    }

    pub fn is_default(&self) -> bool {
        *self == Self::with_ceiling(self.ceiling)
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::with_ceiling(DEFAULT_PRICE_CEILING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_range_is_inclusive() {
        let range = PriceRange::new(100, 200).unwrap();
        assert!(range.contains(100));
        assert!(range.contains(200));
        assert!(!range.contains(99));
        assert!(!range.contains(201));
    }

    #[test]
    fn inverted_range_is_rejected() {
        assert!(matches!(
            PriceRange::new(10, 5),
            Err(StoreError::Validation(_))
        ));
        assert!(PriceRange::new(50, 100).unwrap().with_max(20).is_err());
    }

    #[test]
    fn category_filter_parses_all_and_names() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "Smart".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Smart)
        );
        assert!("Pocket".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn reset_keeps_ceiling_and_clears_selections() {
        let mut filters = FilterState::with_ceiling(300_000);
        filters.set_brand(Brand::Rolex, true);
        filters.set_movement(Movement::Quartz, true);
        filters.price_range = PriceRange::new(1_000, 2_000).unwrap();
        assert!(!filters.is_default());

        filters.reset();
        assert!(filters.is_default());
        assert_eq!(filters.price_range, PriceRange::up_to(300_000));
    }

    #[test]
    fn unchecking_removes_only_that_brand() {
        let mut filters = FilterState::default();
        filters.set_brand(Brand::Rolex, true);
        filters.set_brand(Brand::Omega, true);
        filters.set_brand(Brand::Rolex, false);
        assert_eq!(filters.brands.iter().copied().collect::<Vec<_>>(), vec![Brand::Omega]);
    }
}

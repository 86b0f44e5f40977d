//! The query pipeline: category → search → price → brand → movement → sort.
//!
//! Each stage is a plain function over a list of product references so stages
//! can be composed, reordered in tests, or benchmarked on their own. The
//! pipeline never fails; an empty result is a valid state.

use serde::{Deserialize, Serialize};

use chronolux_catalog::{Brand, Movement, Product};

use crate::filters::{CategoryFilter, FilterState, PriceRange};
use crate::sort::SortKey;

/// Shortest (trimmed, in characters) query that narrows the result list.
pub const MIN_SEARCH_LEN: usize = 2;

/// Default number of search suggestions.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Everything that decides the visible subset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryState {
    pub category: CategoryFilter,
    pub search: String,
    pub filters: FilterState,
    pub sort: SortKey,
}

impl QueryState {
    pub fn with_ceiling(ceiling: u64) -> Self {
        Self {
            filters: FilterState::with_ceiling(ceiling),
            ..Self::default()
        }
    }
}

/// Normalised search needle, or `None` when the query is too short to filter.
pub fn search_needle(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.chars().count() < MIN_SEARCH_LEN {
        return None;
    }
    Some(trimmed.to_lowercase())
}

pub fn category_stage<'a>(items: Vec<&'a Product>, category: CategoryFilter) -> Vec<&'a Product> {
    if category == CategoryFilter::All {
        return items;
    }
    items.into_iter().filter(|p| category.admits(p)).collect()
}

pub fn search_stage<'a>(items: Vec<&'a Product>, query: &str) -> Vec<&'a Product> {
    match search_needle(query) {
        Some(needle) => items
            .into_iter()
            .filter(|p| p.matches_search(&needle))
            .collect(),
        None => items,
    }
}

pub fn price_stage<'a>(items: Vec<&'a Product>, range: &PriceRange) -> Vec<&'a Product> {
    items.into_iter().filter(|p| range.contains(p.price())).collect()
}

pub fn brand_stage<'a>(
    items: Vec<&'a Product>,
    brands: &std::collections::BTreeSet<Brand>,
) -> Vec<&'a Product> {
    if brands.is_empty() {
        return items;
    }
    items.into_iter().filter(|p| brands.contains(&p.brand())).collect()
}

pub fn movement_stage<'a>(
    items: Vec<&'a Product>,
    movements: &std::collections::BTreeSet<Movement>,
) -> Vec<&'a Product> {
    if movements.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|p| movements.contains(&p.movement()))
        .collect()
}

/// Price, brand and movement stages together.
pub fn filter_stage<'a>(items: Vec<&'a Product>, filters: &FilterState) -> Vec<&'a Product> {
    let items = price_stage(items, &filters.price_range);
    let items = brand_stage(items, &filters.brands);
    movement_stage(items, &filters.movements)
}

/// Run the full pipeline over the catalog.
pub fn run_query<'a, I>(source: I, state: &QueryState) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let items: Vec<&Product> = source.into_iter().collect();
    let total = items.len();

    let items = category_stage(items, state.category);
    let items = search_stage(items, &state.search);
    finish(items, state, total, "catalog")
}

/// Run the saved-items listing: every wishlisted product regardless of the
/// selected category or search text, narrowed only by the filter panel and
/// then sorted.
pub fn run_wishlist_query<'a, I>(source: I, state: &QueryState) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let items: Vec<&Product> = source.into_iter().collect();
    let total = items.len();
    finish(items, state, total, "wishlist")
}

fn finish<'a>(
    items: Vec<&'a Product>,
    state: &QueryState,
    total: usize,
    source: &'static str,
) -> Vec<&'a Product> {
    let mut items = filter_stage(items, &state.filters);
    state.sort.apply(&mut items);

    tracing::debug!(
        source,
        total,
        visible = items.len(),
        sort = %state.sort,
        "query evaluated"
    );
    items
}

/// Up to `limit` matches for the suggestion dropdown.
///
/// Independent of the main result list: any non-blank query of at least one
/// character is matched against the whole `source`, in source order.
pub fn suggest<'a, I>(source: I, query: &str, limit: usize) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    source
        .into_iter()
        .filter(|p| p.matches_search(&needle))
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronolux_catalog::{Catalog, Category};
    use chronolux_core::Entity;

    fn catalog() -> Catalog {
        Catalog::generate(120, Some(7)).unwrap()
    }

    #[test]
    fn all_category_returns_everything_in_catalog_order() {
        let catalog = catalog();
        let out = run_query(catalog.iter(), &QueryState::default());
        assert_eq!(out.len(), catalog.len());
        assert!(out.iter().zip(catalog.iter()).all(|(a, b)| a.id() == b.id()));
    }

    #[test]
    fn category_filter_keeps_only_that_category() {
        let catalog = catalog();
        for category in Category::ALL {
            let state = QueryState {
                category: CategoryFilter::Only(category),
                ..QueryState::default()
            };
            let out = run_query(catalog.iter(), &state);
            assert_eq!(out.len(), 20);
            assert!(out.iter().all(|p| p.category() == category));
        }
    }

    #[test]
    fn one_character_query_does_not_narrow() {
        let catalog = catalog();
        let state = QueryState {
            search: "x".to_string(),
            ..QueryState::default()
        };
        assert_eq!(run_query(catalog.iter(), &state).len(), catalog.len());

        let padded = QueryState {
            search: "  r ".to_string(),
            ..QueryState::default()
        };
        assert_eq!(run_query(catalog.iter(), &padded).len(), catalog.len());
    }

    #[test]
    fn search_is_case_insensitive_over_name_category_and_brand() {
        let catalog = catalog();
        let state = QueryState {
            search: "CHRONOGRAPH".to_string(),
            ..QueryState::default()
        };
        let out = run_query(catalog.iter(), &state);
        assert!(!out.is_empty());
        assert!(out.iter().all(|p| p.matches_search("chronograph")));
        assert!(out.iter().any(|p| p.category() == Category::Chronograph));
    }

    #[test]
    fn empty_brand_set_means_no_restriction() {
        let catalog = catalog();
        let all: Vec<&Product> = catalog.iter().collect();
        let out = brand_stage(all.clone(), &Default::default());
        assert_eq!(out.len(), all.len());
    }

    #[test]
    fn brand_and_movement_selection_narrow() {
        let catalog = catalog();
        let mut state = QueryState::default();
        state.filters.set_brand(Brand::Rolex, true);
        state.filters.set_movement(Movement::Quartz, true);

        let out = run_query(catalog.iter(), &state);
        assert!(
            out.iter()
                .all(|p| p.brand() == Brand::Rolex && p.movement() == Movement::Quartz)
        );
        let expected = catalog
            .iter()
            .filter(|p| p.brand() == Brand::Rolex && p.movement() == Movement::Quartz)
            .count();
        assert_eq!(out.len(), expected);
    }

    #[test]
    fn impossible_price_window_yields_empty_result() {
        let catalog = catalog();
        let mut state = QueryState::default();
        state.filters.price_range = PriceRange::new(0, 10).unwrap();
        assert!(run_query(catalog.iter(), &state).is_empty());
    }

    #[test]
    fn wishlist_listing_ignores_category_and_search_but_not_filters() {
        let catalog = catalog();
        let saved: Vec<Product> = catalog.iter().take(6).cloned().collect();
        let mut state = QueryState {
            category: CategoryFilter::Only(Category::Sport),
            search: "zzzz".to_string(),
            sort: SortKey::PriceLow,
            ..QueryState::default()
        };

        let out = run_wishlist_query(&saved, &state);
        assert_eq!(out.len(), saved.len());
        assert!(out.windows(2).all(|w| w[0].price() <= w[1].price()));

        let brand = saved[0].brand();
        state.filters.set_brand(brand, true);
        let out = run_wishlist_query(&saved, &state);
        assert!(!out.is_empty());
        assert!(out.iter().all(|p| p.brand() == brand));
    }

    #[test]
    fn suggestions_cap_at_limit_and_accept_one_character() {
        let catalog = catalog();
        let out = suggest(catalog.iter(), "o", DEFAULT_SUGGESTION_LIMIT);
        assert_eq!(out.len(), DEFAULT_SUGGESTION_LIMIT);
        assert!(out.iter().all(|p| p.matches_search("o")));
        assert!(suggest(catalog.iter(), "   ", 5).is_empty());
        assert!(suggest(catalog.iter(), "zzzz", 5).is_empty());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 128,
                ..ProptestConfig::default()
            })]

            /// Property: price stage is idempotent and commutes with brand/movement.
            #[test]
            fn price_stage_commutes_with_brand_and_movement(
                seed in any::<u64>(),
                lo in 0u64..400_000,
                width in 0u64..300_000,
                brand_idx in 0usize..8,
                movement_idx in 0usize..4,
            ) {
                let catalog = Catalog::generate(90, Some(seed)).unwrap();
                let range = PriceRange::new(lo, lo + width).unwrap();
                let brands = [Brand::ALL[brand_idx]].into_iter().collect();
                let movements = [Movement::ALL[movement_idx]].into_iter().collect();
                let all: Vec<&Product> = catalog.iter().collect();

                let once = price_stage(all.clone(), &range);
                let twice = price_stage(once.clone(), &range);
                prop_assert_eq!(&once, &twice);

                let price_first = movement_stage(brand_stage(price_stage(all.clone(), &range), &brands), &movements);
                let price_last = price_stage(movement_stage(brand_stage(all.clone(), &brands), &movements), &range);
                let price_middle = movement_stage(price_stage(brand_stage(all, &brands), &range), &movements);
                prop_assert_eq!(&price_first, &price_last);
                prop_assert_eq!(&price_first, &price_middle);
            }

            /// Property: every result satisfies every active predicate.
            #[test]
            fn results_satisfy_all_predicates(
                seed in any::<u64>(),
                query in "[a-zA-Z ]{0,6}",
                sort_idx in 0usize..6,
            ) {
                let catalog = Catalog::generate(60, Some(seed)).unwrap();
                let state = QueryState {
                    category: CategoryFilter::Only(Category::Sport),
                    search: query.clone(),
                    sort: SortKey::ALL[sort_idx],
                    ..QueryState::default()
                };
                let out = run_query(catalog.iter(), &state);
                for product in &out {
                    prop_assert_eq!(product.category(), Category::Sport);
                    if let Some(needle) = search_needle(&query) {
                        prop_assert!(product.matches_search(&needle));
                    }
                }
            }
        }
    }
}

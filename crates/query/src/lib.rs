//! Query engine: filter state, sort keys and the staged result pipeline.

pub mod filters;
pub mod pipeline;
pub mod sort;

pub use filters::{CategoryFilter, DEFAULT_PRICE_CEILING, FilterState, PriceRange};
pub use pipeline::{
    DEFAULT_SUGGESTION_LIMIT, MIN_SEARCH_LEN, QueryState, run_query, run_wishlist_query,
    search_needle, suggest,
};
pub use sort::SortKey;

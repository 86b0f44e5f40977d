//! Renderable view models.
//!
//! [`render`] is a pure function of catalog, query state and ledger; the
//! presentation layer owns diffing and patching whatever it draws from it.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use chronolux_catalog::{Brand, Catalog, Category, Movement, Product};
use chronolux_core::{Entity, ProductId, StoreError};
use chronolux_ledger::{CartLine, Ledger};
use chronolux_query::{CategoryFilter, QueryState, run_query, run_wishlist_query, suggest};

use crate::format::price_label;

/// Grid or list layout of the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl FromStr for ViewMode {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            other => Err(StoreError::validation(format!("unknown view mode: {other:?}"))),
        }
    }
}

/// Where the listing draws its products from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultSource {
    #[default]
    Catalog,
    Wishlist,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub brand: Brand,
    pub movement: Movement,
    pub price: u64,
    pub price_label: String,
    pub image: String,
    pub is_new: bool,
    pub in_wishlist: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub image: String,
    pub price_label: String,
}

/// Quick-view modal contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDetail {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub price: u64,
    pub price_label: String,
    pub image: String,
    pub description: String,
    pub features: Vec<String>,
    pub in_wishlist: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineView {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub image: String,
    pub price_label: String,
    pub quantity: u32,
    pub can_increment: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    /// Badge count: distinct lines, not units.
    pub count: usize,
    pub total: u64,
    pub total_label: String,
    pub checkout_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption<T> {
    pub value: T,
    pub checked: bool,
}

/// Filter panel contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterPanel {
    pub brands: Vec<FilterOption<Brand>>,
    pub movements: Vec<FilterOption<Movement>>,
    pub min_price: u64,
    pub max_price: u64,
    pub max_price_label: String,
    pub ceiling: u64,
}

/// Everything the presentation layer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreView {
    pub title: String,
    pub product_count_label: String,
    pub view_mode: ViewMode,
    pub category: CategoryFilter,
    pub search: String,
    pub products: Vec<ProductCard>,
    pub no_results: bool,
    pub suggestions: Vec<Suggestion>,
    pub filters: FilterPanel,
    pub cart: CartView,
    pub wishlist_count: usize,
    pub quick_view: Option<ProductDetail>,
}

/// Inputs to [`render`], borrowed from the session.
#[derive(Debug, Clone, Copy)]
pub struct RenderInput<'a> {
    pub catalog: &'a Catalog,
    pub query: &'a QueryState,
    pub source: ResultSource,
    pub ledger: &'a Ledger,
    pub view_mode: ViewMode,
    pub quick_view: Option<ProductId>,
    pub suggestion_limit: usize,
}

pub fn collection_title(source: ResultSource, category: CategoryFilter) -> String {
    match (source, category) {
        (ResultSource::Wishlist, _) => "My Wishlist".to_string(),
        (ResultSource::Catalog, CategoryFilter::All) => "All Watches".to_string(),
        (ResultSource::Catalog, CategoryFilter::Only(category)) => format!("{category} Watches"),
    }
}

pub fn product_card(product: &Product, ledger: &Ledger) -> ProductCard {
    ProductCard {
        id: product.id(),
        name: product.name().to_string(),
        category: product.category(),
        brand: product.brand(),
        movement: product.movement(),
        price: product.price(),
        price_label: price_label(product.price()),
        image: product.image().to_string(),
        is_new: product.is_new(),
        in_wishlist: ledger.wishlist.contains(product.id()),
    }
}

pub fn product_detail(product: &Product, ledger: &Ledger) -> ProductDetail {
    ProductDetail {
        id: product.id(),
        name: product.name().to_string(),
        category: product.category(),
        price: product.price(),
        price_label: price_label(product.price()),
        image: product.image().to_string(),
        description: product.description().to_string(),
        features: product.features().to_vec(),
        in_wishlist: ledger.wishlist.contains(product.id()),
    }
}

fn cart_line(line: &CartLine) -> CartLineView {
    let product = line.product();
    CartLineView {
        id: product.id(),
        name: product.name().to_string(),
        category: product.category(),
        image: product.image().to_string(),
        price_label: price_label(product.price()),
        quantity: line.quantity(),
        can_increment: line.quantity() < product.stock(),
    }
}

pub fn cart_view(ledger: &Ledger) -> CartView {
    let total = ledger.cart_total();
    CartView {
        lines: ledger.cart.lines().iter().map(cart_line).collect(),
        count: ledger.cart.len(),
        total,
        total_label: price_label(total),
        checkout_enabled: !ledger.cart.is_empty(),
    }
}

fn filter_panel(catalog: &Catalog, query: &QueryState) -> FilterPanel {
    let filters = &query.filters;
    FilterPanel {
        brands: catalog
            .brands()
            .into_iter()
            .map(|brand| FilterOption {
                value: brand,
                checked: filters.brands.contains(&brand),
            })
            .collect(),
        movements: catalog
            .movements()
            .into_iter()
            .map(|movement| FilterOption {
                value: movement,
                checked: filters.movements.contains(&movement),
            })
            .collect(),
        min_price: filters.price_range.min(),
        max_price: filters.price_range.max(),
        max_price_label: price_label(filters.price_range.max()),
        ceiling: filters.ceiling(),
    }
}

/// Build the full frame.
pub fn render(input: RenderInput<'_>) -> StoreView {
    let RenderInput {
        catalog,
        query,
        source,
        ledger,
        view_mode,
        quick_view,
        suggestion_limit,
    } = input;

    let visible = match source {
        ResultSource::Catalog => run_query(catalog.iter(), query),
        ResultSource::Wishlist => run_wishlist_query(ledger.wishlist.items(), query),
    };
    let products: Vec<ProductCard> = visible.iter().map(|p| product_card(p, ledger)).collect();

    let suggestions = suggest(catalog.iter(), &query.search, suggestion_limit)
        .into_iter()
        .map(|p| Suggestion {
            id: p.id(),
            name: p.name().to_string(),
            category: p.category(),
            image: p.image().to_string(),
            price_label: price_label(p.price()),
        })
        .collect();

    StoreView {
        title: collection_title(source, query.category),
        product_count_label: format!("{} Products", products.len()),
        view_mode,
        category: query.category,
        search: query.search.clone(),
        no_results: products.is_empty(),
        products,
        suggestions,
        filters: filter_panel(catalog, query),
        cart: cart_view(ledger),
        wishlist_count: ledger.wishlist.len(),
        quick_view: quick_view
            .and_then(|id| catalog.get(id))
            .map(|p| product_detail(p, ledger)),
    }
}

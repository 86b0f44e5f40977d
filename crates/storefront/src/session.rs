//! The storefront session: owns catalog, query state, ledger and notice bus,
//! and is the only thing the presentation layer talks to.

use std::sync::Arc;

use chronolux_catalog::{Brand, Catalog, Movement, Product};
use chronolux_core::{Entity, ProductId, StoreError, StoreResult};
use chronolux_events::{EventBus, EventEnvelope, InMemoryEventBus, Subscription};
use chronolux_ledger::{CartChange, Ledger, LedgerSnapshot, OrderReceipt, WishlistChange};
use chronolux_query::{
    CategoryFilter, PriceRange, QueryState, SortKey, run_query, run_wishlist_query, suggest,
};

use crate::config::StoreConfig;
use crate::notice::Notice;
use crate::view::{self, ProductDetail, RenderInput, ResultSource, StoreView, ViewMode};

pub type NoticeEnvelope = EventEnvelope<Notice>;
pub type NoticeBus = InMemoryEventBus<NoticeEnvelope>;

/// One shopper's session.
///
/// Every mutator runs to completion synchronously, except [`Session::checkout`],
/// which holds `&mut self` across its simulated delay.
#[derive(Debug)]
pub struct Session {
    config: StoreConfig,
    catalog: Arc<Catalog>,
    query: QueryState,
    source: ResultSource,
    ledger: Ledger,
    view_mode: ViewMode,
    quick_view: Option<ProductId>,
    bus: Arc<NoticeBus>,
    sequence: u64,
}

impl Session {
    /// Generate a catalog per `config` and start an empty session over it.
    pub fn new(config: StoreConfig) -> StoreResult<Self> {
        config.validate()?;
        let catalog = Catalog::generate(config.catalog_size, config.seed)?;
        Ok(Self::with_catalog(config, Arc::new(catalog)))
    }

    /// Start a session over an existing catalog.
    pub fn with_catalog(config: StoreConfig, catalog: Arc<Catalog>) -> Self {
        let query = QueryState::with_ceiling(config.price_ceiling);
        Self {
            config,
            catalog,
            query,
            source: ResultSource::Catalog,
            ledger: Ledger::new(),
            view_mode: ViewMode::default(),
            quick_view: None,
            bus: Arc::new(NoticeBus::new()),
            sequence: 0,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn query_state(&self) -> &QueryState {
        &self.query
    }

    pub fn source(&self) -> ResultSource {
        self.source
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        self.ledger.snapshot()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Subscribe to notices published from now on.
    pub fn subscribe(&self) -> Subscription<NoticeEnvelope> {
        self.bus.subscribe()
    }

    fn publish(&mut self, notice: Notice) -> Notice {
        self.sequence += 1;
        let envelope = EventEnvelope::wrap(self.sequence, notice.clone());
        if let Err(err) = self.bus.publish(envelope) {
            tracing::warn!(?err, kind = notice_kind(&notice), "failed to publish notice");
        }
        notice
    }

    fn lookup(&self, id: ProductId) -> Option<Product> {
        match self.catalog.require(id) {
            Ok(product) => Some(product.clone()),
            Err(err) => {
                skipped(&err, "product lookup");
                None
            }
        }
    }

    // ---- query state -------------------------------------------------------

    /// Select a category; also returns the listing to the catalog.
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.query.category = category;
        self.source = ResultSource::Catalog;
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.query.search = query.into();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.query.sort = sort;
    }

    pub fn set_price_range(&mut self, min: u64, max: u64) -> StoreResult<()> {
        let range = PriceRange::new(min, max);
        self.apply_range(range)
    }

    /// The price slider.
    pub fn set_max_price(&mut self, max: u64) -> StoreResult<()> {
        let range = self.query.filters.price_range.with_max(max);
        self.apply_range(range)
    }

    pub fn set_min_price(&mut self, min: u64) -> StoreResult<()> {
        let range = self.query.filters.price_range.with_min(min);
        self.apply_range(range)
    }

    fn apply_range(&mut self, range: StoreResult<PriceRange>) -> StoreResult<()> {
        match range {
            Ok(range) => {
                self.query.filters.price_range = range;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(%err, "price range unchanged");
                Err(err)
            }
        }
    }

    pub fn set_brand(&mut self, brand: Brand, checked: bool) {
        self.query.filters.set_brand(brand, checked);
    }

    pub fn set_movement(&mut self, movement: Movement, checked: bool) {
        self.query.filters.set_movement(movement, checked);
    }

    /// Clear price, brand and movement filters. Category, search and sort stay.
    pub fn reset_filters(&mut self) -> Notice {
        self.query.filters.reset();
        self.publish(Notice::FiltersReset)
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Switch the listing to the wishlist, unless it is empty.
    pub fn show_wishlist(&mut self) -> Notice {
        if self.ledger.wishlist.is_empty() {
            tracing::debug!(err = %StoreError::empty("wishlist"), "wishlist view skipped");
            return self.publish(Notice::WishlistEmpty);
        }
        self.source = ResultSource::Wishlist;
        let count = self.ledger.wishlist.len();
        self.publish(Notice::ShowingWishlist { count })
    }

    /// Visible products for the current source and query state.
    pub fn run_query(&self) -> Vec<&Product> {
        match self.source {
            ResultSource::Catalog => run_query(self.catalog.iter(), &self.query),
            ResultSource::Wishlist => run_wishlist_query(self.ledger.wishlist.items(), &self.query),
        }
    }

    /// Suggestion dropdown for the current search text.
    pub fn suggestions(&self) -> Vec<&Product> {
        suggest(
            self.catalog.iter(),
            &self.query.search,
            self.config.suggestion_limit,
        )
    }

    // ---- quick view --------------------------------------------------------

    pub fn quick_view(&self, id: ProductId) -> Option<ProductDetail> {
        self.catalog
            .get(id)
            .map(|product| view::product_detail(product, &self.ledger))
    }

    pub fn open_quick_view(&mut self, id: ProductId) -> Option<ProductDetail> {
        let detail = self.quick_view(id)?;
        self.quick_view = Some(id);
        Some(detail)
    }

    pub fn close_quick_view(&mut self) {
        self.quick_view = None;
    }

    /// Pick a suggestion: open its quick view and clear the search box.
    pub fn select_suggestion(&mut self, id: ProductId) -> Option<ProductDetail> {
        let detail = self.open_quick_view(id)?;
        self.query.search.clear();
        Some(detail)
    }

    // ---- ledger ------------------------------------------------------------

    /// Add one unit. Unknown ids are ignored.
    pub fn add_to_cart(&mut self, id: ProductId) -> Option<Notice> {
        let product = self.lookup(id)?;
        let outcome = self.ledger.add_to_cart(&product);
        self.cart_notice(&product, outcome)
    }

    /// Shift a cart line by `delta`. Missing lines are ignored.
    pub fn update_quantity(&mut self, id: ProductId, delta: i64) -> Option<Notice> {
        let product = self.ledger.cart.line(id).map(|line| line.product().clone());
        let outcome = self.ledger.update_quantity(id, delta);
        match (product, outcome) {
            // A plain quantity change has no toast; only removals and rejections do.
            (Some(product), Ok(CartChange::QuantityChanged { quantity, .. })) => {
                tracing::info!(product_id = %product.id(), quantity, "cart quantity updated");
                None
            }
            (Some(product), outcome) => self.cart_notice(&product, outcome),
            (None, Err(err)) => {
                skipped(&err, "quantity update");
                None
            }
            (None, Ok(_)) => None,
        }
    }

    pub fn remove_from_cart(&mut self, id: ProductId) -> Option<Notice> {
        match self.ledger.remove_from_cart(id) {
            Ok(_) => {
                tracing::info!(product_id = %id, "cart line removed");
                Some(self.publish(Notice::RemovedFromCart { product_id: id }))
            }
            Err(err) => {
                skipped(&err, "cart removal");
                None
            }
        }
    }

    fn cart_notice(&mut self, product: &Product, outcome: StoreResult<CartChange>) -> Option<Notice> {
        let product_id = product.id();
        let name = product.name().to_string();
        let notice = match outcome {
            Ok(CartChange::Added { .. }) => {
                tracing::info!(%product_id, "added to cart");
                Notice::AddedToCart { product_id, name }
            }
            Ok(CartChange::QuantityChanged { quantity, .. }) => {
                tracing::info!(%product_id, quantity, "cart quantity updated");
                Notice::QuantityUpdated {
                    product_id,
                    name,
                    quantity,
                }
            }
            Ok(CartChange::Removed { .. }) => {
                tracing::info!(%product_id, "cart line removed");
                Notice::RemovedFromCart { product_id }
            }
            Err(StoreError::StockExceeded { stock, requested, .. }) => {
                tracing::warn!(%product_id, stock, requested, "stock exceeded");
                Notice::StockExceeded { product_id, stock }
            }
            Err(err) => {
                skipped(&err, "cart operation");
                return None;
            }
        };
        Some(self.publish(notice))
    }

    /// Add or remove from the wishlist. Unknown ids are ignored.
    pub fn toggle_wishlist(&mut self, id: ProductId) -> Option<Notice> {
        let product = self.lookup(id)?;
        let product_id = product.id();
        let name = product.name().to_string();
        let notice = match self.ledger.toggle_wishlist(&product) {
            WishlistChange::Added => Notice::WishlistAdded { product_id, name },
            WishlistChange::Removed => Notice::WishlistRemoved { product_id, name },
        };
        tracing::info!(%product_id, wishlist = self.ledger.wishlist.len(), "wishlist toggled");
        Some(self.publish(notice))
    }

    pub fn cart_total(&self) -> u64 {
        self.ledger.cart_total()
    }

    /// Place the order after the configured delay.
    ///
    /// An empty cart is a no-op: no delay, no notice, no receipt.
    pub async fn checkout(&mut self) -> Option<OrderReceipt> {
        let delay = self.config.checkout_delay;
        match chronolux_ledger::checkout(&mut self.ledger.cart, delay).await {
            Ok(receipt) => {
                self.publish(Notice::OrderPlaced {
                    order_id: receipt.order_id,
                    total: receipt.total,
                });
                Some(receipt)
            }
            Err(err) => {
                tracing::debug!(%err, "checkout skipped");
                None
            }
        }
    }

    // ---- rendering ---------------------------------------------------------

    pub fn view(&self) -> StoreView {
        view::render(RenderInput {
            catalog: &self.catalog,
            query: &self.query,
            source: self.source,
            ledger: &self.ledger,
            view_mode: self.view_mode,
            quick_view: self.quick_view,
            suggestion_limit: self.config.suggestion_limit,
        })
    }
}

/// Log an operation that ended without a notice. Unknown ids are routine and
/// stay at debug; anything the shopper could have been told about is a warning.
fn skipped(err: &StoreError, operation: &'static str) {
    if err.is_user_visible() {
        tracing::warn!(%err, operation, "operation skipped");
    } else {
        tracing::debug!(%err, operation, "operation skipped");
    }
}

fn notice_kind(notice: &Notice) -> &'static str {
    use chronolux_events::Event;
    notice.event_type()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronolux_catalog::{Category, NewProduct};
    use std::time::Duration;

    fn quick_config() -> StoreConfig {
        StoreConfig {
            checkout_delay: Duration::ZERO,
            ..StoreConfig::default()
        }
    }

    fn watch(id: u32, price: u64, stock: u32) -> Product {
        Product::new(NewProduct {
            id: ProductId::new(id),
            name: format!("Omega Diver {id}"),
            category: Category::Sport,
            brand: Brand::Omega,
            price,
            movement: Movement::Automatic,
            image: String::new(),
            description: String::new(),
            features: Vec::new(),
            is_new: false,
            stock,
        })
        .unwrap()
    }

    fn session_with(products: Vec<Product>) -> Session {
        let catalog = Catalog::from_products(products).unwrap();
        Session::with_catalog(quick_config(), Arc::new(catalog))
    }

    #[test]
    fn add_add_then_large_decrement_empties_cart() {
        let mut session = session_with(vec![watch(7, 120_000, 3)]);
        let id = ProductId::new(7);

        assert!(matches!(session.add_to_cart(id), Some(Notice::AddedToCart { .. })));
        assert!(matches!(
            session.add_to_cart(id),
            Some(Notice::QuantityUpdated { quantity: 2, .. })
        ));
        assert_eq!(session.snapshot().cart_lines, vec![(id, 2)]);

        assert!(matches!(
            session.update_quantity(id, -5),
            Some(Notice::RemovedFromCart { .. })
        ));
        assert!(session.ledger().cart.is_empty());
    }

    #[test]
    fn single_stock_second_add_signals_stock_exceeded() {
        let mut session = session_with(vec![watch(1, 10, 1)]);
        let sub = session.subscribe();

        session.add_to_cart(ProductId::new(1));
        let second = session.add_to_cart(ProductId::new(1));
        assert!(matches!(second, Some(Notice::StockExceeded { stock: 1, .. })));
        assert_eq!(session.snapshot().cart_lines, vec![(ProductId::new(1), 1)]);

        let kinds: Vec<String> = sub.drain().iter().map(|e| e.event_type().to_string()).collect();
        assert_eq!(kinds, vec!["cart.item.added", "cart.item.stock_exceeded"]);
    }

    #[test]
    fn unknown_ids_are_silent() {
        let mut session = session_with(vec![watch(1, 10, 1)]);
        let sub = session.subscribe();
        let missing = ProductId::new(99);

        assert!(session.add_to_cart(missing).is_none());
        assert!(session.toggle_wishlist(missing).is_none());
        assert!(session.update_quantity(missing, 1).is_none());
        assert!(session.remove_from_cart(missing).is_none());
        assert!(sub.drain().is_empty());
    }

    #[test]
    fn plain_quantity_update_publishes_nothing() {
        let mut session = session_with(vec![watch(1, 10, 5)]);
        session.add_to_cart(ProductId::new(1));
        let sub = session.subscribe();

        assert!(session.update_quantity(ProductId::new(1), 2).is_none());
        assert_eq!(session.ledger().cart.quantity_of(ProductId::new(1)), 3);
        assert!(sub.drain().is_empty());

        assert!(matches!(
            session.update_quantity(ProductId::new(1), 3),
            Some(Notice::StockExceeded { .. })
        ));
        assert_eq!(session.ledger().cart.quantity_of(ProductId::new(1)), 3);
    }

    #[test]
    fn inverted_price_range_is_ignored() {
        let mut session = session_with(vec![watch(1, 10, 1)]);
        session.set_price_range(100, 200).unwrap();
        assert!(session.set_max_price(50).is_err());
        assert_eq!(
            session.query_state().filters.price_range,
            PriceRange::new(100, 200).unwrap()
        );
    }

    #[test]
    fn empty_wishlist_keeps_catalog_listing() {
        let mut session = session_with(vec![watch(1, 10, 1), watch(2, 20, 1)]);
        assert_eq!(session.show_wishlist(), Notice::WishlistEmpty);
        assert_eq!(session.source(), ResultSource::Catalog);

        session.toggle_wishlist(ProductId::new(2));
        assert_eq!(session.show_wishlist(), Notice::ShowingWishlist { count: 1 });
        assert_eq!(session.view().title, "My Wishlist");
        assert_eq!(session.run_query().len(), 1);

        session.set_category(CategoryFilter::All);
        assert_eq!(session.source(), ResultSource::Catalog);
        assert_eq!(session.run_query().len(), 2);
    }

    #[test]
    fn wishlist_view_lists_every_saved_item_whatever_the_category() {
        let sport = watch(1, 10, 1);
        let dress = Product::new(NewProduct {
            id: ProductId::new(2),
            name: "Cartier Classic".to_string(),
            category: Category::Dress,
            brand: Brand::Cartier,
            price: 20,
            movement: Movement::Quartz,
            image: String::new(),
            description: String::new(),
            features: Vec::new(),
            is_new: false,
            stock: 1,
        })
        .unwrap();
        let mut session = session_with(vec![sport, dress]);
        session.toggle_wishlist(ProductId::new(1));
        session.toggle_wishlist(ProductId::new(2));
        session.set_category(CategoryFilter::Only(Category::Sport));
        session.set_search("diver");

        assert_eq!(session.show_wishlist(), Notice::ShowingWishlist { count: 2 });
        assert_eq!(session.run_query().len(), 2);
        let view = session.view();
        assert_eq!(view.title, "My Wishlist");
        assert_eq!(view.products.len(), 2);

        session.set_movement(Movement::Quartz, true);
        let visible: Vec<ProductId> = session.run_query().iter().map(|p| p.id()).collect();
        assert_eq!(visible, vec![ProductId::new(2)]);
    }

    #[test]
    fn huge_quantity_delta_is_a_stock_rejection() {
        let mut session = session_with(vec![watch(1, 10, 4)]);
        session.add_to_cart(ProductId::new(1));
        let before = session.snapshot();

        assert!(matches!(
            session.update_quantity(ProductId::new(1), i64::MAX),
            Some(Notice::StockExceeded { stock: 4, .. })
        ));
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn selecting_a_suggestion_opens_quick_view_and_clears_search() {
        let mut session = session_with(vec![watch(1, 10, 1), watch(2, 20, 1)]);
        session.set_search("diver 2");
        let suggestion = session.suggestions()[0].id();
        assert_eq!(suggestion, ProductId::new(2));

        let detail = session.select_suggestion(suggestion).unwrap();
        assert_eq!(detail.id, ProductId::new(2));
        assert!(session.query_state().search.is_empty());
        assert_eq!(session.view().quick_view.map(|d| d.id), Some(ProductId::new(2)));

        session.close_quick_view();
        assert!(session.view().quick_view.is_none());
    }

    #[tokio::test]
    async fn checkout_empties_cart_and_reports_total() {
        let mut session = session_with(vec![watch(1, 1_000, 5), watch(2, 300, 5)]);
        session.add_to_cart(ProductId::new(1));
        session.add_to_cart(ProductId::new(1));
        session.add_to_cart(ProductId::new(2));
        let total = session.cart_total();
        let sub = session.subscribe();

        let receipt = session.checkout().await.unwrap();
        assert_eq!(receipt.total, total);
        assert_eq!(session.cart_total(), 0);
        assert!(session.ledger().cart.is_empty());

        let placed = sub.poll().unwrap();
        assert_eq!(
            placed.payload(),
            &Notice::OrderPlaced {
                order_id: receipt.order_id,
                total: 2_300
            }
        );
    }

    #[tokio::test]
    async fn checkout_on_empty_cart_is_a_no_op() {
        let mut session = session_with(vec![watch(1, 1_000, 5)]);
        session.toggle_wishlist(ProductId::new(1));
        let before = session.snapshot();
        let sub = session.subscribe();

        assert!(session.checkout().await.is_none());
        assert_eq!(session.snapshot(), before);
        assert!(sub.drain().is_empty());
    }
}

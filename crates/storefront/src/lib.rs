//! Storefront session over the catalog, query engine and ledger.
//!
//! [`Session`] is the single entry point; [`view::render`] turns its state into
//! a serializable frame, and [`Notice`]s flow out over the session's bus.

pub mod config;
pub mod format;
pub mod notice;
pub mod session;
pub mod view;

pub use config::StoreConfig;
pub use format::{group_digits, price_label};
pub use notice::{Notice, Severity};
pub use session::{NoticeBus, NoticeEnvelope, Session};
pub use view::{ProductDetail, ResultSource, StoreView, ViewMode};

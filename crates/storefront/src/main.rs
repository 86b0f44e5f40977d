use anyhow::Context;

use chronolux_catalog::Brand;
use chronolux_core::ProductId;
use chronolux_query::{CategoryFilter, SortKey};
use chronolux_storefront::{Session, StoreConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = StoreConfig::from_env().context("reading CHRONOLUX_* configuration")?;
    chronolux_observability::init_with(config.log_format);

    let mut session = Session::new(config).context("building storefront session")?;
    let notices = session.subscribe();
    tracing::info!(products = session.catalog().len(), "storefront ready");

    session.set_search("omega");
    session.set_sort(SortKey::PriceLow);
    let picks: Vec<ProductId> = session.run_query().iter().take(2).map(|p| p.id_typed()).collect();
    for id in &picks {
        session.add_to_cart(*id);
    }

    session.set_search("");
    session.set_category("luxury".parse::<CategoryFilter>()?);
    session.set_brand(Brand::Rolex, true);
    if let Some(id) = session.run_query().first().map(|p| p.id_typed()) {
        session.toggle_wishlist(id);
    }
    session.show_wishlist();

    let frame = serde_json::to_string_pretty(&session.view()).context("serializing view")?;
    println!("{frame}");

    if let Some(receipt) = session.checkout().await {
        println!("{}", serde_json::to_string_pretty(&receipt)?);
    }

    for envelope in notices.drain() {
        let notice = envelope.payload();
        tracing::info!(
            seq = envelope.sequence_number(),
            kind = envelope.event_type(),
            severity = ?notice.severity(),
            "{}",
            notice.message()
        );
    }
    Ok(())
}

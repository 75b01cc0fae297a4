use std::sync::Arc;

use anyhow::Context;
use listings_core::Status;
use listings_engine::{Coordinator, FetchSettings, ReqwestFetcher};
use listings_logging::LogDestination;
use log::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    listings_logging::initialize(LogDestination::Terminal);

    let mut settings = FetchSettings::default();
    if let Some(endpoint) = std::env::args().nth(1) {
        settings.endpoint = endpoint;
    }
    info!("fetching listings from {}", settings.endpoint);

    let fetcher = Arc::new(ReqwestFetcher::new(settings).context("building http client")?);
    let coordinator = Coordinator::spawn(fetcher);
    let mut views = coordinator.subscribe();

    let outcome = loop {
        let view = views.borrow_and_update().clone();
        match view.status {
            Status::Loading => {}
            Status::Done | Status::Error => break view,
        }
        views.changed().await.context("coordinator stopped")?;
    };

    coordinator.teardown();

    match outcome.status {
        Status::Done => {
            println!("{}", outcome.response);
            for listing in &outcome.listings {
                println!(
                    "  {:>8}  {:<4}  {:>12.0}  {}",
                    listing.id, listing.kind, listing.price, listing.img_src_url
                );
            }
            Ok(())
        }
        _ => anyhow::bail!("fetch failed; see log for detail"),
    }
}

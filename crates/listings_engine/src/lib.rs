//! Listings engine: network fetcher and async fetch coordination.
mod coordinator;
mod fetch;
mod types;

pub use coordinator::Coordinator;
pub use fetch::{FetchSettings, ListingsFetcher, ReqwestFetcher};
pub use types::FetchError;

use crate::Listing;

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// A new fetch attempt was requested (construction or an explicit retry).
    FetchRequested,
    /// The fetcher resolved with the listings in server-provided order.
    FetchSucceeded(Vec<Listing>),
    /// The fetcher failed; the attempt is terminal until the next request.
    FetchFailed,
}

use crate::{Listing, Status};

/// Snapshot published to observers after every state change.
///
/// The three fields are the three observable slots: a human-readable
/// response message, the fetch status and the ordered listings. Carrying
/// them in one value keeps status and listings consistent with each other.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OverviewViewModel {
    pub response: String,
    pub status: Status,
    pub listings: Vec<Listing>,
}

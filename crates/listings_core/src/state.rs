use crate::view_model::OverviewViewModel;
use crate::Listing;

/// Lifecycle of the most recent fetch attempt.
///
/// Transitions are `Loading -> Done` or `Loading -> Error` only; a finished
/// attempt never flips between `Done` and `Error` without a new request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Loading,
    Error,
    Done,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    status: Status,
    listings: Vec<Listing>,
    response: String,
    fetch_in_flight: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Current listings, never absent: empty until a fetch succeeds and
    /// emptied again when one fails.
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn fetch_in_flight(&self) -> bool {
        self.fetch_in_flight
    }

    pub fn view(&self) -> OverviewViewModel {
        OverviewViewModel {
            response: self.response.clone(),
            status: self.status,
            listings: self.listings.clone(),
        }
    }

    pub(crate) fn begin_fetch(&mut self) {
        self.status = Status::Loading;
        self.fetch_in_flight = true;
    }

    pub(crate) fn complete_fetch(&mut self, listings: Vec<Listing>) {
        self.response = format!("Success: {} listings retrieved", listings.len());
        self.status = Status::Done;
        self.listings = listings;
        self.fetch_in_flight = false;
    }

    pub(crate) fn fail_fetch(&mut self) {
        self.status = Status::Error;
        self.listings.clear();
        self.fetch_in_flight = false;
    }
}

//! Listings core: pure state machine and view-model helpers.
mod effect;
mod listing;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use listing::Listing;
pub use msg::Msg;
pub use state::{AppState, Status};
pub use update::update;
pub use view_model::OverviewViewModel;

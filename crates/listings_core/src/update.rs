use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FetchRequested => {
            // Only one attempt runs at a time; a request while one is in
            // flight is dropped rather than queued.
            if state.fetch_in_flight() {
                Vec::new()
            } else {
                state.begin_fetch();
                vec![Effect::StartFetch]
            }
        }
        Msg::FetchSucceeded(listings) => {
            // Outcomes without a matching request are stale (e.g. delivered
            // after teardown) and must not mutate observable state.
            if state.fetch_in_flight() {
                state.complete_fetch(listings);
            }
            Vec::new()
        }
        Msg::FetchFailed => {
            if state.fetch_in_flight() {
                state.fail_fetch();
            }
            Vec::new()
        }
    };

    (state, effects)
}

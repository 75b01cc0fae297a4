use std::sync::Once;

use listings_core::{update, AppState, Effect, Listing, Msg, Status};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(listings_logging::initialize_for_tests);
}

fn listing(id: &str, price: f64) -> Listing {
    Listing {
        id: id.to_string(),
        img_src_url: format!("http://img.example.com/{id}.jpg"),
        kind: "rent".to_string(),
        price,
    }
}

fn in_flight() -> AppState {
    let (state, _) = update(AppState::new(), Msg::FetchRequested);
    state
}

#[test]
fn fetch_request_sets_loading_and_starts_fetch() {
    init_logging();
    let state = AppState::new();

    let (next, effects) = update(state, Msg::FetchRequested);

    assert_eq!(next.status(), Status::Loading);
    assert!(next.listings().is_empty());
    assert!(next.fetch_in_flight());
    assert_eq!(effects, vec![Effect::StartFetch]);
}

#[test]
fn duplicate_request_while_in_flight_is_dropped() {
    init_logging();
    let state = in_flight();

    let (next, effects) = update(state.clone(), Msg::FetchRequested);

    assert_eq!(next, state);
    assert!(effects.is_empty());
}

#[test]
fn success_sets_done_and_keeps_server_order() {
    init_logging();
    let fetched = vec![
        listing("424905", 1_899_000.0),
        listing("424906", 3_199_000.0),
        listing("424907", 2_700_000.0),
    ];

    let (next, effects) = update(in_flight(), Msg::FetchSucceeded(fetched.clone()));

    assert_eq!(next.status(), Status::Done);
    assert_eq!(next.listings(), fetched.as_slice());
    assert_eq!(next.response(), "Success: 3 listings retrieved");
    assert!(!next.fetch_in_flight());
    assert!(effects.is_empty());
}

#[test]
fn failure_sets_error_and_empties_listings() {
    init_logging();
    let (state, _) = update(in_flight(), Msg::FetchSucceeded(vec![listing("1", 10.0)]));
    let (state, _) = update(state, Msg::FetchRequested);

    let (next, effects) = update(state, Msg::FetchFailed);

    assert_eq!(next.status(), Status::Error);
    assert_eq!(next.listings(), &[] as &[Listing]);
    assert!(effects.is_empty());
}

#[test]
fn failure_leaves_response_message_untouched() {
    init_logging();
    let (next, _) = update(in_flight(), Msg::FetchFailed);

    assert_eq!(next.status(), Status::Error);
    assert_eq!(next.response(), "");
}

#[test]
fn stale_success_without_request_is_ignored() {
    init_logging();
    let state = AppState::new();

    let (next, effects) = update(state.clone(), Msg::FetchSucceeded(vec![listing("9", 1.0)]));

    assert_eq!(next, state);
    assert!(effects.is_empty());
}

#[test]
fn stale_failure_never_flips_done_to_error() {
    init_logging();
    let (done, _) = update(in_flight(), Msg::FetchSucceeded(vec![listing("1", 10.0)]));

    let (next, effects) = update(done.clone(), Msg::FetchFailed);

    assert_eq!(next, done);
    assert_eq!(next.status(), Status::Done);
    assert!(effects.is_empty());
}

#[test]
fn new_request_after_error_starts_fresh_attempt() {
    init_logging();
    let (errored, _) = update(in_flight(), Msg::FetchFailed);

    let (next, effects) = update(errored, Msg::FetchRequested);
    assert_eq!(next.status(), Status::Loading);
    assert_eq!(effects, vec![Effect::StartFetch]);

    let (next, _) = update(next, Msg::FetchSucceeded(vec![listing("2", 20.0)]));
    assert_eq!(next.status(), Status::Done);
    assert_eq!(next.listings().len(), 1);
}

#[test]
fn view_exposes_the_three_observable_slots() {
    init_logging();
    let fetched = vec![listing("424905", 1_899_000.0)];
    let (state, _) = update(in_flight(), Msg::FetchSucceeded(fetched.clone()));

    let view = state.view();

    assert_eq!(view.status, Status::Done);
    assert_eq!(view.listings, fetched);
    assert_eq!(view.response, "Success: 1 listings retrieved");
}

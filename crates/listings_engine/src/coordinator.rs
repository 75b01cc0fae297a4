use std::sync::Arc;

use listings_core::{update, AppState, Effect, Listing, Msg, OverviewViewModel, Status};
use log::{info, warn};
use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;

use crate::ListingsFetcher;

/// Owns the fetch lifecycle and republishes view-model snapshots.
///
/// One fetch starts on construction; observers subscribe to a watch channel
/// carrying [`OverviewViewModel`] snapshots. State lives on a single actor
/// task, so mutations are serialized without locking. `teardown` cancels
/// the scope: an in-flight fetch is aborted and its outcome, should the
/// network call still resolve, is discarded without touching the snapshot.
pub struct Coordinator {
    msg_tx: mpsc::UnboundedSender<Msg>,
    view_rx: watch::Receiver<OverviewViewModel>,
    cancel: CancellationToken,
}

impl Coordinator {
    /// Spawns the coordinator on the current tokio runtime and immediately
    /// requests the first fetch.
    pub fn spawn(fetcher: Arc<dyn ListingsFetcher>) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let state = AppState::new();
        let (view_tx, view_rx) = watch::channel(state.view());
        let cancel = CancellationToken::new();

        tokio::spawn(run_loop(
            state,
            msg_rx,
            msg_tx.clone(),
            view_tx,
            fetcher,
            cancel.clone(),
        ));

        let _ = msg_tx.send(Msg::FetchRequested);

        Self {
            msg_tx,
            view_rx,
            cancel,
        }
    }

    /// Subscribe to snapshots; the receiver always holds the latest value.
    pub fn subscribe(&self) -> watch::Receiver<OverviewViewModel> {
        self.view_rx.clone()
    }

    /// Latest snapshot without subscribing.
    pub fn view(&self) -> OverviewViewModel {
        self.view_rx.borrow().clone()
    }

    pub fn status(&self) -> Status {
        self.view_rx.borrow().status
    }

    pub fn listings(&self) -> Vec<Listing> {
        self.view_rx.borrow().listings.clone()
    }

    pub fn response(&self) -> String {
        self.view_rx.borrow().response.clone()
    }

    /// Request another fetch attempt. Dropped while one is in flight.
    pub fn refetch(&self) {
        let _ = self.msg_tx.send(Msg::FetchRequested);
    }

    /// Cancel the coordinator scope, aborting any in-flight fetch. Safe to
    /// call more than once.
    pub fn teardown(&self) {
        self.cancel.cancel();
    }
}

impl Drop for Coordinator {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn run_loop(
    mut state: AppState,
    mut msg_rx: mpsc::UnboundedReceiver<Msg>,
    msg_tx: mpsc::UnboundedSender<Msg>,
    view_tx: watch::Sender<OverviewViewModel>,
    fetcher: Arc<dyn ListingsFetcher>,
    cancel: CancellationToken,
) {
    loop {
        let msg = tokio::select! {
            _ = cancel.cancelled() => break,
            msg = msg_rx.recv() => match msg {
                Some(msg) => msg,
                None => break,
            },
        };
        // Cancellation wins over a message that raced it.
        if cancel.is_cancelled() {
            break;
        }

        let (next, effects) = update(state, msg);
        // Publish only when the observable snapshot actually changed, so
        // internal bookkeeping never wakes observers.
        let view = next.view();
        if view != *view_tx.borrow() {
            view_tx.send_replace(view);
        }
        state = next;

        for effect in effects {
            match effect {
                Effect::StartFetch => {
                    start_fetch(fetcher.clone(), msg_tx.clone(), cancel.child_token());
                }
            }
        }
    }
}

fn start_fetch(
    fetcher: Arc<dyn ListingsFetcher>,
    msg_tx: mpsc::UnboundedSender<Msg>,
    cancel: CancellationToken,
) {
    tokio::spawn(async move {
        let outcome = tokio::select! {
            _ = cancel.cancelled() => return,
            outcome = fetcher.fetch() => outcome,
        };
        let msg = match outcome {
            Ok(listings) => {
                info!("fetch resolved with {} listings", listings.len());
                Msg::FetchSucceeded(listings)
            }
            Err(err) => {
                // Detail stays in the log; observers only see Status::Error.
                warn!("fetch failed: {err}");
                Msg::FetchFailed
            }
        };
        let _ = msg_tx.send(msg);
    });
}

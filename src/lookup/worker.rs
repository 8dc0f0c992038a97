//! Lookup worker thread
//!
//! Receives search requests via channel, runs them against the catalog and
//! sends the results back. Requests that queue up while a batch is being
//! answered are coalesced: only the newest request per slot is answered.

use std::collections::HashMap;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use super::catalog::Catalog;
use super::lookup_state::{LookupRequest, LookupResponse};

/// Spawn the lookup worker thread
pub fn spawn_worker(
    catalog: Catalog,
    request_rx: Receiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
) {
    std::thread::spawn(move || {
        worker_loop(&catalog, request_rx, response_tx);
    });
}

/// Main worker loop - processes requests until the channel is closed
fn worker_loop(
    catalog: &Catalog,
    request_rx: Receiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
) {
    while let Ok(first) = request_rx.recv() {
        let batch = drain_batch(first, &request_rx);

        for request in batch {
            let LookupRequest::Search {
                request_id,
                slot,
                query,
                kinds,
                limit,
            } = request;

            let places = catalog.search(&query, &kinds, limit);
            let response = LookupResponse {
                request_id,
                slot,
                places,
            };
            if response_tx.send(response).is_err() {
                log::debug!("Lookup receiver dropped; worker stopping");
                return;
            }
        }
    }

    log::debug!("Lookup worker thread shutting down");
}

/// Collect everything already queued and keep the newest request per slot
fn drain_batch(first: LookupRequest, request_rx: &Receiver<LookupRequest>) -> Vec<LookupRequest> {
    let mut latest: HashMap<usize, LookupRequest> = HashMap::new();
    let mut order: Vec<usize> = Vec::new();

    let mut push = |request: LookupRequest| {
        let LookupRequest::Search { slot, .. } = &request;
        let slot = *slot;
        if let Some(superseded) = latest.insert(slot, request) {
            let LookupRequest::Search { request_id, .. } = superseded;
            log::debug!("Skipping superseded lookup {} on slot {}", request_id, slot);
        } else {
            order.push(slot);
        }
    };

    push(first);
    loop {
        match request_rx.try_recv() {
            Ok(request) => push(request),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
        }
    }

    order
        .into_iter()
        .filter_map(|slot| latest.remove(&slot))
        .collect()
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;

//! Tests for the lookup worker

use std::sync::mpsc;

use super::*;
use crate::lookup::PlaceKind;

fn search(request_id: u64, slot: usize, query: &str) -> LookupRequest {
    LookupRequest::Search {
        request_id,
        slot,
        query: query.to_string(),
        kinds: vec![PlaceKind::Airport],
        limit: 5,
    }
}

#[test]
fn test_worker_answers_request() {
    let catalog = Catalog::builtin().unwrap();
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();

    request_tx.send(search(1, 0, "lhr")).unwrap();
    drop(request_tx);
    worker_loop(&catalog, request_rx, response_tx);

    let responses: Vec<LookupResponse> = response_rx.iter().collect();
    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0].request_id, 1);
    assert_eq!(responses[0].slot, 0);
    assert_eq!(responses[0].places[0].id, "LHR");
}

#[test]
fn test_queued_requests_on_same_slot_are_coalesced() {
    let catalog = Catalog::builtin().unwrap();
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();

    request_tx.send(search(1, 0, "lo")).unwrap();
    request_tx.send(search(2, 0, "lon")).unwrap();
    request_tx.send(search(3, 0, "lond")).unwrap();
    drop(request_tx);
    worker_loop(&catalog, request_rx, response_tx);

    let ids: Vec<u64> = response_rx.iter().map(|r| r.request_id).collect();
    assert_eq!(ids, vec![3]);
}

#[test]
fn test_requests_on_different_slots_are_all_answered() {
    let catalog = Catalog::builtin().unwrap();
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();

    request_tx.send(search(1, 0, "lhr")).unwrap();
    request_tx.send(search(2, 1, "jfk")).unwrap();
    request_tx.send(search(3, 0, "cdg")).unwrap();
    drop(request_tx);
    worker_loop(&catalog, request_rx, response_tx);

    let ids: Vec<(usize, u64)> = response_rx.iter().map(|r| (r.slot, r.request_id)).collect();
    assert_eq!(ids, vec![(0, 3), (1, 2)]);
}

#[test]
fn test_worker_stops_when_receiver_dropped() {
    let catalog = Catalog::builtin().unwrap();
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    drop(response_rx);

    request_tx.send(search(1, 0, "lhr")).unwrap();
    request_tx.send(search(2, 1, "jfk")).unwrap();

    // Returns even though the request channel is still open
    worker_loop(&catalog, request_rx, response_tx);
}

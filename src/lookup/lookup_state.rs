use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::catalog::{Catalog, Place, PlaceKind};
use super::worker;

/// Request sent to the lookup worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupRequest {
    Search {
        request_id: u64,
        /// Caller-chosen channel; a newer request on the same slot supersedes older ones
        slot: usize,
        query: String,
        kinds: Vec<PlaceKind>,
        limit: usize,
    },
}

/// Results for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResponse {
    pub request_id: u64,
    pub slot: usize,
    pub places: Vec<Place>,
}

/// Handle to the background lookup worker
///
/// Dropping the service closes the request channel, which stops the worker.
#[derive(Debug)]
pub struct LookupService {
    request_tx: Sender<LookupRequest>,
    response_rx: Receiver<LookupResponse>,
    next_request_id: u64,
}

impl LookupService {
    pub fn spawn(catalog: Catalog) -> Self {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();

        worker::spawn_worker(catalog, request_rx, response_tx);

        Self {
            request_tx,
            response_rx,
            next_request_id: 0,
        }
    }

    /// Queue a search. Returns the request id, or `None` if the worker is gone.
    pub fn request(
        &mut self,
        slot: usize,
        query: &str,
        kinds: &[PlaceKind],
        limit: usize,
    ) -> Option<u64> {
        self.next_request_id += 1;
        let request_id = self.next_request_id;

        let request = LookupRequest::Search {
            request_id,
            slot,
            query: query.to_string(),
            kinds: kinds.to_vec(),
            limit,
        };

        match self.request_tx.send(request) {
            Ok(()) => {
                log::debug!("Lookup {} on slot {}: {:?}", request_id, slot, query);
                Some(request_id)
            }
            Err(_) => {
                log::warn!("Lookup worker is gone; dropped request {}", request_id);
                None
            }
        }
    }

    /// Drain every response that has arrived so far without blocking
    pub fn poll(&self) -> Vec<LookupResponse> {
        let mut responses = Vec::new();
        loop {
            match self.response_rx.try_recv() {
                Ok(response) => responses.push(response),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        responses
    }
}

#[cfg(test)]
#[path = "lookup_state_tests.rs"]
mod lookup_state_tests;

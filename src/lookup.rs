//! Location lookups
//!
//! Turns typed text into candidate places. Searches run on a background
//! thread; each response carries the id of the request that produced it so
//! callers can drop responses that a newer request has superseded.

mod catalog;
mod lookup_state;
mod worker;

pub use catalog::{Catalog, Place, PlaceKind};
pub use lookup_state::{LookupRequest, LookupResponse, LookupService};

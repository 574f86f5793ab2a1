//! Address resolution: free-text place search with debouncing.
//!
//! Wraps an external place-search provider behind the [`PlaceSearch`]
//! trait. Candidates are ranked ascending by distance from a reference
//! point when one is available. [`SearchDebouncer`] adds the
//! keystroke-level quiet period and drops superseded in-flight queries.

mod client;
mod debounce;
mod error;
mod types;

#[cfg(test)]
pub mod mock;

pub use client::{GeocodeClient, GeocodeConfig, MIN_QUERY_CHARS, PlaceSearch};
pub use debounce::{DEBOUNCE_DELAY, SearchDebouncer};
pub use error::GeocodeError;
pub use types::{PlaceCandidate, rank_candidates};

//! Mock place search for testing without a provider.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::Coordinate;

use super::client::PlaceSearch;
use super::error::GeocodeError;
use super::types::PlaceCandidate;

/// Place search that serves a fixed candidate list (or a fixed failure) and
/// counts how many times it was asked.
#[derive(Default)]
pub struct MockPlaceSearch {
    results: Vec<PlaceCandidate>,
    fail: bool,
    calls: AtomicUsize,
}

impl MockPlaceSearch {
    /// Serve these candidates for every query.
    pub fn with_results(results: Vec<PlaceCandidate>) -> Self {
        Self {
            results,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// Fail every query with a provider error.
    pub fn failing() -> Self {
        Self {
            results: Vec::new(),
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of search calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PlaceSearch for MockPlaceSearch {
    async fn search(
        &self,
        _query: &str,
        _reference: Option<Coordinate>,
    ) -> Result<Vec<PlaceCandidate>, GeocodeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(GeocodeError::Provider {
                status: 503,
                message: "mock outage".into(),
            });
        }

        Ok(self.results.clone())
    }
}

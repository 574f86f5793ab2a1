//! Debounced address search.
//!
//! Every keystroke submits a new query; a submission only fires after a
//! fixed quiet period, and only the newest submission's results are ever
//! delivered. Supersession is tracked with a monotonic generation counter
//! checked both after the quiet period and again after the provider call,
//! so a stale in-flight response is dropped rather than raced.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::domain::Coordinate;

use super::client::PlaceSearch;
use super::types::PlaceCandidate;

/// Quiet period between the last keystroke and the search firing.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(500);

/// Debounced front-end to a [`PlaceSearch`] provider.
#[derive(Clone)]
pub struct SearchDebouncer<P> {
    provider: Arc<P>,
    generation: Arc<AtomicU64>,
    delay: Duration,
}

impl<P: PlaceSearch> SearchDebouncer<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self::with_delay(provider, DEBOUNCE_DELAY)
    }

    /// Use a custom quiet period (for testing).
    pub fn with_delay(provider: Arc<P>, delay: Duration) -> Self {
        Self {
            provider,
            generation: Arc::new(AtomicU64::new(0)),
            delay,
        }
    }

    /// Submit a keystroke's query.
    ///
    /// Resolves to `None` if a newer query was submitted while this one was
    /// waiting or in flight. Provider failure degrades to `Some(empty)`,
    /// never an error.
    pub async fn submit(
        &self,
        query: String,
        reference: Option<Coordinate>,
    ) -> Option<Vec<PlaceCandidate>> {
        let my_generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        tokio::time::sleep(self.delay).await;

        // Superseded while waiting out the quiet period
        if self.generation.load(Ordering::SeqCst) != my_generation {
            return None;
        }

        let results = match self.provider.search(&query, reference).await {
            Ok(results) => results,
            Err(e) => {
                tracing::warn!(query = %query, error = %e, "address search failed; returning no results");
                Vec::new()
            }
        };

        // Superseded while the provider call was in flight
        if self.generation.load(Ordering::SeqCst) != my_generation {
            return None;
        }

        Some(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocode::mock::MockPlaceSearch;

    fn candidate(name: &str) -> PlaceCandidate {
        PlaceCandidate {
            name: name.into(),
            address: name.into(),
            coordinate: Coordinate::new(-33.86, 151.21),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn lone_query_delivers_after_quiet_period() {
        let mock = Arc::new(MockPlaceSearch::with_results(vec![candidate("hit")]));
        let debouncer = SearchDebouncer::new(mock.clone());

        let results = debouncer.submit("opera".into(), None).await;

        assert_eq!(results.unwrap().len(), 1);
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn newer_query_supersedes_older() {
        let mock = Arc::new(MockPlaceSearch::with_results(vec![candidate("hit")]));
        let debouncer = SearchDebouncer::new(mock.clone());

        let first = debouncer.submit("oper".into(), None);
        let second = debouncer.submit("opera".into(), None);
        let (first, second) = tokio::join!(first, second);

        assert!(first.is_none(), "superseded query must be dropped");
        assert_eq!(second.unwrap().len(), 1);
        // The superseded query never reached the provider
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn only_newest_of_many_wins() {
        let mock = Arc::new(MockPlaceSearch::with_results(vec![candidate("hit")]));
        let debouncer = SearchDebouncer::new(mock.clone());

        let a = debouncer.submit("o".into(), None);
        let b = debouncer.submit("op".into(), None);
        let c = debouncer.submit("ope".into(), None);
        let (a, b, c) = tokio::join!(a, b, c);

        assert!(a.is_none());
        assert!(b.is_none());
        assert!(c.is_some());
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn provider_failure_degrades_to_empty() {
        let mock = Arc::new(MockPlaceSearch::failing());
        let debouncer = SearchDebouncer::new(mock.clone());

        let results = debouncer.submit("opera".into(), None).await;

        assert_eq!(results, Some(Vec::new()));
        assert_eq!(mock.calls(), 1);
    }
}

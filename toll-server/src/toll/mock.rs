//! Mock toll pricing for testing without API access.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::VehicleClass;

use super::aggregate::TollQuoter;
use super::error::TollError;
use super::types::{TollEstimate, TollPoint};

/// Scripted toll quoter.
///
/// Responses are served in the order they were enqueued; once the script
/// runs out every further call returns a zero estimate. Also records call
/// counts and the leg endpoints it was asked about.
#[derive(Default)]
pub struct MockTollClient {
    script: Mutex<VecDeque<Result<TollEstimate, TollError>>>,
    seen: Mutex<Vec<(String, String)>>,
    calls: AtomicUsize,
}

impl MockTollClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a successful estimate.
    pub fn enqueue_ok(&self, amount: f64, summary: &str) {
        self.script
            .lock()
            .unwrap()
            .push_back(Ok(TollEstimate::new(amount, summary)));
    }

    /// Enqueue a transport-level failure.
    pub fn enqueue_err(&self) {
        self.script.lock().unwrap().push_back(Err(TollError::Json {
            message: "mock failure".into(),
            body: None,
        }));
    }

    /// Number of quote calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// (origin name, destination name) of every call, in call order.
    pub fn seen_points(&self) -> Vec<(String, String)> {
        self.seen.lock().unwrap().clone()
    }
}

impl TollQuoter for MockTollClient {
    async fn quote(
        &self,
        origin: &TollPoint,
        destination: &TollPoint,
        _class: VehicleClass,
    ) -> Result<TollEstimate, TollError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen
            .lock()
            .unwrap()
            .push((origin.name.clone(), destination.name.clone()));

        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(TollEstimate::new(0.0, "")))
    }
}

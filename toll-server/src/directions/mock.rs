//! Mock directions provider for testing without API access.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::domain::Coordinate;

use super::client::{Directions, Polyline, RouteLeg};
use super::error::DirectionsError;

struct MockLeg {
    from: Coordinate,
    delay: Duration,
    leg: RouteLeg,
}

/// Directions provider serving scripted legs keyed by origin coordinate.
///
/// Legs for unknown origins fail with `NoRoute`. An optional per-leg delay
/// lets tests control completion order under paused time.
#[derive(Default)]
pub struct MockDirections {
    legs: Mutex<Vec<MockLeg>>,
    calls: AtomicUsize,
}

impl MockDirections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script an immediately resolving leg starting at `from`.
    pub fn resolve(&self, from: Coordinate, polyline: Polyline, distance_m: f64, duration_secs: f64) {
        self.resolve_after(from, Duration::ZERO, polyline, distance_m, duration_secs);
    }

    /// Script a leg starting at `from` that resolves after `delay`.
    pub fn resolve_after(
        &self,
        from: Coordinate,
        delay: Duration,
        polyline: Polyline,
        distance_m: f64,
        duration_secs: f64,
    ) {
        self.legs.lock().unwrap().push(MockLeg {
            from,
            delay,
            leg: RouteLeg {
                polyline,
                distance_m,
                duration_secs,
            },
        });
    }

    /// Number of leg requests made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Directions for MockDirections {
    async fn route_leg(
        &self,
        from: Coordinate,
        _to: Coordinate,
    ) -> Result<RouteLeg, DirectionsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let scripted = {
            let legs = self.legs.lock().unwrap();
            legs.iter()
                .find(|l| l.from == from)
                .map(|l| (l.delay, l.leg.clone()))
        };

        match scripted {
            Some((delay, leg)) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                Ok(leg)
            }
            None => Err(DirectionsError::NoRoute),
        }
    }
}

//! Route geometry rebuilding.
//!
//! Leg requests are fired concurrently and their completions are unordered:
//! polylines are appended as they arrive, never re-sorted. Display tolerates
//! arbitrary arrival order, so unlike toll aggregation there is no reason to
//! serialise these calls.

use futures::StreamExt;
use futures::stream::FuturesUnordered;

use crate::domain::Stop;

use super::client::{Directions, Polyline};
use super::error::DirectionsError;

/// The drawable geometry of the current trip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteGeometry {
    /// One polyline per successfully resolved leg, in arrival order.
    pub polylines: Vec<Polyline>,

    /// Sum of resolved leg distances, metres.
    pub total_distance_m: f64,

    /// Sum of resolved leg durations, seconds.
    pub total_duration_secs: f64,
}

impl RouteGeometry {
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Rebuild the geometry for `stops` from scratch.
///
/// Callers pass the current *valid* stops, in order. Fewer than two of them
/// yields the empty geometry. One request is issued per consecutive pair,
/// all concurrently; a failed leg is logged and simply absent from the
/// result. There is no incremental diffing: every rebuild re-fetches every
/// leg.
pub async fn rebuild<P: Directions>(provider: &P, stops: &[Stop]) -> RouteGeometry {
    if stops.len() < 2 {
        return RouteGeometry::empty();
    }

    let mut in_flight: FuturesUnordered<_> = stops
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            let (from, to) = (pair[0].coordinate, pair[1].coordinate);
            async move { (i, provider.route_leg(from, to).await) }
        })
        .collect();

    let mut geometry = RouteGeometry::empty();

    while let Some((leg, result)) = in_flight.next().await {
        match result {
            Ok(resolved) => {
                geometry.total_distance_m += resolved.distance_m;
                geometry.total_duration_secs += resolved.duration_secs;
                geometry.polylines.push(resolved.polyline);
            }
            Err(e) => {
                tracing::warn!(leg = leg + 1, error = %e, "directions leg failed; segment omitted");
            }
        }
    }

    geometry
}

//! Trip stops and their map-marker projection.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Coordinate;

/// A user-specified waypoint in a multi-leg trip.
///
/// Stops live inside a [`StopList`](super::StopList), which keeps the
/// `order` field dense (0..n-1) across every mutation. A stop created as a
/// placeholder carries an empty address and the zero coordinate, and is
/// filtered out by [`Stop::is_valid`] before any framing or pricing use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub id: Uuid,
    pub coordinate: Coordinate,
    pub address: String,
    pub order: usize,
}

impl Stop {
    /// Create a stop at a known location.
    pub fn new(coordinate: Coordinate, address: impl Into<String>, order: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            coordinate,
            address: address.into(),
            order,
        }
    }

    /// Create an empty placeholder stop at the given position.
    pub fn placeholder(order: usize) -> Self {
        Self::new(Coordinate::ZERO, "", order)
    }

    /// Whether this stop can be used for framing, routing and pricing.
    ///
    /// Requires a non-empty address and a real (non-placeholder) coordinate.
    pub fn is_valid(&self) -> bool {
        !self.address.is_empty() && self.coordinate.is_valid()
    }

    /// Label used for this stop in leg names and toll requests ("Stop 1"
    /// for the first stop, and so on).
    pub fn label(&self) -> String {
        format!("Stop {}", self.order + 1)
    }
}

/// Read-only map-marker projection of a [`Stop`].
///
/// Derived on demand for rendering; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopAnnotation {
    pub id: Uuid,
    pub coordinate: Coordinate,
    pub title: String,
    pub subtitle: String,
}

impl From<&Stop> for StopAnnotation {
    fn from(stop: &Stop) -> Self {
        Self {
            id: stop.id,
            coordinate: stop.coordinate,
            title: stop.label(),
            subtitle: stop.address.clone(),
        }
    }
}

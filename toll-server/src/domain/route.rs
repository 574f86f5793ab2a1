//! Calculated routes and their toll prices.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Stop, VehicleClass};

/// Per-class toll totals for a route. Both amounts are non-negative
/// currency values in major units (dollars).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TollPrice {
    pub type_a: f64,
    pub type_b: f64,
}

impl TollPrice {
    pub fn new(type_a: f64, type_b: f64) -> Self {
        Self { type_a, type_b }
    }

    pub const ZERO: TollPrice = TollPrice {
        type_a: 0.0,
        type_b: 0.0,
    };

    pub fn for_class(&self, class: VehicleClass) -> f64 {
        match class {
            VehicleClass::Car => self.type_a,
            VehicleClass::TruckVan => self.type_b,
        }
    }
}

/// A transient calculated route: the stops it covers plus the priced result.
///
/// Built when the user requests a toll calculation; never persisted directly
/// (a [`SavedToll`](super::SavedToll) snapshot supersedes it).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub id: Uuid,
    pub stops: Vec<Stop>,
    pub toll_price: TollPrice,
    /// Total driving distance in metres.
    pub total_distance: f64,
    /// Estimated driving duration in seconds.
    pub estimated_duration: f64,
    pub created_at: DateTime<Utc>,
}

impl Route {
    pub fn new(stops: Vec<Stop>, toll_price: TollPrice) -> Self {
        Self::with_metrics(stops, toll_price, 0.0, 0.0)
    }

    pub fn with_metrics(
        stops: Vec<Stop>,
        toll_price: TollPrice,
        total_distance: f64,
        estimated_duration: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            stops,
            toll_price,
            total_distance,
            estimated_duration,
            created_at: Utc::now(),
        }
    }

    /// The stops sorted by their `order` field.
    pub fn ordered_stops(&self) -> Vec<&Stop> {
        let mut stops: Vec<&Stop> = self.stops.iter().collect();
        stops.sort_by_key(|s| s.order);
        stops
    }

    /// First stop in order, if any.
    pub fn start_location(&self) -> Option<&Stop> {
        self.stops.iter().min_by_key(|s| s.order)
    }

    /// Last stop in order, if any.
    pub fn end_location(&self) -> Option<&Stop> {
        self.stops.iter().max_by_key(|s| s.order)
    }

    pub fn toll_price_for(&self, class: VehicleClass) -> f64 {
        self.toll_price.for_class(class)
    }
}

//! Wire types for the toll calculation API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Coordinate, VehicleClass};

/// The motorway sub-tariff keys the provider expects in every request.
/// The chosen vehicle class is applied uniformly across all of them.
pub const MOTORWAY_KEYS: [&str; 9] = [
    "CCT", "ED", "LCT", "M2", "M4", "M5", "M7", "SHB", "SHT",
];

/// A named endpoint of a priced leg.
#[derive(Debug, Clone, PartialEq)]
pub struct TollPoint {
    pub coordinate: Coordinate,
    pub name: String,
}

impl TollPoint {
    pub fn new(coordinate: Coordinate, name: impl Into<String>) -> Self {
        Self {
            coordinate,
            name: name.into(),
        }
    }
}

/// `origin` / `destination` object in the request body.
#[derive(Debug, Serialize)]
pub struct EndpointBody {
    pub lat: f64,
    pub lng: f64,
    pub name: String,
}

impl From<&TollPoint> for EndpointBody {
    fn from(point: &TollPoint) -> Self {
        Self {
            lat: point.coordinate.latitude,
            lng: point.coordinate.longitude,
            name: point.name.clone(),
        }
    }
}

/// Request body for the toll route-pricing endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TollRouteRequest {
    pub origin: EndpointBody,
    pub destination: EndpointBody,
    pub vehicle_class: VehicleClass,
    /// Same class repeated for each of the nine motorway sub-tariffs.
    pub vehicle_class_by_motorway: BTreeMap<&'static str, VehicleClass>,
    pub exclude_toll: bool,
    pub include_steps: bool,
    /// ISO-8601 departure timestamp.
    pub departure_time: String,
}

impl TollRouteRequest {
    pub fn new(
        origin: &TollPoint,
        destination: &TollPoint,
        class: VehicleClass,
        departure_time: String,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            vehicle_class: class,
            vehicle_class_by_motorway: MOTORWAY_KEYS.iter().map(|&k| (k, class)).collect(),
            exclude_toll: false,
            include_steps: false,
            departure_time,
        }
    }
}

/// Response from the toll endpoint. Only the first route is consulted.
#[derive(Debug, Deserialize)]
pub struct TollRouteResponse {
    #[serde(default)]
    pub routes: Vec<TollRouteDto>,
}

/// A priced route in the response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TollRouteDto {
    /// Minimum charge in minor currency units (cents).
    #[serde(default)]
    pub min_charge_in_cents: Option<f64>,

    /// Human-readable description of the priced route.
    #[serde(default)]
    pub summary: Option<String>,
}

/// A single priced leg: dollar amount plus the provider's route summary.
#[derive(Debug, Clone, PartialEq)]
pub struct TollEstimate {
    pub amount: f64,
    pub summary: String,
}

impl TollEstimate {
    pub fn new(amount: f64, summary: impl Into<String>) -> Self {
        Self {
            amount,
            summary: summary.into(),
        }
    }
}

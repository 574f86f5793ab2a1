//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Coordinate, SavedToll, Stop, StopAnnotation};
use crate::geocode::PlaceCandidate;
use crate::toll::{TollLeg, TollSummary};

/// Query parameters for place search.
#[derive(Debug, Deserialize)]
pub struct PlaceSearchRequest {
    /// Free-text query
    pub q: String,

    /// Optional reference latitude for distance ranking
    pub lat: Option<f64>,

    /// Optional reference longitude for distance ranking
    pub lng: Option<f64>,
}

impl PlaceSearchRequest {
    /// The reference coordinate, when both components were supplied.
    pub fn reference(&self) -> Option<Coordinate> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(Coordinate::new(lat, lng)),
            _ => None,
        }
    }
}

/// A candidate location in search results.
#[derive(Debug, Serialize)]
pub struct PlaceResult {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,

    /// Display distance from the reference point ("325m" / "1.2km"),
    /// when one was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
}

impl PlaceResult {
    pub fn from_candidate(candidate: &PlaceCandidate, reference: Option<&Coordinate>) -> Self {
        Self {
            name: candidate.name.clone(),
            address: candidate.address.clone(),
            latitude: candidate.coordinate.latitude,
            longitude: candidate.coordinate.longitude,
            distance: reference.map(|r| candidate.distance_text(r)),
        }
    }
}

/// Response for place search.
#[derive(Debug, Serialize)]
pub struct PlaceSearchResponse {
    pub results: Vec<PlaceResult>,
}

/// A stop as submitted by the client.
#[derive(Debug, Deserialize)]
pub struct StopDto {
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub order: usize,
}

impl StopDto {
    pub fn into_stop(self) -> Stop {
        Stop::new(
            Coordinate::new(self.latitude, self.longitude),
            self.address,
            self.order,
        )
    }
}

/// Request carrying the current trip's stops.
#[derive(Debug, Deserialize)]
pub struct TripRequest {
    pub stops: Vec<StopDto>,
}

impl TripRequest {
    /// Domain stops sorted by order, filtered to the valid ones.
    pub fn valid_stops(self) -> Vec<Stop> {
        let mut stops: Vec<Stop> = self
            .stops
            .into_iter()
            .map(StopDto::into_stop)
            .filter(|s| s.is_valid())
            .collect();
        stops.sort_by_key(|s| s.order);
        stops
    }
}

/// Response for route geometry: one polyline per resolved leg, in arrival
/// order.
#[derive(Debug, Serialize)]
pub struct GeometryResponse {
    pub polylines: Vec<Vec<Coordinate>>,
    pub total_distance_m: f64,
    pub total_duration_secs: f64,
}

/// A priced leg in the calculation response.
#[derive(Debug, Serialize)]
pub struct TollLegResult {
    pub name: String,
    pub amount_type_a: f64,
    pub amount_type_b: f64,
}

impl From<TollLeg> for TollLegResult {
    fn from(leg: TollLeg) -> Self {
        Self {
            name: leg.name,
            amount_type_a: leg.amount_type_a,
            amount_type_b: leg.amount_type_b,
        }
    }
}

/// Response for a toll calculation.
#[derive(Debug, Serialize)]
pub struct TollCalcResponse {
    /// Route summary of the last successfully priced leg
    pub summary: String,
    pub total_a: f64,
    pub total_b: f64,
    pub legs: Vec<TollLegResult>,
    /// Marker projections for the stops that were priced
    pub annotations: Vec<StopAnnotation>,
}

impl TollCalcResponse {
    pub fn new(summary: TollSummary, legs: Vec<TollLeg>, stops: &[Stop]) -> Self {
        Self {
            summary: summary.summary,
            total_a: summary.total_a,
            total_b: summary.total_b,
            legs: legs.into_iter().map(Into::into).collect(),
            annotations: stops.iter().map(StopAnnotation::from).collect(),
        }
    }
}

/// Request to save (or update) a calculated toll.
#[derive(Debug, Deserialize)]
pub struct SaveTollRequest {
    /// Existing id to update in place; omitted to create a new record
    pub id: Option<Uuid>,
    pub name: String,
    pub summary: String,
    pub total_a: f64,
    pub total_b: f64,
    pub stops: Vec<StopDto>,
}

impl SaveTollRequest {
    pub fn into_saved_toll(self) -> SavedToll {
        let mut stops: Vec<Stop> = self.stops.into_iter().map(StopDto::into_stop).collect();
        stops.sort_by_key(|s| s.order);

        let mut toll = SavedToll::new(self.name, self.summary, self.total_a, self.total_b, stops);
        if let Some(id) = self.id {
            toll.id = id;
        }
        toll
    }
}

/// A saved toll in responses.
#[derive(Debug, Serialize)]
pub struct SavedTollResult {
    pub id: Uuid,
    pub name: String,
    pub summary: String,
    pub total_a: f64,
    pub total_b: f64,
    pub stops: Vec<SavedStopResult>,
}

/// A stop within a saved toll.
#[derive(Debug, Serialize)]
pub struct SavedStopResult {
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub order: usize,
}

impl From<&SavedToll> for SavedTollResult {
    fn from(toll: &SavedToll) -> Self {
        Self {
            id: toll.id,
            name: toll.name.clone(),
            summary: toll.summary.clone(),
            total_a: toll.total_a,
            total_b: toll.total_b,
            stops: toll
                .stops
                .iter()
                .map(|s| SavedStopResult {
                    latitude: s.coordinate.latitude,
                    longitude: s.coordinate.longitude,
                    address: s.address.clone(),
                    order: s.order,
                })
                .collect(),
        }
    }
}

/// Response for listing saved tolls.
#[derive(Debug, Serialize)]
pub struct SavedTollListResponse {
    pub tolls: Vec<SavedTollResult>,
}

/// Response for a delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_requires_both_components() {
        let req = PlaceSearchRequest {
            q: "opera".into(),
            lat: Some(-33.86),
            lng: None,
        };
        assert!(req.reference().is_none());

        let req = PlaceSearchRequest {
            q: "opera".into(),
            lat: Some(-33.86),
            lng: Some(151.21),
        };
        assert_eq!(req.reference(), Some(Coordinate::new(-33.86, 151.21)));
    }

    #[test]
    fn trip_request_filters_and_sorts() {
        let req = TripRequest {
            stops: vec![
                StopDto {
                    latitude: -33.85,
                    longitude: 151.21,
                    address: "Second".into(),
                    order: 1,
                },
                StopDto {
                    latitude: 0.0,
                    longitude: 0.0,
                    address: "Placeholder".into(),
                    order: 2,
                },
                StopDto {
                    latitude: -33.86,
                    longitude: 151.22,
                    address: "First".into(),
                    order: 0,
                },
            ],
        };

        let stops = req.valid_stops();
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[0].address, "First");
        assert_eq!(stops[1].address, "Second");
    }

    #[test]
    fn save_request_preserves_existing_id() {
        let id = Uuid::new_v4();
        let req = SaveTollRequest {
            id: Some(id),
            name: "trip".into(),
            summary: "M2".into(),
            total_a: 4.5,
            total_b: 6.75,
            stops: vec![],
        };
        assert_eq!(req.into_saved_toll().id, id);
    }

    #[test]
    fn save_request_generates_id_when_absent() {
        let req = SaveTollRequest {
            id: None,
            name: "trip".into(),
            summary: "M2".into(),
            total_a: 4.5,
            total_b: 6.75,
            stops: vec![],
        };
        // Just has to be some fresh id
        let toll = req.into_saved_toll();
        assert!(!toll.id.is_nil());
    }
}

//! Place-search result types.

use serde::{Deserialize, Serialize};

use crate::domain::{Coordinate, format_distance};

/// Raw search hit from the place-search provider.
///
/// `lat`/`lon` arrive as strings and are parsed during conversion; hits
/// with unparseable coordinates are dropped.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceDto {
    #[serde(default)]
    pub name: String,
    pub display_name: String,
    pub lat: String,
    pub lon: String,
}

/// A ranked candidate location for a free-text address query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceCandidate {
    /// Short name of the place.
    pub name: String,

    /// Formatted address parts, comma-joined.
    pub address: String,

    pub coordinate: Coordinate,
}

impl PlaceCandidate {
    /// Convert a provider hit, dropping it if the coordinates don't parse.
    pub fn from_dto(dto: PlaceDto) -> Option<Self> {
        let latitude: f64 = dto.lat.parse().ok()?;
        let longitude: f64 = dto.lon.parse().ok()?;

        // Fall back to the first address part when the hit has no short name
        let name = if dto.name.is_empty() {
            dto.display_name
                .split(',')
                .next()
                .unwrap_or_default()
                .trim()
                .to_string()
        } else {
            dto.name
        };

        Some(Self {
            name,
            address: dto.display_name,
            coordinate: Coordinate::new(latitude, longitude),
        })
    }

    /// Display distance from a reference point ("325m" / "1.2km").
    pub fn distance_text(&self, reference: &Coordinate) -> String {
        format_distance(reference.distance_m(&self.coordinate))
    }
}

/// Sort candidates ascending by distance from `reference`, when one is
/// available; otherwise keep provider order.
pub fn rank_candidates(
    mut candidates: Vec<PlaceCandidate>,
    reference: Option<Coordinate>,
) -> Vec<PlaceCandidate> {
    if let Some(reference) = reference {
        candidates.sort_by(|a, b| {
            let da = reference.distance_m(&a.coordinate);
            let db = reference.distance_m(&b.coordinate);
            da.total_cmp(&db)
        });
    }
    candidates
}

//! Geographic coordinate type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Mean Earth radius in metres, for haversine distance.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 coordinate in double-precision degrees.
///
/// The all-zero coordinate (0, 0) is reserved as the "unset" placeholder:
/// a freshly created stop that has not yet been geocoded carries it, and
/// downstream consumers must treat it as invalid. See [`Coordinate::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Default search centre when no reference location is available
    /// (Sydney CBD).
    pub const SYDNEY: Coordinate = Coordinate {
        latitude: -33.8688,
        longitude: 151.2093,
    };

    /// The unset placeholder coordinate.
    pub const ZERO: Coordinate = Coordinate {
        latitude: 0.0,
        longitude: 0.0,
    };

    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether this coordinate carries real geocoded data.
    ///
    /// (0, 0) is the placeholder for a stop that has no location yet and
    /// must never be used for map framing or toll pricing.
    pub fn is_valid(&self) -> bool {
        self.latitude != 0.0 || self.longitude != 0.0
    }

    /// Haversine great-circle distance to `other`, in metres.
    pub fn distance_m(&self, other: &Coordinate) -> f64 {
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();

        let a = (d_lat * 0.5).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_M * c
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

/// Format a distance for display: metres below 1 km, otherwise kilometres
/// with one decimal.
pub fn format_distance(metres: f64) -> String {
    if metres < 1000.0 {
        format!("{:.0}m", metres)
    } else {
        format!("{:.1}km", metres / 1000.0)
    }
}

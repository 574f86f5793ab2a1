//! Driving-directions HTTP client (OSRM-compatible).

use serde::Deserialize;

use crate::domain::Coordinate;

use super::error::DirectionsError;

/// Default base URL for the directions provider.
const DEFAULT_BASE_URL: &str = "https://router.project-osrm.org";

/// A drawable driving path between two stops.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub points: Vec<Coordinate>,
}

/// One resolved leg: its path plus distance and duration.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteLeg {
    pub polyline: Polyline,
    /// Driving distance in metres.
    pub distance_m: f64,
    /// Driving duration in seconds.
    pub duration_secs: f64,
}

/// Trait for fetching one driving leg.
///
/// This abstraction allows the geometry builder to be tested with mock
/// legs and controlled completion order.
pub trait Directions {
    /// Fetch the driving path from `from` to `to`.
    async fn route_leg(&self, from: Coordinate, to: Coordinate)
    -> Result<RouteLeg, DirectionsError>;
}

/// OSRM `/route/v1/driving` response shape (the parts we read).
#[derive(Debug, Deserialize)]
struct OsrmResponse {
    code: String,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    distance: f64,
    duration: f64,
    geometry: OsrmGeometry,
}

/// GeoJSON LineString: coordinates are [longitude, latitude] pairs.
#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    coordinates: Vec<[f64; 2]>,
}

/// Configuration for the directions client.
#[derive(Debug, Clone)]
pub struct DirectionsConfig {
    /// Base URL for the provider
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for DirectionsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 15,
        }
    }
}

impl DirectionsConfig {
    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

/// OSRM-compatible directions client.
#[derive(Debug, Clone)]
pub struct OsrmClient {
    http: reqwest::Client,
    base_url: String,
}

impl OsrmClient {
    /// Create a new client with the given configuration.
    pub fn new(config: DirectionsConfig) -> Result<Self, DirectionsError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }
}

impl Directions for OsrmClient {
    async fn route_leg(
        &self,
        from: Coordinate,
        to: Coordinate,
    ) -> Result<RouteLeg, DirectionsError> {
        // OSRM takes lon,lat pairs in the path
        let url = format!(
            "{}/route/v1/driving/{},{};{},{}",
            self.base_url, from.longitude, from.latitude, to.longitude, to.latitude,
        );

        let response = self
            .http
            .get(&url)
            .query(&[("overview", "full"), ("geometries", "geojson")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DirectionsError::Provider {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let parsed: OsrmResponse =
            serde_json::from_str(&body).map_err(|e| DirectionsError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        if parsed.code != "Ok" {
            return Err(DirectionsError::NoRoute);
        }

        let route = parsed.routes.into_iter().next().ok_or(DirectionsError::NoRoute)?;

        let points = route
            .geometry
            .coordinates
            .into_iter()
            .map(|[lon, lat]| Coordinate::new(lat, lon))
            .collect();

        Ok(RouteLeg {
            polyline: Polyline { points },
            distance_m: route.distance,
            duration_secs: route.duration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = DirectionsConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 15);
    }

    #[test]
    fn client_creation() {
        assert!(OsrmClient::new(DirectionsConfig::default()).is_ok());
    }

    #[test]
    fn response_parsing_flips_lon_lat() {
        let body = r#"{
            "code": "Ok",
            "routes": [{
                "distance": 1234.5,
                "duration": 180.0,
                "geometry": {"coordinates": [[151.2153, -33.8568], [151.2108, -33.8523]]}
            }]
        }"#;

        let parsed: OsrmResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.code, "Ok");

        let route = &parsed.routes[0];
        assert_eq!(route.distance, 1234.5);
        assert_eq!(route.geometry.coordinates[0], [151.2153, -33.8568]);
    }

    #[test]
    fn error_code_parses() {
        let body = r#"{"code": "NoRoute", "routes": []}"#;
        let parsed: OsrmResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.code, "NoRoute");
        assert!(parsed.routes.is_empty());
    }
}

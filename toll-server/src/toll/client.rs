//! Toll pricing HTTP client.
//!
//! Issues authenticated POST requests to the toll calculation endpoint and
//! converts responses into per-leg [`TollEstimate`]s. A non-200 provider
//! response degrades to a zero estimate rather than an error, so a flaky
//! provider never aborts an aggregation run.

use chrono::{SecondsFormat, Utc};
use reqwest::header::{HeaderMap, HeaderValue};

use crate::domain::VehicleClass;

use super::aggregate::TollQuoter;
use super::error::TollError;
use super::types::{TollEstimate, TollPoint, TollRouteRequest, TollRouteResponse};

/// Default base URL for the toll calculation API.
const DEFAULT_BASE_URL: &str = "https://api.transport.nsw.gov.au/v2/roads/toll_calc";

/// Client-side scaling applied to heavy-vehicle amounts, on top of the
/// provider's own class-B pricing. Preserved as observed in the original
/// system; see DESIGN.md.
const HEAVY_CLASS_MULTIPLIER: f64 = 1.5;

/// Summary used when the provider returns a non-200 status.
pub const UNAVAILABLE_SUMMARY: &str = "Toll calculation unavailable";

/// Summary used when the provider omits one.
const DEFAULT_SUMMARY: &str = "Toll Route";

/// Configuration for the toll client.
#[derive(Debug, Clone)]
pub struct TollConfig {
    /// API key sent in the `Authorization: apikey ...` header
    pub api_key: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TollConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Toll pricing API client.
#[derive(Debug, Clone)]
pub struct TollClient {
    http: reqwest::Client,
    base_url: String,
}

impl TollClient {
    /// Create a new toll client with the given configuration.
    pub fn new(config: TollConfig) -> Result<Self, TollError> {
        let mut headers = HeaderMap::new();

        let auth = HeaderValue::from_str(&format!("apikey {}", config.api_key))
            .map_err(|_| TollError::InvalidApiKey)?;
        headers.insert(reqwest::header::AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Price one leg for one vehicle class.
    ///
    /// Returns a zero estimate with [`UNAVAILABLE_SUMMARY`] on any non-200
    /// provider status. Transport and decode failures are returned as
    /// errors for the caller to skip.
    pub async fn estimate(
        &self,
        origin: &TollPoint,
        destination: &TollPoint,
        class: VehicleClass,
    ) -> Result<TollEstimate, TollError> {
        let url = format!("{}/route", self.base_url);
        let departure = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        let body = TollRouteRequest::new(origin, destination, class, departure);

        let response = self.http.post(&url).json(&body).send().await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            tracing::warn!(%status, origin = %origin.name, destination = %destination.name,
                "toll provider returned non-200; degrading to zero estimate");
            return Ok(TollEstimate::new(0.0, UNAVAILABLE_SUMMARY));
        }

        let text = response.text().await?;
        let parsed: TollRouteResponse =
            serde_json::from_str(&text).map_err(|e| TollError::Json {
                message: e.to_string(),
                body: Some(text.chars().take(500).collect()),
            })?;

        Ok(estimate_from_response(&parsed, class))
    }
}

/// Convert a parsed provider response into an estimate for `class`.
///
/// Only `routes[0]` is consulted; absent fields default to 0 cents and
/// "Toll Route". Heavy-vehicle amounts are scaled by
/// [`HEAVY_CLASS_MULTIPLIER`].
fn estimate_from_response(response: &TollRouteResponse, class: VehicleClass) -> TollEstimate {
    let route = response.routes.first();

    let cents = route.and_then(|r| r.min_charge_in_cents).unwrap_or(0.0);
    let summary = route
        .and_then(|r| r.summary.clone())
        .unwrap_or_else(|| DEFAULT_SUMMARY.to_string());

    let mut amount = cents / 100.0;
    if class == VehicleClass::TruckVan {
        amount *= HEAVY_CLASS_MULTIPLIER;
    }

    TollEstimate { amount, summary }
}

impl TollQuoter for TollClient {
    async fn quote(
        &self,
        origin: &TollPoint,
        destination: &TollPoint,
        class: VehicleClass,
    ) -> Result<TollEstimate, TollError> {
        self.estimate(origin, destination, class).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(cents: Option<f64>, summary: Option<&str>) -> TollRouteResponse {
        TollRouteResponse {
            routes: vec![super::super::types::TollRouteDto {
                min_charge_in_cents: cents,
                summary: summary.map(String::from),
            }],
        }
    }

    #[test]
    fn config_builder() {
        let config = TollConfig::new("test-key")
            .with_base_url("http://localhost:8080")
            .with_timeout(60);

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn config_defaults() {
        let config = TollConfig::new("test-key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn client_creation() {
        assert!(TollClient::new(TollConfig::new("test-key")).is_ok());
    }

    #[test]
    fn client_rejects_unusable_api_key() {
        let result = TollClient::new(TollConfig::new("bad\nkey"));
        assert!(matches!(result, Err(TollError::InvalidApiKey)));
    }

    #[test]
    fn cents_convert_to_dollars_for_class_a() {
        let est = estimate_from_response(&response(Some(450.0), Some("M2")), VehicleClass::Car);
        assert_eq!(est.amount, 4.50);
        assert_eq!(est.summary, "M2");
    }

    #[test]
    fn class_b_is_one_and_a_half_times_class_a() {
        let resp = response(Some(450.0), Some("M2"));
        let a = estimate_from_response(&resp, VehicleClass::Car);
        let b = estimate_from_response(&resp, VehicleClass::TruckVan);

        assert_eq!(a.amount, 4.50);
        assert_eq!(b.amount, 6.75);
        assert!((b.amount - a.amount * 1.5).abs() < 1e-12);
    }

    #[test]
    fn missing_fields_default() {
        let est = estimate_from_response(&response(None, None), VehicleClass::Car);
        assert_eq!(est.amount, 0.0);
        assert_eq!(est.summary, "Toll Route");
    }

    #[test]
    fn empty_routes_default() {
        let est = estimate_from_response(
            &TollRouteResponse { routes: vec![] },
            VehicleClass::TruckVan,
        );
        assert_eq!(est.amount, 0.0);
        assert_eq!(est.summary, "Toll Route");
    }

    #[test]
    fn only_first_route_is_consulted() {
        let resp = TollRouteResponse {
            routes: vec![
                super::super::types::TollRouteDto {
                    min_charge_in_cents: Some(200.0),
                    summary: Some("first".into()),
                },
                super::super::types::TollRouteDto {
                    min_charge_in_cents: Some(9900.0),
                    summary: Some("second".into()),
                },
            ],
        };

        let est = estimate_from_response(&resp, VehicleClass::Car);
        assert_eq!(est.amount, 2.0);
        assert_eq!(est.summary, "first");
    }
}

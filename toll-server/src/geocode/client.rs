//! Place-search HTTP client.

use crate::domain::Coordinate;

use super::error::GeocodeError;
use super::types::{PlaceCandidate, PlaceDto, rank_candidates};

/// Default base URL for the place-search provider (Nominatim-compatible).
const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Half-width in degrees of the bias box around the search centre.
/// Matches the 0.5-degree span the original search region used.
const SEARCH_SPAN_HALF_DEG: f64 = 0.25;

/// Queries shorter than this never reach the network.
pub const MIN_QUERY_CHARS: usize = 3;

/// Trait for free-text place search.
///
/// This abstraction allows the debounced search flow to be tested with
/// mock candidates.
pub trait PlaceSearch {
    /// Search for candidate locations matching `query`, ranked ascending by
    /// distance from `reference` when one is supplied.
    async fn search(
        &self,
        query: &str,
        reference: Option<Coordinate>,
    ) -> Result<Vec<PlaceCandidate>, GeocodeError>;
}

/// Configuration for the place-search client.
#[derive(Debug, Clone)]
pub struct GeocodeConfig {
    /// Base URL for the provider
    pub base_url: String,
    /// User-Agent header (the provider requires an identifying agent)
    pub user_agent: String,
    /// Maximum number of candidates per query
    pub limit: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GeocodeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("toll-server/", env!("CARGO_PKG_VERSION")).to_string(),
            limit: 10,
            timeout_secs: 15,
        }
    }
}

impl GeocodeConfig {
    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the candidate limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// Place-search API client.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: reqwest::Client,
    base_url: String,
    limit: usize,
}

impl GeocodeClient {
    /// Create a new client with the given configuration.
    pub fn new(config: GeocodeConfig) -> Result<Self, GeocodeError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            limit: config.limit,
        })
    }
}

impl PlaceSearch for GeocodeClient {
    /// Search the provider, biased around `reference` (falling back to the
    /// Sydney default centre).
    ///
    /// Queries shorter than [`MIN_QUERY_CHARS`] short-circuit to an empty
    /// result without a network call.
    async fn search(
        &self,
        query: &str,
        reference: Option<Coordinate>,
    ) -> Result<Vec<PlaceCandidate>, GeocodeError> {
        if query.chars().count() < MIN_QUERY_CHARS {
            return Ok(Vec::new());
        }

        let centre = reference.unwrap_or(Coordinate::SYDNEY);
        let viewbox = format!(
            "{},{},{},{}",
            centre.longitude - SEARCH_SPAN_HALF_DEG,
            centre.latitude + SEARCH_SPAN_HALF_DEG,
            centre.longitude + SEARCH_SPAN_HALF_DEG,
            centre.latitude - SEARCH_SPAN_HALF_DEG,
        );

        let url = format!("{}/search", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("q", query),
                ("format", "jsonv2"),
                ("limit", &self.limit.to_string()),
                ("viewbox", &viewbox),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Provider {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let hits: Vec<PlaceDto> = serde_json::from_str(&body).map_err(|e| GeocodeError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })?;

        let candidates = hits.into_iter().filter_map(PlaceCandidate::from_dto).collect();
        Ok(rank_candidates(candidates, reference))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = GeocodeConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.limit, 10);
        assert!(config.user_agent.starts_with("toll-server/"));
    }

    #[test]
    fn config_builder() {
        let config = GeocodeConfig::default()
            .with_base_url("http://localhost:8080")
            .with_limit(5);
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.limit, 5);
    }

    #[test]
    fn client_creation() {
        assert!(GeocodeClient::new(GeocodeConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn short_query_short_circuits_without_network() {
        // Unroutable base URL: if the client tried the network this would
        // error rather than return an empty list
        let config = GeocodeConfig::default().with_base_url("http://127.0.0.1:1");
        let client = GeocodeClient::new(config).unwrap();

        let results = client.search("ab", None).await.unwrap();
        assert!(results.is_empty());

        let results = client.search("", Some(Coordinate::SYDNEY)).await.unwrap();
        assert!(results.is_empty());
    }
}

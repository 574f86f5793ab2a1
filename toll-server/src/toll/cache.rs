//! Caching layer for toll estimates.
//!
//! Toll charges for a fixed leg and vehicle class do not change within a
//! short window, while recalculation (a stop edited, a saved toll reloaded)
//! re-prices every leg from scratch. A small TTL cache keyed by quantized
//! leg endpoints avoids hammering the provider with identical requests.

use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::{Coordinate, VehicleClass};

use super::aggregate::TollQuoter;
use super::client::{TollClient, UNAVAILABLE_SUMMARY};
use super::error::TollError;
use super::types::{TollEstimate, TollPoint};

/// Cache key: (origin, destination) quantized to micro-degrees, plus class.
/// Leg labels are deliberately excluded; the price does not depend on them.
type QuoteKey = (i64, i64, i64, i64, VehicleClass);

/// Configuration for the estimate cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached estimates.
    pub ttl: Duration,

    /// Maximum number of cached estimates.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(120),
            max_capacity: 1000,
        }
    }
}

/// Toll client with an estimate cache in front.
pub struct CachedTollClient {
    client: TollClient,
    cache: MokaCache<QuoteKey, TollEstimate>,
}

impl CachedTollClient {
    /// Create a new cached client.
    pub fn new(client: TollClient, config: &CacheConfig) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { client, cache }
    }

    /// Price a leg, serving from cache when possible.
    ///
    /// Errors and degraded zero estimates are never cached, so a transient
    /// provider outage does not pin zeros for the TTL.
    pub async fn estimate(
        &self,
        origin: &TollPoint,
        destination: &TollPoint,
        class: VehicleClass,
    ) -> Result<TollEstimate, TollError> {
        let key = quote_key(&origin.coordinate, &destination.coordinate, class);

        if let Some(cached) = self.cache.get(&key).await {
            return Ok(cached);
        }

        let estimate = self.client.estimate(origin, destination, class).await?;

        if estimate.summary != UNAVAILABLE_SUMMARY {
            self.cache.insert(key, estimate.clone()).await;
        }

        Ok(estimate)
    }

    /// Access the underlying client for operations that bypass cache.
    pub fn client(&self) -> &TollClient {
        &self.client
    }

    /// Number of cached estimates.
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Invalidate all cached estimates.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }
}

impl TollQuoter for CachedTollClient {
    async fn quote(
        &self,
        origin: &TollPoint,
        destination: &TollPoint,
        class: VehicleClass,
    ) -> Result<TollEstimate, TollError> {
        self.estimate(origin, destination, class).await
    }
}

/// Quantize both endpoints to micro-degrees and pair them with the class.
fn quote_key(origin: &Coordinate, destination: &Coordinate, class: VehicleClass) -> QuoteKey {
    (
        micro_degrees(origin.latitude),
        micro_degrees(origin.longitude),
        micro_degrees(destination.latitude),
        micro_degrees(destination.longitude),
        class,
    )
}

fn micro_degrees(degrees: f64) -> i64 {
    (degrees * 1_000_000.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toll::client::TollConfig;

    #[test]
    fn micro_degree_quantization() {
        assert_eq!(micro_degrees(-33.8688), -33_868_800);
        assert_eq!(micro_degrees(151.2093), 151_209_300);
        // Sub-micro-degree jitter collapses to the same key
        assert_eq!(micro_degrees(-33.86880000004), micro_degrees(-33.8688));
    }

    #[test]
    fn key_varies_by_class() {
        let a = Coordinate::new(-33.8568, 151.2153);
        let b = Coordinate::new(-33.8523, 151.2108);

        assert_ne!(
            quote_key(&a, &b, VehicleClass::Car),
            quote_key(&a, &b, VehicleClass::TruckVan)
        );
    }

    #[test]
    fn key_varies_by_direction() {
        let a = Coordinate::new(-33.8568, 151.2153);
        let b = Coordinate::new(-33.8523, 151.2108);

        assert_ne!(
            quote_key(&a, &b, VehicleClass::Car),
            quote_key(&b, &a, VehicleClass::Car)
        );
    }

    #[test]
    fn cached_client_creation() {
        let client = TollClient::new(TollConfig::new("test-key")).unwrap();
        let cached = CachedTollClient::new(client, &CacheConfig::default());
        assert_eq!(cached.entry_count(), 0);
    }

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(120));
        assert_eq!(config.max_capacity, 1000);
    }
}

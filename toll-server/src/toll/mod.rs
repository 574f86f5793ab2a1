//! Toll pricing client and aggregation.
//!
//! This module wraps the remote toll-calculation HTTP API and drives it
//! across a whole trip:
//! - [`TollClient`] prices a single leg for one vehicle class, degrading a
//!   non-200 response to a zero estimate instead of failing.
//! - [`CachedTollClient`] fronts it with a short-lived estimate cache.
//! - [`TollAggregator`] folds the client sequentially over every
//!   consecutive stop pair, once per vehicle class.

mod aggregate;
mod cache;
mod client;
mod error;
mod types;

#[cfg(test)]
pub mod mock;

pub use aggregate::{TollAggregator, TollLeg, TollQuoter, TollSummary};
pub use cache::{CacheConfig, CachedTollClient};
pub use client::{TollClient, TollConfig, UNAVAILABLE_SUMMARY};
pub use error::TollError;
pub use types::{MOTORWAY_KEYS, TollEstimate, TollPoint, TollRouteRequest, TollRouteResponse};

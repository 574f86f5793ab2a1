//! Route geometry: per-leg driving paths for display.
//!
//! One directions request per consecutive stop pair, fired concurrently;
//! completions land in arrival order. Toll aggregation stays strictly
//! sequential, so the two pipelines never share ordering assumptions.

mod client;
mod error;
mod geometry;

#[cfg(test)]
pub mod mock;

pub use client::{Directions, DirectionsConfig, OsrmClient, Polyline, RouteLeg};
pub use error::DirectionsError;
pub use geometry::{RouteGeometry, rebuild};

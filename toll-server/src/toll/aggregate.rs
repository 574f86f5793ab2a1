//! Toll aggregation across a multi-stop trip.
//!
//! Drives the pricing client over every consecutive stop pair, once per
//! vehicle class, strictly sequentially. Accuracy is prioritised over
//! latency here, in deliberate contrast to the fire-and-collect route
//! geometry fetching.

use uuid::Uuid;

use crate::domain::{Stop, VehicleClass};

use super::error::TollError;
use super::types::{TollEstimate, TollPoint};

/// Trait for pricing a single leg.
///
/// This abstraction allows the aggregator to be tested with mock pricing.
pub trait TollQuoter {
    /// Price the leg from `origin` to `destination` for `class`.
    async fn quote(
        &self,
        origin: &TollPoint,
        destination: &TollPoint,
        class: VehicleClass,
    ) -> Result<TollEstimate, TollError>;
}

/// Aggregated result over every leg of a trip.
#[derive(Debug, Clone, PartialEq)]
pub struct TollSummary {
    /// Route summary of the last successfully priced leg. Earlier leg
    /// summaries are discarded (observed behavior, kept; see DESIGN.md).
    pub summary: String,
    pub total_a: f64,
    pub total_b: f64,
}

impl TollSummary {
    /// The zeroed result returned for trips with fewer than two stops.
    pub fn empty() -> Self {
        Self {
            summary: String::new(),
            total_a: 0.0,
            total_b: 0.0,
        }
    }
}

/// A single priced leg in a per-leg breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct TollLeg {
    pub id: Uuid,
    /// E.g. "Stop 1 -> Stop 2".
    pub name: String,
    pub amount_type_a: f64,
    pub amount_type_b: f64,
}

/// Sequential per-leg toll aggregation service.
pub struct TollAggregator<'a, Q: TollQuoter> {
    quoter: &'a Q,
}

impl<'a, Q: TollQuoter> TollAggregator<'a, Q> {
    pub fn new(quoter: &'a Q) -> Self {
        Self { quoter }
    }

    /// Price every consecutive stop pair for both vehicle classes in one
    /// sequential pass, returning the accumulated summary alongside the
    /// per-leg breakdown.
    ///
    /// Requires at least two stops; otherwise returns the zeroed empty
    /// result without issuing any calls. A leg whose class-A call fails is
    /// not asked about class B at all; a failed leg contributes zero to both
    /// totals and appears zeroed in the breakdown so the caller can still
    /// render one row per leg. Legs are awaited one after another, never in
    /// parallel, and each leg reaches the quoter exactly once per class.
    pub async fn price_trip(&self, stops: &[Stop]) -> (TollSummary, Vec<TollLeg>) {
        if stops.len() < 2 {
            return (TollSummary::empty(), Vec::new());
        }

        let mut total_a = 0.0;
        let mut total_b = 0.0;
        let mut last_summary = String::new();
        let mut legs = Vec::with_capacity(stops.len() - 1);

        for (i, pair) in stops.windows(2).enumerate() {
            let (origin, destination) = leg_points(&pair[0], &pair[1], i);
            let name = format!("{} -> {}", origin.name, destination.name);

            let priced = async {
                let a = self
                    .quoter
                    .quote(&origin, &destination, VehicleClass::Car)
                    .await?;
                let b = self
                    .quoter
                    .quote(&origin, &destination, VehicleClass::TruckVan)
                    .await?;
                Ok::<_, TollError>((a, b))
            }
            .await;

            let (amount_a, amount_b) = match priced {
                Ok((a, b)) => {
                    total_a += a.amount;
                    total_b += b.amount;
                    last_summary = a.summary;
                    (a.amount, b.amount)
                }
                Err(e) => {
                    tracing::warn!(leg = i + 1, error = %e, "toll pricing failed; zeroing leg");
                    (0.0, 0.0)
                }
            };

            legs.push(TollLeg {
                id: Uuid::new_v4(),
                name,
                amount_type_a: amount_a,
                amount_type_b: amount_b,
            });
        }

        let summary = TollSummary {
            summary: last_summary,
            total_a,
            total_b,
        };

        (summary, legs)
    }

    /// Sum toll charges over all consecutive stop pairs for both vehicle
    /// classes. See [`price_trip`](TollAggregator::price_trip) for the leg
    /// and failure semantics.
    pub async fn summarize(&self, stops: &[Stop]) -> TollSummary {
        self.price_trip(stops).await.0
    }

    /// Price every leg individually for both classes.
    ///
    /// A failed leg appears in the breakdown with zero amounts rather than
    /// being dropped.
    pub async fn leg_breakdown(&self, stops: &[Stop]) -> Vec<TollLeg> {
        self.price_trip(stops).await.1
    }
}

/// Leg endpoints named by one-based position in the trip.
fn leg_points(from: &Stop, to: &Stop, leg_index: usize) -> (TollPoint, TollPoint) {
    (
        TollPoint::new(from.coordinate, format!("Stop {}", leg_index + 1)),
        TollPoint::new(to.coordinate, format!("Stop {}", leg_index + 2)),
    )
}

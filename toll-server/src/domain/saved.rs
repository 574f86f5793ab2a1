//! Persisted toll snapshots.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Stop;

/// A named snapshot of a calculated toll result and the stops it was
/// computed over.
///
/// Owned by the saved-toll store; everything else holds transient copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedToll {
    pub id: Uuid,
    pub name: String,
    pub summary: String,
    pub total_a: f64,
    pub total_b: f64,
    pub stops: Vec<Stop>,
}

impl SavedToll {
    pub fn new(
        name: impl Into<String>,
        summary: impl Into<String>,
        total_a: f64,
        total_b: f64,
        stops: Vec<Stop>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            summary: summary.into(),
            total_a,
            total_b,
            stops,
        }
    }
}

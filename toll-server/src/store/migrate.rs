//! Legacy flat-blob import.
//!
//! The original system mirrored every save into a flat serialized array
//! under a fixed storage key, as a fallback for when the structured store
//! was unavailable. That steady-state dual write is gone; the blob format
//! is supported only as an explicit migration source.

use std::path::Path;

use serde::Deserialize;
use uuid::Uuid;

use crate::domain::{Coordinate, SavedToll, Stop};

use super::error::StoreError;

/// A stop as serialized in the legacy blob.
#[derive(Debug, Deserialize)]
struct LegacyStop {
    latitude: f64,
    longitude: f64,
    address: String,
    order: usize,
}

/// A saved toll as serialized in the legacy blob.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyToll {
    id: Uuid,
    name: String,
    summary: String,
    total_a: f64,
    total_b: f64,
    stops: Vec<LegacyStop>,
}

/// Read and decode a legacy blob file into saved tolls.
///
/// Stops are re-sorted by their stored order; identifiers are preserved so
/// re-importing replaces rather than duplicates.
pub fn read_legacy_blob(path: &Path) -> Result<Vec<SavedToll>, StoreError> {
    let raw = std::fs::read_to_string(path)?;
    let legacy: Vec<LegacyToll> = serde_json::from_str(&raw)?;

    Ok(legacy.into_iter().map(convert).collect())
}

fn convert(legacy: LegacyToll) -> SavedToll {
    let mut stops: Vec<Stop> = legacy
        .stops
        .into_iter()
        .map(|s| {
            Stop::new(
                Coordinate::new(s.latitude, s.longitude),
                s.address,
                s.order,
            )
        })
        .collect();
    stops.sort_by_key(|s| s.order);

    SavedToll {
        id: legacy.id,
        name: legacy.name,
        summary: legacy.summary,
        total_a: legacy.total_a,
        total_b: legacy.total_b,
        stops,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SavedTollStore;

    const BLOB: &str = r#"[
        {
            "id": "7f1f7dd6-5dd2-4c4a-9c1e-2a4a65f7b001",
            "name": "Harbour run",
            "summary": "Sydney Harbour Tunnel",
            "totalA": 4.5,
            "totalB": 6.75,
            "stops": [
                {"latitude": -33.8523, "longitude": 151.2108, "address": "Sydney Harbour Bridge", "order": 1},
                {"latitude": -33.8568, "longitude": 151.2153, "address": "Sydney Opera House", "order": 0}
            ]
        }
    ]"#;

    #[test]
    fn decodes_and_sorts_stops() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("legacy.json");
        std::fs::write(&path, BLOB).unwrap();

        let tolls = read_legacy_blob(&path).unwrap();

        assert_eq!(tolls.len(), 1);
        assert_eq!(tolls[0].name, "Harbour run");
        assert_eq!(tolls[0].total_b, 6.75);
        assert_eq!(tolls[0].stops[0].address, "Sydney Opera House");
        assert_eq!(tolls[0].stops[1].address, "Sydney Harbour Bridge");
    }

    #[test]
    fn import_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("legacy.json");
        std::fs::write(&path, BLOB).unwrap();

        let mut store = SavedTollStore::open_in_memory().unwrap();
        assert_eq!(store.import_legacy_json(&path).unwrap(), 1);
        assert_eq!(store.import_legacy_json(&path).unwrap(), 1);

        // Same identifier both times: replaced, not duplicated
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn malformed_blob_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("legacy.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(matches!(
            read_legacy_blob(&path),
            Err(StoreError::Json(_))
        ));
    }
}

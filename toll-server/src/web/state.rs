//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::directions::OsrmClient;
use crate::geocode::GeocodeClient;
use crate::store::SavedTollStore;
use crate::toll::CachedTollClient;

/// Shared application state.
///
/// Contains all the services needed to handle requests. The saved-toll
/// store sits behind a single async mutex: it is designed for one logical
/// actor, and the mutex serialises handler access to it.
#[derive(Clone)]
pub struct AppState {
    /// Place-search client
    pub geocoder: Arc<GeocodeClient>,

    /// Driving-directions client
    pub directions: Arc<OsrmClient>,

    /// Cached toll pricing client
    pub tolls: Arc<CachedTollClient>,

    /// Saved-toll store
    pub store: Arc<Mutex<SavedTollStore>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        geocoder: GeocodeClient,
        directions: OsrmClient,
        tolls: CachedTollClient,
        store: SavedTollStore,
    ) -> Self {
        Self {
            geocoder: Arc::new(geocoder),
            directions: Arc::new(directions),
            tolls: Arc::new(tolls),
            store: Arc::new(Mutex::new(store)),
        }
    }
}

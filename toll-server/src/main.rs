use std::net::SocketAddr;

use toll_server::directions::{DirectionsConfig, OsrmClient};
use toll_server::geocode::{GeocodeClient, GeocodeConfig};
use toll_server::store::SavedTollStore;
use toll_server::toll::{CacheConfig, CachedTollClient, TollClient, TollConfig};
use toll_server::web::{AppState, create_router};

/// Default path for the saved-toll database.
const DEFAULT_DB_PATH: &str = "saved_tolls.db";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Get credentials from environment
    let api_key = std::env::var("TOLL_API_KEY").unwrap_or_else(|_| {
        eprintln!("Warning: TOLL_API_KEY not set. Toll pricing calls will fail.");
        String::new()
    });

    // Create toll pricing client (cached)
    let mut toll_config = TollConfig::new(&api_key);
    if let Ok(base_url) = std::env::var("TOLL_API_BASE_URL") {
        toll_config = toll_config.with_base_url(base_url);
    }
    let toll_client = TollClient::new(toll_config).expect("Failed to create toll client");
    let cached_tolls = CachedTollClient::new(toll_client, &CacheConfig::default());

    // Create place-search client
    let mut geocode_config = GeocodeConfig::default();
    if let Ok(base_url) = std::env::var("GEOCODE_BASE_URL") {
        geocode_config = geocode_config.with_base_url(base_url);
    }
    let geocoder = GeocodeClient::new(geocode_config).expect("Failed to create geocode client");

    // Create directions client
    let mut directions_config = DirectionsConfig::default();
    if let Ok(base_url) = std::env::var("DIRECTIONS_BASE_URL") {
        directions_config = directions_config.with_base_url(base_url);
    }
    let osrm = OsrmClient::new(directions_config).expect("Failed to create directions client");

    // Open the saved-toll store
    let db_path = std::env::var("TOLL_DB_PATH").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());
    let mut store = SavedTollStore::open(&db_path).expect("Failed to open saved-toll store");
    println!("Loaded {} saved tolls from {}", store.len(), db_path);

    // One-shot migration from the legacy flat blob, when pointed at one
    if let Ok(legacy_path) = std::env::var("TOLL_LEGACY_BLOB") {
        match store.import_legacy_json(&legacy_path) {
            Ok(count) => println!("Imported {count} saved tolls from legacy blob {legacy_path}"),
            Err(e) => eprintln!("Failed to import legacy blob {legacy_path}: {e}"),
        }
    }

    // Build app state
    let state = AppState::new(geocoder, osrm, cached_tolls, store);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Toll Trip Planner listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET    /health              - Health check");
    println!("  GET    /api/places/search   - Search for addresses");
    println!("  POST   /api/route/geometry  - Route polylines for stops");
    println!("  POST   /api/tolls/calculate - Price a trip's tolls");
    println!("  GET    /api/tolls/saved     - List saved tolls");
    println!("  POST   /api/tolls/saved     - Save or update a toll");
    println!("  DELETE /api/tolls/saved/:id - Delete a saved toll");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

//! Web layer for the toll trip planner.
//!
//! Provides HTTP endpoints for address search, route geometry, toll
//! calculation and the saved-toll collection.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;

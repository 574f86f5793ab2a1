//! Domain types for the toll trip planner.
//!
//! This module contains the core domain model: validated stops and the
//! ordered stop list, vehicle tariff classes, calculated routes with their
//! toll prices, and saved-toll snapshots. Types enforce their invariants at
//! construction or mutation time, so code that receives them can trust
//! their validity.

mod coordinate;
mod route;
mod saved;
mod stop;
mod stop_list;
mod vehicle;

pub use coordinate::{Coordinate, format_distance};
pub use route::{Route, TollPrice};
pub use saved::SavedToll;
pub use stop::{Stop, StopAnnotation};
pub use stop_list::{MAX_STOPS, MIN_STOPS, StopList, StopListError};
pub use vehicle::VehicleClass;

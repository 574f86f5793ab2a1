//! Toll trip planner server.
//!
//! A web application that answers: "what will the tolls on this multi-stop
//! drive cost me?" Stops are geocoded through a place-search provider,
//! drawable route geometry comes from a directions provider, and per-leg
//! toll charges come from a remote toll-calculation API, summed across the
//! trip for two vehicle classes. Named results persist in a local SQLite
//! store.

pub mod directions;
pub mod domain;
pub mod geocode;
pub mod store;
pub mod toll;
pub mod web;

//! Durable storage for saved tolls.
//!
//! A single SQLite backend behind [`SavedTollStore`], constructed at
//! startup and passed by reference to whatever needs it. Legacy flat-blob
//! data is brought across by an explicit migration, not a parallel write
//! path.

mod error;
mod migrate;
mod sqlite;

pub use error::StoreError;
pub use sqlite::SavedTollStore;

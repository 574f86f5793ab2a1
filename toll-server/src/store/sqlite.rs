//! SQLite-backed saved-toll store.
//!
//! One durable backend, loaded once at startup and held in memory
//! thereafter; every mutation writes through to the database in a
//! transaction. The original system's silent flat-blob fallback is replaced
//! by an explicit one-shot migration, [`SavedTollStore::import_legacy_json`].
//!
//! The store is intentionally accessed from one logical actor; callers that
//! share it across tasks wrap it in a single async mutex.

use std::path::Path;

use rusqlite::Connection;
use uuid::Uuid;

use crate::domain::{Coordinate, SavedToll, Stop};

use super::error::StoreError;
use super::migrate::read_legacy_blob;

/// Durable store of named toll snapshots.
pub struct SavedTollStore {
    conn: Connection,
    tolls: Vec<SavedToll>,
}

impl SavedTollStore {
    /// Open (or create) the store at `path` and load every saved toll.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    /// Open an in-memory store (for tests and ephemeral sessions).
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS saved_tolls (
                 id      TEXT PRIMARY KEY,
                 name    TEXT NOT NULL,
                 summary TEXT NOT NULL,
                 total_a REAL NOT NULL,
                 total_b REAL NOT NULL
             );
             CREATE TABLE IF NOT EXISTS saved_toll_stops (
                 toll_id   TEXT    NOT NULL,
                 order_idx INTEGER NOT NULL,
                 latitude  REAL    NOT NULL,
                 longitude REAL    NOT NULL,
                 address   TEXT    NOT NULL,
                 PRIMARY KEY (toll_id, order_idx)
             );",
        )?;

        let mut store = Self {
            conn,
            tolls: Vec::new(),
        };
        store.load()?;
        Ok(store)
    }

    /// (Re)populate the in-memory list from the database.
    ///
    /// Returns the number of tolls loaded. Saved tolls keep their creation
    /// order; each toll's stops come back sorted by their stored order.
    pub fn load(&mut self) -> Result<usize, StoreError> {
        let mut tolls = Vec::new();

        {
            let mut stmt = self.conn.prepare_cached(
                "SELECT id, name, summary, total_a, total_b FROM saved_tolls ORDER BY rowid",
            )?;
            let rows = stmt.query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, f64>(3)?,
                    row.get::<_, f64>(4)?,
                ))
            })?;

            for row in rows {
                let (id, name, summary, total_a, total_b) = row?;
                tolls.push(SavedToll {
                    id: Uuid::parse_str(&id)?,
                    name,
                    summary,
                    total_a,
                    total_b,
                    stops: Vec::new(),
                });
            }
        }

        for toll in &mut tolls {
            toll.stops = self.load_stops(&toll.id)?;
        }

        self.tolls = tolls;
        Ok(self.tolls.len())
    }

    fn load_stops(&self, toll_id: &Uuid) -> Result<Vec<Stop>, StoreError> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT order_idx, latitude, longitude, address FROM saved_toll_stops \
             WHERE toll_id = ?1 ORDER BY order_idx",
        )?;

        let rows = stmt.query_map([toll_id.to_string()], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, f64>(1)?,
                row.get::<_, f64>(2)?,
                row.get::<_, String>(3)?,
            ))
        })?;

        let mut stops = Vec::new();
        for row in rows {
            let (order_idx, latitude, longitude, address) = row?;
            stops.push(Stop::new(
                Coordinate::new(latitude, longitude),
                address,
                order_idx as usize,
            ));
        }

        Ok(stops)
    }

    /// All saved tolls, in creation order.
    pub fn list(&self) -> &[SavedToll] {
        &self.tolls
    }

    pub fn get(&self, id: &Uuid) -> Option<&SavedToll> {
        self.tolls.iter().find(|t| &t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tolls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tolls.is_empty()
    }

    /// Insert `toll`, or replace the record with the same id in place.
    ///
    /// Replacing keeps the record's position in the list; inserting appends.
    pub fn save_or_update(&mut self, toll: SavedToll) -> Result<(), StoreError> {
        let tx = self.conn.unchecked_transaction()?;
        {
            tx.prepare_cached(
                "INSERT INTO saved_tolls (id, name, summary, total_a, total_b) \
                 VALUES (?1, ?2, ?3, ?4, ?5) \
                 ON CONFLICT(id) DO UPDATE SET \
                     name = excluded.name, summary = excluded.summary, \
                     total_a = excluded.total_a, total_b = excluded.total_b",
            )?
            .execute(rusqlite::params![
                toll.id.to_string(),
                toll.name,
                toll.summary,
                toll.total_a,
                toll.total_b,
            ])?;

            tx.prepare_cached("DELETE FROM saved_toll_stops WHERE toll_id = ?1")?
                .execute([toll.id.to_string()])?;

            let mut insert_stop = tx.prepare_cached(
                "INSERT INTO saved_toll_stops (toll_id, order_idx, latitude, longitude, address) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for stop in &toll.stops {
                insert_stop.execute(rusqlite::params![
                    toll.id.to_string(),
                    stop.order as i64,
                    stop.coordinate.latitude,
                    stop.coordinate.longitude,
                    stop.address,
                ])?;
            }
        }
        tx.commit()?;

        match self.tolls.iter_mut().find(|t| t.id == toll.id) {
            Some(existing) => *existing = toll,
            None => self.tolls.push(toll),
        }

        Ok(())
    }

    /// Delete by id. Returns whether a record was removed; deleting an
    /// absent id is a no-op.
    pub fn delete(&mut self, id: &Uuid) -> Result<bool, StoreError> {
        let tx = self.conn.unchecked_transaction()?;
        tx.prepare_cached("DELETE FROM saved_toll_stops WHERE toll_id = ?1")?
            .execute([id.to_string()])?;
        let removed = tx
            .prepare_cached("DELETE FROM saved_tolls WHERE id = ?1")?
            .execute([id.to_string()])?;
        tx.commit()?;

        self.tolls.retain(|t| &t.id != id);
        Ok(removed > 0)
    }

    /// One-shot migration from the legacy flat serialized-array blob.
    ///
    /// Each record is applied through [`save_or_update`], so re-running the
    /// migration is idempotent. Returns the number of records imported.
    ///
    /// [`save_or_update`]: SavedTollStore::save_or_update
    pub fn import_legacy_json(&mut self, path: impl AsRef<Path>) -> Result<usize, StoreError> {
        let imported = read_legacy_blob(path.as_ref())?;
        let count = imported.len();

        for toll in imported {
            self.save_or_update(toll)?;
        }

        Ok(count)
    }
}

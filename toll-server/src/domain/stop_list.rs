//! Ordered stop list with dense renumbering.
//!
//! The list owns every stop of the trip being edited. It enforces the
//! 2..=5 size window and keeps each stop's `order` field equal to its
//! position after every mutation, so downstream consumers can rely on a
//! dense 0..n-1 sequence with no gaps or duplicates.

use super::{Coordinate, Stop};

/// Maximum number of stops in a trip.
pub const MAX_STOPS: usize = 5;

/// Minimum number of stops in a trip (origin and destination).
pub const MIN_STOPS: usize = 2;

/// Errors from stop-list mutations. None of these are fatal; the caller
/// surfaces them as a transient notice and the list is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StopListError {
    /// The list already holds the maximum number of stops.
    #[error("cannot add more than {MAX_STOPS} stops")]
    LimitExceeded,

    /// Removing would drop the list below the minimum.
    #[error("a trip needs at least {MIN_STOPS} stops")]
    MinimumNotMet,

    /// An index referred to a slot that cannot exist.
    #[error("stop index {0} is out of range")]
    InvalidIndex(usize),
}

/// The ordered collection of stops for the trip being edited.
#[derive(Debug, Clone, PartialEq)]
pub struct StopList {
    stops: Vec<Stop>,
}

impl StopList {
    /// Create a list with the two placeholder slots every trip starts with
    /// (origin and destination).
    pub fn new() -> Self {
        Self {
            stops: vec![Stop::placeholder(0), Stop::placeholder(1)],
        }
    }

    /// Create a list from existing stops, re-sorted by their `order` field
    /// and renumbered densely.
    pub fn from_stops(mut stops: Vec<Stop>) -> Self {
        stops.sort_by_key(|s| s.order);
        let mut list = Self { stops };
        list.renumber();
        list
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn get(&self, index: usize) -> Option<&Stop> {
        self.stops.get(index)
    }

    /// Append a new empty stop at the end.
    ///
    /// Fails with [`StopListError::LimitExceeded`] once the list holds
    /// [`MAX_STOPS`] entries; the list is left unchanged.
    pub fn insert(&mut self) -> Result<&Stop, StopListError> {
        if self.stops.len() >= MAX_STOPS {
            return Err(StopListError::LimitExceeded);
        }

        self.stops.push(Stop::placeholder(self.stops.len()));
        self.renumber();
        Ok(self.stops.last().unwrap())
    }

    /// Remove the stop at `index` and renumber the remainder.
    ///
    /// Fails with [`StopListError::MinimumNotMet`] when the list is already
    /// at the [`MIN_STOPS`] floor.
    pub fn remove(&mut self, index: usize) -> Result<Stop, StopListError> {
        if self.stops.len() <= MIN_STOPS {
            return Err(StopListError::MinimumNotMet);
        }
        if index >= self.stops.len() {
            return Err(StopListError::InvalidIndex(index));
        }

        let removed = self.stops.remove(index);
        self.renumber();
        Ok(removed)
    }

    /// Move the stops at `from` (any order, duplicates ignored) so that they
    /// sit before the element currently at `to`, then renumber.
    ///
    /// Follows the usual drag-reorder convention: `to` is an insertion point
    /// in the pre-removal indexing, 0..=len.
    pub fn move_stops(&mut self, from: &[usize], to: usize) -> Result<(), StopListError> {
        let len = self.stops.len();

        let mut sources: Vec<usize> = from.to_vec();
        sources.sort_unstable();
        sources.dedup();

        if let Some(&bad) = sources.iter().find(|&&i| i >= len) {
            return Err(StopListError::InvalidIndex(bad));
        }
        if to > len {
            return Err(StopListError::InvalidIndex(to));
        }

        // Pull the moved stops out back-to-front so indices stay stable.
        let mut moved = Vec::with_capacity(sources.len());
        for &i in sources.iter().rev() {
            moved.push(self.stops.remove(i));
        }
        moved.reverse();

        // The insertion point shifts down by however many sources sat before it.
        let offset = sources.iter().filter(|&&i| i < to).count();
        let insert_at = to - offset;

        for (k, stop) in moved.into_iter().enumerate() {
            self.stops.insert(insert_at + k, stop);
        }

        self.renumber();
        Ok(())
    }

    /// Set the address and coordinate of the slot at `index`.
    ///
    /// If `index` is beyond current storage the list is extended with
    /// placeholder stops up to that slot, subject to the [`MAX_STOPS`] cap.
    pub fn set_address(
        &mut self,
        index: usize,
        address: impl Into<String>,
        coordinate: Coordinate,
    ) -> Result<(), StopListError> {
        if index >= MAX_STOPS {
            return Err(StopListError::LimitExceeded);
        }

        while self.stops.len() <= index {
            let order = self.stops.len();
            self.stops.push(Stop::placeholder(order));
        }

        let stop = &mut self.stops[index];
        stop.address = address.into();
        stop.coordinate = coordinate;

        self.renumber();
        Ok(())
    }

    /// Stops usable for framing, routing and toll pricing, in order.
    pub fn valid_stops(&self) -> Vec<Stop> {
        self.stops.iter().filter(|s| s.is_valid()).cloned().collect()
    }

    /// Reset to the initial two placeholder slots.
    pub fn reset(&mut self) {
        self.stops = vec![Stop::placeholder(0), Stop::placeholder(1)];
    }

    /// Rewrite every `order` field to the dense 0..n-1 sequence.
    fn renumber(&mut self) {
        for (i, stop) in self.stops.iter_mut().enumerate() {
            stop.order = i;
        }
    }
}

impl Default for StopList {
    fn default() -> Self {
        Self::new()
    }
}

//! Append-only, capped movement log
//!
//! Entries are stored newest-first. Appending beyond the cap evicts
//! the oldest entries; nothing else ever removes or mutates an entry.

use chrono::{Local, Utc};

use crate::journal::{Movement, MovementKind, MovementQuery};
use crate::products::Product;

/// Bounded movement journal
#[derive(Debug)]
pub struct MovementLog {
    /// Newest-first.
    entries: Vec<Movement>,
    cap: usize,
    /// Highest id handed out so far; ids are clamped above this so
    /// same-millisecond appends stay strictly increasing.
    last_id: u64,
}

impl MovementLog {
    pub(crate) fn new(cap: usize) -> Self {
        Self {
            entries: Vec::new(),
            // A zero cap would make append unable to retain anything
            cap: cap.max(1),
            last_id: 0,
        }
    }

    /// Rebuild from persisted entries (already newest-first); anything
    /// beyond the cap is dropped on load.
    pub(crate) fn from_entries(mut entries: Vec<Movement>, cap: usize) -> Self {
        let mut log = Self::new(cap);
        // Truncate with the clamped cap so loaded history survives a
        // zero-cap misconfiguration the same way appends do
        entries.truncate(log.cap);
        log.last_id = entries.iter().map(|m| m.id).max().unwrap_or(0);
        log.entries = entries;
        log
    }

    /// Entries in stored (newest-first) order, for persistence.
    pub(crate) fn entries(&self) -> &[Movement] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn newest(&self) -> Option<&Movement> {
        self.entries.first()
    }

    /// Append a movement with a fresh id and timestamp, then truncate
    /// to the cap (oldest evicted).
    pub(crate) fn append(
        &mut self,
        kind: MovementKind,
        product: Product,
        quantity: Option<f64>,
        previous: Option<Product>,
    ) -> &Movement {
        let timestamp = Utc::now();
        let id = (timestamp.timestamp_millis().max(0) as u64).max(self.last_id + 1);
        self.last_id = id;

        self.entries.insert(
            0,
            Movement {
                id,
                kind,
                product,
                quantity,
                previous,
                timestamp,
            },
        );
        self.entries.truncate(self.cap);
        &self.entries[0]
    }

    /// Filtered history in newest-first order.
    pub fn query(&self, query: &MovementQuery) -> Vec<&Movement> {
        self.entries
            .iter()
            .filter(|m| query.kind.is_none_or(|kind| m.kind == kind))
            .filter(|m| {
                query
                    .date
                    .is_none_or(|date| m.timestamp.with_timezone(&Local).date_naive() == date)
            })
            .collect()
    }
}

//! Configuration for the inventory manager

use std::path::PathBuf;

/// Default movement journal capacity.
pub const DEFAULT_HISTORY_CAP: usize = 1000;

/// Ordering policy for [`crate::ProductStore::list`].
///
/// The product collection itself always stores newest-first; this only
/// controls the order in which listings are returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListOrdering {
    /// Lexicographic by product name, case-insensitive.
    #[default]
    ByName,
    /// Insertion order, most recently added first.
    NewestFirst,
}

/// Inventory manager configuration
#[derive(Debug, Clone)]
pub struct InventoryConfig {
    /// Path of the redb database file.
    pub path: PathBuf,
    /// Maximum number of retained movements (oldest evicted first).
    pub history_cap: usize,
    /// Listing order for products.
    pub ordering: ListOrdering,
}

impl InventoryConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            history_cap: DEFAULT_HISTORY_CAP,
            ordering: ListOrdering::default(),
        }
    }

    /// Build a config from environment variables, falling back to
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let path = std::env::var("LARDER_DB_PATH").unwrap_or_else(|_| "larder.redb".into());
        let history_cap = std::env::var("LARDER_HISTORY_CAP")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_HISTORY_CAP);
        Self {
            path: path.into(),
            history_cap,
            ordering: ListOrdering::default(),
        }
    }

    pub fn with_history_cap(mut self, cap: usize) -> Self {
        self.history_cap = cap;
        self
    }

    pub fn with_ordering(mut self, ordering: ListOrdering) -> Self {
        self.ordering = ordering;
        self
    }
}

//! redb-based persistence layer
//!
//! # Layout
//!
//! A single `state` table maps fixed string keys to JSON blobs:
//!
//! | Key | Value |
//! |-----|-------|
//! | `products` | `{ "version": 1, "items": [Product, ...] }` (insertion order) |
//! | `movements` | `{ "version": 1, "items": [Movement, ...] }` (newest-first, capped) |
//!
//! Both records are rewritten in one write transaction after every
//! successful mutation, so the file never holds a products record
//! without its matching journal.
//!
//! # Durability
//!
//! redb commits with `Durability::Immediate` by default: copy-on-write
//! with an atomic pointer swap, so the file stays consistent across
//! power loss and forced shutdowns.
//!
//! # Loading
//!
//! Absent, malformed, or unknown-version records load as empty
//! collections with a warning. Stored state is never a fatal error.

use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableDatabase, TableDefinition};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::journal::Movement;
use crate::products::Product;

/// State table: key = record name, value = JSON-serialized versioned record
const STATE_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("state");

const PRODUCTS_KEY: &str = "products";
const MOVEMENTS_KEY: &str = "movements";

/// Version tag written into every persisted record. Bump on any
/// incompatible change to the serialized shapes.
const SCHEMA_VERSION: u32 = 1;

/// Persisted record envelope (deserialization side)
#[derive(Debug, Deserialize)]
struct VersionedRecord<T> {
    version: u32,
    items: Vec<T>,
}

/// Persisted record envelope (serialization side, borrows the items)
#[derive(Debug, Serialize)]
struct VersionedSlice<'a, T> {
    version: u32,
    items: &'a [T],
}

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Inventory persistence backed by redb
#[derive(Clone)]
pub struct InventoryStorage {
    db: Arc<Database>,
}

impl InventoryStorage {
    /// Open or create the database at the given path.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an ephemeral in-memory database (tests, throwaway sessions).
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        // Create the table up front so loads never hit a missing table
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(STATE_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Load the products record (insertion order).
    pub fn load_products(&self) -> StorageResult<Vec<Product>> {
        self.load(PRODUCTS_KEY)
    }

    /// Load the movements record (newest-first).
    pub fn load_movements(&self) -> StorageResult<Vec<Movement>> {
        self.load(MOVEMENTS_KEY)
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Vec<T>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(STATE_TABLE)?;
        let Some(guard) = table.get(key)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_slice::<VersionedRecord<T>>(guard.value()) {
            Ok(record) if record.version == SCHEMA_VERSION => Ok(record.items),
            Ok(record) => {
                warn!(
                    key,
                    version = record.version,
                    "unsupported schema version, starting with an empty record"
                );
                Ok(Vec::new())
            }
            Err(error) => {
                warn!(
                    key,
                    %error,
                    "malformed persisted record, starting with an empty record"
                );
                Ok(Vec::new())
            }
        }
    }

    /// Write both records in a single transaction.
    pub fn persist(&self, products: &[Product], movements: &[Movement]) -> StorageResult<()> {
        let products_json = serde_json::to_vec(&VersionedSlice {
            version: SCHEMA_VERSION,
            items: products,
        })?;
        let movements_json = serde_json::to_vec(&VersionedSlice {
            version: SCHEMA_VERSION,
            items: movements,
        })?;

        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(STATE_TABLE)?;
            table.insert(PRODUCTS_KEY, products_json.as_slice())?;
            table.insert(MOVEMENTS_KEY, movements_json.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Write raw bytes under a record key, bypassing serialization.
    #[cfg(test)]
    fn put_raw(&self, key: &str, bytes: &[u8]) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(STATE_TABLE)?;
            table.insert(key, bytes)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

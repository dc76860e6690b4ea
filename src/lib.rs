//! Larder - household inventory core
//!
//! State management for a single-user inventory tracker: a product
//! collection, an append-only movement journal, and a coordinating
//! manager that keeps both consistent and durably persisted.
//!
//! # Module Structure
//!
//! ```text
//! src/
//! ├── config.rs      # Manager configuration (db path, history cap, ordering)
//! ├── error.rs       # Error taxonomy
//! ├── products/      # Product model and validated product store
//! ├── journal/       # Movement types and the capped movement log
//! ├── manager.rs     # InventoryManager: mutate → journal → persist
//! └── storage.rs     # redb-based persistence layer
//! ```
//!
//! # Operation Flow
//!
//! ```text
//! Caller → InventoryManager
//!     ├─ 1. Validate input
//!     ├─ 2. Mutate ProductStore
//!     ├─ 3. Append Movement to journal
//!     ├─ 4. Persist both records (single transaction)
//!     └─ 5. Return outcome
//! ```
//!
//! All operations are synchronous and run to completion; the manager
//! owns both collections exclusively, so a failed validation never
//! leaves partial state behind.

pub mod config;
pub mod error;
pub mod journal;
pub mod manager;
pub mod products;
pub mod storage;

// Re-export public types
pub use config::{InventoryConfig, ListOrdering, DEFAULT_HISTORY_CAP};
pub use error::{Field, InventoryError, InventoryResult};
pub use journal::{Movement, MovementKind, MovementLog, MovementQuery};
pub use manager::InventoryManager;
pub use products::{Product, ProductDraft, ProductId, ProductStore};
pub use storage::{InventoryStorage, StorageError, StorageResult};

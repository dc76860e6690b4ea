//! InventoryManager - coordination and persistence
//!
//! The manager owns the product store and the movement log and is the
//! only writer to either. Every mutating operation follows the same
//! flow:
//!
//! ```text
//! operation(input)
//!     ├─ 1. Validate input
//!     ├─ 2. Mutate ProductStore
//!     ├─ 3. Append Movement to the journal
//!     ├─ 4. Persist both records (single write transaction)
//!     └─ 5. Return outcome
//! ```
//!
//! Validation precedes every write, so a failed operation leaves both
//! collections untouched and unjournaled. A persistence failure after
//! a successful mutation is logged and surfaced as
//! [`InventoryError::Storage`]; in-memory state stays mutated and
//! consistent, it is just not durable yet.

use tracing::{error, info};

use crate::config::InventoryConfig;
use crate::error::{InventoryError, InventoryResult};
use crate::journal::{Movement, MovementKind, MovementLog, MovementQuery};
use crate::products::{Product, ProductDraft, ProductId, ProductStore};
use crate::storage::InventoryStorage;

/// Coordinating layer over the product store and movement log
pub struct InventoryManager {
    products: ProductStore,
    movements: MovementLog,
    storage: InventoryStorage,
}

impl InventoryManager {
    /// Open the database at `config.path` and load both records.
    pub fn open(config: &InventoryConfig) -> InventoryResult<Self> {
        let storage = InventoryStorage::open(&config.path)?;
        Self::load(config, storage)
    }

    /// Ephemeral manager backed by an in-memory database.
    pub fn open_in_memory(config: &InventoryConfig) -> InventoryResult<Self> {
        let storage = InventoryStorage::open_in_memory()?;
        Self::load(config, storage)
    }

    fn load(config: &InventoryConfig, storage: InventoryStorage) -> InventoryResult<Self> {
        let products = storage.load_products()?;
        let movements = storage.load_movements()?;
        info!(
            products = products.len(),
            movements = movements.len(),
            "inventory loaded"
        );

        Ok(Self {
            products: ProductStore::from_items(products, config.ordering),
            movements: MovementLog::from_entries(movements, config.history_cap),
            storage,
        })
    }

    // ========== Mutations ==========

    /// Validate and add a new product; journals an `Entry` movement
    /// carrying the initial quantity as its delta.
    pub fn create_product(&mut self, draft: &ProductDraft) -> InventoryResult<Product> {
        let product = self.products.add(draft)?.clone();
        self.movements.append(
            MovementKind::Entry,
            product.clone(),
            Some(product.quantity),
            None,
        );

        info!(
            id = %product.id,
            name = %product.name,
            quantity = product.quantity,
            "product created"
        );
        self.persist()?;
        Ok(product)
    }

    /// Replace the product's fields; journals an `Edit` movement with
    /// the pre-mutation snapshot for diffing, no delta.
    pub fn edit_product(&mut self, id: &ProductId, draft: &ProductDraft) -> InventoryResult<Product> {
        let (previous, updated) = self.products.update(id, draft)?;
        let updated = updated.clone();
        self.movements
            .append(MovementKind::Edit, updated.clone(), None, Some(previous));

        info!(id = %updated.id, name = %updated.name, "product edited");
        self.persist()?;
        Ok(updated)
    }

    /// Deduct stock; journals an `Exit` movement with the deducted
    /// amount. Invalid or unsatisfiable amounts reject before any
    /// mutation, leaving store and journal unchanged. Returns the new
    /// quantity.
    pub fn record_exit(&mut self, id: &ProductId, amount: f64) -> InventoryResult<f64> {
        let snapshot = self.products.decrement_stock(id, amount)?.clone();
        self.movements
            .append(MovementKind::Exit, snapshot.clone(), Some(amount), None);

        info!(
            id = %snapshot.id,
            name = %snapshot.name,
            amount,
            remaining = snapshot.quantity,
            "stock exit recorded"
        );
        self.persist()?;
        Ok(snapshot.quantity)
    }

    /// Remove the product; journals a `Delete` movement from the
    /// snapshot captured at the moment of removal (the store does not
    /// retain deleted state).
    pub fn delete_product(&mut self, id: &ProductId) -> InventoryResult<Product> {
        let removed = self.products.remove(id)?;
        self.movements
            .append(MovementKind::Delete, removed.clone(), None, None);

        info!(id = %removed.id, name = %removed.name, "product deleted");
        self.persist()?;
        Ok(removed)
    }

    // ========== Reads ==========

    /// Filtered product listing as owned snapshots for rendering.
    /// A blank term returns everything.
    pub fn search(&self, term: &str) -> Vec<Product> {
        self.products.list(term).into_iter().cloned().collect()
    }

    /// Single product snapshot (e.g. to prefill an edit form).
    pub fn product(&self, id: &ProductId) -> Option<Product> {
        self.products.get(id).cloned()
    }

    /// Filtered movement history, newest-first, as owned snapshots.
    pub fn history(&self, query: &MovementQuery) -> Vec<Movement> {
        self.movements
            .query(query)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    pub fn movement_count(&self) -> usize {
        self.movements.len()
    }

    // ========== Persistence ==========

    fn persist(&self) -> InventoryResult<()> {
        if let Err(error) = self
            .storage
            .persist(self.products.items(), self.movements.entries())
        {
            error!(%error, "failed to persist inventory state");
            return Err(InventoryError::Storage(error));
        }
        Ok(())
    }
}

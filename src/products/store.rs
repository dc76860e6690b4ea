//! In-memory product store with validated mutations
//!
//! The store owns the authoritative ordered collection. New products
//! are inserted at the head (newest-first); listing order is a
//! separate, configured policy. All mutations validate before writing,
//! so a failed operation never leaves partial state.

use chrono::Utc;

use crate::config::ListOrdering;
use crate::error::{Field, InventoryError, InventoryResult};
use crate::products::{Product, ProductDraft, ProductId};

/// Validated, trimmed draft fields
struct ValidDraft {
    name: String,
    unit: String,
    quantity: f64,
    description: Option<String>,
}

/// Field-level draft validation. Checks mirror the intake form: name
/// at least 2 characters after trimming, unit non-empty, quantity a
/// finite non-negative number.
fn validate(draft: &ProductDraft) -> InventoryResult<ValidDraft> {
    let name = draft.name.trim();
    if name.chars().count() < 2 {
        return Err(InventoryError::validation(
            Field::Name,
            "must be at least 2 characters",
        ));
    }

    let unit = draft.unit.trim();
    if unit.is_empty() {
        return Err(InventoryError::validation(Field::Unit, "must not be empty"));
    }

    if !draft.quantity.is_finite() || draft.quantity < 0.0 {
        return Err(InventoryError::validation(
            Field::Quantity,
            "must be a non-negative number",
        ));
    }

    let description = draft
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(String::from);

    Ok(ValidDraft {
        name: name.to_string(),
        unit: unit.to_string(),
        quantity: draft.quantity,
        description,
    })
}

/// Ordered product collection
#[derive(Debug)]
pub struct ProductStore {
    /// Newest-first insertion order.
    items: Vec<Product>,
    ordering: ListOrdering,
}

impl ProductStore {
    pub(crate) fn new(ordering: ListOrdering) -> Self {
        Self {
            items: Vec::new(),
            ordering,
        }
    }

    /// Rebuild from persisted items (already newest-first).
    pub(crate) fn from_items(items: Vec<Product>, ordering: ListOrdering) -> Self {
        let mut store = Self::new(ordering);
        store.items = items;
        store
    }

    /// Backing collection in insertion order, for persistence.
    pub(crate) fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.items.iter().find(|p| &p.id == id)
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.items.iter().position(|p| &p.id == id)
    }

    /// Validate and insert a new product at the head of the collection.
    pub(crate) fn add(&mut self, draft: &ProductDraft) -> InventoryResult<&Product> {
        let valid = validate(draft)?;
        let product = Product {
            id: ProductId::generate(),
            name: valid.name,
            unit: valid.unit,
            quantity: valid.quantity,
            description: valid.description,
            updated_at: Utc::now(),
        };
        self.items.insert(0, product);
        Ok(&self.items[0])
    }

    /// Replace every field of the product (id excepted), returning the
    /// pre-mutation snapshot alongside the new state.
    pub(crate) fn update(
        &mut self,
        id: &ProductId,
        draft: &ProductDraft,
    ) -> InventoryResult<(Product, &Product)> {
        let valid = validate(draft)?;
        let pos = self
            .position(id)
            .ok_or_else(|| InventoryError::NotFound(id.clone()))?;

        let previous = self.items[pos].clone();
        let current = &mut self.items[pos];
        current.name = valid.name;
        current.unit = valid.unit;
        current.quantity = valid.quantity;
        current.description = valid.description;
        current.updated_at = Utc::now();

        Ok((previous, &self.items[pos]))
    }

    /// Remove the product, returning its last state for journaling.
    pub(crate) fn remove(&mut self, id: &ProductId) -> InventoryResult<Product> {
        let pos = self
            .position(id)
            .ok_or_else(|| InventoryError::NotFound(id.clone()))?;
        Ok(self.items.remove(pos))
    }

    /// Subtract `amount` from the product's stock.
    ///
    /// `amount` must be a positive finite number no greater than the
    /// current quantity; the quantity invariant (never negative) is
    /// checked before any write. Returns the updated product.
    pub(crate) fn decrement_stock(
        &mut self,
        id: &ProductId,
        amount: f64,
    ) -> InventoryResult<&Product> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(InventoryError::InvalidAmount(amount));
        }

        let pos = self
            .position(id)
            .ok_or_else(|| InventoryError::NotFound(id.clone()))?;

        let product = &mut self.items[pos];
        if amount > product.quantity {
            return Err(InventoryError::InsufficientStock {
                requested: amount,
                available: product.quantity,
            });
        }

        product.quantity -= amount;
        product.updated_at = Utc::now();
        Ok(&self.items[pos])
    }

    /// List products, optionally filtered by a case-insensitive
    /// substring match against name, description, and unit. Order
    /// follows the configured [`ListOrdering`].
    pub fn list(&self, term: &str) -> Vec<&Product> {
        let term = term.trim().to_lowercase();
        let mut matches: Vec<&Product> = if term.is_empty() {
            self.items.iter().collect()
        } else {
            self.items
                .iter()
                .filter(|p| {
                    p.name.to_lowercase().contains(&term)
                        || p.unit.to_lowercase().contains(&term)
                        || p.description
                            .as_deref()
                            .is_some_and(|d| d.to_lowercase().contains(&term))
                })
                .collect()
        };

        if self.ordering == ListOrdering::ByName {
            matches.sort_by_key(|p| p.name.to_lowercase());
        }
        matches
    }
}

//! Movement journal types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::products::Product;

/// Movement kind (enum, not free text)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementKind {
    /// Product added to the inventory.
    Entry,
    /// Stock deducted.
    Exit,
    /// Product fields replaced.
    Edit,
    /// Product removed from the inventory.
    Delete,
}

impl std::fmt::Display for MovementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Journal entry (immutable once appended)
///
/// Snapshots are full copies, not references, so later edits to the
/// product cannot rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    /// Unique, monotonically increasing, time-based identifier.
    pub id: u64,
    pub kind: MovementKind,
    /// Product state at the time of the event.
    pub product: Product,
    /// Quantity delta; `Some` for entry/exit movements.
    #[serde(default)]
    pub quantity: Option<f64>,
    /// Prior product state; `Some` only for edits.
    #[serde(default)]
    pub previous: Option<Product>,
    pub timestamp: DateTime<Utc>,
}

impl Movement {
    /// Human-readable one-line summary for the history view.
    pub fn describe(&self) -> String {
        let p = &self.product;
        match self.kind {
            MovementKind::Entry => format!(
                "Product added: {} ({} {})",
                p.name,
                self.quantity.unwrap_or(p.quantity),
                p.unit
            ),
            MovementKind::Exit => format!(
                "Removed {} {} of {}",
                self.quantity.unwrap_or(0.0),
                p.unit,
                p.name
            ),
            MovementKind::Edit => {
                let mut changes = Vec::new();
                if let Some(prev) = &self.previous {
                    if prev.name != p.name {
                        changes.push(format!("name \"{}\" to \"{}\"", prev.name, p.name));
                    }
                    if prev.unit != p.unit {
                        changes.push(format!("unit \"{}\" to \"{}\"", prev.unit, p.unit));
                    }
                    if prev.quantity != p.quantity {
                        changes.push(format!("quantity {} to {}", prev.quantity, p.quantity));
                    }
                    if prev.description != p.description {
                        changes.push("description".to_string());
                    }
                }
                if changes.is_empty() {
                    format!("Product edited: {}", p.name)
                } else {
                    format!("Product edited: {} ({})", p.name, changes.join(", "))
                }
            }
            MovementKind::Delete => {
                format!("Product removed: {} ({} {})", p.name, p.quantity, p.unit)
            }
        }
    }
}

/// Journal query filters
#[derive(Debug, Clone, Default)]
pub struct MovementQuery {
    /// Exact kind match; `None` matches all kinds.
    pub kind: Option<MovementKind>,
    /// Matches movements whose timestamp falls on this local calendar
    /// day (time-of-day truncated).
    pub date: Option<NaiveDate>,
}

impl MovementQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn kind(kind: MovementKind) -> Self {
        Self {
            kind: Some(kind),
            date: None,
        }
    }

    pub fn on(date: NaiveDate) -> Self {
        Self {
            kind: None,
            date: Some(date),
        }
    }
}

//! Product model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable product identifier, assigned once at creation.
///
/// Products are always addressed by id, never by display position;
/// the view layer maps ids to rows itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Product record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit of measure label (free text, e.g. "kg", "un").
    pub unit: String,
    /// Current stock. Never negative; fractional values allowed.
    pub quantity: f64,
    #[serde(default)]
    pub description: Option<String>,
    /// Time of the last mutation.
    pub updated_at: DateTime<Utc>,
}

/// Unvalidated input for create and edit operations.
///
/// Edits are full-field replacements: every field of the draft becomes
/// the product's new state (quantity included), only the id survives.
#[derive(Debug, Clone, Default)]
pub struct ProductDraft {
    pub name: String,
    pub unit: String,
    pub quantity: f64,
    pub description: Option<String>,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, unit: impl Into<String>, quantity: f64) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            quantity,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

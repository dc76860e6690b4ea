//! Product model and store
//!
//! - **model**: `Product`, `ProductId`, and the `ProductDraft` input type
//! - **store**: ordered in-memory collection with validated mutations

pub mod model;
pub mod store;

pub use model::{Product, ProductDraft, ProductId};
pub use store::ProductStore;

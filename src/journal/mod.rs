//! Movement journal
//!
//! Append-only history of every inventory mutation:
//!
//! - **types**: `Movement`, `MovementKind`, `MovementQuery`
//! - **log**: the capped, newest-first `MovementLog`
//!
//! Entries are immutable once written and are only ever discarded by
//! the capacity cap (oldest first). There is no update or individual
//! delete interface.

pub mod log;
pub mod types;

pub use log::MovementLog;
pub use types::{Movement, MovementKind, MovementQuery};

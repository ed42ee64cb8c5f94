//! Domain model types (pure).
//!
//! All types in this module are immutable data loaded from the catalog
//! archive, plus the closed set of key actions.

pub mod error;
pub mod key_action;
pub mod pack;

// Re-export for convenience
pub use error::{AppError, CatalogError, SessionError};
pub use key_action::{decode_keys, Key, KeyAction};
pub use pack::{PackDetail, PackFlags, PackId, PackSummary};

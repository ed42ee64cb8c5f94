//! Session state machine pieces (pure).
//!
//! All state transitions are pure functions testable without a terminal.

pub mod geometry;
pub mod navigation;
pub mod pager;
pub mod pagination;
pub mod search_input;
pub mod view_mode;

// Re-export for convenience
pub use geometry::Geometry;
pub use navigation::handle_navigation;
pub use pager::{paginate, Pager};
pub use pagination::{search_packs, DetailPage, ListSource, PaginationContext};
pub use search_input::{InputEvent, SearchBuffer, SearchTerm};
pub use view_mode::{ListView, ViewMode};

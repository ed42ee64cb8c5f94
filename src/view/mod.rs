//! Text rendering (pure).
//!
//! Everything here maps terminal geometry and view data to exact output
//! text plus the number of terminal rows it takes. Nothing writes to a
//! terminal; the session hands finished screens to its transport.

pub mod block;
pub mod constants;
mod help;
mod layout;
pub mod sections;
pub mod styles;
pub mod text;
pub mod thumbnail;

pub use block::{pad, Block};
pub use layout::{Layout, ListScreen};
pub use text::center_and_truncate;
pub use thumbnail::{thumbnail_row, Badge, Thumbnail};

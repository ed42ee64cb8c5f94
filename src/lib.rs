//! stickerterm
//!
//! Browse a sticker pack catalog from a text terminal: a paginated grid of
//! ASCII-art thumbnails, free-text search, a detail view per pack and a help
//! overlay, all driven by raw keystrokes.
//!
//! The crate follows a Pure Core / Impure Shell split: `state` and `view` are
//! pure, `session` orchestrates them per connection, `transport` and the binary
//! own the side effects.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod model;
pub mod session;
pub mod state;
pub mod transport;
pub mod view;

#[cfg(test)]
mod test_harness;

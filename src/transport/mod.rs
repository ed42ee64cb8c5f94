//! Session boundary (impure shell).
//!
//! A session never touches a terminal directly: it writes finished screens
//! and toggles input modes through [`SessionIo`]. The transport in turn feeds
//! raw input bytes to [`crate::session::Session::on_data`] and reports the
//! end of input with [`crate::session::Session::on_disconnect`].

pub mod capture;
pub mod terminal;

pub use capture::CaptureIo;
pub use terminal::{run_terminal_session, TerminalIo};

use std::io;

/// Output side of a session's transport.
pub trait SessionIo {
    /// Send text to the user's terminal.
    fn write(&mut self, data: &str) -> io::Result<()>;

    /// Echo typed characters back to the user.
    fn set_echo(&mut self, enabled: bool) -> io::Result<()>;

    /// Deliver input a line at a time instead of per key.
    fn set_line_buffering(&mut self, enabled: bool) -> io::Result<()>;

    /// End the session with an exit status.
    fn close(&mut self, code: i32) -> io::Result<()>;
}

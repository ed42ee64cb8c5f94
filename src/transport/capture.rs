//! In-memory transport recording every call.
//!
//! Used by tests and benchmarks to drive a session without a terminal.

use super::SessionIo;
use std::io;

/// Transport that keeps everything a session sends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureIo {
    writes: Vec<String>,
    echo: bool,
    line_buffering: bool,
    exit_code: Option<i32>,
}

impl CaptureIo {
    /// A transport with nothing recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every write, in order.
    pub fn writes(&self) -> &[String] {
        &self.writes
    }

    /// Most recent write, usually the current screen.
    pub fn last_write(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }

    /// All writes concatenated.
    pub fn output(&self) -> String {
        self.writes.concat()
    }

    /// Whether the session last asked for echo.
    pub fn echo(&self) -> bool {
        self.echo
    }

    /// Whether the session last asked for line buffering.
    pub fn line_buffering(&self) -> bool {
        self.line_buffering
    }

    /// Exit status, once the session closed.
    pub fn exit_code(&self) -> Option<i32> {
        self.exit_code
    }
}

impl SessionIo for CaptureIo {
    fn write(&mut self, data: &str) -> io::Result<()> {
        self.writes.push(data.to_string());
        Ok(())
    }

    fn set_echo(&mut self, enabled: bool) -> io::Result<()> {
        self.echo = enabled;
        Ok(())
    }

    fn set_line_buffering(&mut self, enabled: bool) -> io::Result<()> {
        self.line_buffering = enabled;
        Ok(())
    }

    fn close(&mut self, code: i32) -> io::Result<()> {
        self.exit_code = Some(code);
        Ok(())
    }
}

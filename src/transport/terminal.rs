//! Local terminal transport built on crossterm.
//!
//! The process's own terminal stands in for a remote shell channel. The
//! terminal stays in raw mode for the whole session; echo and line buffering
//! for the search prompt are done here, so Ctrl-C and Ctrl-Z always reach the
//! session as bytes instead of raising signals.

use super::SessionIo;
use crate::catalog::Catalog;
use crate::model::{decode_keys, AppError, KeyAction};
use crate::session::Session;
use crossterm::{
    terminal::{
        self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
    },
    ExecutableCommand,
};
use std::io::{self, Read, Write};
use std::sync::Arc;
use tracing::{debug, info};

/// Size of one stdin read. Pasted text may span several reads.
const READ_CHUNK: usize = 1024;

/// Erases the last echoed character.
const ECHO_ERASE: &str = "\x08 \x08";

// ===== LineEditor =====

/// What one input chunk turns into once line editing is applied.
#[derive(Debug, Default, PartialEq, Eq)]
struct Edited {
    /// Text handed to the session.
    forward: String,
    /// Text written back to the terminal when echo is on.
    echo: String,
}

/// Line discipline for echoed, line-buffered input on a raw terminal.
///
/// Printable keys collect in a line that is handed over on Return. Exit keys
/// and Escape bypass the line; other escape sequences are dropped.
#[derive(Debug, Default)]
struct LineEditor {
    line: String,
}

impl LineEditor {
    fn feed(&mut self, data: &[u8], line_buffering: bool) -> Edited {
        let mut edited = Edited::default();

        for key in decode_keys(data) {
            let raw = key.as_str();
            if key.action() == Some(KeyAction::Exit) || raw == "\x1b" {
                self.line.clear();
                edited.forward.push_str(raw);
                continue;
            }
            if !line_buffering {
                edited.forward.push_str(raw);
                if key.as_char().is_some_and(|c| !c.is_control()) {
                    edited.echo.push_str(raw);
                }
                continue;
            }

            match key.as_char() {
                Some('\r' | '\n') => {
                    edited.forward.push_str(&self.line);
                    edited.forward.push('\r');
                    edited.echo.push_str("\r\n");
                    self.line.clear();
                }
                Some('\x7f' | '\x08') => {
                    if self.line.pop().is_some() {
                        edited.echo.push_str(ECHO_ERASE);
                    }
                }
                Some(c) if !c.is_control() => {
                    self.line.push(c);
                    edited.echo.push(c);
                }
                _ => {}
            }
        }

        edited
    }
}

// ===== TerminalIo =====

/// Transport writing to a terminal-like writer.
///
/// The alternate screen and raw mode are entered by [`TerminalIo::enter`]
/// and left on close or drop. Input read from the terminal passes through
/// [`TerminalIo::edit_input`] before reaching the session.
pub struct TerminalIo<W: Write> {
    out: W,
    echo: bool,
    line_buffering: bool,
    editor: LineEditor,
    raw: bool,
    entered: bool,
    exit_code: Option<i32>,
}

impl TerminalIo<io::Stdout> {
    /// Transport on the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalIo<W> {
    /// Wrap `out`. Nothing is written until [`TerminalIo::enter`].
    pub fn new(out: W) -> Self {
        Self {
            out,
            echo: false,
            line_buffering: false,
            editor: LineEditor::default(),
            raw: false,
            entered: false,
            exit_code: None,
        }
    }

    /// Switch to the alternate screen and raw input.
    pub fn enter(&mut self) -> io::Result<()> {
        self.out.execute(EnterAlternateScreen)?;
        self.entered = true;
        enable_raw_mode()?;
        self.raw = true;
        Ok(())
    }

    /// Exit status, once the session closed.
    pub fn exit_code(&self) -> Option<i32> {
        self.exit_code
    }

    /// Apply echo and line buffering to a chunk read from the terminal.
    ///
    /// Returns the bytes the session should see; with neither mode on the
    /// chunk passes through untouched.
    pub fn edit_input(&mut self, data: &[u8]) -> io::Result<Vec<u8>> {
        if !self.echo && !self.line_buffering {
            return Ok(data.to_vec());
        }

        let edited = self.editor.feed(data, self.line_buffering);
        if self.echo && !edited.echo.is_empty() {
            self.out.write_all(edited.echo.as_bytes())?;
            self.out.flush()?;
        }
        Ok(edited.forward.into_bytes())
    }

    fn restore(&mut self) -> io::Result<()> {
        if self.raw {
            disable_raw_mode()?;
            self.raw = false;
        }
        if self.entered {
            self.out.execute(LeaveAlternateScreen)?;
            self.entered = false;
        }
        Ok(())
    }
}

impl<W: Write> SessionIo for TerminalIo<W> {
    fn write(&mut self, data: &str) -> io::Result<()> {
        // Raw mode disables output post-processing, so bare LF would not return the carriage.
        if self.raw {
            self.out.write_all(data.replace('\n', "\r\n").as_bytes())?;
        } else {
            self.out.write_all(data.as_bytes())?;
        }
        self.out.flush()
    }

    fn set_echo(&mut self, enabled: bool) -> io::Result<()> {
        self.echo = enabled;
        Ok(())
    }

    fn set_line_buffering(&mut self, enabled: bool) -> io::Result<()> {
        if !enabled {
            self.editor.line.clear();
        }
        self.line_buffering = enabled;
        Ok(())
    }

    fn close(&mut self, code: i32) -> io::Result<()> {
        self.exit_code = Some(code);
        self.restore()
    }
}

impl<W: Write> Drop for TerminalIo<W> {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// Run one session on the process's terminal until it closes or stdin ends.
///
/// Returns the session's exit status.
pub fn run_terminal_session(catalog: Arc<Catalog>) -> Result<i32, AppError> {
    let (width, height) = terminal::size()?;
    let mut io = TerminalIo::stdout();
    io.enter()?;

    let mut session = Session::start(
        io,
        catalog,
        usize::from(width),
        usize::from(height),
        "local",
    )?;

    let mut stdin = io::stdin().lock();
    let mut buf = [0u8; READ_CHUNK];
    while !session.is_closed() {
        let read = stdin.read(&mut buf)?;
        if read == 0 {
            debug!("stdin reached end of input");
            session.on_disconnect()?;
            break;
        }
        let input = session.io_mut().edit_input(&buf[..read])?;
        session.on_data(&input)?;
    }

    let code = session.into_io().exit_code().unwrap_or(0);
    info!(code, "Terminal session ended");
    Ok(code)
}

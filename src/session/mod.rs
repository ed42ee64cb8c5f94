//! Per-connection session state machine.
//!
//! A [`Session`] owns the cursor, the active [`ViewMode`] and the list
//! pagination for one user. Every input chunk is decoded into keys and
//! dispatched in order; every state change ends with a render written to
//! the session's transport.

use crate::catalog::Catalog;
use crate::model::{decode_keys, Key, KeyAction, SessionError};
use crate::state::{
    handle_navigation, Geometry, InputEvent, ListView, PaginationContext, SearchBuffer,
    SearchTerm, ViewMode,
};
use crate::transport::SessionIo;
use crate::view::styles::{paint, BOLD, CLEAR_TO_CURSOR, CURSOR_HOME};
use crate::view::{Layout, ListScreen};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Shown in place of the help hint when an opened pack cannot be found.
pub const UNAVAILABLE_NOTICE: &str = "This pack is currently unavailable.";

/// Text after the bold "Search" label of the search prompt.
const SEARCH_PROMPT_HINT: &str = " (press Return to validate): ";

/// One user's browsing session.
pub struct Session<IO: SessionIo> {
    io: IO,
    catalog: Arc<Catalog>,
    layout: Layout,
    peer: String,

    list: PaginationContext,
    cursor: usize,
    mode: ViewMode,
    notice: Option<&'static str>,

    packs_viewed: usize,
    connected_at: DateTime<Utc>,
    rendered_once: bool,
    closed: bool,
}

impl<IO: SessionIo> Session<IO> {
    /// Open a session for a terminal of `width` x `height` and draw the first screen.
    ///
    /// The session starts on the first page of the full catalog.
    pub fn start(
        io: IO,
        catalog: Arc<Catalog>,
        width: usize,
        height: usize,
        peer: impl Into<String>,
    ) -> Result<Self, SessionError> {
        let geometry = Geometry::new(width, height);
        let list = PaginationContext::catalog(&catalog, geometry.browse_page_size());
        let mut session = Self {
            io,
            catalog,
            layout: Layout::new(geometry),
            peer: peer.into(),
            list,
            cursor: 0,
            mode: ViewMode::Browse,
            notice: None,
            packs_viewed: 0,
            connected_at: Utc::now(),
            rendered_once: false,
            closed: false,
        };

        session.set_text_input(false)?;
        session.render()?;
        info!(
            peer = %session.peer,
            width,
            height,
            columns = geometry.columns(),
            page_size = session.list.page_size(),
            "Session started"
        );
        Ok(session)
    }

    // ===== Accessors =====

    /// Active view.
    pub fn mode(&self) -> &ViewMode {
        &self.mode
    }

    /// Highlighted pack, relative to the current page.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Pagination of the list the session rests on.
    pub fn list(&self) -> &PaginationContext {
        &self.list
    }

    /// Terminal size the session was started with, and what follows from it.
    pub fn geometry(&self) -> Geometry {
        self.layout.geometry()
    }

    /// Packs opened since the session started.
    pub fn packs_viewed(&self) -> usize {
        self.packs_viewed
    }

    /// Whether the session ended. Later input is ignored.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// The transport, for inspection.
    pub fn io(&self) -> &IO {
        &self.io
    }

    /// The transport, for input pre-processing done on its side.
    pub fn io_mut(&mut self) -> &mut IO {
        &mut self.io
    }

    /// End the session and hand back its transport.
    pub fn into_io(self) -> IO {
        self.io
    }

    // ===== Transport events =====

    /// Handle a chunk of raw input. Keys are dispatched in arrival order.
    pub fn on_data(&mut self, data: &[u8]) -> Result<(), SessionError> {
        for key in decode_keys(data) {
            if self.closed {
                break;
            }
            self.handle_key(&key)?;
        }
        Ok(())
    }

    /// The user went away: clean shutdown from any state.
    pub fn on_disconnect(&mut self) -> Result<(), SessionError> {
        self.close()
    }

    // ===== Dispatch =====

    fn handle_key(&mut self, key: &Key) -> Result<(), SessionError> {
        let action = key.action();
        if action == Some(KeyAction::Exit) {
            return self.close();
        }

        if let ViewMode::SearchInput { buffer, .. } = &mut self.mode {
            return match buffer.handle_key(key) {
                InputEvent::Edited => Ok(()),
                InputEvent::Submit => self.commit_search(),
                InputEvent::Cancel => self.cancel_search(),
            };
        }

        let Some(action) = action else {
            debug!(
                peer = %self.peer,
                mode = self.mode.name(),
                key = ?key.as_str(),
                "Ignoring unmapped key"
            );
            return Ok(());
        };

        match action {
            KeyAction::Escape => self.escape(),
            KeyAction::Help => self.open_help(),
            KeyAction::Search => self.open_search(),
            KeyAction::Return => self.open_detail(),
            KeyAction::Up | KeyAction::Down | KeyAction::Left | KeyAction::Right => {
                self.navigate(action)
            }
            KeyAction::Exit => self.close(),
        }
    }

    fn navigate(&mut self, action: KeyAction) -> Result<(), SessionError> {
        if !self.mode.is_list() {
            return Ok(());
        }
        let columns = self.geometry().columns();
        match handle_navigation(action, self.cursor, self.list.pager_mut(), columns) {
            Some(cursor) => {
                self.cursor = cursor;
                self.render()
            }
            None => Ok(()),
        }
    }

    fn escape(&mut self) -> Result<(), SessionError> {
        match &self.mode {
            ViewMode::Help { origin } | ViewMode::Detail { origin, .. } => {
                self.mode = ViewMode::list(*origin);
                self.render()
            }
            ViewMode::BrowseSearching => {
                let page_size = self.geometry().browse_page_size();
                self.list = PaginationContext::catalog(&self.catalog, page_size);
                self.cursor = 0;
                self.mode = ViewMode::Browse;
                debug!(peer = %self.peer, page_size, "Search cleared");
                self.render()
            }
            // Nothing to leave; SearchInput never reaches here.
            ViewMode::Browse | ViewMode::SearchInput { .. } => Ok(()),
        }
    }

    fn open_help(&mut self) -> Result<(), SessionError> {
        if !self.mode.is_list() {
            return Ok(());
        }
        self.mode = ViewMode::Help {
            origin: self.mode.list_view(),
        };
        self.render()
    }

    // ===== Search =====

    fn open_search(&mut self) -> Result<(), SessionError> {
        if !self.mode.is_list() {
            return Ok(());
        }
        self.mode = ViewMode::SearchInput {
            origin: self.mode.list_view(),
            buffer: SearchBuffer::new(),
        };
        self.io
            .write(&format!("{}{SEARCH_PROMPT_HINT}", paint(BOLD, "Search")))?;
        self.set_text_input(true)
    }

    fn commit_search(&mut self) -> Result<(), SessionError> {
        let ViewMode::SearchInput { buffer, .. } = &self.mode else {
            return Ok(());
        };
        let Some(term) = buffer.commit() else {
            return self.cancel_search();
        };

        let page_size = self.geometry().search_page_size();
        self.list = PaginationContext::search(term, &self.catalog, page_size);
        self.cursor = 0;
        self.mode = ViewMode::BrowseSearching;
        info!(
            peer = %self.peer,
            term = self.list.search_term().map(SearchTerm::as_str).unwrap_or_default(),
            results = self.list.total(),
            "Search committed"
        );

        self.set_text_input(false)?;
        self.render()
    }

    fn cancel_search(&mut self) -> Result<(), SessionError> {
        let origin: ListView = self.mode.list_view();
        self.mode = ViewMode::list(origin);
        self.set_text_input(false)?;
        self.render()
    }

    fn set_text_input(&mut self, enabled: bool) -> Result<(), SessionError> {
        self.io.set_echo(enabled)?;
        self.io.set_line_buffering(enabled)?;
        Ok(())
    }

    // ===== Detail =====

    fn open_detail(&mut self) -> Result<(), SessionError> {
        if !self.mode.is_list() {
            return Ok(());
        }
        let Some(pack) = self.list.pack_at(self.cursor) else {
            return Ok(());
        };
        let id = pack.id.clone();

        match self.catalog.detail(&id) {
            Ok(detail) => {
                let page = self.list.enter_detail(detail);
                self.mode = ViewMode::Detail {
                    origin: self.mode.list_view(),
                    page,
                };
                self.packs_viewed += 1;
                info!(peer = %self.peer, pack_id = %id, "Pack opened");
            }
            Err(err) if err.is_not_found() => {
                warn!(peer = %self.peer, pack_id = %id, "Pack unavailable");
                self.notice = Some(UNAVAILABLE_NOTICE);
            }
            Err(err) => {
                error!(peer = %self.peer, pack_id = %id, error = %err, "Failed to read pack");
                return Err(err.into());
            }
        }
        self.render()
    }

    // ===== Output =====

    fn render(&mut self) -> Result<(), SessionError> {
        let screen = match &self.mode {
            ViewMode::Help { .. } => self.layout.help(),
            ViewMode::Detail { page, .. } => self.layout.detail(page),
            ViewMode::Browse | ViewMode::BrowseSearching | ViewMode::SearchInput { .. } => {
                self.layout.list(&ListScreen {
                    packs: self.list.current_page(),
                    cursor: self.cursor,
                    search_term: self.list.search_term().map(SearchTerm::as_str),
                    notice: self.notice,
                })
            }
        };
        self.notice = None;

        let text = screen.into_text();
        let out = if self.rendered_once {
            format!("{CLEAR_TO_CURSOR}{CURSOR_HOME}{text}")
        } else {
            text
        };
        self.rendered_once = true;
        debug!(peer = %self.peer, mode = self.mode.name(), "Rendered");

        self.io.write(&out)?;
        Ok(())
    }

    fn close(&mut self) -> Result<(), SessionError> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.io.write(&format!("{CLEAR_TO_CURSOR}{CURSOR_HOME}"))?;

        let duration = Utc::now().signed_duration_since(self.connected_at);
        info!(
            peer = %self.peer,
            packs_viewed = self.packs_viewed,
            connected_at = %self.connected_at.to_rfc3339(),
            duration_secs = duration.num_seconds(),
            "Client disconnected"
        );

        self.io.close(0)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;

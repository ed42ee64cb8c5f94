//! Session view state machine.
//!
//! ViewMode is a sum type: exactly one view is active at a time. Overlays and
//! the detail view remember the list view they were opened from and always
//! return to it.

use super::pagination::DetailPage;
use super::search_input::SearchBuffer;

/// The two list views a session can rest on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView {
    /// Full catalog.
    Browse,
    /// Search results for the active term.
    BrowseSearching,
}

/// Active view of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode {
    /// Full catalog grid.
    Browse,
    /// Filtered grid with the results banner.
    BrowseSearching,
    /// Search prompt open; keys are text.
    SearchInput {
        /// List view to return to.
        origin: ListView,
        /// Text typed so far.
        buffer: SearchBuffer,
    },
    /// Help screen; navigation keys are ignored.
    Help {
        /// List view to return to.
        origin: ListView,
    },
    /// One pack opened.
    Detail {
        /// List view to return to, on the page it was left at.
        origin: ListView,
        /// The pack and the thumbnails shown for it.
        page: DetailPage,
    },
}

impl ViewMode {
    /// The resting view for a list.
    pub fn list(view: ListView) -> Self {
        match view {
            ListView::Browse => ViewMode::Browse,
            ListView::BrowseSearching => ViewMode::BrowseSearching,
        }
    }

    /// The list view this mode is, or returns to.
    pub fn list_view(&self) -> ListView {
        match self {
            ViewMode::Browse => ListView::Browse,
            ViewMode::BrowseSearching => ListView::BrowseSearching,
            ViewMode::SearchInput { origin, .. }
            | ViewMode::Help { origin }
            | ViewMode::Detail { origin, .. } => *origin,
        }
    }

    /// Whether the pack grid is the active view and accepts navigation.
    pub fn is_list(&self) -> bool {
        matches!(self, ViewMode::Browse | ViewMode::BrowseSearching)
    }

    /// Mode name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            ViewMode::Browse => "browse",
            ViewMode::BrowseSearching => "browse-searching",
            ViewMode::SearchInput { .. } => "search-input",
            ViewMode::Help { .. } => "help",
            ViewMode::Detail { .. } => "detail",
        }
    }
}

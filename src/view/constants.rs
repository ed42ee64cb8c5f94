//! Layout dimension constants.
//!
//! Centralized location for every fixed size the screen layout relies on, so
//! page geometry and rendering agree.

/// Interior width of a thumbnail cell, in columns. Art blocks are this wide.
pub const CELL_INTERIOR_WIDTH: usize = 15;

/// Rows of art inside a thumbnail cell.
pub const ART_HEIGHT: usize = 8;

/// Width of a cell including its two border columns.
pub const CELL_WIDTH: usize = CELL_INTERIOR_WIDTH + 2;

/// Two-column margin printed on each side of every cell in a row.
pub const CELL_MARGIN: &str = "  ";

/// Horizontal space one cell takes in a row (margin + cell + margin).
pub const CELL_OUTER_WIDTH: usize = CELL_WIDTH + 2 * CELL_MARGIN.len();

/// Height of an untitled cell: border, art, border.
pub const PLAIN_CELL_HEIGHT: usize = ART_HEIGHT + 2;

/// Height of a titled cell: plain cell plus title line and closing border.
pub const TITLED_CELL_HEIGHT: usize = PLAIN_CELL_HEIGHT + 2;

/// Lines a row of titled cells consumes, including the blank line after it.
pub const LIST_ROW_HEIGHT: usize = TITLED_CELL_HEIGHT + 1;

/// Lines a row of untitled cells consumes, including the blank line after it.
pub const DETAIL_ROW_HEIGHT: usize = PLAIN_CELL_HEIGHT + 1;

/// Lines of the blue title header shown on every screen.
pub const HEADER_LINES: usize = 5;

/// Lines of the welcome text shown above the pack list.
pub const INTRO_LINES: usize = 5;

/// Lines of the "Results for ..." banner shown while a search is active.
pub const SEARCH_BANNER_LINES: usize = 6;

/// Lines of the help screen body.
pub const HELP_LINES: usize = 28;

/// Header height above the pack list in Browse mode.
pub const BROWSE_HEADER_LINES: usize = HEADER_LINES + INTRO_LINES;

/// Header height above the pack list while a search is active.
pub const SEARCH_HEADER_LINES: usize = BROWSE_HEADER_LINES + SEARCH_BANNER_LINES;

/// Ellipsis appended to truncated titles.
pub const ELLIPSIS: &str = "…";

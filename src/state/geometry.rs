//! Terminal geometry and page-size computation.

use crate::view::constants::{
    BROWSE_HEADER_LINES, CELL_OUTER_WIDTH, LIST_ROW_HEIGHT, SEARCH_HEADER_LINES,
};

/// Terminal size reported at session start, plus the derived column count.
///
/// Sizes are fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    width: usize,
    height: usize,
    columns: usize,
}

impl Geometry {
    /// Derive the grid from a terminal size. At least one column is always laid out.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            columns: (width / CELL_OUTER_WIDTH).max(1),
        }
    }

    /// Terminal width in columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Terminal height in rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Thumbnails per row.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Packs per page when `header_lines` are taken above the grid.
    ///
    /// Always at least one full row, even when the terminal is too short.
    pub fn page_size(&self, header_lines: usize) -> usize {
        let rows = self.height.saturating_sub(header_lines) / LIST_ROW_HEIGHT;
        rows.max(1) * self.columns
    }

    /// Page size under the Browse header (title + intro).
    pub fn browse_page_size(&self) -> usize {
        self.page_size(BROWSE_HEADER_LINES)
    }

    /// Page size under the search header (title + intro + results banner).
    pub fn search_page_size(&self) -> usize {
        self.page_size(SEARCH_HEADER_LINES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_follow_width() {
        assert_eq!(Geometry::new(80, 24).columns(), 3);
        assert_eq!(Geometry::new(126, 40).columns(), 6);
        assert_eq!(Geometry::new(125, 40).columns(), 5);
    }

    #[test]
    fn narrow_terminal_still_has_one_column() {
        assert_eq!(Geometry::new(10, 40).columns(), 1);
        assert_eq!(Geometry::new(0, 0).columns(), 1);
    }

    #[test]
    fn browse_page_size_uses_ten_header_lines() {
        // (50 - 10) / 13 = 3 rows of 6 columns
        assert_eq!(Geometry::new(126, 50).browse_page_size(), 18);
    }

    #[test]
    fn search_page_size_uses_sixteen_header_lines() {
        // (50 - 16) / 13 = 2 rows of 6 columns
        assert_eq!(Geometry::new(126, 50).search_page_size(), 12);
    }

    #[test]
    fn short_terminal_keeps_one_row() {
        let geometry = Geometry::new(80, 12);
        assert_eq!(geometry.browse_page_size(), 3);
        assert_eq!(geometry.search_page_size(), 3);
    }
}

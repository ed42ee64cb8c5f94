//! Bordered thumbnail cells and rows of cells.
//!
//! A cell is composed row by row from structural parts: a left edge, a slice
//! of art, and a right edge. Badges are edges that also cover part of the
//! art, so they are placed by slot, never by byte offset into styled text.

use super::block::Block;
use super::constants::{ART_HEIGHT, CELL_INTERIOR_WIDTH, CELL_MARGIN, CELL_WIDTH, ELLIPSIS};
use super::styles::{paint, BACK_BLUE, BACK_RED, BORDER, LIGHT_GRAY, SELECTED_BORDER};
use super::text::{center, center_and_truncate};
use crate::model::PackFlags;

// ===== Badges =====

/// Label overlaid on a cell edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    /// Shown on the left of the first art row.
    Original,
    /// Shown on the right of the second art row.
    Animated,
}

impl Badge {
    /// Visible width of every badge label.
    pub const WIDTH: usize = 8;

    /// Text inside the badge.
    pub fn label(self) -> &'static str {
        match self {
            Badge::Original => "Original",
            Badge::Animated => "Animated",
        }
    }

    fn background(self) -> &'static str {
        match self {
            Badge::Original => BACK_BLUE,
            Badge::Animated => BACK_RED,
        }
    }

    fn render(self) -> String {
        paint(self.background(), self.label())
    }

    /// Art columns hidden by the badge: its width minus the border column it replaces.
    const fn art_overlap() -> usize {
        Self::WIDTH - 1
    }
}

/// Left or right side of an art row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Border,
    Badge(Badge),
}

// ===== Art =====

/// One normalized art row: exactly [`CELL_INTERIOR_WIDTH`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ArtLine {
    chars: Vec<char>,
    style: Option<&'static str>,
}

impl ArtLine {
    fn plain(text: &str) -> Self {
        let mut chars: Vec<char> = text.chars().take(CELL_INTERIOR_WIDTH).collect();
        chars.resize(CELL_INTERIOR_WIDTH, ' ');
        Self { chars, style: None }
    }

    fn styled(text: &str, style: &'static str) -> Self {
        Self {
            style: Some(style),
            ..Self::plain(text)
        }
    }

    fn slice(&self, start: usize, end: usize) -> String {
        let text: String = self.chars[start..end].iter().collect();
        match self.style {
            Some(style) => paint(style, &text),
            None => text,
        }
    }
}

/// Normalize an art block to [`ART_HEIGHT`] rows of [`CELL_INTERIOR_WIDTH`] columns.
fn art_lines(art: &str) -> Vec<ArtLine> {
    let mut lines: Vec<ArtLine> = art.lines().take(ART_HEIGHT).map(ArtLine::plain).collect();
    lines.resize_with(ART_HEIGHT, || ArtLine::plain(""));
    lines
}

/// Placeholder art hiding NSFW covers, same size as real art.
fn nsfw_lines() -> Vec<ArtLine> {
    let mut lines = vec![ArtLine::plain(""); 3];
    lines.push(ArtLine::styled(&center("This pack is", CELL_INTERIOR_WIDTH), LIGHT_GRAY));
    lines.push(ArtLine::styled(&center("NSFW", CELL_INTERIOR_WIDTH), LIGHT_GRAY));
    lines.resize_with(ART_HEIGHT, || ArtLine::plain(""));
    lines
}

// ===== Thumbnail =====

/// One thumbnail cell: art in a border, optionally titled and badged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail<'a> {
    art: &'a str,
    title: Option<&'a str>,
    selected: bool,
    flags: PackFlags,
}

impl<'a> Thumbnail<'a> {
    /// Untitled, unselected cell for `art`.
    pub fn new(art: &'a str) -> Self {
        Self {
            art,
            title: None,
            selected: false,
            flags: PackFlags::default(),
        }
    }

    /// Add a title row under the art.
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Highlight the border. Does not change geometry.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Badges and NSFW masking.
    pub fn flags(mut self, flags: PackFlags) -> Self {
        self.flags = flags;
        self
    }

    fn border_style(&self) -> &'static str {
        if self.selected {
            SELECTED_BORDER
        } else {
            BORDER
        }
    }

    fn horizontal_border(&self) -> String {
        paint(
            self.border_style(),
            &format!("+{}+", "-".repeat(CELL_INTERIOR_WIDTH)),
        )
    }

    fn side(&self) -> String {
        paint(self.border_style(), "|")
    }

    fn art_row(&self, line: &ArtLine, left: Edge, right: Edge) -> String {
        let (left_text, start) = match left {
            Edge::Border => (self.side(), 0),
            Edge::Badge(badge) => (badge.render(), Badge::art_overlap()),
        };
        let (right_text, end) = match right {
            Edge::Border => (self.side(), CELL_INTERIOR_WIDTH),
            Edge::Badge(badge) => (badge.render(), CELL_INTERIOR_WIDTH - Badge::art_overlap()),
        };
        format!("{left_text}{}{right_text}", line.slice(start, end))
    }

    /// Render the cell as lines without trailing newlines.
    ///
    /// Plain cells are [`super::constants::PLAIN_CELL_HEIGHT`] lines, titled
    /// cells [`super::constants::TITLED_CELL_HEIGHT`].
    pub fn render(&self) -> Vec<String> {
        let art = if self.flags.nsfw {
            nsfw_lines()
        } else {
            art_lines(self.art)
        };

        let mut lines = Vec::with_capacity(ART_HEIGHT + 4);
        lines.push(self.horizontal_border());
        for (row, line) in art.iter().enumerate() {
            let left = if row == 0 && self.flags.original {
                Edge::Badge(Badge::Original)
            } else {
                Edge::Border
            };
            let right = if row == 1 && self.flags.animated {
                Edge::Badge(Badge::Animated)
            } else {
                Edge::Border
            };
            lines.push(self.art_row(line, left, right));
        }
        lines.push(self.horizontal_border());

        if let Some(title) = self.title {
            let fitted = center_and_truncate(title, CELL_INTERIOR_WIDTH, ELLIPSIS);
            lines.push(format!("{}{fitted}{}", self.side(), self.side()));
            lines.push(self.horizontal_border());
        }

        lines
    }
}

/// Lay cells side by side for `cell_height` rows.
///
/// Every cell is framed by a two-space margin on each side. Cells shorter
/// than `cell_height` are filled with blanks.
pub fn thumbnail_row(cells: &[Vec<String>], cell_height: usize) -> Block {
    let filler = " ".repeat(CELL_WIDTH);
    let mut block = Block::new();
    for row in 0..cell_height {
        let mut line = String::new();
        for cell in cells {
            line.push_str(CELL_MARGIN);
            line.push_str(cell.get(row).map(String::as_str).unwrap_or(&filler));
            line.push_str(CELL_MARGIN);
        }
        block.line(&line);
    }
    block
}

/// Lay cells out in rows of `columns`, each row followed by a blank line.
pub fn thumbnail_grid(cells: &[Vec<String>], columns: usize, cell_height: usize) -> Block {
    let mut block = Block::new();
    for row in cells.chunks(columns.max(1)) {
        block.append(thumbnail_row(row, cell_height));
        block.blank();
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::constants::{PLAIN_CELL_HEIGHT, TITLED_CELL_HEIGHT};
    use crate::view::styles::strip_ansi;
    use crate::view::text::display_width;

    const ART: &str = "ABCDEFGHIJKLMNO\nabcdefghijklmno\n000000000000000\n111111111111111\n\
                       222222222222222\n333333333333333\n444444444444444\n555555555555555";

    fn visible(lines: &[String]) -> Vec<String> {
        lines.iter().map(|l| strip_ansi(l)).collect()
    }

    fn flags(original: bool, animated: bool, nsfw: bool) -> PackFlags {
        PackFlags {
            original,
            animated,
            nsfw,
        }
    }

    #[test]
    fn plain_cell_geometry() {
        let lines = Thumbnail::new(ART).render();
        assert_eq!(lines.len(), PLAIN_CELL_HEIGHT);
        for line in visible(&lines) {
            assert_eq!(display_width(&line), CELL_WIDTH, "line {line:?}");
        }
    }

    #[test]
    fn titled_cell_geometry() {
        let lines = Thumbnail::new(ART).title("Cats").render();
        assert_eq!(lines.len(), TITLED_CELL_HEIGHT);
        assert_eq!(strip_ansi(&lines[10]), "|     Cats      |");
    }

    #[test]
    fn selection_changes_style_not_geometry() {
        let plain = Thumbnail::new(ART).title("Cats").render();
        let selected = Thumbnail::new(ART).title("Cats").selected(true).render();
        assert_ne!(plain, selected);
        assert_eq!(visible(&plain), visible(&selected));
        assert!(selected[0].starts_with(SELECTED_BORDER));
        assert!(plain[0].starts_with(BORDER));
    }

    #[test]
    fn original_badge_covers_left_border_and_seven_columns() {
        let lines = Thumbnail::new(ART).flags(flags(true, false, false)).render();
        assert_eq!(strip_ansi(&lines[1]), "OriginalHIJKLMNO|");
        assert!(lines[1].starts_with(&format!("{BACK_BLUE}Original")));
    }

    #[test]
    fn animated_badge_covers_right_border_and_seven_columns() {
        let lines = Thumbnail::new(ART).flags(flags(false, true, false)).render();
        assert_eq!(strip_ansi(&lines[2]), "|abcdefghAnimated");
        assert!(lines[2].contains(&format!("{BACK_RED}Animated")));
    }

    #[test]
    fn badges_are_identical_whatever_the_selection() {
        for selected in [false, true] {
            let lines = Thumbnail::new(ART)
                .selected(selected)
                .flags(flags(true, true, false))
                .render();
            let shown = visible(&lines);
            assert_eq!(shown[1], "OriginalHIJKLMNO|", "selected={selected}");
            assert_eq!(shown[2], "|abcdefghAnimated", "selected={selected}");
        }
    }

    #[test]
    fn nsfw_replaces_art_with_warning() {
        let lines = Thumbnail::new(ART)
            .title("Spicy")
            .flags(flags(false, false, true))
            .render();
        let shown = visible(&lines);
        assert_eq!(lines.len(), TITLED_CELL_HEIGHT);
        assert_eq!(shown[4], "| This pack is  |");
        assert_eq!(shown[5], "|     NSFW      |");
        assert!(!shown.iter().any(|l| l.contains("ABCDEFG")));
    }

    #[test]
    fn nsfw_art_still_gets_badges() {
        let lines = Thumbnail::new(ART).flags(flags(true, true, true)).render();
        let shown = visible(&lines);
        assert_eq!(shown[1], "Original        |");
        assert_eq!(shown[2], "|        Animated");
    }

    #[test]
    fn short_art_is_padded_to_full_size() {
        let lines = Thumbnail::new("xx").render();
        let shown = visible(&lines);
        assert_eq!(lines.len(), PLAIN_CELL_HEIGHT);
        assert_eq!(shown[1], "|xx             |");
        assert_eq!(shown[8], "|               |");
    }

    #[test]
    fn long_title_is_truncated_inside_cell() {
        let lines = Thumbnail::new(ART).title("A very long sticker pack title").render();
        assert_eq!(strip_ansi(&lines[10]), "|A very long st…|");
    }

    #[test]
    fn row_joins_cells_with_margins() {
        let a = vec!["a".repeat(CELL_WIDTH), "b".repeat(CELL_WIDTH)];
        let b = vec!["c".repeat(CELL_WIDTH)];
        let block = thumbnail_row(&[a, b], 2);
        let lines: Vec<&str> = block.text().lines().collect();

        assert_eq!(block.lines(), 2);
        assert_eq!(lines[0], format!("  {}    {}  ", "a".repeat(17), "c".repeat(17)));
        assert_eq!(lines[1], format!("  {}    {}  ", "b".repeat(17), " ".repeat(17)));
    }

    #[test]
    fn grid_adds_blank_line_after_each_row() {
        let cells: Vec<Vec<String>> = (0..5).map(|_| Thumbnail::new(ART).render()).collect();
        let block = thumbnail_grid(&cells, 3, PLAIN_CELL_HEIGHT);
        assert_eq!(block.lines(), 2 * (PLAIN_CELL_HEIGHT + 1));
    }

    #[test]
    fn visible_cell_snapshot() {
        let lines = Thumbnail::new(ART)
            .title("Frogs")
            .selected(true)
            .flags(flags(true, true, false))
            .render();
        insta::assert_snapshot!(visible(&lines).join("\n"), @r"
        +---------------+
        OriginalHIJKLMNO|
        |abcdefghAnimated
        |000000000000000|
        |111111111111111|
        |222222222222222|
        |333333333333333|
        |444444444444444|
        |555555555555555|
        +---------------+
        |     Frogs     |
        +---------------+
        ");
    }
}

//! Rendered text paired with the terminal rows it consumes.

use super::text::wrapped_rows;

/// Newline-terminated screen text and its height in terminal rows.
///
/// Every layout function returns a `Block` so callers can track the vertical
/// budget and pad the remainder of the screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    text: String,
    lines: usize,
}

impl Block {
    /// An empty block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one row of content.
    pub fn line(&mut self, content: &str) -> &mut Self {
        self.text.push_str(content);
        self.text.push('\n');
        self.lines += 1;
        self
    }

    /// Append an empty row.
    pub fn blank(&mut self) -> &mut Self {
        self.line("")
    }

    /// Append content that may wrap at `term_width`.
    ///
    /// `visible_width` is the width of `content` without escape sequences.
    pub fn wrapping_line(
        &mut self,
        content: &str,
        visible_width: usize,
        term_width: usize,
    ) -> &mut Self {
        self.line(content);
        self.lines += wrapped_rows(visible_width, term_width) - 1;
        self
    }

    /// Append `count` empty rows.
    pub fn pad(&mut self, count: usize) -> &mut Self {
        for _ in 0..count {
            self.blank();
        }
        self
    }

    /// Stack `other` below this block.
    pub fn append(&mut self, other: Block) -> &mut Self {
        self.text.push_str(&other.text);
        self.lines += other.lines;
        self
    }

    /// Rendered text, one `\n` per line.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Terminal rows consumed.
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Take the rendered text.
    pub fn into_text(self) -> String {
        self.text
    }
}

/// Blank rows that fill a screen of `height` rows after `consumed` rows.
///
/// Never negative: content taller than the screen gets no padding.
pub fn pad(height: usize, consumed: usize) -> Block {
    let mut block = Block::new();
    block.pad(height.saturating_sub(consumed));
    block
}

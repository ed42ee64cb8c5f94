//! Width-aware text fitting.
//!
//! Widths are terminal display columns: East Asian wide and fullwidth
//! characters count as 2, combining marks and control characters as 0.

use unicode_width::UnicodeWidthChar;

/// Display columns taken by one character.
pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Display columns taken by a string.
pub fn display_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

/// Cut `text` so that it fits in `width` columns including `ellipsis`.
///
/// Text that already fits is returned unchanged. Never splits a wide
/// character: the result may be one column short of `width`.
pub fn truncate(text: &str, width: usize, ellipsis: &str) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }

    let budget = width.saturating_sub(display_width(ellipsis));
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = char_width(c);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str(ellipsis);
    out
}

/// Center `text` in `width` columns. Text wider than `width` is returned unchanged.
///
/// When the padding is odd the extra space goes on the right.
pub fn center(text: &str, width: usize) -> String {
    let text_width = display_width(text);
    let Some(padding) = width.checked_sub(text_width) else {
        return text.to_string();
    };
    let left = padding / 2;
    let right = padding - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Fit `text` into exactly `width` columns: centered when it fits, otherwise
/// truncated with `ellipsis` and left-aligned.
pub fn center_and_truncate(text: &str, width: usize, ellipsis: &str) -> String {
    if display_width(text) <= width {
        return center(text, width);
    }
    let truncated = truncate(text, width, ellipsis);
    let fill = width.saturating_sub(display_width(&truncated));
    format!("{truncated}{}", " ".repeat(fill))
}

/// Terminal rows a line of `text_width` columns occupies at `term_width`.
pub fn wrapped_rows(text_width: usize, term_width: usize) -> usize {
    if term_width == 0 {
        return 1;
    }
    text_width.div_ceil(term_width).max(1)
}

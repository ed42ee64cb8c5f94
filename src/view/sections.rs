//! Fixed screen sections drawn above the thumbnails.
//!
//! Every section returns a [`Block`] so the caller can budget the remaining
//! rows. Centered lines are sized to the terminal width and never wrap;
//! left-aligned lines that may overflow are counted with their wrapped height.

use super::block::Block;
use super::constants::{ELLIPSIS, HEADER_LINES, INTRO_LINES, SEARCH_BANNER_LINES};
use super::styles::{paint, BACK_BLUE, BOLD, GREEN, LIGHT_GRAY, RESET, WARNING};
use super::text::{center, center_and_truncate, display_width, truncate};
use crate::model::PackDetail;

/// Name shown in the header bar.
pub const SITE_NAME: &str = "ssh.signalstickers.com";

const WELCOME: &str =
    "Welcome to Signal Stickers, the unofficial directory for Signal sticker packs.";
const FOLLOW: &str = "Follow https://twitter.com/signalstickers to stay tuned for new packs!";
const HELP_HINT: &str = "Press h for help.";
const RESULTS_PREFIX: &str = "Results for ";
const SEARCH_EXIT_HINT: &str = "(press Esc to exit Search mode)";
const ADD_INSTRUCTIONS: &str =
    "To add this pack to Signal, Ctrl+click (or Alt+click) the following link:";
const PREVIEW_TITLE: &str = "Preview of the first stickers:";

/// Width of the bold key column on detail key/value rows.
const KEY_WIDTH: usize = 10;

// ===== List screens =====

/// Blue title bar followed by two blank lines.
pub fn header(width: usize) -> Block {
    let bar = paint(BACK_BLUE, &" ".repeat(width));
    let mut block = Block::new();
    block
        .line(&bar)
        .line(&format!("{BACK_BLUE}{BOLD}{}{RESET}", center(SITE_NAME, width)))
        .line(&bar)
        .pad(2);
    debug_assert_eq!(block.lines(), HEADER_LINES);
    block
}

/// Welcome text above the pack list.
///
/// A `notice` replaces the help hint, highlighted, for one render.
pub fn intro(width: usize, notice: Option<&str>) -> Block {
    let third = match notice {
        Some(notice) => paint(WARNING, &center(notice, width)),
        None => center(HELP_HINT, width),
    };
    let mut block = Block::new();
    block
        .line(&center(WELCOME, width))
        .line(&center(FOLLOW, width))
        .line(&third)
        .pad(2);
    debug_assert_eq!(block.lines(), INTRO_LINES);
    block
}

/// Banner naming the active search term.
///
/// Long terms are truncated so the results line stays on one row.
pub fn search_banner(term: &str, width: usize) -> Block {
    let room = width.saturating_sub(RESULTS_PREFIX.len());
    let term = truncate(term, room, ELLIPSIS);
    let visible = display_width(RESULTS_PREFIX) + display_width(&term);
    let padding = width.saturating_sub(visible);
    let left = padding / 2;
    let results = format!(
        "{}{RESULTS_PREFIX}{}{}",
        " ".repeat(left),
        paint(BOLD, &term),
        " ".repeat(padding - left)
    );

    let mut block = Block::new();
    block
        .line(&center(&"-".repeat(30), width))
        .line(&results)
        .blank()
        .line(&center(SEARCH_EXIT_HINT, width))
        .pad(2);
    debug_assert_eq!(block.lines(), SEARCH_BANNER_LINES);
    block
}

// ===== Detail screen =====

fn yes_no(flag: bool, style: &str) -> (String, usize) {
    if flag {
        (paint(style, "Yes"), 3)
    } else {
        ("No".to_string(), 2)
    }
}

fn key_value(block: &mut Block, key: &str, value: &str, value_width: usize, width: usize) {
    let line = format!("{BOLD}{key:<KEY_WIDTH$}{RESET} {value}");
    block.wrapping_line(&line, KEY_WIDTH + 1 + value_width, width);
}

/// Pack information above the sticker preview.
///
/// Title and author are centered and truncated. The add link, instructions
/// and key/value rows are counted with their wrapped height at `width`.
pub fn detail_header(pack: &PackDetail, width: usize) -> Block {
    let mut block = Block::new();
    block
        .line(&center_and_truncate(&pack.title, width, ELLIPSIS))
        .line(&center_and_truncate(&pack.author, width, ELLIPSIS))
        .blank()
        .wrapping_line(ADD_INSTRUCTIONS, display_width(ADD_INSTRUCTIONS), width);

    let link = pack.add_link();
    block
        .wrapping_line(&paint(LIGHT_GRAY, &link), display_width(&link), width)
        .blank();

    key_value(&mut block, "Author", &pack.author, display_width(&pack.author), width);
    if let Some(source) = pack.source.as_deref().filter(|s| !s.is_empty()) {
        key_value(&mut block, "Source", source, display_width(source), width);
    }
    for (key, flag, style) in [
        ("NSFW", pack.flags.nsfw, WARNING),
        ("Animated", pack.flags.animated, GREEN),
        ("Original", pack.flags.original, GREEN),
    ] {
        let (value, value_width) = yes_no(flag, style);
        key_value(&mut block, key, &value, value_width, width);
    }
    if !pack.tags.is_empty() {
        let tags = pack.tags.join(", ");
        key_value(&mut block, "Tags", &tags, display_width(&tags), width);
    }

    block.pad(2).line(PREVIEW_TITLE).blank();
    block
}

#[cfg(test)]
#[path = "sections_tests.rs"]
mod tests;

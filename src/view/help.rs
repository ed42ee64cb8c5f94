//! Help screen body.
//!
//! Shown below the header when `h` is pressed from a pack list, dismissed
//! with Esc.

use super::block::Block;
use super::constants::HELP_LINES;
use super::styles::{paint, BOLD};
use super::text::center;

/// One row of help content.
enum HelpLine {
    Blank,
    Heading(&'static str),
    Title(&'static str),
    Text(&'static str),
}

const HELP_CONTENT: &[HelpLine] = &[
    HelpLine::Blank,
    HelpLine::Title("HELP"),
    HelpLine::Blank,
    HelpLine::Heading("Navigation"),
    HelpLine::Text("Use arrows or wasd to navigate around packs. Hit Return to select a pack."),
    HelpLine::Text("To get back to pack list, press Esc."),
    HelpLine::Text("To exit, use Ctrl+C or close the window."),
    HelpLine::Blank,
    HelpLine::Heading("Search"),
    HelpLine::Text("To search for a pack, use the / key, type your word, then press Return."),
    HelpLine::Text("To exit \"Search mode\", press the Esc key."),
    HelpLine::Blank,
    HelpLine::Heading("About signalstickers"),
    HelpLine::Text(
        "Signal Stickers is a community-organized, unofficial directory of sticker packs",
    ),
    HelpLine::Text(
        "for Signal, the secure messenger. All content on this server is copyrighted by their",
    ),
    HelpLine::Text(
        "respective owners. This server is not affiliated with Signal or Open Whisper Systems.",
    ),
    HelpLine::Blank,
    HelpLine::Heading("About this project"),
    HelpLine::Text("This project is open source, under GPLv3."),
    HelpLine::Text("For more information, or to report an issue, see"),
    HelpLine::Text("https://github.com/signalstickers/ssh-signalstickers"),
    HelpLine::Blank,
    HelpLine::Heading("Credits"),
    HelpLine::Text("2021 - Romain RICARD https://github.com/romainricard"),
    HelpLine::Blank,
    HelpLine::Blank,
    HelpLine::Blank,
    HelpLine::Title("Press Esc to go back to pack list."),
];

/// Render the help body for a terminal `width` columns wide.
///
/// Always [`HELP_LINES`] rows; only the bold titles depend on the width.
pub fn help(width: usize) -> Block {
    let mut block = Block::new();
    for line in HELP_CONTENT {
        match line {
            HelpLine::Blank => block.blank(),
            HelpLine::Heading(text) => block.line(&paint(BOLD, text)),
            HelpLine::Title(text) => block.line(&paint(BOLD, &center(text, width))),
            HelpLine::Text(text) => block.line(text),
        };
    }
    debug_assert_eq!(block.lines(), HELP_LINES);
    block
}

//! ANSI styling for terminal output.
//!
//! Output is written as raw escape sequences, so styles are plain SGR
//! strings. Every styled span is closed with [`RESET`].

/// Bold text.
pub const BOLD: &str = "\x1b[1m";
/// Back to the default style.
pub const RESET: &str = "\x1b[0m";
/// Bright green foreground, for "Yes" flags.
pub const GREEN: &str = "\x1b[92m";
/// Bright yellow foreground, for warnings and the NSFW flag.
pub const WARNING: &str = "\x1b[93m";
/// Dim gray foreground.
pub const LIGHT_GRAY: &str = "\x1b[90m";
/// Blue background: header bars and the Original badge.
pub const BACK_BLUE: &str = "\x1b[44m";
/// Red background: the Animated badge.
pub const BACK_RED: &str = "\x1b[41m";

/// Clear from the top of the screen to the cursor.
pub const CLEAR_TO_CURSOR: &str = "\x1b[1J";

/// Move the cursor to the top-left corner.
pub const CURSOR_HOME: &str = "\x1b[1;1H";

/// Border style of the thumbnail under the cursor.
pub const SELECTED_BORDER: &str = "\x1b[92m\x1b[1m";

/// Border style of every other thumbnail.
pub const BORDER: &str = LIGHT_GRAY;

/// Wrap `text` in `style` and a trailing reset.
pub fn paint(style: &str, text: &str) -> String {
    format!("{style}{text}{RESET}")
}

/// Remove SGR and cursor escape sequences, keeping the visible text.
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for next in chars.by_ref() {
                if ('@'..='~').contains(&next) {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

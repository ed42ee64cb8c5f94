//! Domain-level keyboard actions and the raw-input key table.
//!
//! Input arrives as raw terminal bytes. [`decode_keys`] splits a chunk into
//! one [`Key`] per key press, and [`Key::action`] resolves it against the
//! fixed [`KEY_MAP`].

/// Domain-level actions a key press can trigger.
///
/// These represent user intent, not specific keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Move the cursor one row up. Default: ↑/w/z
    Up,
    /// Move the cursor one row down. Default: ↓/s
    Down,
    /// Move the cursor one pack left. Default: ←/a/q
    Left,
    /// Move the cursor one pack right. Default: →/d
    Right,
    /// Open the search prompt. Default: /
    Search,
    /// Show the help overlay. Default: h
    Help,
    /// Leave the current overlay, detail view or search. Default: Esc
    Escape,
    /// Open the pack under the cursor. Default: Return
    Return,
    /// End the session. Default: Ctrl+C/Ctrl+D/Ctrl+Z
    Exit,
}

/// Raw key sequences and the action each one triggers.
///
/// Covers arrow keys, WASD plus the AZERTY `z`/`q` alternates, and the
/// control characters that end a session.
pub const KEY_MAP: &[(&str, KeyAction)] = &[
    // Up
    ("\x1b[A", KeyAction::Up),
    ("z", KeyAction::Up),
    ("w", KeyAction::Up),
    // Down
    ("\x1b[B", KeyAction::Down),
    ("s", KeyAction::Down),
    // Right
    ("\x1b[C", KeyAction::Right),
    ("d", KeyAction::Right),
    // Left
    ("\x1b[D", KeyAction::Left),
    ("q", KeyAction::Left),
    ("a", KeyAction::Left),
    // Controls
    ("/", KeyAction::Search),
    ("h", KeyAction::Help),
    ("\x1b", KeyAction::Escape),
    ("\r", KeyAction::Return),
    ("\x03", KeyAction::Exit),
    ("\x04", KeyAction::Exit),
    ("\x1a", KeyAction::Exit),
];

const ESC: char = '\x1b';

/// One key press as the raw sequence the terminal sent for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(String);

impl Key {
    /// Key for the raw sequence `raw`.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw sequence as received.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Look the key up in [`KEY_MAP`]. Unknown keys return `None`.
    pub fn action(&self) -> Option<KeyAction> {
        KEY_MAP
            .iter()
            .find(|(sequence, _)| *sequence == self.0)
            .map(|(_, action)| *action)
    }

    /// The single character this key carries, if it is not an escape sequence.
    pub fn as_char(&self) -> Option<char> {
        let mut chars = self.0.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c != ESC => Some(c),
            _ => None,
        }
    }
}

/// Split a raw input chunk into key presses.
///
/// CSI sequences (`ESC [ ... final`) and SS3 sequences (`ESC O x`) stay whole;
/// a lone ESC is its own key; every other character is one key. Invalid UTF-8
/// is decoded lossily.
pub fn decode_keys(data: &[u8]) -> Vec<Key> {
    let text = String::from_utf8_lossy(data);
    let mut chars = text.chars().peekable();
    let mut keys = Vec::new();

    while let Some(c) = chars.next() {
        if c != ESC {
            keys.push(Key(c.to_string()));
            continue;
        }

        let mut sequence = String::from(ESC);
        match chars.peek() {
            Some('[') => {
                sequence.extend(chars.next());
                // Parameter and intermediate bytes until a final byte in '@'..='~'
                while let Some(next) = chars.next() {
                    sequence.push(next);
                    if ('@'..='~').contains(&next) {
                        break;
                    }
                }
            }
            Some('O') => {
                sequence.extend(chars.next());
                sequence.extend(chars.next());
            }
            _ => {}
        }
        keys.push(Key(sequence));
    }

    keys
}

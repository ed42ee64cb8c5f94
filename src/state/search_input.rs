//! Search prompt input handling (pure).
//!
//! While the prompt is open every key is text. The buffer keeps raw input;
//! committing filters it down to printable characters.

use crate::model::Key;

/// Outcome of feeding one key to the search prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The key was absorbed into the buffer (or erased from it).
    Edited,
    /// Return or newline: submit the buffer.
    Submit,
    /// Lone escape: abandon the prompt.
    Cancel,
}

/// Text typed at the search prompt, not yet committed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchBuffer {
    raw: String,
}

impl SearchBuffer {
    /// An empty prompt.
    pub fn new() -> Self {
        Self::default()
    }

    /// Text typed so far.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Feed one key press.
    ///
    /// CR and LF submit, ESC cancels, DEL and BS erase the last character,
    /// any other key (including unknown escape sequences) is buffered as-is.
    pub fn handle_key(&mut self, key: &Key) -> InputEvent {
        match key.as_str() {
            "\r" | "\n" => InputEvent::Submit,
            "\x1b" => InputEvent::Cancel,
            "\x7f" | "\x08" => {
                self.raw.pop();
                InputEvent::Edited
            }
            other => {
                self.raw.push_str(other);
                InputEvent::Edited
            }
        }
    }

    /// Turn the buffer into a search term, if anything printable remains.
    pub fn commit(&self) -> Option<SearchTerm> {
        SearchTerm::new(&self.raw)
    }
}

/// A committed, non-empty search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Smart constructor: keeps only printable ASCII (letters, digits,
    /// punctuation and the space).
    ///
    /// Returns `None` when nothing printable is left.
    pub fn new(raw: &str) -> Option<Self> {
        let printable: String = raw
            .chars()
            .filter(|c| c.is_ascii_graphic() || *c == ' ')
            .collect();
        if printable.is_empty() {
            None
        } else {
            Some(Self(printable))
        }
    }

    /// The term as typed, for display.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The form matched against titles and tags: left-trimmed and lowercased.
    pub fn needle(&self) -> String {
        self.0.trim_start().to_lowercase()
    }
}

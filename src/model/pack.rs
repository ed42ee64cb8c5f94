//! Sticker pack records as stored in the catalog archive.
//!
//! Two shapes exist for the same pack: a light [`PackSummary`] listed in the
//! index (one per catalog entry, in archive order), and a full [`PackDetail`]
//! fetched by id when a user opens the pack.

use serde::{Deserialize, Deserializer};
use std::fmt;

// ===== PackId =====

/// Archive identifier of a sticker pack.
///
/// Ids double as archive member names (`<id>.json`), so only ASCII
/// alphanumerics, `-` and `_` are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackId(String);

impl PackId {
    /// Smart constructor: validates a non-empty id made of safe characters.
    ///
    /// Returns `None` for anything that could escape the archive root.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let valid = !raw.is_empty()
            && raw
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        valid.then_some(Self(raw))
    }

    /// The raw id, as used for the archive member name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ===== PackFlags =====

/// Boolean badges carried by every pack. Absent fields mean `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PackFlags {
    /// Made by the pack author rather than collected.
    #[serde(default)]
    pub original: bool,
    /// Contains animated stickers.
    #[serde(default)]
    pub animated: bool,
    /// Not safe for work; the cover is masked.
    #[serde(default)]
    pub nsfw: bool,
}

// ===== PackSummary =====

/// Index entry for one pack: enough to draw its cover thumbnail.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackSummary {
    /// Archive id of the pack.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Cover thumbnail as a multi-line ASCII-art block.
    #[serde(rename = "cover", alias = "coverArt")]
    pub cover_art: String,
    /// Search tags, in archive order.
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
    /// Badges shown on the thumbnail.
    #[serde(flatten)]
    pub flags: PackFlags,
}

impl PackSummary {
    /// Tags joined by a single space and lowercased, as used for matching.
    pub fn joined_tags(&self) -> String {
        self.tags.join(" ").to_lowercase()
    }

    /// Case-insensitive match of an already lowercased term against the title
    /// or the joined tags.
    pub fn matches(&self, term_lower: &str) -> bool {
        self.title.to_lowercase().contains(term_lower) || self.joined_tags().contains(term_lower)
    }
}

// ===== PackDetail =====

/// Full record of one pack, read lazily from the archive.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackDetail {
    /// Archive id, also used in the add link.
    pub id: String,
    /// Pack key, the second half of the add link.
    pub key: String,
    /// Display title.
    pub title: String,
    /// Pack author as credited in the archive.
    pub author: String,
    /// Where the stickers come from, when known.
    #[serde(default)]
    pub source: Option<String>,
    /// Search tags; shown joined by commas.
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
    /// Badges shown on the thumbnail.
    #[serde(flatten)]
    pub flags: PackFlags,
    /// Sticker thumbnails in pack order.
    #[serde(default)]
    pub thumbs: Vec<String>,
}

impl PackDetail {
    /// Link that adds this pack to a Signal client.
    pub fn add_link(&self) -> String {
        format!(
            "https://signal.art/addstickers/#pack_id={}&pack_key={}",
            self.id, self.key
        )
    }
}

// ===== Tags =====

/// Archives written by older tooling store tags pre-joined in one string.
#[derive(Deserialize)]
#[serde(untagged)]
enum TagsField {
    Joined(String),
    List(Vec<String>),
}

fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags = match Option::<TagsField>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(TagsField::Joined(joined)) if joined.is_empty() => Vec::new(),
        Some(TagsField::Joined(joined)) => vec![joined],
        Some(TagsField::List(list)) => list,
    };
    Ok(tags)
}

//! Shared fixtures for unit tests.
//!
//! Builds packs, catalogs and sessions driven through [`CaptureIo`], so tests
//! read as key presses and screen assertions.

use crate::catalog::{Catalog, MemoryArchive};
use crate::model::{PackDetail, PackFlags, PackSummary};
use crate::session::Session;
use crate::transport::CaptureIo;
use crate::view::constants::{ART_HEIGHT, CELL_INTERIOR_WIDTH};
use crate::view::styles::strip_ansi;
use std::sync::Arc;

// ===== Fixtures =====

/// Full-size art block filled with one character.
pub fn art(fill: char) -> String {
    let row: String = std::iter::repeat(fill).take(CELL_INTERIOR_WIDTH).collect();
    vec![row; ART_HEIGHT].join("\n")
}

pub fn summary(id: &str, title: &str) -> PackSummary {
    PackSummary {
        id: id.to_string(),
        title: title.to_string(),
        cover_art: art('#'),
        tags: Vec::new(),
        flags: PackFlags::default(),
    }
}

pub fn tagged_summary(id: &str, title: &str, tags: &[&str]) -> PackSummary {
    PackSummary {
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ..summary(id, title)
    }
}

/// Packs `p0`, `p1`, ... titled "Pack 0", "Pack 1", ...
pub fn numbered_summaries(count: usize) -> Vec<PackSummary> {
    (0..count)
        .map(|i| summary(&format!("p{i}"), &format!("Pack {i}")))
        .collect()
}

/// Detail record with `thumbs` sticker thumbnails.
pub fn detail(id: &str, thumbs: usize) -> PackDetail {
    PackDetail {
        id: id.to_string(),
        key: format!("key{id}"),
        title: format!("Pack {id}"),
        author: "Author".to_string(),
        source: None,
        tags: Vec::new(),
        flags: PackFlags::default(),
        thumbs: vec![art('.'); thumbs],
    }
}

/// Catalog of `count` numbered packs, each with a detail record of 20 stickers.
pub fn numbered_catalog(count: usize) -> Catalog {
    let packs = numbered_summaries(count);
    let archive = packs.iter().fold(MemoryArchive::new(packs.clone()), |archive, pack| {
        archive.with_detail(detail(&pack.id, 20))
    });
    catalog_from(archive)
}

pub fn catalog_from(archive: MemoryArchive) -> Catalog {
    Catalog::load(archive).expect("memory archive loads")
}

// ===== Sessions =====

/// Session over `catalog` on a `width` x `height` terminal.
pub fn session_with(catalog: Catalog, width: usize, height: usize) -> Session<CaptureIo> {
    Session::start(CaptureIo::new(), Arc::new(catalog), width, height, "test-peer")
        .expect("session starts")
}

/// Session over `count` numbered packs.
pub fn session(count: usize, width: usize, height: usize) -> Session<CaptureIo> {
    session_with(numbered_catalog(count), width, height)
}

/// Feed raw input, panicking on transport errors.
pub fn press(session: &mut Session<CaptureIo>, keys: &str) {
    session.on_data(keys.as_bytes()).expect("input handled");
}

/// Visible text of the last write.
pub fn screen(session: &Session<CaptureIo>) -> String {
    strip_ansi(session.io().last_write().unwrap_or_default())
}

/// Id of the pack under the cursor.
pub fn selected_id(session: &Session<CaptureIo>) -> String {
    session
        .list()
        .pack_at(session.cursor())
        .map(|p| p.id.clone())
        .expect("cursor on a pack")
}

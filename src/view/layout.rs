//! Full-screen composition.
//!
//! Pure layout logic: stacks the header, the view's sections and its
//! thumbnail grid, then pads with blank lines so every screen fills the
//! terminal height exactly.

use super::block::{pad, Block};
use super::constants::{PLAIN_CELL_HEIGHT, TITLED_CELL_HEIGHT};
use super::help::help;
use super::sections::{detail_header, header, intro, search_banner};
use super::thumbnail::{thumbnail_grid, Thumbnail};
use crate::model::PackSummary;
use crate::state::{DetailPage, Geometry};
use std::sync::Arc;

/// What a pack list screen shows.
#[derive(Debug, Clone, Copy)]
pub struct ListScreen<'a> {
    /// Packs on the current page.
    pub packs: &'a [Arc<PackSummary>],
    /// Highlighted pack, relative to the page.
    pub cursor: usize,
    /// Active search term, drawn as a results banner.
    pub search_term: Option<&'a str>,
    /// One-shot message replacing the help hint.
    pub notice: Option<&'a str>,
}

/// Screen renderer for one terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    geometry: Geometry,
}

impl Layout {
    /// Renderer for a terminal of `geometry`'s size.
    pub fn new(geometry: Geometry) -> Self {
        Self { geometry }
    }

    /// Terminal size this layout renders for.
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    fn finish(&self, mut screen: Block) -> Block {
        let consumed = screen.lines();
        screen.append(pad(self.geometry.height(), consumed));
        screen
    }

    /// Pack grid, with the results banner when searching.
    pub fn list(&self, view: &ListScreen<'_>) -> Block {
        let width = self.geometry.width();
        let mut screen = header(width);
        screen.append(intro(width, view.notice));
        if let Some(term) = view.search_term {
            screen.append(search_banner(term, width));
        }

        let cells: Vec<Vec<String>> = view
            .packs
            .iter()
            .enumerate()
            .map(|(idx, pack)| {
                Thumbnail::new(&pack.cover_art)
                    .title(&pack.title)
                    .selected(idx == view.cursor)
                    .flags(pack.flags)
                    .render()
            })
            .collect();
        screen.append(thumbnail_grid(
            &cells,
            self.geometry.columns(),
            TITLED_CELL_HEIGHT,
        ));

        self.finish(screen)
    }

    /// Opened pack: its information and the first stickers.
    pub fn detail(&self, page: &DetailPage) -> Block {
        let width = self.geometry.width();
        let mut screen = header(width);
        screen.append(detail_header(page.detail(), width));

        let cells: Vec<Vec<String>> = page
            .thumbs()
            .iter()
            .map(|art| Thumbnail::new(art).render())
            .collect();
        screen.append(thumbnail_grid(
            &cells,
            self.geometry.columns(),
            PLAIN_CELL_HEIGHT,
        ));

        self.finish(screen)
    }

    /// Help screen.
    pub fn help(&self) -> Block {
        let mut screen = header(self.geometry.width());
        screen.append(help(self.geometry.width()));
        self.finish(screen)
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;

//! What the pack list is currently paginating.
//!
//! A [`PaginationContext`] is rebuilt, never re-targeted, whenever the list
//! switches between the full catalog and search results. Opening a pack
//! produces a separate [`DetailPage`] and leaves the list context untouched,
//! so closing the pack lands on the same page.

use super::pager::Pager;
use super::search_input::SearchTerm;
use crate::catalog::Catalog;
use crate::model::{PackDetail, PackSummary};
use std::sync::Arc;

/// Which sequence the list shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListSource {
    /// Every pack in the catalog.
    Catalog,
    /// Packs matching a search term.
    Search(SearchTerm),
}

/// Filter the index down to packs whose title or tags contain the term.
///
/// Matching is a case-insensitive substring test on the left-trimmed term;
/// catalog order is preserved.
pub fn search_packs(term: &SearchTerm, index: &[Arc<PackSummary>]) -> Vec<Arc<PackSummary>> {
    let needle = term.needle();
    index
        .iter()
        .filter(|pack| pack.matches(&needle))
        .cloned()
        .collect()
}

/// Paginated list of packs plus what it was built from.
#[derive(Debug, Clone)]
pub struct PaginationContext {
    source: ListSource,
    pager: Pager<Arc<PackSummary>>,
}

impl PaginationContext {
    /// Paginate the whole catalog, starting on the first page.
    pub fn catalog(catalog: &Catalog, page_size: usize) -> Self {
        Self {
            source: ListSource::Catalog,
            pager: Pager::new(catalog.index().to_vec(), page_size),
        }
    }

    /// Paginate the packs matching `term`, starting on the first page.
    ///
    /// No match yields a single empty page, not an error.
    pub fn search(term: SearchTerm, catalog: &Catalog, page_size: usize) -> Self {
        let matches = search_packs(&term, catalog.index());
        Self {
            source: ListSource::Search(term),
            pager: Pager::new(matches, page_size),
        }
    }

    /// What the list was built from.
    pub fn source(&self) -> &ListSource {
        &self.source
    }

    /// The active search term, if the list is filtered.
    pub fn search_term(&self) -> Option<&SearchTerm> {
        match &self.source {
            ListSource::Search(term) => Some(term),
            ListSource::Catalog => None,
        }
    }

    /// The underlying pager.
    pub fn pager(&self) -> &Pager<Arc<PackSummary>> {
        &self.pager
    }

    /// Mutable pager, for page turns during navigation.
    pub fn pager_mut(&mut self) -> &mut Pager<Arc<PackSummary>> {
        &mut self.pager
    }

    /// Zero-based index of the page on screen.
    pub fn page_index(&self) -> usize {
        self.pager.page_index()
    }

    /// Packs per full page for the current header height.
    pub fn page_size(&self) -> usize {
        self.pager.page_size()
    }

    /// Packs on the current page.
    pub fn current_page(&self) -> &[Arc<PackSummary>] {
        self.pager.current_page()
    }

    /// Packs on the current page.
    pub fn current_page_len(&self) -> usize {
        self.pager.current_page_len()
    }

    /// Number of packs across all pages.
    pub fn total(&self) -> usize {
        self.pager.items().len()
    }

    /// Pack under the cursor on the current page.
    pub fn pack_at(&self, cursor: usize) -> Option<&Arc<PackSummary>> {
        self.current_page().get(cursor)
    }

    /// First page of a pack's stickers, sized like the current list page.
    ///
    /// Does not touch this context.
    pub fn enter_detail(&self, detail: PackDetail) -> DetailPage {
        DetailPage::new(detail, self.page_size())
    }
}

/// An opened pack and the thumbnails shown for it.
///
/// Only the first page of stickers is ever shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPage {
    detail: PackDetail,
    shown: usize,
}

impl DetailPage {
    /// Show at most `page_size` of `detail`'s thumbnails.
    pub fn new(detail: PackDetail, page_size: usize) -> Self {
        let shown = detail.thumbs.len().min(page_size);
        Self { detail, shown }
    }

    /// The opened pack.
    pub fn detail(&self) -> &PackDetail {
        &self.detail
    }

    /// Thumbnails on the page, at most the page size.
    pub fn thumbs(&self) -> &[String] {
        &self.detail.thumbs[..self.shown]
    }
}

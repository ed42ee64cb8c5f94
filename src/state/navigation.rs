//! Cursor movement across the thumbnail grid (pure).
//!
//! The cursor indexes the current page, laid out row-major with `columns`
//! cells per row. Moving past the edge of a page turns the page when one is
//! available.

use super::pager::Pager;
use crate::model::KeyAction;

/// Apply a directional action to `cursor`, turning pages of `pager` as needed.
///
/// Returns the new cursor when the cursor or page changed, `None` when the
/// action is not directional or nothing moved. Non-empty pages always get a
/// cursor within `0..current_page_len`.
pub fn handle_navigation<T>(
    action: KeyAction,
    cursor: usize,
    pager: &mut Pager<T>,
    columns: usize,
) -> Option<usize> {
    let columns = columns.max(1);
    let len = pager.current_page_len();

    match action {
        KeyAction::Right => {
            if cursor + 1 < len {
                Some(cursor + 1)
            } else if pager.next() {
                Some(0)
            } else {
                None
            }
        }
        KeyAction::Left => {
            if cursor > 0 {
                Some(cursor - 1)
            } else if pager.prev() {
                Some(last_index(pager))
            } else {
                None
            }
        }
        KeyAction::Down => {
            if cursor + columns < len {
                Some(cursor + columns)
            } else if pager.next() {
                // Same column on the first row of the next page
                Some((cursor % columns).min(last_index(pager)))
            } else {
                let last = len.saturating_sub(1);
                (last != cursor).then_some(last)
            }
        }
        KeyAction::Up => {
            if cursor >= columns {
                Some(cursor - columns)
            } else if pager.prev() {
                // Same column on the last row of the previous (full) page
                let target = pager.page_size().saturating_sub(columns - cursor.min(columns));
                Some(target.min(last_index(pager)))
            } else {
                None
            }
        }
        _ => None,
    }
}

fn last_index<T>(pager: &Pager<T>) -> usize {
    pager.current_page_len().saturating_sub(1)
}

// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Playlist view state.
//!
//! The view owns the list cursor, which is independent of the playlist's
//! selection: moving the cursor never changes what is playing, the user
//! commits the cursor position with `Enter`.

mod render;

use ratatui::widgets::TableState;

pub(crate) struct PlaylistView {
    pub(crate) table_state: TableState,
    pub(crate) show_metadata: bool,
}

impl PlaylistView {
    pub(crate) fn new(show_metadata: bool) -> Self {
        Self {
            table_state: TableState::default(),
            show_metadata,
        }
    }

    pub(crate) fn cursor(&self) -> Option<usize> {
        self.table_state.selected()
    }

    /// Moves the cursor down, wrapping to the top.
    pub(crate) fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let next = match self.cursor() {
            Some(idx) if idx + 1 < len => idx + 1,
            _ => 0,
        };
        self.table_state.select(Some(next));
    }

    /// Moves the cursor up, wrapping to the bottom.
    pub(crate) fn previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let previous = match self.cursor() {
            Some(idx) if idx > 0 && idx < len => idx - 1,
            _ => len - 1,
        };
        self.table_state.select(Some(previous));
    }

    pub(crate) fn first(&mut self, len: usize) {
        if len > 0 {
            self.table_state.select(Some(0));
        }
    }

    pub(crate) fn last(&mut self, len: usize) {
        if len > 0 {
            self.table_state.select(Some(len - 1));
        }
    }

    pub(crate) fn select(&mut self, index: usize) {
        self.table_state.select(Some(index));
    }

    /// Keeps the cursor on a row after the number of items changed.
    pub(crate) fn sync(&mut self, len: usize) {
        let cursor = match (self.cursor(), len) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(idx), len) => Some(idx.min(len - 1)),
        };
        self.table_state.select(cursor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_wraps_both_ways() {
        let mut view = PlaylistView::new(false);
        view.next(3);
        assert_eq!(view.cursor(), Some(0));
        view.previous(3);
        assert_eq!(view.cursor(), Some(2));
        view.next(3);
        assert_eq!(view.cursor(), Some(0));
        view.next(3);
        assert_eq!(view.cursor(), Some(1));
    }

    #[test]
    fn movement_on_empty_list_is_ignored() {
        let mut view = PlaylistView::new(false);
        view.next(0);
        view.previous(0);
        view.first(0);
        view.last(0);
        assert_eq!(view.cursor(), None);
    }

    #[test]
    fn first_and_last() {
        let mut view = PlaylistView::new(false);
        view.last(4);
        assert_eq!(view.cursor(), Some(3));
        view.first(4);
        assert_eq!(view.cursor(), Some(0));
    }

    #[test]
    fn sync_clamps_to_remaining_items() {
        let mut view = PlaylistView::new(false);
        view.sync(2);
        assert_eq!(view.cursor(), Some(0));

        view.select(1);
        view.sync(1);
        assert_eq!(view.cursor(), Some(0));

        view.sync(0);
        assert_eq!(view.cursor(), None);
    }
}

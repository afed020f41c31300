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

//! Navigable track list widget.
//!
//! This module provides the table used both for search candidates and for
//! recommendation cards. The list does not own its tracks, they belong to the
//! discovery state, so every operation is told the current length.

mod event;
mod render;

use ratatui::widgets::TableState;

pub(crate) use render::TrackListStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TrackListAction {
    Activate(usize),
}

#[derive(Debug, Default)]
pub(crate) struct TrackList {
    table_state: TableState,
}

impl TrackList {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn selected(&self) -> Option<usize> {
        self.table_state.selected()
    }

    /// Highlights the first row, or nothing when the list is empty.
    pub(crate) fn reset(&mut self, len: usize) {
        *self.table_state.offset_mut() = 0;
        self.table_state.select(if len == 0 { None } else { Some(0) });
    }

    fn goto_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => (i - 1).min(len - 1),
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self, len: usize) {
        if len > 0 {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self, len: usize) {
        if len > 0 {
            self.table_state.select(Some(len - 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_selects_first_row_when_not_empty() {
        let mut list = TrackList::new();

        list.reset(3);
        assert_eq!(list.selected(), Some(0));

        list.reset(0);
        assert_eq!(list.selected(), None);
    }

    #[test]
    fn navigation_wraps_around() {
        let mut list = TrackList::new();
        list.reset(3);

        list.goto_previous(3);
        assert_eq!(list.selected(), Some(2));

        list.goto_next(3);
        assert_eq!(list.selected(), Some(0));

        list.goto_next(3);
        assert_eq!(list.selected(), Some(1));
    }

    #[test]
    fn first_and_last_jump_to_the_ends() {
        let mut list = TrackList::new();
        list.reset(5);

        list.goto_last(5);
        assert_eq!(list.selected(), Some(4));

        list.goto_first(5);
        assert_eq!(list.selected(), Some(0));
    }

    #[test]
    fn navigation_on_empty_list_selects_nothing() {
        let mut list = TrackList::new();

        list.goto_next(0);
        list.goto_last(0);

        assert_eq!(list.selected(), None);
    }
}

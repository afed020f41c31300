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

//! Input handling for the track list.
//!
//! This module maps raw terminal keyboard events to list navigation and to the
//! activation of the highlighted row.

use crossterm::event::{Event, KeyCode};

use crate::components::{TrackList, TrackListAction};

impl TrackList {
    /// Handles navigation keys and reports an activation on `Enter`.
    ///
    /// Returns `None` for keys the list does not act on, they are left for
    /// the caller.
    pub(crate) fn process_event(&mut self, event: &Event, len: usize) -> Option<TrackListAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => self.goto_next(len),
            KeyCode::Char('k') | KeyCode::Up => self.goto_previous(len),
            KeyCode::Char('g') | KeyCode::Home => self.goto_first(len),
            KeyCode::Char('G') | KeyCode::End => self.goto_last(len),

            KeyCode::Enter => {
                return self
                    .selected()
                    .filter(|&i| i < len)
                    .map(TrackListAction::Activate);
            }

            _ => {}
        }

        None
    }
}

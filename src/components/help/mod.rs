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

//! Key binding help popover.
//!
//! The popover is opened and closed explicitly, and also closes on any pointer
//! press outside the area it was last drawn in. Pointer events are only
//! delivered while it is open, the application subscribes to them when it
//! opens and unsubscribes when it closes.

mod render;

use crossterm::event::{MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

#[derive(Debug, Default)]
pub(crate) struct HelpPopover {
    open: bool,
    area: Option<Rect>,
}

impl HelpPopover {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn is_open(&self) -> bool {
        self.open
    }

    /// Flips the popover and returns whether it is now open.
    pub(crate) fn toggle(&mut self) -> bool {
        if self.open {
            self.close();
        } else {
            self.open = true;
        }
        self.open
    }

    /// Closes the popover, returning `true` if it was open.
    pub(crate) fn close(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        self.area = None;
        was_open
    }

    /// Closes the popover when the pointer is pressed outside it. Returns
    /// `true` if that happened.
    pub(crate) fn handle_mouse(&mut self, mouse: &MouseEvent) -> bool {
        if !self.open || !matches!(mouse.kind, MouseEventKind::Down(_)) {
            return false;
        }

        let inside = self
            .area
            .is_some_and(|area| area.contains(Position::new(mouse.column, mouse.row)));

        !inside && self.close()
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyModifiers, MouseButton};

    use super::*;

    fn press(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn drawn_popover() -> HelpPopover {
        let mut help = HelpPopover::new();
        help.toggle();
        help.area = Some(Rect::new(10, 5, 20, 10));
        help
    }

    #[test]
    fn toggle_opens_and_closes() {
        let mut help = HelpPopover::new();

        assert!(help.toggle());
        assert!(help.is_open());
        assert!(!help.toggle());
        assert!(!help.is_open());
    }

    #[test]
    fn press_outside_closes() {
        let mut help = drawn_popover();

        assert!(help.handle_mouse(&press(2, 2)));
        assert!(!help.is_open());
    }

    #[test]
    fn press_inside_keeps_it_open() {
        let mut help = drawn_popover();

        assert!(!help.handle_mouse(&press(15, 8)));
        assert!(help.is_open());
    }

    #[test]
    fn pointer_movement_is_not_an_interaction() {
        let mut help = drawn_popover();
        let moved = MouseEvent {
            kind: MouseEventKind::Moved,
            ..press(0, 0)
        };

        assert!(!help.handle_mouse(&moved));
        assert!(help.is_open());
    }

    #[test]
    fn closed_popover_ignores_the_pointer() {
        let mut help = HelpPopover::new();

        assert!(!help.handle_mouse(&press(0, 0)));
    }
}

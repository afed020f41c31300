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

//! Search query input.
//!
//! This module wraps a text input component and reports when the user submits
//! the query or leaves the input. Whether a submitted query is worth searching
//! for is decided by the discovery state, not here.

mod render;

use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum QueryBarAction {
    Submit(String),
    Leave,
}

#[derive(Debug, Default)]
pub(crate) struct QueryBar {
    pub(crate) input: Input,
}

impl QueryBar {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn value(&self) -> &str {
        self.input.value()
    }

    pub(crate) fn reset(&mut self) {
        self.input.reset();
    }

    pub(crate) fn handle_event(&mut self, event: &Event) -> Option<QueryBarAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Enter => Some(QueryBarAction::Submit(self.input.value().to_string())),
            KeyCode::Esc | KeyCode::Tab => Some(QueryBarAction::Leave),
            _ => {
                // Delegate all other key events to the managed input component.
                self.input.handle_event(event);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(bar: &mut QueryBar, text: &str) {
        for c in text.chars() {
            assert_eq!(bar.handle_event(&key(KeyCode::Char(c))), None);
        }
    }

    #[test]
    fn enter_submits_typed_text() {
        let mut bar = QueryBar::new();
        type_text(&mut bar, "thriller");

        assert_eq!(
            bar.handle_event(&key(KeyCode::Enter)),
            Some(QueryBarAction::Submit("thriller".to_string()))
        );
        assert_eq!(bar.value(), "thriller");
    }

    #[test]
    fn escape_leaves_without_submitting() {
        let mut bar = QueryBar::new();
        type_text(&mut bar, "beat");

        assert_eq!(bar.handle_event(&key(KeyCode::Esc)), Some(QueryBarAction::Leave));
        assert_eq!(bar.value(), "beat");
    }

    #[test]
    fn reset_empties_the_input() {
        let mut bar = QueryBar::new();
        type_text(&mut bar, "thriller");

        bar.reset();

        assert_eq!(bar.value(), "");
    }
}

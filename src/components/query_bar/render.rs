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

//! Render the query input.
//!
//! This module renders the visual representation of the query input, the
//! current text, the placeholder and the cursor.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{components::QueryBar, theme::Theme};

const PLACEHOLDER: &str = "Search for a song...";

impl QueryBar {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        let border_colour = if focused {
            theme.accent_colour
        } else {
            theme.border_colour
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .padding(Padding::horizontal(1))
            .bg(theme.input_bg_colour);

        let inner = block.inner(area);
        let scroll = self.input.visual_scroll(inner.width.max(1) as usize);

        let paragraph = if self.input.value().is_empty() && !focused {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(theme.muted_fg))
        } else {
            Paragraph::new(self.input.value())
                .style(Style::default().fg(theme.table_track_fg))
                .scroll((0, scroll as u16))
        };

        f.render_widget(paragraph.block(block), area);

        if focused {
            let cursor_x = inner.x + self.input.visual_cursor().saturating_sub(scroll) as u16;
            f.set_cursor_position((cursor_x, inner.y));
        }
    }
}

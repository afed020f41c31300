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

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
};

use crate::{components::HelpPopover, theme::Theme};

const BINDINGS: &[(&str, &str)] = &[
    ("Enter", "search / pick a version / open on YouTube"),
    ("Tab, Esc", "leave the search input"),
    ("/, i", "back to the search input"),
    ("j, k", "move down / up"),
    ("g, G", "first / last"),
    ("y", "open on YouTube"),
    ("s", "open on Spotify"),
    ("a", "open on Apple Music"),
    ("x, Ctrl-L", "clear and start over"),
    ("?, F1", "toggle this help"),
    ("q, Ctrl-C", "quit"),
];

impl HelpPopover {
    /// Draws the popover centred in `area` and remembers where it went, for
    /// hit testing pointer presses.
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let width = 52.min(area.width);
        let height = (BINDINGS.len() as u16 + 4).min(area.height);

        let [popup] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(area);
        let [popup] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(popup);

        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(keys, action)| {
                Line::from(vec![
                    Span::styled(format!("{keys:>10}  "), Style::default().bold().fg(theme.accent_colour)),
                    Span::styled(*action, Style::default().fg(theme.table_track_fg)),
                ])
            })
            .collect();

        let block = Block::default()
            .title(" Keys ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent_colour))
            .padding(Padding::uniform(1))
            .bg(theme.background_colour);

        f.render_widget(Clear, popup);
        f.render_widget(Paragraph::new(lines).block(block), popup);

        self.area = Some(popup);
    }
}

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

//! Render the status line.
//!
//! Shows the key bindings that matter for the current view on the left and
//! the lookup backend on the right.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::{App, Focus, config::Backend, discovery::Phase};

pub(crate) fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(40)])
        .horizontal_margin(1)
        .split(area);

    let hints = match (app.focus, app.discovery.phase()) {
        (Focus::Query, _) => "Enter search  Tab results  Ctrl-L clear  F1 help",
        (Focus::Results, Phase::Disambiguation) => "j/k move  Enter pick  / search  x clear  ? help",
        (Focus::Results, Phase::Recommended) => {
            "j/k move  y YouTube  s Spotify  a Apple  x clear  ? help"
        }
        (Focus::Results, _) => "/ search  x clear  ? help  q quit",
    };

    f.render_widget(
        Paragraph::new(hints).style(Style::default().fg(app.theme.muted_fg)),
        chunks[0],
    );

    let backend = match app.config.backend {
        Backend::Proxy => app.config.api_base_url.clone(),
        Backend::LastFm => "last.fm".to_string(),
    };

    f.render_widget(
        Paragraph::new(backend)
            .alignment(Alignment::Right)
            .style(Style::default().fg(app.theme.table_index_fg)),
        chunks[1],
    );
}

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

//! UI rendering logic for the track list.
//!
//! This module handles the visual representation of track rows, including
//! column layout, highlighting, and theme application using the Ratatui
//! widget system.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, Cell, Row, Table},
};

use crate::{components::TrackList, model::Track, theme::Theme};

/// Column layout for a track list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TrackListStyle {
    /// Search candidates, title and artist.
    Candidates,
    /// Recommendations, numbered in the order the service ranked them.
    Numbered,
}

impl TrackList {
    pub(crate) fn draw(
        &mut self,
        f: &mut Frame,
        area: Rect,
        tracks: &[Track],
        style: TrackListStyle,
        theme: &Theme,
    ) {
        let rows = tracks.iter().enumerate().map(|(i, track)| {
            let title = Line::from(track.name.as_str()).style(Style::default().fg(theme.table_track_fg));
            let artist =
                Line::from(track.artist_name()).style(Style::default().fg(theme.table_artist_fg));

            match style {
                TrackListStyle::Candidates => Row::new(vec![Cell::from(title), Cell::from(artist)]),
                TrackListStyle::Numbered => Row::new(vec![
                    Cell::from(
                        Line::from(format!("#{}", i + 1))
                            .style(Style::default().fg(theme.table_index_fg))
                            .alignment(Alignment::Right),
                    ),
                    Cell::from(""),
                    Cell::from(title),
                    Cell::from(artist),
                ]),
            }
        });

        let (widths, header) = match style {
            TrackListStyle::Candidates => (
                vec![Constraint::Percentage(55), Constraint::Percentage(45)],
                Row::new(vec![Cell::from("Title"), Cell::from("Artist")]),
            ),
            TrackListStyle::Numbered => (
                vec![
                    Constraint::Length(4),
                    Constraint::Length(1),
                    Constraint::Percentage(55),
                    Constraint::Percentage(45),
                ],
                Row::new(vec![
                    Cell::from(Line::from("#").alignment(Alignment::Right)),
                    Cell::from(""),
                    Cell::from("Title"),
                    Cell::from("Artist"),
                ]),
            ),
        };

        let table = Table::new(rows, widths)
            .header(
                header
                    .style(Style::default().bold().fg(theme.accent_colour))
                    .bottom_margin(1),
            )
            .row_highlight_style(
                Style::default()
                    .bg(theme.highlight_bg)
                    .fg(theme.highlight_fg),
            )
            .highlight_symbol("\u{2192} ")
            .block(Block::default());

        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}

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

//! Render the main area for each discovery view.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};

use crate::{
    components::{TrackList, TrackListStyle},
    model::{Track, links::outbound_links},
    theme::Theme,
};

const LINKS_PANE_WIDTH: u16 = 46;

pub(super) fn draw_landing(f: &mut Frame, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from(Span::styled(
            "Dive into the sound",
            Style::default()
                .fg(theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Type a song and press Enter to find what to listen to next.",
            Style::default().fg(theme.muted_fg),
        )),
    ];

    draw_centred(f, area, lines);
}

pub(super) fn draw_loading(f: &mut Frame, area: Rect, theme: &Theme) {
    let lines = vec![Line::from(Span::styled(
        "LOADING...",
        Style::default()
            .fg(theme.muted_fg)
            .add_modifier(Modifier::BOLD),
    ))];

    draw_centred(f, area, lines);
}

pub(super) fn draw_candidates(
    f: &mut Frame,
    area: Rect,
    tracks: &[Track],
    list: &mut TrackList,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Select the right version:",
            Style::default().fg(theme.muted_fg),
        ))),
        chunks[0],
    );

    list.draw(f, chunks[1], tracks, TrackListStyle::Candidates, theme);
}

pub(super) fn draw_recommendations(
    f: &mut Frame,
    area: Rect,
    selected: &Track,
    tracks: &[Track],
    list: &mut TrackList,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    draw_selected_banner(f, chunks[0], selected, theme);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(LINKS_PANE_WIDTH)])
        .spacing(2)
        .split(chunks[1]);

    list.draw(f, body[0], tracks, TrackListStyle::Numbered, theme);

    let highlighted = list
        .selected()
        .and_then(|index| tracks.get(index).map(|track| (index, track)));

    if let Some((index, track)) = highlighted {
        draw_links_pane(f, body[1], index, track, theme);
    }
}

pub(super) fn draw_no_recommendations(f: &mut Frame, area: Rect, selected: &Track, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    draw_selected_banner(f, chunks[0], selected, theme);

    draw_centred(
        f,
        chunks[1],
        vec![Line::from(Span::styled(
            "No recommendations found.",
            Style::default().fg(theme.muted_fg),
        ))],
    );
}

/// The track the recommendations were computed for.
fn draw_selected_banner(f: &mut Frame, area: Rect, selected: &Track, theme: &Theme) {
    let lines = vec![
        Line::from(Span::styled("Based on", Style::default().fg(theme.muted_fg))),
        Line::from(vec![
            Span::styled(
                selected.name.as_str(),
                Style::default()
                    .fg(theme.table_track_fg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(selected.artist_name(), Style::default().fg(theme.table_artist_fg)),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border_colour));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_links_pane(f: &mut Frame, area: Rect, index: usize, track: &Track, theme: &Theme) {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("Suggestion #{}", index + 1),
            Style::default().fg(theme.table_index_fg),
        )),
        Line::from(Span::styled(
            track.name.as_str(),
            Style::default()
                .fg(theme.table_track_fg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            track.artist_name(),
            Style::default().fg(theme.table_artist_fg),
        )),
        Line::default(),
    ];

    for link in outbound_links(track) {
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", link.service.key()),
                Style::default().fg(theme.accent_colour),
            ),
            Span::styled(
                link.service.label(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            link.url,
            Style::default().fg(theme.muted_fg),
        )));
        lines.push(Line::default());
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1))
        .title(" Listen ");

    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn draw_centred(f: &mut Frame, area: Rect, lines: Vec<Line>) {
    let height = lines.len() as u16;

    let [centre] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), centre);
}

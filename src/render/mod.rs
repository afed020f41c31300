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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called on every
//! terminal tick or state change to provide a reactive user interface. The
//! main area shows whatever [`Discovery::view`](crate::discovery::Discovery::view)
//! reports, nothing else decides what is visible.

mod footer;
mod header;
mod views;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

use crate::{
    App,
    discovery::View,
    render::{footer::draw_footer, header::draw_header},
};

/// Renders the user interface to the terminal frame.
///
/// This function calculates the layout constraints and populates the frame
/// with widgets based on the current state of the [`App`].
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing the UI
///   to update internal view state (like list scroll positions and the help
///   popover's hit area).
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    // Outer layout: header, main, footer
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(f, outer[0], app);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0)])
        .margin(1)
        .horizontal_margin(2)
        .split(outer[1])[0];

    match app.discovery.view() {
        View::Landing => views::draw_landing(f, main, &app.theme),
        View::Loading => views::draw_loading(f, main, &app.theme),
        View::Candidates(tracks) => {
            views::draw_candidates(f, main, tracks, &mut app.candidates, &app.theme)
        }
        View::Recommendations { selected, tracks } => views::draw_recommendations(
            f,
            main,
            selected,
            tracks,
            &mut app.recommendations,
            &app.theme,
        ),
        View::NoRecommendations { selected } => {
            views::draw_no_recommendations(f, main, selected, &app.theme)
        }
    }

    draw_footer(f, outer[2], app);

    if app.help.is_open() {
        app.help.draw(f, area, &app.theme);
    }
}

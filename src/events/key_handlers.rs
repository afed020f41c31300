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

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    App, Focus,
    components::{QueryBarAction, TrackListAction},
    discovery::Phase,
    events::{AppEvent, handlers::*},
    model::links::ListeningService,
};

/// Maps keyboard input to application actions.
///
/// This function acts as the primary input router for the TUI, translating
/// low-level [`KeyEvent`]s into high-level domain logic. It handles:
///
/// * **Application Control**: quitting, clearing, and the help popover,
///   available regardless of focus.
/// * **Query Input**: editing and submitting the search query.
/// * **Results**: moving through candidates or recommendations, picking a
///   candidate and opening outbound links.
///
/// # Errors
///
/// Returns an error if a task fails to send to the background worker.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    if process_application_key_event(app, key)? {
        return Ok(());
    }

    match app.focus {
        Focus::Query => process_query_key_event(app, key),
        Focus::Results => process_results_key_event(app, key),
    }
}

fn process_application_key_event(app: &mut App, key: KeyEvent) -> Result<bool> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => app.event_tx.send(AppEvent::ExitApplication)?,
        KeyCode::Char('l') if ctrl => clear_discovery(app),
        KeyCode::F(1) => toggle_help(app),
        KeyCode::Esc if app.help.is_open() => close_help(app),
        _ => return Ok(false),
    }

    Ok(true)
}

fn process_query_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.query_bar.handle_event(&Event::Key(key)) {
        Some(QueryBarAction::Submit(_)) => submit_query(app)?,
        Some(QueryBarAction::Leave) => app.focus = Focus::Results,
        None => {}
    }

    Ok(())
}

fn process_results_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let event = Event::Key(key);

    match app.discovery.phase() {
        Phase::Disambiguation => {
            let len = app.discovery.search_results().len();
            if let Some(TrackListAction::Activate(index)) = app.candidates.process_event(&event, len)
            {
                return select_candidate(app, index);
            }
        }
        Phase::Recommended => {
            let len = app.discovery.recommendations().len();
            if let Some(TrackListAction::Activate(_)) =
                app.recommendations.process_event(&event, len)
            {
                return open_recommendation_link(app, ListeningService::YouTube);
            }
        }
        Phase::Idle | Phase::Searching | Phase::RecommendLoading => {}
    }

    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,
        KeyCode::Char('/') | KeyCode::Char('i') | KeyCode::Tab => app.focus = Focus::Query,
        KeyCode::Char('?') => toggle_help(app),
        KeyCode::Char('x') => clear_discovery(app),

        KeyCode::Char(c) if app.discovery.phase() == Phase::Recommended => {
            if let Some(service) = ListeningService::from_key(c) {
                open_recommendation_link(app, service)?;
            }
        }

        _ => {}
    }

    Ok(())
}

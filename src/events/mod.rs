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

//! Application logic, event handling, and task dispatching.
//!
//! This module acts as the central hub for the "Controller" logic of the
//! application. It organizes how various inputs are translated into internal
//! state changes.
//!
//! # Organization
//!
//! * [`AppEvent`]: everything the main loop reacts to, terminal input,
//!   finished lookups and ticks.
//! * `key_handlers`: keyboard routing between the query input, the result
//!   lists and global bindings.
//! * `handlers`: the state changes behind each event, including handing
//!   lookups to the task worker.

mod handlers;
mod key_handlers;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    discovery::{Generation, LookupOutcome},
    render::draw,
};

use handlers::*;
use key_handlers::process_key_event;

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),

    SearchFinished(Generation, LookupOutcome),
    RecommendationsFinished(Generation, LookupOutcome),

    Tick,

    ExitApplication,
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        dispatch_event(app, event)?;

        terminal.draw(|f| draw(f, app))?;
    }
    Ok(())
}

/// Applies a single event to the application state.
pub(crate) fn dispatch_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::Mouse(mouse) => handle_mouse(app, mouse),
        AppEvent::SearchFinished(generation, outcome) => {
            handle_search_finished(app, generation, outcome)
        }
        AppEvent::RecommendationsFinished(generation, outcome) => {
            handle_recommendations_finished(app, generation, outcome)
        }
        AppEvent::Tick | AppEvent::ExitApplication => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Receiver};

    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;
    use crate::{
        Focus,
        config::AppConfig,
        discovery::{LookupRequest, Phase, View},
        lookup::LookupError,
        model::Track,
        tasks::AppTask,
    };

    fn app() -> (App, Receiver<AppTask>) {
        let (task_tx, task_rx) = mpsc::channel();
        (App::new(AppConfig::default(), task_tx), task_rx)
    }

    fn press(app: &mut App, code: KeyCode) {
        press_with(app, code, KeyModifiers::NONE);
    }

    fn press_with(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        dispatch_event(app, AppEvent::Key(KeyEvent::new(code, modifiers))).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn expect_search(task_rx: &Receiver<AppTask>) -> (Generation, String) {
        match task_rx.try_recv() {
            Ok(AppTask::Lookup(LookupRequest::Search { generation, query })) => (generation, query),
            other => panic!("expected a search task, got {other:?}"),
        }
    }

    fn expect_recommend(task_rx: &Receiver<AppTask>) -> (Generation, String, String) {
        match task_rx.try_recv() {
            Ok(AppTask::Lookup(LookupRequest::Recommend {
                generation,
                artist,
                track,
            })) => (generation, artist, track),
            other => panic!("expected a recommend task, got {other:?}"),
        }
    }

    /// Searches for "thriller" and delivers the given results.
    fn searched(results: Vec<Track>) -> (App, Receiver<AppTask>) {
        let (mut app, task_rx) = app();
        type_text(&mut app, "thriller");
        press(&mut app, KeyCode::Enter);
        let (generation, _) = expect_search(&task_rx);
        dispatch_event(&mut app, AppEvent::SearchFinished(generation, Ok(results))).unwrap();
        (app, task_rx)
    }

    /// Continues from [`searched`] by picking the highlighted candidate and
    /// delivering the given recommendations.
    fn recommended(recommendations: Vec<Track>) -> (App, Receiver<AppTask>) {
        let (mut app, task_rx) = searched(vec![Track::new("Thriller", "Michael Jackson")]);
        press(&mut app, KeyCode::Enter);
        let (generation, _, _) = expect_recommend(&task_rx);
        dispatch_event(
            &mut app,
            AppEvent::RecommendationsFinished(generation, Ok(recommendations)),
        )
        .unwrap();
        (app, task_rx)
    }

    #[test]
    fn typed_query_is_submitted_as_one_search() {
        let (mut app, task_rx) = app();

        type_text(&mut app, "thriller");
        press(&mut app, KeyCode::Enter);

        let (generation, query) = expect_search(&task_rx);
        assert_eq!(query, "thriller");
        assert_eq!(generation, app.discovery.generation());
        assert!(task_rx.try_recv().is_err());
        assert!(app.discovery.is_loading());
        assert_eq!(app.focus, Focus::Results);
    }

    #[test]
    fn blank_query_issues_nothing() {
        let (mut app, task_rx) = app();

        type_text(&mut app, "   ");
        press(&mut app, KeyCode::Enter);

        assert!(task_rx.try_recv().is_err());
        assert_eq!(app.discovery.phase(), Phase::Idle);
        assert_eq!(app.focus, Focus::Query);
    }

    #[test]
    fn search_results_are_listed_with_first_highlighted() {
        let (app, _task_rx) = searched(vec![
            Track::new("Thriller", "Michael Jackson"),
            Track::new("Thriller", "Fall Out Boy"),
        ]);

        assert!(matches!(app.discovery.view(), View::Candidates(tracks) if tracks.len() == 2));
        assert_eq!(app.candidates.selected(), Some(0));
    }

    #[test]
    fn empty_search_hands_focus_back_to_the_query() {
        let (app, _task_rx) = searched(vec![]);

        assert_eq!(app.discovery.view(), View::Landing);
        assert_eq!(app.focus, Focus::Query);
    }

    #[test]
    fn picking_a_candidate_requests_its_recommendations() {
        let (mut app, task_rx) = searched(vec![
            Track::new("Thriller", "Fall Out Boy"),
            Track::new("Thriller", "Michael Jackson"),
        ]);

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);

        let (_, artist, track) = expect_recommend(&task_rx);
        assert_eq!((artist.as_str(), track.as_str()), ("Michael Jackson", "Thriller"));
        assert!(app.discovery.search_results().is_empty());
        assert_eq!(app.discovery.view(), View::Loading);
    }

    #[test]
    fn link_keys_open_the_highlighted_recommendation() {
        let (mut app, task_rx) = recommended(vec![
            Track::with_artist_ref("Billie Jean", Some("Michael Jackson")),
            Track::with_artist_ref("Beat It", Some("Michael Jackson")),
        ]);

        press(&mut app, KeyCode::Char('y'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('s'));

        match task_rx.try_recv() {
            Ok(AppTask::OpenLink(url)) => assert_eq!(
                url,
                "https://www.youtube.com/results?search_query=Michael%20Jackson%20Billie%20Jean"
            ),
            other => panic!("expected a link task, got {other:?}"),
        }
        match task_rx.try_recv() {
            Ok(AppTask::OpenLink(url)) => {
                assert_eq!(url, "https://open.spotify.com/search/Michael%20Jackson%20Beat%20It")
            }
            other => panic!("expected a link task, got {other:?}"),
        }
    }

    #[test]
    fn failed_recommendations_show_the_notice() {
        let (mut app, task_rx) = searched(vec![Track::new("Thriller", "Michael Jackson")]);
        press(&mut app, KeyCode::Enter);
        let (generation, _, _) = expect_recommend(&task_rx);

        dispatch_event(
            &mut app,
            AppEvent::RecommendationsFinished(generation, Err(LookupError::Status(500))),
        )
        .unwrap();

        assert!(matches!(app.discovery.view(), View::NoRecommendations { .. }));
        press(&mut app, KeyCode::Char('y'));
        assert!(task_rx.try_recv().is_err());
    }

    #[test]
    fn clearing_resets_everything_and_focuses_the_query() {
        let (mut app, _task_rx) =
            recommended(vec![Track::with_artist_ref("Billie Jean", Some("Michael Jackson"))]);

        press_with(&mut app, KeyCode::Char('l'), KeyModifiers::CONTROL);

        assert_eq!(app.discovery.view(), View::Landing);
        assert_eq!(app.discovery.selected(), None);
        assert!(app.discovery.recommendations().is_empty());
        assert_eq!(app.query_bar.value(), "");
        assert_eq!(app.focus, Focus::Query);
    }

    #[test]
    fn stale_search_completion_changes_nothing() {
        let (mut app, task_rx) = app();
        type_text(&mut app, "thriller");
        press(&mut app, KeyCode::Enter);
        let (first, _) = expect_search(&task_rx);

        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, " jackson");
        press(&mut app, KeyCode::Enter);
        let (second, query) = expect_search(&task_rx);
        assert_eq!(query, "thriller jackson");

        dispatch_event(
            &mut app,
            AppEvent::SearchFinished(second, Ok(vec![Track::new("Thriller", "Michael Jackson")])),
        )
        .unwrap();
        dispatch_event(
            &mut app,
            AppEvent::SearchFinished(first, Ok(vec![Track::new("Thriller", "Fall Out Boy")])),
        )
        .unwrap();

        assert_eq!(
            app.discovery.search_results(),
            &[Track::new("Thriller", "Michael Jackson")]
        );
    }

    #[test]
    fn quit_key_requests_exit_outside_the_query() {
        let (mut app, _task_rx) = searched(vec![Track::new("Thriller", "Michael Jackson")]);

        press(&mut app, KeyCode::Char('q'));

        assert!(matches!(app.event_rx.try_recv(), Ok(AppEvent::ExitApplication)));
    }
}

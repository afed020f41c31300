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
use crossterm::event::MouseEvent;
use tracing::warn;

use crate::{
    App, Focus,
    discovery::{Generation, LookupOutcome, Phase},
    model::links::ListeningService,
    tasks::AppTask,
    util,
};

pub(super) fn handle_search_finished(app: &mut App, generation: Generation, outcome: LookupOutcome) {
    if !app.discovery.apply_search(generation, outcome) {
        return;
    }

    app.candidates.reset(app.discovery.search_results().len());

    // Nothing to pick from, so the next thing to do is type another query.
    if app.discovery.phase() == Phase::Idle {
        app.focus = Focus::Query;
    }
}

pub(super) fn handle_recommendations_finished(
    app: &mut App,
    generation: Generation,
    outcome: LookupOutcome,
) {
    if app.discovery.apply_recommendations(generation, outcome) {
        app.recommendations
            .reset(app.discovery.recommendations().len());
    }
}

pub(super) fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.help.handle_mouse(&mouse) {
        release_pointer();
    }
}

pub(super) fn submit_query(app: &mut App) -> Result<()> {
    if let Some(request) = app.discovery.submit_query(app.query_bar.value()) {
        app.candidates.reset(0);
        app.recommendations.reset(0);
        app.focus = Focus::Results;
        app.task_tx.send(AppTask::Lookup(request))?;
    }

    Ok(())
}

pub(super) fn select_candidate(app: &mut App, index: usize) -> Result<()> {
    if let Some(request) = app.discovery.select_candidate(index) {
        app.candidates.reset(0);
        app.recommendations.reset(0);
        app.task_tx.send(AppTask::Lookup(request))?;
    }

    Ok(())
}

pub(super) fn open_recommendation_link(app: &mut App, service: ListeningService) -> Result<()> {
    let track = app
        .recommendations
        .selected()
        .and_then(|i| app.discovery.recommendations().get(i));

    if let Some(track) = track {
        app.task_tx.send(AppTask::OpenLink(service.search_url(track)))?;
    }

    Ok(())
}

pub(super) fn clear_discovery(app: &mut App) {
    app.discovery.clear();
    app.query_bar.reset();
    app.candidates.reset(0);
    app.recommendations.reset(0);
    app.focus = Focus::Query;
}

pub(super) fn toggle_help(app: &mut App) {
    let open = app.help.toggle();
    if let Err(e) = util::term::set_pointer_capture(open) {
        warn!(error = %e, "could not change pointer capture");
    }
}

pub(super) fn close_help(app: &mut App) {
    if app.help.close() {
        release_pointer();
    }
}

fn release_pointer() {
    if let Err(e) = util::term::set_pointer_capture(false) {
        warn!(error = %e, "could not release pointer capture");
    }
}

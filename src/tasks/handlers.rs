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

use std::{sync::Arc, thread};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::{discovery::Generation, events::AppEvent, tasks::TaskContext};

pub(super) fn search(ctx: &TaskContext, generation: Generation, query: String) -> Result<()> {
    let lookup = Arc::clone(ctx.lookup);
    let event_tx = ctx.event_tx.clone();

    thread::Builder::new()
        .name(format!("search-{generation}"))
        .spawn(move || {
            let outcome = lookup.search(&query);
            debug!(%generation, ok = outcome.is_ok(), "search finished");

            // The receiver is gone only when the application is shutting down.
            event_tx.send(AppEvent::SearchFinished(generation, outcome)).ok();
        })
        .context("Failed to spawn search thread")?;

    Ok(())
}

pub(super) fn recommend(
    ctx: &TaskContext,
    generation: Generation,
    artist: String,
    track: String,
) -> Result<()> {
    let lookup = Arc::clone(ctx.lookup);
    let event_tx = ctx.event_tx.clone();

    thread::Builder::new()
        .name(format!("recommend-{generation}"))
        .spawn(move || {
            let outcome = lookup.recommend(&artist, &track);
            debug!(%generation, ok = outcome.is_ok(), "recommendation lookup finished");

            event_tx
                .send(AppEvent::RecommendationsFinished(generation, outcome))
                .ok();
        })
        .context("Failed to spawn recommendation thread")?;

    Ok(())
}

pub(super) fn open_link(url: String) -> Result<()> {
    info!(url = %url, "opening link");

    if let Err(e) = webbrowser::open(&url) {
        warn!(url = %url, error = %e, "could not open link in browser");
    }

    Ok(())
}

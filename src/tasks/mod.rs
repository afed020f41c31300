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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to offload blocking work,
//! remote lookups and launching the system browser, from the main UI thread.
//! It provides a dedicated worker loop that translates [`AppTask`] requests
//! into those operations and broadcasts the results back to the application
//! via [`AppEvent`]s.
//!
//! Each lookup runs on a thread of its own. A slow lookup that the user has
//! already superseded must not hold up the newer one; its result still
//! arrives eventually and is discarded by the discovery state.

mod handlers;

use std::{
    sync::{
        Arc,
        mpsc::{Receiver, Sender},
    },
    thread::{self, JoinHandle},
};

use anyhow::Result;
use tracing::debug;

use crate::{discovery::LookupRequest, events::AppEvent, lookup::RemoteLookup};

#[derive(Debug)]
pub(crate) enum AppTask {
    Lookup(LookupRequest),
    OpenLink(String),
}

/// Spawns a background thread to process application tasks.
///
/// The worker runs until every sender of the task channel has been dropped.
///
/// # Arguments
///
/// * `lookup` - The lookup backend shared by every lookup thread.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    lookup: Arc<dyn RemoteLookup>,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        while let Ok(task) = task_rx.recv() {
            let ctx = TaskContext {
                lookup: &lookup,
                event_tx: &event_tx,
            };

            if let Err(e) = handle_task(task, &ctx) {
                debug!(error = %e, "task could not be dispatched");
            }
        }
    })
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
struct TaskContext<'a> {
    lookup: &'a Arc<dyn RemoteLookup>,
    event_tx: &'a Sender<AppEvent>,
}

fn handle_task(task: AppTask, ctx: &TaskContext) -> Result<()> {
    match task {
        AppTask::Lookup(LookupRequest::Search { generation, query }) => {
            handlers::search(ctx, generation, query)
        }
        AppTask::Lookup(LookupRequest::Recommend {
            generation,
            artist,
            track,
        }) => handlers::recommend(ctx, generation, artist, track),

        AppTask::OpenLink(url) => handlers::open_link(url),
    }
}

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

//! Remote track lookups.
//!
//! This module defines the [`RemoteLookup`] contract used by the task worker to
//! search for tracks and to fetch similar-track recommendations, together with
//! the two HTTP backends that implement it:
//!
//! * [`proxy`]: the JSON API exposed by the discovery server
//!   (`/api/search`, `/api/recommend`).
//! * [`lastfm`]: the Last.fm web service, queried directly.
//!
//! Lookups are blocking and are always run off the UI thread.

pub(crate) mod lastfm;
pub(crate) mod proxy;

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::{
    config::{AppConfig, Backend},
    model::Track,
};

const USER_AGENT: &str = concat!("escuta/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub(crate) enum LookupError {
    #[error("service responded with HTTP status {0}")]
    Status(u16),

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("response body could not be decoded: {0}")]
    Decode(String),

    #[error("service error {code}: {message}")]
    Service { code: i64, message: String },

    #[error("no Last.fm API key configured")]
    MissingApiKey,
}

impl From<ureq::Error> for LookupError {
    fn from(error: ureq::Error) -> Self {
        match error {
            ureq::Error::Status(code, _) => LookupError::Status(code),
            ureq::Error::Transport(transport) => LookupError::Transport(transport.to_string()),
        }
    }
}

/// A source of candidate tracks and similar-track recommendations.
pub(crate) trait RemoteLookup: Send + Sync {
    /// Finds tracks matching a free-text query.
    fn search(&self, query: &str) -> Result<Vec<Track>, LookupError>;

    /// Finds tracks similar to the given artist and track name.
    fn recommend(&self, artist: &str, track: &str) -> Result<Vec<Track>, LookupError>;
}

/// Creates the lookup backend selected by the configuration.
pub(crate) fn from_config(config: &AppConfig) -> Arc<dyn RemoteLookup> {
    match config.backend {
        Backend::Proxy => Arc::new(proxy::ProxyLookup::new(&config.api_base_url)),
        Backend::LastFm => Arc::new(lastfm::LastFmLookup::new(config.lastfm_api_key())),
    }
}

fn http_agent() -> ureq::Agent {
    ureq::AgentBuilder::new().user_agent(USER_AGENT).build()
}

/// Issues a GET request and decodes the body as JSON.
fn get_json(agent: &ureq::Agent, url: &str) -> Result<Value, LookupError> {
    debug!(url, "issuing lookup request");

    let response = agent.get(url).call()?;
    response
        .into_json::<Value>()
        .map_err(|e| LookupError::Decode(e.to_string()))
}

/// Converts a decoded payload into a track list.
///
/// A payload that is not an array is an empty result rather than an error.
/// Array elements that do not have the shape of a track are skipped.
pub(crate) fn tracks_from_payload(payload: Value) -> Vec<Track> {
    let Value::Array(items) = payload else {
        debug!("lookup payload is not an array, treating as no results");
        return vec![];
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Track>(item) {
            Ok(track) => Some(track),
            Err(e) => {
                debug!(error = %e, "skipping malformed track record");
                None
            }
        })
        .collect()
}

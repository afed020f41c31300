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

//! Lookups against the discovery server's JSON API.

use crate::{
    lookup::{LookupError, RemoteLookup, get_json, http_agent, tracks_from_payload},
    model::Track,
};

pub(crate) struct ProxyLookup {
    agent: ureq::Agent,
    base_url: String,
}

impl ProxyLookup {
    pub(crate) fn new(base_url: &str) -> Self {
        Self {
            agent: http_agent(),
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    fn search_url(&self, query: &str) -> String {
        format!("{}/api/search?q={}", self.base_url, urlencoding::encode(query))
    }

    fn recommend_url(&self, artist: &str, track: &str) -> String {
        format!(
            "{}/api/recommend?artist={}&track={}",
            self.base_url,
            urlencoding::encode(artist),
            urlencoding::encode(track)
        )
    }
}

impl RemoteLookup for ProxyLookup {
    fn search(&self, query: &str) -> Result<Vec<Track>, LookupError> {
        get_json(&self.agent, &self.search_url(query)).map(tracks_from_payload)
    }

    fn recommend(&self, artist: &str, track: &str) -> Result<Vec<Track>, LookupError> {
        get_json(&self.agent, &self.recommend_url(artist, track)).map(tracks_from_payload)
    }
}

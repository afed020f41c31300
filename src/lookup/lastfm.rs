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

//! Lookups against the Last.fm web service.
//!
//! Searches use `track.search` and recommendations use `track.getsimilar`.
//! Both responses wrap the track array in an envelope which is unwrapped here,
//! after which the same payload tolerance as every other backend applies.

use serde_json::Value;

use crate::{
    lookup::{LookupError, RemoteLookup, get_json, http_agent, tracks_from_payload},
    model::Track,
};

const API_ROOT: &str = "https://ws.audioscrobbler.com/2.0/";

const SEARCH_LIMIT: u32 = 10;
const SIMILAR_LIMIT: u32 = 30;

const SEARCH_TRACKS: &str = "/results/trackmatches/track";
const SIMILAR_TRACKS: &str = "/similartracks/track";

pub(crate) struct LastFmLookup {
    agent: ureq::Agent,
    api_key: Option<String>,
}

impl LastFmLookup {
    pub(crate) fn new(api_key: Option<String>) -> Self {
        Self {
            agent: http_agent(),
            api_key,
        }
    }

    fn method_url(&self, method: &str, params: &[(&str, &str)]) -> Result<String, LookupError> {
        let api_key = self.api_key.as_deref().ok_or(LookupError::MissingApiKey)?;

        let mut url = format!("{API_ROOT}?method={method}");
        for (key, value) in params {
            url.push_str(&format!("&{key}={}", urlencoding::encode(value)));
        }
        url.push_str(&format!("&api_key={}&format=json", urlencoding::encode(api_key)));

        Ok(url)
    }

    fn fetch(&self, url: &str, tracks_pointer: &str) -> Result<Vec<Track>, LookupError> {
        let payload = get_json(&self.agent, url)?;
        unwrap_envelope(payload, tracks_pointer).map(tracks_from_payload)
    }
}

impl RemoteLookup for LastFmLookup {
    fn search(&self, query: &str) -> Result<Vec<Track>, LookupError> {
        let limit = SEARCH_LIMIT.to_string();
        let url = self.method_url("track.search", &[("track", query), ("limit", &limit)])?;

        self.fetch(&url, SEARCH_TRACKS)
    }

    fn recommend(&self, artist: &str, track: &str) -> Result<Vec<Track>, LookupError> {
        let limit = SIMILAR_LIMIT.to_string();
        let url = self.method_url(
            "track.getsimilar",
            &[("artist", artist), ("track", track), ("limit", &limit)],
        )?;

        self.fetch(&url, SIMILAR_TRACKS)
    }
}

/// Extracts the track array from a Last.fm response.
///
/// A Last.fm error document becomes [`LookupError::Service`]. A missing member
/// yields `null`, which the payload conversion treats as no results.
fn unwrap_envelope(mut payload: Value, tracks_pointer: &str) -> Result<Value, LookupError> {
    if let Some(code) = payload.get("error").and_then(Value::as_i64) {
        let message = payload
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("unknown error")
            .to_string();
        return Err(LookupError::Service { code, message });
    }

    Ok(payload
        .pointer_mut(tracks_pointer)
        .map(Value::take)
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn search_envelope_is_unwrapped() {
        let payload = json!({
            "results": {
                "opensearch:totalResults": "1",
                "trackmatches": {
                    "track": [
                        { "name": "Thriller", "artist": "Michael Jackson", "listeners": "1" }
                    ]
                }
            }
        });

        let tracks = tracks_from_payload(unwrap_envelope(payload, SEARCH_TRACKS).unwrap());

        assert_eq!(tracks, vec![Track::new("Thriller", "Michael Jackson")]);
    }

    #[test]
    fn similar_envelope_is_unwrapped() {
        let payload = json!({
            "similartracks": {
                "track": [
                    { "name": "Billie Jean", "artist": { "name": "Michael Jackson" } }
                ],
                "@attr": { "artist": "Michael Jackson" }
            }
        });

        let tracks = tracks_from_payload(unwrap_envelope(payload, SIMILAR_TRACKS).unwrap());

        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].artist_name(), "Michael Jackson");
    }

    #[test]
    fn missing_envelope_member_is_empty() {
        let payload = json!({ "similartracks": {} });

        let value = unwrap_envelope(payload, SIMILAR_TRACKS).unwrap();

        assert!(tracks_from_payload(value).is_empty());
    }

    #[test]
    fn error_document_is_a_service_error() {
        let payload = json!({ "error": 6, "message": "Track not found" });

        let err = unwrap_envelope(payload, SIMILAR_TRACKS).unwrap_err();

        assert!(matches!(err, LookupError::Service { code: 6, .. }));
    }

    #[test]
    fn method_url_requires_api_key() {
        let lookup = LastFmLookup::new(None);

        assert!(matches!(
            lookup.method_url("track.search", &[("track", "thriller")]),
            Err(LookupError::MissingApiKey)
        ));
        assert!(matches!(lookup.search("thriller"), Err(LookupError::MissingApiKey)));
    }

    #[test]
    fn method_url_encodes_parameters() {
        let lookup = LastFmLookup::new(Some("k3y".to_string()));

        let url = lookup
            .method_url(
                "track.getsimilar",
                &[("artist", "Michael Jackson"), ("track", "Thriller"), ("limit", "30")],
            )
            .unwrap();

        assert_eq!(
            url,
            "https://ws.audioscrobbler.com/2.0/?method=track.getsimilar\
             &artist=Michael%20Jackson&track=Thriller&limit=30&api_key=k3y&format=json"
        );
    }
}

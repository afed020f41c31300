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

//! Domain models and core data structures.
//!
//! This module defines the track records exchanged with the search and
//! recommendation services. The two services disagree on the shape of the
//! artist: search results carry a plain name, recommendations carry an artist
//! object. Both shapes deserialize into the same [`Track`].

pub(crate) mod links;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct Track {
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) artist: Option<TrackArtist>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub(crate) enum TrackArtist {
    Name(String),
    Ref(ArtistRef),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub(crate) struct ArtistRef {
    #[serde(default)]
    pub(crate) name: Option<String>,
}

impl Track {
    /// A track whose artist is a plain name, as returned by a search.
    pub(crate) fn new(name: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            artist: Some(TrackArtist::Name(artist.into())),
        }
    }

    /// A track whose artist is a reference object, as returned by a
    /// recommendation lookup.
    pub(crate) fn with_artist_ref(name: impl Into<String>, artist: Option<&str>) -> Self {
        Self {
            name: name.into(),
            artist: Some(TrackArtist::Ref(ArtistRef {
                name: artist.map(str::to_string),
            })),
        }
    }

    /// The artist name, or an empty string when the record carries none.
    pub(crate) fn artist_name(&self) -> &str {
        match &self.artist {
            Some(TrackArtist::Name(name)) => name,
            Some(TrackArtist::Ref(artist)) => artist.name.as_deref().unwrap_or_default(),
            None => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn search_shape_uses_plain_artist_name() {
        let track: Track =
            serde_json::from_value(json!({ "name": "Thriller", "artist": "Michael Jackson" }))
                .unwrap();

        assert_eq!(track, Track::new("Thriller", "Michael Jackson"));
        assert_eq!(track.artist_name(), "Michael Jackson");
    }

    #[test]
    fn recommendation_shape_reads_nested_name() {
        let track: Track = serde_json::from_value(json!({
            "name": "Billie Jean",
            "match": 1.0,
            "artist": { "name": "Michael Jackson", "mbid": "f27ec8db", "url": "https://example.com" }
        }))
        .unwrap();

        assert_eq!(track.artist_name(), "Michael Jackson");
    }

    #[test]
    fn missing_artist_name_renders_empty() {
        let nameless: Track =
            serde_json::from_value(json!({ "name": "Untitled", "artist": {} })).unwrap();
        let null_name: Track =
            serde_json::from_value(json!({ "name": "Untitled", "artist": { "name": null } }))
                .unwrap();
        let no_artist: Track = serde_json::from_value(json!({ "name": "Untitled" })).unwrap();
        let null_artist: Track =
            serde_json::from_value(json!({ "name": "Untitled", "artist": null })).unwrap();

        assert_eq!(nameless.artist_name(), "");
        assert_eq!(null_name.artist_name(), "");
        assert_eq!(no_artist.artist_name(), "");
        assert_eq!(null_artist.artist_name(), "");
    }
}

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

//! Outbound links to external listening services.
//!
//! Every recommended track links out to a search on three services, using the
//! same `"<artist> <track>"` search term for each.

use crate::model::Track;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListeningService {
    YouTube,
    Spotify,
    AppleMusic,
}

impl ListeningService {
    pub(crate) const ALL: [ListeningService; 3] = [
        ListeningService::YouTube,
        ListeningService::Spotify,
        ListeningService::AppleMusic,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            ListeningService::YouTube => "YouTube",
            ListeningService::Spotify => "Spotify",
            ListeningService::AppleMusic => "Apple Music",
        }
    }

    /// Key that opens this service's link for the highlighted track.
    pub(crate) fn key(self) -> char {
        match self {
            ListeningService::YouTube => 'y',
            ListeningService::Spotify => 's',
            ListeningService::AppleMusic => 'a',
        }
    }

    pub(crate) fn from_key(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|service| service.key() == key)
    }

    fn search_prefix(self) -> &'static str {
        match self {
            ListeningService::YouTube => "https://www.youtube.com/results?search_query=",
            ListeningService::Spotify => "https://open.spotify.com/search/",
            ListeningService::AppleMusic => "https://music.apple.com/br/search?term=",
        }
    }

    pub(crate) fn search_url(self, track: &Track) -> String {
        format!(
            "{}{}",
            self.search_prefix(),
            urlencoding::encode(&search_term(track))
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OutboundLink {
    pub(crate) service: ListeningService,
    pub(crate) url: String,
}

pub(crate) fn search_term(track: &Track) -> String {
    format!("{} {}", track.artist_name(), track.name)
}

pub(crate) fn outbound_links(track: &Track) -> [OutboundLink; 3] {
    ListeningService::ALL.map(|service| OutboundLink {
        service,
        url: service.search_url(track),
    })
}

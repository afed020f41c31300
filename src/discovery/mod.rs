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

//! Track discovery state machine.
//!
//! [`Discovery`] sequences the two remote lookups of a discovery cycle: a
//! free-text search, then a similar-track recommendation for the candidate the
//! user picks. It never performs a lookup itself. Transitions that need one
//! return a [`LookupRequest`] for the caller to dispatch, and completed lookups
//! are fed back with [`Discovery::apply_search`] and
//! [`Discovery::apply_recommendations`].
//!
//! # Stale responses
//!
//! Every request is stamped with a fresh [`Generation`]. A completion is only
//! applied when its generation is the current one *and* the state machine is
//! still waiting for that kind of response. Anything else is dropped without
//! side effects, so a slow superseded lookup can never overwrite newer state.
//!
//! # Display
//!
//! [`Discovery::view`] reduces the state to the one thing the user should see.
//! While a lookup is in flight that is always [`View::Loading`], so partially
//! updated results never show.

use std::fmt;

use tracing::{debug, info, warn};

use crate::{lookup::LookupError, model::Track};

/// Token identifying the request a response belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct Generation(u64);

impl Generation {
    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum Phase {
    /// Nothing submitted yet, the state was cleared, or a search found
    /// nothing.
    #[default]
    Idle,
    Searching,
    /// Search results are waiting for the user to pick one.
    Disambiguation,
    RecommendLoading,
    Recommended,
}

/// A remote lookup the caller must perform on behalf of [`Discovery`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LookupRequest {
    Search {
        generation: Generation,
        query: String,
    },
    Recommend {
        generation: Generation,
        artist: String,
        track: String,
    },
}

pub(crate) type LookupOutcome = Result<Vec<Track>, LookupError>;

/// What the presentation layer should currently show.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum View<'a> {
    Landing,
    Loading,
    Candidates(&'a [Track]),
    Recommendations {
        selected: &'a Track,
        tracks: &'a [Track],
    },
    NoRecommendations {
        selected: &'a Track,
    },
}

#[derive(Debug, Default)]
pub(crate) struct Discovery {
    phase: Phase,
    generation: Generation,
    query: Option<String>,
    search_results: Vec<Track>,
    selected: Option<Track>,
    recommendations: Vec<Track>,
}

impl Discovery {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn generation(&self) -> Generation {
        self.generation
    }

    pub(crate) fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub(crate) fn search_results(&self) -> &[Track] {
        &self.search_results
    }

    pub(crate) fn selected(&self) -> Option<&Track> {
        self.selected.as_ref()
    }

    pub(crate) fn recommendations(&self) -> &[Track] {
        &self.recommendations
    }

    /// True exactly while a search or recommendation lookup is in flight.
    pub(crate) fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Searching | Phase::RecommendLoading)
    }

    /// Starts a new search, superseding whatever was in flight.
    ///
    /// Returns `None`, leaving the state untouched, when the query is empty
    /// after trimming.
    pub(crate) fn submit_query(&mut self, raw: &str) -> Option<LookupRequest> {
        let query = raw.trim();
        if query.is_empty() {
            return None;
        }

        let generation = self.issue();
        self.query = Some(query.to_string());
        self.search_results.clear();
        self.selected = None;
        self.recommendations.clear();
        self.phase = Phase::Searching;

        info!(%generation, query, "searching");

        Some(LookupRequest::Search {
            generation,
            query: query.to_string(),
        })
    }

    /// Picks the search candidate at `index` and starts a recommendation
    /// lookup for it.
    ///
    /// Only valid while disambiguating; returns `None` otherwise or when the
    /// index is out of range.
    pub(crate) fn select_candidate(&mut self, index: usize) -> Option<LookupRequest> {
        if self.phase != Phase::Disambiguation || index >= self.search_results.len() {
            return None;
        }

        let track = self.search_results.swap_remove(index);
        self.search_results.clear();

        let generation = self.issue();
        let request = LookupRequest::Recommend {
            generation,
            artist: track.artist_name().to_string(),
            track: track.name.clone(),
        };

        info!(%generation, artist = track.artist_name(), track = %track.name, "fetching recommendations");

        self.selected = Some(track);
        self.recommendations.clear();
        self.phase = Phase::RecommendLoading;

        Some(request)
    }

    /// Applies a completed search. Returns `false` if it was stale and
    /// discarded.
    pub(crate) fn apply_search(&mut self, generation: Generation, outcome: LookupOutcome) -> bool {
        if !self.is_current(generation, Phase::Searching) {
            debug!(%generation, current = %self.generation, "discarding stale search response");
            return false;
        }

        let tracks = outcome.unwrap_or_else(|e| {
            warn!(%generation, error = %e, "search failed");
            vec![]
        });

        self.phase = if tracks.is_empty() {
            Phase::Idle
        } else {
            Phase::Disambiguation
        };
        self.search_results = tracks;

        true
    }

    /// Applies a completed recommendation lookup. A failure is shown as an
    /// empty recommendation set. Returns `false` if it was stale and discarded.
    pub(crate) fn apply_recommendations(
        &mut self,
        generation: Generation,
        outcome: LookupOutcome,
    ) -> bool {
        if !self.is_current(generation, Phase::RecommendLoading) {
            debug!(%generation, current = %self.generation, "discarding stale recommendations");
            return false;
        }

        self.recommendations = outcome.unwrap_or_else(|e| {
            warn!(%generation, error = %e, "recommendation lookup failed");
            vec![]
        });
        self.phase = Phase::Recommended;

        true
    }

    /// Forgets the query, results and selection and returns to the landing
    /// view.
    ///
    /// The generation is left alone; a lookup still in flight is discarded on
    /// arrival because the state machine is no longer waiting for it.
    pub(crate) fn clear(&mut self) {
        self.query = None;
        self.search_results.clear();
        self.selected = None;
        self.recommendations.clear();
        self.phase = Phase::Idle;
    }

    pub(crate) fn view(&self) -> View<'_> {
        match (self.phase, &self.selected) {
            (Phase::Searching | Phase::RecommendLoading, _) => View::Loading,
            (Phase::Disambiguation, _) => View::Candidates(&self.search_results),
            (Phase::Recommended, Some(selected)) if self.recommendations.is_empty() => {
                View::NoRecommendations { selected }
            }
            (Phase::Recommended, Some(selected)) => View::Recommendations {
                selected,
                tracks: &self.recommendations,
            },
            (Phase::Idle, _) | (Phase::Recommended, None) => View::Landing,
        }
    }

    fn issue(&mut self) -> Generation {
        self.generation = self.generation.next();
        self.generation
    }

    fn is_current(&self, generation: Generation, awaiting: Phase) -> bool {
        generation == self.generation && self.phase == awaiting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thriller() -> Track {
        Track::new("Thriller", "Michael Jackson")
    }

    fn billie_jean() -> Track {
        Track::with_artist_ref("Billie Jean", Some("Michael Jackson"))
    }

    fn search_generation(request: Option<LookupRequest>) -> Generation {
        match request {
            Some(LookupRequest::Search { generation, .. }) => generation,
            other => panic!("expected a search request, got {other:?}"),
        }
    }

    fn recommend_generation(request: Option<LookupRequest>) -> Generation {
        match request {
            Some(LookupRequest::Recommend { generation, .. }) => generation,
            other => panic!("expected a recommend request, got {other:?}"),
        }
    }

    /// Drives a fresh state machine to the disambiguation step.
    fn disambiguating(results: Vec<Track>) -> Discovery {
        let mut discovery = Discovery::new();
        let generation = search_generation(discovery.submit_query("thriller"));
        assert!(discovery.apply_search(generation, Ok(results)));
        discovery
    }

    #[test]
    fn starts_idle_on_the_landing_view() {
        let discovery = Discovery::new();

        assert_eq!(discovery.phase(), Phase::Idle);
        assert!(!discovery.is_loading());
        assert_eq!(discovery.view(), View::Landing);
    }

    #[test]
    fn submitting_a_query_issues_one_trimmed_search() {
        let mut discovery = Discovery::new();

        let request = discovery.submit_query("  thriller \n");

        assert_eq!(
            request,
            Some(LookupRequest::Search {
                generation: discovery.generation(),
                query: "thriller".to_string(),
            })
        );
        assert_eq!(discovery.phase(), Phase::Searching);
        assert!(discovery.is_loading());
        assert_eq!(discovery.view(), View::Loading);
        assert_eq!(discovery.query(), Some("thriller"));
    }

    #[test]
    fn blank_queries_are_ignored() {
        let mut discovery = disambiguating(vec![thriller()]);
        let generation = discovery.generation();

        for blank in ["", "   ", "\t\n"] {
            assert_eq!(discovery.submit_query(blank), None);
        }

        assert_eq!(discovery.phase(), Phase::Disambiguation);
        assert_eq!(discovery.generation(), generation);
        assert_eq!(discovery.search_results(), &[thriller()]);
    }

    #[test]
    fn search_results_show_candidates() {
        let discovery = disambiguating(vec![thriller()]);

        assert_eq!(discovery.phase(), Phase::Disambiguation);
        assert_eq!(discovery.view(), View::Candidates(&[thriller()]));
    }

    #[test]
    fn empty_search_returns_to_landing() {
        let discovery = disambiguating(vec![]);

        assert_eq!(discovery.phase(), Phase::Idle);
        assert_eq!(discovery.view(), View::Landing);
    }

    #[test]
    fn failed_search_returns_to_landing() {
        let mut discovery = Discovery::new();
        let generation = search_generation(discovery.submit_query("thriller"));

        assert!(discovery.apply_search(generation, Err(LookupError::Status(500))));

        assert_eq!(discovery.phase(), Phase::Idle);
        assert!(discovery.search_results().is_empty());
        assert_eq!(discovery.view(), View::Landing);
    }

    #[test]
    fn slower_earlier_search_never_overwrites_newer_one() {
        let mut discovery = Discovery::new();
        let first = search_generation(discovery.submit_query("thriller"));
        let second = search_generation(discovery.submit_query("billie jean"));

        assert!(discovery.apply_search(second, Ok(vec![billie_jean()])));
        assert!(!discovery.apply_search(first, Ok(vec![thriller()])));

        assert_eq!(discovery.search_results(), &[billie_jean()]);
        assert_eq!(discovery.query(), Some("billie jean"));
    }

    #[test]
    fn superseded_search_is_discarded_while_newer_one_is_in_flight() {
        let mut discovery = Discovery::new();
        let first = search_generation(discovery.submit_query("thriller"));
        let _second = search_generation(discovery.submit_query("billie jean"));

        assert!(!discovery.apply_search(first, Ok(vec![thriller()])));

        assert_eq!(discovery.phase(), Phase::Searching);
        assert_eq!(discovery.view(), View::Loading);
    }

    #[test]
    fn newer_search_failure_still_wins_over_older_success() {
        let mut discovery = Discovery::new();
        let first = search_generation(discovery.submit_query("thriller"));
        let second = search_generation(discovery.submit_query("billie jean"));

        assert!(discovery.apply_search(second, Err(LookupError::Transport("reset".into()))));
        assert!(!discovery.apply_search(first, Ok(vec![thriller()])));

        assert_eq!(discovery.view(), View::Landing);
    }

    #[test]
    fn selecting_a_candidate_requests_recommendations() {
        let mut discovery = disambiguating(vec![Track::new("Thriller", "Fall Out Boy"), thriller()]);

        let request = discovery.select_candidate(1);

        assert_eq!(
            request,
            Some(LookupRequest::Recommend {
                generation: discovery.generation(),
                artist: "Michael Jackson".to_string(),
                track: "Thriller".to_string(),
            })
        );
        assert_eq!(discovery.phase(), Phase::RecommendLoading);
        assert!(discovery.search_results().is_empty());
        assert_eq!(discovery.selected(), Some(&thriller()));
        assert_eq!(discovery.view(), View::Loading);
    }

    #[test]
    fn selection_outside_disambiguation_is_ignored() {
        let mut discovery = Discovery::new();
        assert_eq!(discovery.select_candidate(0), None);

        let mut discovery = disambiguating(vec![thriller()]);
        assert_eq!(discovery.select_candidate(3), None);
        assert_eq!(discovery.phase(), Phase::Disambiguation);
    }

    #[test]
    fn recommendations_are_shown_for_the_selected_track() {
        let mut discovery = disambiguating(vec![thriller()]);
        let generation = recommend_generation(discovery.select_candidate(0));

        assert!(discovery.apply_recommendations(generation, Ok(vec![billie_jean()])));

        assert_eq!(discovery.phase(), Phase::Recommended);
        assert_eq!(
            discovery.view(),
            View::Recommendations {
                selected: &thriller(),
                tracks: &[billie_jean()],
            }
        );
    }

    #[test]
    fn empty_recommendations_show_notice() {
        let mut discovery = disambiguating(vec![thriller()]);
        let generation = recommend_generation(discovery.select_candidate(0));

        assert!(discovery.apply_recommendations(generation, Ok(vec![])));

        assert_eq!(
            discovery.view(),
            View::NoRecommendations {
                selected: &thriller()
            }
        );
    }

    #[test]
    fn failed_recommendations_show_notice() {
        let mut discovery = disambiguating(vec![thriller()]);
        let generation = recommend_generation(discovery.select_candidate(0));

        assert!(discovery.apply_recommendations(generation, Err(LookupError::Decode("eof".into()))));

        assert_eq!(discovery.phase(), Phase::Recommended);
        assert!(discovery.recommendations().is_empty());
        assert_eq!(
            discovery.view(),
            View::NoRecommendations {
                selected: &thriller()
            }
        );
    }

    #[test]
    fn recommendations_arriving_after_a_new_search_are_discarded() {
        let mut discovery = disambiguating(vec![thriller()]);
        let recommend = recommend_generation(discovery.select_candidate(0));
        let search = search_generation(discovery.submit_query("beat it"));

        assert!(!discovery.apply_recommendations(recommend, Ok(vec![billie_jean()])));
        assert_eq!(discovery.phase(), Phase::Searching);
        assert_eq!(discovery.selected(), None);

        assert!(discovery.apply_search(search, Ok(vec![Track::new("Beat It", "Michael Jackson")])));
        assert!(discovery.recommendations().is_empty());
    }

    #[test]
    fn search_response_cannot_land_as_recommendations() {
        let mut discovery = disambiguating(vec![thriller()]);
        let search = discovery.generation();
        let _recommend = recommend_generation(discovery.select_candidate(0));

        assert!(!discovery.apply_search(search, Ok(vec![thriller()])));
        assert_eq!(discovery.phase(), Phase::RecommendLoading);
    }

    #[test]
    fn new_search_clears_selection_and_recommendations() {
        let mut discovery = disambiguating(vec![thriller()]);
        let generation = recommend_generation(discovery.select_candidate(0));
        discovery.apply_recommendations(generation, Ok(vec![billie_jean()]));

        discovery.submit_query("beat it");

        assert_eq!(discovery.selected(), None);
        assert!(discovery.recommendations().is_empty());
        assert_eq!(discovery.phase(), Phase::Searching);
    }

    #[test]
    fn clearing_resets_everything_to_landing() {
        let mut discovery = disambiguating(vec![thriller()]);
        let generation = recommend_generation(discovery.select_candidate(0));
        discovery.apply_recommendations(generation, Ok(vec![billie_jean()]));

        discovery.clear();

        assert_eq!(discovery.query(), None);
        assert!(discovery.search_results().is_empty());
        assert_eq!(discovery.selected(), None);
        assert!(discovery.recommendations().is_empty());
        assert_eq!(discovery.view(), View::Landing);
        assert_eq!(discovery.generation(), generation);
    }

    #[test]
    fn lookup_in_flight_when_cleared_is_discarded() {
        let mut discovery = Discovery::new();
        let generation = search_generation(discovery.submit_query("thriller"));

        discovery.clear();

        assert!(!discovery.apply_search(generation, Ok(vec![thriller()])));
        assert_eq!(discovery.view(), View::Landing);
    }

    #[test]
    fn generations_increase_monotonically() {
        let mut discovery = disambiguating(vec![thriller()]);
        let search = discovery.generation();
        let recommend = recommend_generation(discovery.select_candidate(0));
        let next_search = search_generation(discovery.submit_query("again"));

        assert!(search < recommend);
        assert!(recommend < next_search);
    }
}

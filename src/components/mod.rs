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

//! Reusable interactive widgets.
//!
//! Each component owns its own view state and maps raw terminal events to a
//! small set of actions, leaving the application to decide what those actions
//! mean.

mod help;
mod query_bar;
mod track_list;

pub(crate) use help::HelpPopover;
pub(crate) use query_bar::{QueryBar, QueryBarAction};
pub(crate) use track_list::{TrackList, TrackListAction, TrackListStyle};

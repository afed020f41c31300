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

//! Application configuration.
//!
//! This module manages the application configuration file.

use std::{env, path::PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub(crate) const CONFIG_NAME: &str = "escuta";

const LOG_FILE_NAME: &str = "escuta.log";

const LASTFM_API_KEY_ENV: &str = "LASTFM_API_KEY";

/// Which service answers search and recommendation lookups.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Backend {
    /// The discovery server's `/api/search` and `/api/recommend` endpoints.
    #[default]
    Proxy,
    /// The Last.fm web service, queried directly.
    LastFm,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) version: u32,
    pub(crate) backend: Backend,
    pub(crate) api_base_url: String,
    pub(crate) lastfm_api_key: Option<String>,
    pub(crate) log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            backend: Backend::Proxy,
            api_base_url: "http://localhost:8080".to_string(),
            lastfm_api_key: None,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// The configured Last.fm API key, falling back to the `LASTFM_API_KEY`
    /// environment variable.
    pub(crate) fn lastfm_api_key(&self) -> Option<String> {
        let non_blank = |key: &String| !key.trim().is_empty();

        self.lastfm_api_key
            .clone()
            .filter(non_blank)
            .or_else(|| env::var(LASTFM_API_KEY_ENV).ok().filter(non_blank))
    }
}

pub(crate) fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

/// Location of the log file, alongside the configuration file.
pub(crate) fn log_file_path() -> Result<PathBuf> {
    let config_file = confy::get_configuration_file_path(CONFIG_NAME, None)
        .context("Failed to resolve configuration directory")?;

    let dir = config_file
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(dir.join(LOG_FILE_NAME))
}

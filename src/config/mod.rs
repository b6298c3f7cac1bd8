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
//! This module manages the application configuration file and the logger
//! setup.

use std::{
    env,
    path::{Path, PathBuf},
    time::Duration,
};

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use simple_logger::SimpleLogger;

use crate::{
    model::view::{FilterState, SortCriterion},
    transition::DEFAULT_TRANSITION,
};

const CONFIG_NAME: &str = "songshelf";

/// Environment variable selecting the log level.
pub(crate) const LOG_LEVEL_ENV_VAR: &str = "SONGSHELF_LOG";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub catalog_file: String,
    pub covers_dir: Option<String>,
    pub default_types: Vec<String>,
    pub default_sort: String,
    pub transition_ms: u64,
    pub frame_interval_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            catalog_file: "data/songs.json".to_string(),
            covers_dir: None,
            default_types: vec!["standalone".to_string(), "collab".to_string()],
            default_sort: "date".to_string(),
            transition_ms: DEFAULT_TRANSITION.as_millis() as u64,
            frame_interval_ms: 33,
        }
    }
}

impl AppConfig {
    pub fn catalog_path(&self) -> PathBuf {
        PathBuf::from(&self.catalog_file)
    }

    /// Directory cover references resolve against, `covers` beside the
    /// catalog file unless configured.
    pub fn covers_path(&self) -> PathBuf {
        match &self.covers_dir {
            Some(dir) => PathBuf::from(dir),
            None => self
                .catalog_path()
                .parent()
                .unwrap_or(Path::new(""))
                .join("covers"),
        }
    }

    pub(crate) fn default_filter(&self) -> FilterState {
        FilterState::from_labels(&self.default_types)
    }

    /// The configured sort criterion, `None` when unrecognized.
    pub(crate) fn default_criterion(&self) -> Option<SortCriterion> {
        match self.default_sort.parse() {
            Ok(criterion) => Some(criterion),
            Err(e) => {
                log::warn!("{}, catalog order is kept", e);
                None
            }
        }
    }

    /// Fade length, never shorter than a millisecond so entries always
    /// animate in and out.
    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_ms.max(1))
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms.max(1))
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

/// Initialises the logger from [`LOG_LEVEL_ENV_VAR`].
///
/// Logging is off unless the variable is set, since log lines on stderr would
/// draw over the terminal UI. Redirect stderr to a file when enabling it.
pub(crate) fn setup_log() {
    let level = log_level(env::var(LOG_LEVEL_ENV_VAR).ok().as_deref());

    SimpleLogger::new()
        .with_level(level)
        .init()
        .unwrap_or_else(|_| eprintln!("Warning: Logger already initialized"));
}

fn log_level(value: Option<&str>) -> LevelFilter {
    match value {
        Some("trace") => LevelFilter::Trace,
        Some("debug") => LevelFilter::Debug,
        Some("info") => LevelFilter::Info,
        Some("warn") => LevelFilter::Warn,
        Some("error") => LevelFilter::Error,
        Some(_) => LevelFilter::Info,
        None => LevelFilter::Off,
    }
}

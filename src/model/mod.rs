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
//! This module defines the central entities of the application, the songs of
//! the catalog and the fixed set of categories they are filed under.

pub(crate) mod catalog;
pub(crate) mod view;

use chrono::{DateTime, Utc};

/// The fixed set of song categories the type filter can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum Category {
    Standalone,
    Collab,
    Short,
}

impl Category {
    pub(crate) const ALL: [Category; 3] = [Category::Standalone, Category::Collab, Category::Short];

    /// Lowercase key used in the catalog file and in configuration.
    pub(crate) fn key(&self) -> &'static str {
        match self {
            Category::Standalone => "standalone",
            Category::Collab => "collab",
            Category::Short => "short",
        }
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Category::Standalone => "Standalone",
            Category::Collab => "Collab",
            Category::Short => "Short",
        }
    }

    /// Folds a free-text label into a category, ignoring case. Surrounding
    /// whitespace is not stripped, so `" short "` is not a category.
    pub(crate) fn from_label(label: &str) -> Option<Self> {
        let folded = label.to_lowercase();
        Category::ALL.into_iter().find(|c| c.key() == folded)
    }
}

/// A single catalog entry. Songs are immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Song {
    pub(crate) hash: String,
    pub(crate) name: String,
    pub(crate) artist: String,
    pub(crate) singer: String,
    pub(crate) song_type: String,
    pub(crate) release_date: DateTime<Utc>,
    pub(crate) length: f64,
    pub(crate) cover: String,
}

impl Song {
    pub(crate) fn category(&self) -> Option<Category> {
        Category::from_label(&self.song_type)
    }

    pub(crate) fn artists(&self) -> String {
        join_names(&self.artist)
    }

    pub(crate) fn singers(&self) -> String {
        join_names(&self.singer)
    }
}

// Normalises a comma-separated name list to "a, b, c".
fn join_names(names: &str) -> String {
    names
        .split(',')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(", ")
}

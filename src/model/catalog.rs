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

//! Song catalog loading.
//!
//! The catalog is read once at startup from a JSON file and is read-only for
//! the rest of the session. Each record becomes an [`Arc<Song>`] so views can
//! share songs without copying them.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use thiserror::Error;
use xxhash_rust::xxh3::xxh3_64;

use crate::model::Song;

#[derive(Debug, Error)]
pub(crate) enum CatalogError {
    #[error("failed to read catalog file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("song {name:?} has an invalid release date {value:?}")]
    InvalidDate { name: String, value: String },

    #[error("duplicate song hash {0}")]
    DuplicateHash(String),
}

/// A catalog record as written in the file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SongRecord {
    hash: Option<String>,
    name: String,
    #[serde(default)]
    artist: String,
    #[serde(default)]
    singer: String,
    #[serde(rename = "type")]
    song_type: String,
    release_date: String,
    length: f64,
    #[serde(default)]
    cover: String,
}

/// The ordered, read-only collection of songs.
#[derive(Debug, Clone, Default)]
pub(crate) struct Catalog {
    songs: Vec<Arc<Song>>,
}

impl Catalog {
    /// Loads the catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the file cannot be read or parsed, if a
    /// release date is not a valid date, or if two songs share a hash.
    pub(crate) fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let records: Vec<SongRecord> =
            serde_json::from_str(&json).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let catalog = Self::from_records(records)?;
        log::info!("Loaded {} songs from {}", catalog.len(), path.display());

        Ok(catalog)
    }

    /// Builds a catalog from already constructed songs, checking hash
    /// uniqueness.
    pub(crate) fn from_songs(songs: Vec<Song>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for song in &songs {
            if !seen.insert(song.hash.as_str()) {
                return Err(CatalogError::DuplicateHash(song.hash.clone()));
            }
        }

        Ok(Self {
            songs: songs.into_iter().map(Arc::new).collect(),
        })
    }

    fn from_records(records: Vec<SongRecord>) -> Result<Self, CatalogError> {
        let songs = records
            .into_iter()
            .map(SongRecord::into_song)
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_songs(songs)
    }

    pub(crate) fn songs(&self) -> &[Arc<Song>] {
        &self.songs
    }

    pub(crate) fn len(&self) -> usize {
        self.songs.len()
    }
}

impl SongRecord {
    fn into_song(self) -> Result<Song, CatalogError> {
        let release_date = parse_release_date(&self.release_date).ok_or_else(|| {
            CatalogError::InvalidDate {
                name: self.name.clone(),
                value: self.release_date.clone(),
            }
        })?;

        let hash = match self.hash {
            Some(hash) if !hash.trim().is_empty() => hash,
            _ => derive_hash(&self.name, &self.release_date),
        };

        Ok(Song {
            hash,
            name: self.name,
            artist: self.artist,
            singer: self.singer,
            song_type: self.song_type,
            release_date,
            length: self.length,
            cover: self.cover,
        })
    }
}

/// Accepts RFC 3339 timestamps or plain `YYYY-MM-DD` dates, the latter taken
/// as midnight UTC.
fn parse_release_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

fn derive_hash(name: &str, release_date: &str) -> String {
    let key = format!("{}\u{0}{}", name, release_date);
    format!("{:016x}", xxh3_64(key.as_bytes()))
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;
    use crate::model::tests::song;

    fn parse(json: &str) -> Result<Catalog, CatalogError> {
        let records: Vec<SongRecord> = serde_json::from_str(json).unwrap();
        Catalog::from_records(records)
    }

    #[test]
    fn test_parse_records_in_file_order() {
        let catalog = parse(
            r#"[
                {"hash": "b", "name": "B", "artist": "X", "singer": "Y", "type": "Short",
                 "releaseDate": "2021-01-01", "length": 90, "cover": "b.png"},
                {"hash": "a", "name": "A", "artist": "X", "singer": "Y", "type": "Standalone",
                 "releaseDate": "2020-01-01T12:30:00+02:00", "length": 120.5, "cover": "a.png"}
            ]"#,
        )
        .unwrap();

        let names: Vec<&str> = catalog.songs().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);

        let a = &catalog.songs()[1];
        assert_eq!(a.release_date.hour(), 10);
        assert_eq!(a.length, 120.5);

        let b = &catalog.songs()[0];
        assert_eq!(b.release_date.year(), 2021);
        assert_eq!(b.release_date.hour(), 0);
    }

    #[test]
    fn test_missing_hash_is_derived_and_stable() {
        let json = r#"[{"name": "A", "type": "collab", "releaseDate": "2020-01-01", "length": 1}]"#;
        let first = parse(json).unwrap();
        let second = parse(json).unwrap();

        let hash = &first.songs()[0].hash;
        assert_eq!(hash.len(), 16);
        assert_eq!(hash, &second.songs()[0].hash);
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let err = parse(r#"[{"name": "A", "type": "collab", "releaseDate": "yesterday", "length": 1}]"#)
            .unwrap_err();

        assert!(matches!(err, CatalogError::InvalidDate { ref value, .. } if value == "yesterday"));
    }

    #[test]
    fn test_duplicate_hash_is_rejected() {
        let mut a = song("A", (2020, 1, 1), 1.0, "collab");
        let mut b = song("B", (2020, 1, 1), 1.0, "collab");
        a.hash = "same".to_string();
        b.hash = "same".to_string();

        let err = Catalog::from_songs(vec![a, b]).unwrap_err();
        assert_eq!(err.to_string(), "duplicate song hash same");
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = Catalog::load(Path::new("does/not/exist.json")).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.json"));
    }
}

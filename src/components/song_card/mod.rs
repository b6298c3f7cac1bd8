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

//! Song card renderer.
//!
//! Maps one song to a multi-line card: title, artists, singers, a meta line
//! with the category tag, release date, length and play hint, and the
//! resolved cover URL. Cards are drawn at an opacity so the list can fade
//! them in and out.

mod render;

use std::path::Path;

use crate::model::Song;

pub(crate) struct SongCard<'a> {
    song: &'a Song,
    covers_dir: &'a Path,
    opacity: f32,
    selected: bool,
}

impl<'a> SongCard<'a> {
    pub(crate) fn new(song: &'a Song, covers_dir: &'a Path) -> Self {
        Self {
            song,
            covers_dir,
            opacity: 1.0,
            selected: false,
        }
    }

    pub(crate) fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub(crate) fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

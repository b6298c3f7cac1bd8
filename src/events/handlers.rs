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

use std::{sync::Arc, time::Instant};

use crate::{
    App,
    model::{
        Song,
        view::{FilterState, SortCriterion, SortDirection},
    },
};

pub(super) fn handle_type_filter_changed(app: &mut App, filter: FilterState, now: Instant) -> bool {
    app.song_list.set_filter(filter, now);
    true
}

pub(super) fn handle_sort_criterion_changed(
    app: &mut App,
    criterion: Option<SortCriterion>,
    now: Instant,
) -> bool {
    app.song_list.set_sort_criterion(criterion, now);
    true
}

pub(super) fn handle_sort_direction_changed(app: &mut App, direction: SortDirection, now: Instant) -> bool {
    app.song_list.set_sort_direction(direction, now);
    true
}

// Playback is not implemented, the request is only recorded.
pub(super) fn handle_play_song(app: &mut App, song: Arc<Song>) -> bool {
    log::info!("play {:?}", song);
    app.status = Some(format!("Play: {}", song.name));
    true
}

pub(super) fn handle_tick(app: &mut App, now: Instant) -> bool {
    let animating = app.song_list.is_animating();
    let changed = app.song_list.tick(now);
    animating || changed
}

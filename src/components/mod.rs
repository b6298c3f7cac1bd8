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

//! Interactive UI components.
//!
//! Each component keeps its own state, maps key events in `event.rs` and
//! draws itself in `render.rs`. Components report state changes upward by
//! sending [`AppEvent`](crate::events::AppEvent)s rather than mutating their
//! parent.

mod song_card;
mod song_list;
mod sort_menu;
mod type_filter;

pub(crate) use song_card::SongCard;
pub(crate) use song_list::SongListSection;
pub(crate) use sort_menu::SortMenu;
pub(crate) use type_filter::TypeFilter;

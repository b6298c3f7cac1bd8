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

//! Unicode symbols for the TUI.
//!
//! These are selected for compatibility with most modern terminal emulators
//! and fonts, and are all a single cell wide.

pub(crate) const ICON_PLAY: &str = "\u{25B6}";
pub(crate) const ICON_ARTIST: &str = "\u{270E}";
pub(crate) const ICON_SINGER: &str = "\u{266A}";
pub(crate) const ICON_COVER: &str = "\u{25A3}";

// Sort menu
pub(crate) const ICON_SORT: &str = "\u{21C5}";
pub(crate) const ICON_CALENDAR: &str = "\u{25A6}";
pub(crate) const ICON_SCHEDULE: &str = "\u{25F7}";
pub(crate) const ICON_SORT_ALPHA: &str = "\u{24B6}";
pub(crate) const ICON_SWAP_VERT: &str = "\u{21F5}";

// Checkable items
pub(crate) const ICON_CHECK: &str = "\u{2713}";
pub(crate) const ICON_CHECKED: &str = "[x]";
pub(crate) const ICON_UNCHECKED: &str = "[ ]";

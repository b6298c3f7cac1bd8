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

//! Segmented category filter.
//!
//! A row of toggle buttons, one per [`Category`], any number of which may be
//! selected at once. Every toggle notifies the parent with the complete new
//! selection.

mod event;
mod render;

use crate::model::{Category, view::FilterState};

pub(crate) struct TypeFilter {
    selected: FilterState,
}

impl TypeFilter {
    pub(crate) fn new(selected: FilterState) -> Self {
        Self { selected }
    }

    pub(crate) fn selected(&self) -> &FilterState {
        &self.selected
    }

    fn toggle(&mut self, category: Category) -> FilterState {
        self.selected.toggle(category);
        self.selected.clone()
    }
}

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

//! Sort criterion and direction menu.
//!
//! A toggle button opens a popup menu anchored to it. The menu lists the sort
//! criteria as checkable items, exactly one of which is checked, followed by
//! an independent "Descending" toggle.
//!
//! The menu's own state is the source of truth. The parent is told about
//! every change, including the initial values when the menu is mounted, so
//! both start in agreement before any key is pressed.

mod event;
mod render;

use std::sync::mpsc::Sender;

use anyhow::Result;

use crate::{
    events::AppEvent,
    model::view::{SortCriterion, SortDirection},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Criterion(SortCriterion),
    Descending,
}

const MENU_ITEMS: [MenuItem; 4] = [
    MenuItem::Criterion(SortCriterion::Date),
    MenuItem::Criterion(SortCriterion::Length),
    MenuItem::Criterion(SortCriterion::Name),
    MenuItem::Descending,
];

/// Width of the toggle button in cells.
pub(crate) const BUTTON_WIDTH: u16 = 8;

pub(crate) struct SortMenu {
    open: bool,
    cursor: usize,
    criterion: Option<SortCriterion>,
    direction: SortDirection,
}

impl SortMenu {
    pub(crate) fn new(criterion: Option<SortCriterion>, direction: SortDirection) -> Self {
        Self {
            open: false,
            cursor: 0,
            criterion,
            direction,
        }
    }

    /// Sends the initial criterion and direction to the parent.
    pub(crate) fn mount(&self, event_tx: &Sender<AppEvent>) -> Result<()> {
        event_tx.send(AppEvent::SortCriterionChanged(self.criterion))?;
        event_tx.send(AppEvent::SortDirectionChanged(self.direction))?;
        Ok(())
    }

    pub(crate) fn is_open(&self) -> bool {
        self.open
    }

    pub(crate) fn criterion(&self) -> Option<SortCriterion> {
        self.criterion
    }

    pub(crate) fn direction(&self) -> SortDirection {
        self.direction
    }

    fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    fn cursor_next(&mut self) {
        self.cursor = (self.cursor + 1) % MENU_ITEMS.len();
    }

    fn cursor_previous(&mut self) {
        self.cursor = (self.cursor + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }

    fn is_checked(&self, item: MenuItem) -> bool {
        match item {
            MenuItem::Criterion(c) => self.criterion() == Some(c),
            MenuItem::Descending => self.direction() == SortDirection::Descending,
        }
    }

    /// Activates the item under the cursor, returning the notification for
    /// the parent if the state changed.
    fn activate(&mut self) -> Option<AppEvent> {
        match MENU_ITEMS[self.cursor] {
            MenuItem::Criterion(c) if self.criterion == Some(c) => None,
            MenuItem::Criterion(c) => {
                self.criterion = Some(c);
                Some(AppEvent::SortCriterionChanged(self.criterion))
            }
            MenuItem::Descending => {
                self.direction = self.direction.toggled();
                Some(AppEvent::SortDirectionChanged(self.direction))
            }
        }
    }
}

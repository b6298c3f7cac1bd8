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

//! Key handling for the category filter.
//!
//! The number keys toggle the buttons in display order.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};

use crate::{components::TypeFilter, events::AppEvent, model::Category};

impl TypeFilter {
    /// Returns `true` if the event toggled a button.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        let category = match key_event.code {
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                Category::ALL.get(index).copied()
            }
            _ => None,
        };

        match category {
            Some(category) => {
                let selected = self.toggle(category);
                event_tx.send(AppEvent::TypeFilterChanged(selected))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

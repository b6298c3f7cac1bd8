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

//! Key handling for the sort menu.
//!
//! `s` is the toggle button and the only way to open or close the menu.
//! While the menu is open it captures the navigation keys.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};

use crate::{components::SortMenu, events::AppEvent};

impl SortMenu {
    /// Returns `true` if the event was consumed by the menu.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if key_event.code == KeyCode::Char('s') {
            self.toggle_open();
            return Ok(true);
        }

        if !self.is_open() {
            return Ok(false);
        }

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => self.cursor_next(),
            KeyCode::Char('k') | KeyCode::Up => self.cursor_previous(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(notification) = self.activate() {
                    event_tx.send(notification)?;
                }
            }
            _ => return Ok(false),
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;
    use super::super::MenuItem;
    use crate::model::view::{SortCriterion, SortDirection};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn menu() -> SortMenu {
        SortMenu::new(Some(SortCriterion::Date), SortDirection::Ascending)
    }

    #[test]
    fn test_mount_notifies_initial_state() {
        let (tx, rx) = mpsc::channel();
        menu().mount(&tx).unwrap();

        let events: Vec<AppEvent> = rx.try_iter().collect();
        assert!(matches!(
            events.as_slice(),
            [
                AppEvent::SortCriterionChanged(Some(SortCriterion::Date)),
                AppEvent::SortDirectionChanged(SortDirection::Ascending),
            ]
        ));
    }

    #[test]
    fn test_toggle_button_opens_and_closes() {
        let (tx, _rx) = mpsc::channel();
        let mut menu = menu();

        assert!(menu.handle_event(&key(KeyCode::Char('s')), &tx).unwrap());
        assert!(menu.is_open());

        // Escape does not close the menu, only the toggle does
        assert!(!menu.handle_event(&key(KeyCode::Esc), &tx).unwrap());
        assert!(menu.is_open());

        menu.handle_event(&key(KeyCode::Char('s')), &tx).unwrap();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_closed_menu_ignores_navigation() {
        let (tx, rx) = mpsc::channel();
        let mut menu = menu();

        assert!(!menu.handle_event(&key(KeyCode::Char('j')), &tx).unwrap());
        assert!(!menu.handle_event(&key(KeyCode::Enter), &tx).unwrap());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_selecting_criterion_replaces_previous() {
        let (tx, rx) = mpsc::channel();
        let mut menu = menu();

        menu.handle_event(&key(KeyCode::Char('s')), &tx).unwrap();
        menu.handle_event(&key(KeyCode::Down), &tx).unwrap();
        menu.handle_event(&key(KeyCode::Enter), &tx).unwrap();

        assert_eq!(menu.criterion(), Some(SortCriterion::Length));
        assert!(menu.is_checked(MenuItem::Criterion(SortCriterion::Length)));
        assert!(!menu.is_checked(MenuItem::Criterion(SortCriterion::Date)));
        assert!(matches!(
            rx.try_recv().unwrap(),
            AppEvent::SortCriterionChanged(Some(SortCriterion::Length))
        ));
    }

    #[test]
    fn test_reselecting_current_criterion_is_silent() {
        let (tx, rx) = mpsc::channel();
        let mut menu = menu();

        menu.handle_event(&key(KeyCode::Char('s')), &tx).unwrap();
        menu.handle_event(&key(KeyCode::Enter), &tx).unwrap();

        assert_eq!(menu.criterion(), Some(SortCriterion::Date));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_descending_toggles_direction() {
        let (tx, rx) = mpsc::channel();
        let mut menu = menu();

        menu.handle_event(&key(KeyCode::Char('s')), &tx).unwrap();
        menu.handle_event(&key(KeyCode::Up), &tx).unwrap();
        menu.handle_event(&key(KeyCode::Char(' ')), &tx).unwrap();
        assert_eq!(menu.direction(), SortDirection::Descending);

        menu.handle_event(&key(KeyCode::Char(' ')), &tx).unwrap();
        assert_eq!(menu.direction(), SortDirection::Ascending);

        let events: Vec<AppEvent> = rx.try_iter().collect();
        assert!(matches!(
            events.as_slice(),
            [
                AppEvent::SortDirectionChanged(SortDirection::Descending),
                AppEvent::SortDirectionChanged(SortDirection::Ascending),
            ]
        ));
    }
}

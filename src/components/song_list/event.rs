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

//! Input handling for the song list section.
//!
//! Key events go to the sort menu first, since it captures navigation while
//! open, then to the category filter, and finally to the list itself.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};

use crate::{components::SongListSection, events::AppEvent};

impl SongListSection {
    /// Returns `true` if the event was consumed by the section.
    pub(crate) fn process_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        if self.sort_menu.handle_event(event, event_tx)? {
            return Ok(true);
        }

        if self.type_filter.handle_event(event, event_tx)? {
            return Ok(true);
        }

        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => self.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.select_previous(),
            KeyCode::Char('g') | KeyCode::Home => self.select_first(),
            KeyCode::Char('G') | KeyCode::End => self.select_last(),

            KeyCode::Enter => {
                if let Some(song) = self.selected_song() {
                    event_tx.send(AppEvent::PlaySong(song))?;
                }
            }

            _ => return Ok(false),
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::{path::PathBuf, sync::{Arc, mpsc}, time::Duration};

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;
    use crate::model::{
        catalog::Catalog,
        tests::song,
        view::{FilterState, SortState},
    };

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn section() -> SongListSection {
        let catalog = Catalog::from_songs(vec![
            song("A", (2020, 1, 1), 120.0, "standalone"),
            song("C", (2019, 1, 1), 200.0, "collab"),
        ])
        .unwrap();

        SongListSection::new(
            Arc::new(catalog),
            FilterState::default(),
            SortState::default(),
            PathBuf::from("/covers"),
            Duration::from_millis(150),
        )
    }

    #[test]
    fn test_enter_requests_playback_of_selected_song() {
        let (tx, rx) = mpsc::channel();
        let mut section = section();

        section.process_event(&key(KeyCode::Down), &tx).unwrap();
        section.process_event(&key(KeyCode::Enter), &tx).unwrap();

        match rx.try_recv().unwrap() {
            AppEvent::PlaySong(song) => assert_eq!(song.name, "C"),
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_open_menu_captures_navigation() {
        let (tx, rx) = mpsc::channel();
        let mut section = section();

        section.process_event(&key(KeyCode::Char('s')), &tx).unwrap();
        section.process_event(&key(KeyCode::Char('j')), &tx).unwrap();
        section.process_event(&key(KeyCode::Enter), &tx).unwrap();

        // The list selection did not move and the menu chose "Length"
        assert_eq!(section.selected_song().unwrap().name, "A");
        assert!(matches!(rx.try_recv().unwrap(), AppEvent::SortCriterionChanged(_)));
    }

    #[test]
    fn test_unhandled_keys_fall_through() {
        let (tx, _rx) = mpsc::channel();
        let mut section = section();

        assert!(!section.process_event(&key(KeyCode::Char('q')), &tx).unwrap());
    }
}

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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging user input, component notifications and periodic ticks with the
//! UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through a
//!    channel fed by the input and tick threads, and by components notifying
//!    their state changes.
//! 2. **Process**: The [`process_events`] function updates the [`App`] state.
//! 3. **Render**: The UI is re-drawn after every event that changed what is
//!    on screen.

mod handlers;
use handlers::*;

use std::{sync::Arc, time::Instant};

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

use crate::{
    App,
    model::{
        Song,
        view::{FilterState, SortCriterion, SortDirection},
    },
    render::draw,
    util::term::Tui,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    TypeFilterChanged(FilterState),
    SortCriterionChanged(Option<SortCriterion>),
    SortDirectionChanged(SortDirection),

    PlaySong(Arc<Song>),

    Tick,

    ExitApplication,
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed.
pub(crate) fn process_events(terminal: &mut Tui, app: &mut App) -> Result<()> {
    terminal.draw(|f| draw(f, app, Instant::now()))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        let now = Instant::now();

        let redraw = match event {
            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::TypeFilterChanged(filter) => handle_type_filter_changed(app, filter, now),
            AppEvent::SortCriterionChanged(criterion) => handle_sort_criterion_changed(app, criterion, now),
            AppEvent::SortDirectionChanged(direction) => handle_sort_direction_changed(app, direction, now),
            AppEvent::PlaySong(song) => handle_play_song(app, song),
            AppEvent::Tick => handle_tick(app, now),
            AppEvent::ExitApplication => false,
        };

        if redraw {
            terminal.draw(|f| draw(f, app, now))?;
        }
    }

    Ok(())
}

/// Routes a key press to the song list section first, then to the global
/// bindings.
///
/// # Errors
///
/// Returns an error if a notification cannot be sent on the event channel.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<bool> {
    if key.kind != KeyEventKind::Press {
        return Ok(false);
    }

    if app.song_list.process_event(&Event::Key(key), &app.event_tx)? {
        return Ok(true);
    }

    process_global_key_event(app, key)?;
    Ok(true)
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,
        KeyCode::Esc => app.status = None,
        _ => {}
    }

    Ok(())
}

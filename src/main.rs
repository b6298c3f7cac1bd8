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

//! # Song Catalog Browser.
//!
//! A terminal-based browser for a catalog of songs.
//!
//! The catalog is loaded once at startup and shown as a list of cards that
//! can be filtered by song type and sorted by release date, length or name.
//! Cards fade in and out as the filter changes.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** owns all state, manages the terminal lifecycle and
//!   renders the UI.
//! * An **Input Thread** forwards key events to the main thread.
//! * A **Tick Thread** sends periodic ticks that advance running transitions.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is restored even when the event loop fails. Communication
//! between the threads and the components is handled via `std::sync::mpsc`
//! channels.

mod components;
mod config;
mod events;
mod model;
mod render;
mod theme;
mod transition;
mod util;

use anyhow::{Context, Result};
use crossterm::event;
use std::{
    sync::{
        Arc,
        mpsc::{self, Receiver, Sender},
    },
    thread,
    time::Duration,
};

use crate::{
    components::SongListSection,
    config::AppConfig,
    events::{AppEvent, process_events},
    model::{
        catalog::Catalog,
        view::{SortDirection, SortState},
    },
    theme::Theme,
    util::term::{Tui, restore_terminal, setup_terminal},
};

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub song_list: SongListSection,

    pub status: Option<String>,
}

impl App {
    /// Create a new instance of application state around a loaded catalog.
    pub fn new(config: AppConfig, catalog: Arc<Catalog>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let sort = SortState {
            criterion: config.default_criterion(),
            direction: SortDirection::Ascending,
        };

        let song_list = SongListSection::new(
            catalog,
            config.default_filter(),
            sort,
            config.covers_path(),
            config.transition_duration(),
        );

        Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            song_list,
            status: None,
        }
    }
}

/// The entry point of the application.
///
/// Loads the configuration and the catalog, manages the terminal lifecycle,
/// and returns an error if any part of the execution fails.
fn main() -> Result<()> {
    config::setup_log();

    let config = config::load_config();

    let catalog_path = config.catalog_path();
    let catalog = Catalog::load(&catalog_path)
        .with_context(|| format!("Failed to load catalog {}", catalog_path.display()))?;

    let mut app = App::new(config, Arc::new(catalog));

    let mut terminal = setup_terminal(&app.theme)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Starts the input and tick threads and enters the main event loop.
///
/// The sort menu is mounted before any input is read, so its initial state
/// reaches the song list first.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Tui, app: &mut App) -> Result<()> {
    app.song_list.sort_menu.mount(&app.event_tx)?;

    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event::Event::Key(key)) => {
                    if tx_keys.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    log::error!("Failed to read terminal event: {}", e);
                    break;
                }
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is the
    // frame rate of running transitions.
    let tx_tick = app.event_tx.clone();
    let frame_interval: Duration = app.config.frame_interval();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(frame_interval);
        }
    });

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}

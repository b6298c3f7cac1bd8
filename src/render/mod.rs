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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every event that changed the screen and on every tick while a transition
//! is running.

pub(crate) mod icons;

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{App, theme::Theme};

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme, now: Instant);
}

/// Renders the user interface to the terminal frame.
///
/// The screen is split into a title bar, the song list section and a status
/// line.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing the UI
///   to update internal view state (like list scroll positions).
/// * `now` - The instant transitions are evaluated at.
pub(crate) fn draw(f: &mut Frame, app: &mut App, now: Instant) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_title(f, outer[0], app);
    app.song_list.draw(f, outer[1], &app.theme, now);
    draw_status(f, outer[2], app);
}

fn draw_title(f: &mut Frame, area: Rect, app: &App) {
    let shown = app.song_list.visible_songs().len();
    let total = app.song_list.catalog_len();

    let sort = app.song_list.sort();
    let order = match sort.criterion {
        Some(criterion) => format!("{} {:?}", criterion.label(), sort.direction),
        None => "Catalog order".to_string(),
    };

    let line = Line::from(vec![
        Span::styled(
            " Songs ",
            Style::default()
                .fg(app.theme.background_colour)
                .bg(app.theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} of {} | {}", shown, total, order),
            Style::default().fg(app.theme.card_meta_fg),
        ),
    ]);

    f.render_widget(Paragraph::new(line), area);
}

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let text = match &app.status {
        Some(status) => Span::styled(format!(" {}", status), Style::default().fg(app.theme.accent_colour)),
        None => Span::styled(
            " 1-3 types | s sort | j/k move | enter play | q quit",
            Style::default().fg(app.theme.muted_colour),
        ),
    };

    f.render_widget(Paragraph::new(Line::from(text)), area);
}

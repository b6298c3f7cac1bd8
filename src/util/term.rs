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

//! Terminal lifecycle and emulator styling.
//!
//! Entering the UI switches to raw mode and the alternate screen and paints
//! the emulator background with the theme colour using an OSC 11 escape
//! sequence. Leaving reverses each step. OSC support varies; most modern
//! terminals (XTerm, iTerm2, Alacritty, Kitty) honour it and the rest ignore
//! it.

use std::io::{self, Stdout, Write};

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::theme::Theme;

pub(crate) type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Prepares the terminal for the UI.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
pub(crate) fn setup_terminal(theme: &Theme) -> Result<Tui> {
    // Without this the emulator shows a thin outline in its own colour
    // around the rendered cells
    if let Some(hex) = theme.background_hex() {
        write_osc(&format!("\x1b]11;{}\x07", hex));
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

/// Restores the terminal to its original state.
///
/// Best-effort: every step is attempted and failures are ignored, since this
/// also runs on the error path.
pub(crate) fn restore_terminal(terminal: &mut Tui) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    write_osc("\x1b]111\x07");
    terminal.show_cursor().ok();
}

fn write_osc(sequence: &str) {
    let mut stdout = io::stdout();
    if stdout.write_all(sequence.as_bytes()).and_then(|_| stdout.flush()).is_err() {
        log::debug!("Terminal rejected OSC sequence");
    }
}

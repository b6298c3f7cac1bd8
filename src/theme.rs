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

//! Visual styling and colour configuration for the TUI.
//!
//! This module defines the application's colour palette and the colour
//! blending used to fade list entries in and out. Terminals have no opacity,
//! so a faded cell is drawn with its foreground mixed toward the background.

use ratatui::style::{Color, Modifier, Style};

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) muted_colour: Color,

    pub(crate) card_title_fg: Color,
    pub(crate) card_artist_fg: Color,
    pub(crate) card_singer_fg: Color,
    pub(crate) card_meta_fg: Color,
    pub(crate) card_cover_fg: Color,
    pub(crate) tag_fg: Color,
    pub(crate) tag_bg: Color,
    pub(crate) selection_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(40, 20, 50),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            muted_colour: Color::Rgb(110, 100, 120),

            card_title_fg: Color::Rgb(255, 255, 255),
            card_artist_fg: Color::Rgb(255, 215, 0),
            card_singer_fg: Color::Rgb(179, 157, 219),
            card_meta_fg: Color::Rgb(162, 161, 166),
            card_cover_fg: Color::Rgb(120, 118, 128),
            tag_fg: Color::Rgb(40, 20, 50),
            tag_bg: Color::Rgb(179, 157, 219),
            selection_bg: Color::Rgb(70, 45, 90),
        }
    }

    /// The background as a CSS-style hexadecimal string, used to paint the
    /// terminal emulator background. `None` for non-RGB colours.
    pub(crate) fn background_hex(&self) -> Option<String> {
        to_hex(self.background_colour)
    }

    /// Mixes `colour` toward the theme background.
    ///
    /// `opacity` 1.0 returns `colour` unchanged, 0.0 returns the background.
    /// Named colours cannot be mixed, so they fall back to the background
    /// below half opacity.
    pub(crate) fn fade(&self, colour: Color, opacity: f32) -> Color {
        let opacity = opacity.clamp(0.0, 1.0);
        if opacity >= 1.0 {
            return colour;
        }

        match (colour, self.background_colour) {
            (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => Color::Rgb(
                mix(br, r, opacity),
                mix(bg, g, opacity),
                mix(bb, b, opacity),
            ),
            _ if opacity < 0.5 => self.background_colour,
            _ => colour,
        }
    }

    /// Applies [`Theme::fade`] to both colours of a style. Faded text also
    /// loses bold so it does not flash at full weight.
    pub(crate) fn fade_style(&self, style: Style, opacity: f32) -> Style {
        if opacity >= 1.0 {
            return style;
        }

        let mut faded = style.remove_modifier(Modifier::BOLD);
        if let Some(fg) = style.fg {
            faded = faded.fg(self.fade(fg, opacity));
        }
        if let Some(bg) = style.bg {
            faded = faded.bg(self.fade(bg, opacity));
        }
        faded
    }
}

fn to_hex(colour: Color) -> Option<String> {
    match colour {
        Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
        _ => None,
    }
}

fn mix(from: u8, to: u8, t: f32) -> u8 {
    let v = from as f32 + (to as f32 - from as f32) * t;
    v.round().clamp(0.0, 255.0) as u8
}

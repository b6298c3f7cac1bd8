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

//! UI rendering logic for the category filter.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    components::TypeFilter,
    model::Category,
    render::{Render, icons::ICON_CHECK},
    theme::Theme,
};

impl Render for TypeFilter {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme, _now: Instant) {
        let mut spans = vec![];

        for (i, category) in Category::ALL.iter().enumerate() {
            let selected = self.selected().contains(*category);

            let (label, style) = if selected {
                (
                    format!(" {} {} ", ICON_CHECK, category.label()),
                    Style::default()
                        .fg(theme.background_colour)
                        .bg(theme.accent_colour)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (
                    format!("   {} ", category.label()),
                    Style::default().fg(theme.card_meta_fg),
                )
            };

            spans.push(Span::styled(format!("{}", i + 1), Style::default().fg(theme.muted_colour)));
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
        }

        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

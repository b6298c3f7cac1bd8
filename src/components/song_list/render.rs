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

//! UI rendering logic for the song list section.
//!
//! The header holds the category filter on the left and the sort button on
//! the right. Cards fill the rest of the area, and the sort popup is drawn
//! last so it covers them.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, Padding, Paragraph},
};

use crate::{
    components::{SongCard, SongListSection, sort_menu::BUTTON_WIDTH},
    render::Render,
    theme::Theme,
};

impl Render for SongListSection {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme, now: Instant) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));
        let header_area = header_block.inner(chunks[0]);
        f.render_widget(header_block, chunks[0]);

        let header = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(BUTTON_WIDTH)])
            .split(header_area);

        self.type_filter.draw(f, header[0], theme, now);
        self.sort_menu.draw(f, header[1], theme, now);

        self.draw_cards(f, chunks[1], theme, now);

        self.sort_menu.draw_popup(f, header[1], theme);
    }
}

impl SongListSection {
    fn draw_cards(&mut self, f: &mut Frame, area: Rect, theme: &Theme, now: Instant) {
        if self.list.is_empty() {
            let placeholder = Paragraph::new("No songs match the selected types")
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.muted_colour).add_modifier(Modifier::ITALIC))
                .block(Block::default().padding(Padding::top(1)));
            f.render_widget(placeholder, area);
            return;
        }

        let selected = self.selected.as_ref();
        let mut selected_index = None;

        let items: Vec<_> = self
            .list
            .entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let is_selected = Some(entry.key()) == selected;
                if is_selected {
                    selected_index = Some(i);
                }

                SongCard::new(entry.item(), &self.covers_dir)
                    .opacity(self.list.opacity(entry, now))
                    .selected(is_selected)
                    .to_list_item(theme)
            })
            .collect();

        self.list_state.select(selected_index);

        let list = List::new(items).block(Block::default().padding(Padding::horizontal(1)));
        f.render_stateful_widget(list, area, &mut self.list_state);
    }
}

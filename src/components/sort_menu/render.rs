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

//! UI rendering logic for the sort menu.
//!
//! The toggle button is drawn in the list header. The popup is drawn
//! separately, after the list, so it sits on top of the cards; its top right
//! corner is anchored below the button's right edge.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph},
};

use super::{MENU_ITEMS, MenuItem};
use crate::{
    components::SortMenu,
    model::view::SortCriterion,
    render::{
        Render,
        icons::{
            ICON_CALENDAR, ICON_CHECKED, ICON_SCHEDULE, ICON_SORT, ICON_SORT_ALPHA, ICON_SWAP_VERT,
            ICON_UNCHECKED,
        },
    },
    theme::Theme,
};

const POPUP_WIDTH: u16 = 26;

impl Render for SortMenu {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme, _now: Instant) {
        let style = if self.is_open() {
            Style::default()
                .fg(theme.background_colour)
                .bg(theme.accent_colour)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.accent_colour)
        };

        let button = Paragraph::new(Line::from(Span::styled(format!(" {} Sort ", ICON_SORT), style)))
            .alignment(Alignment::Right);
        f.render_widget(button, area);
    }
}

impl SortMenu {
    /// Draws the popup below `anchor` if the menu is open.
    pub(crate) fn draw_popup(&self, f: &mut Frame, anchor: Rect, theme: &Theme) {
        if !self.is_open() {
            return;
        }

        let bounds = f.area();
        let height = MENU_ITEMS.len() as u16 + 3;
        let width = POPUP_WIDTH.min(bounds.width);

        let right = (anchor.x + anchor.width).min(bounds.x + bounds.width);
        let x = right.saturating_sub(width).max(bounds.x);
        let y = (anchor.y + anchor.height).min(bounds.y + bounds.height.saturating_sub(height));
        let popup = Rect::new(x, y, width, height.min(bounds.height));

        let mut items = vec![];
        for (i, item) in MENU_ITEMS.iter().enumerate() {
            if *item == MenuItem::Descending && i > 0 {
                items.push(ListItem::new(Line::from("─".repeat(width.saturating_sub(4) as usize)))
                    .style(Style::default().fg(theme.border_colour)));
            }
            items.push(self.menu_item(*item, theme));
        }

        // The divider shifts every item after it down by one row
        let divider_offset = usize::from(MENU_ITEMS[self.cursor] == MenuItem::Descending);
        let mut state = ListState::default().with_selected(Some(self.cursor + divider_offset));

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.accent_colour))
                    .padding(Padding::horizontal(1)),
            )
            .style(Style::default().bg(theme.background_colour))
            .highlight_style(Style::default().bg(theme.selection_bg));

        f.render_widget(Clear, popup);
        f.render_stateful_widget(list, popup, &mut state);
    }

    fn menu_item(&self, item: MenuItem, theme: &Theme) -> ListItem<'static> {
        let (icon, label) = match item {
            MenuItem::Criterion(SortCriterion::Date) => (ICON_CALENDAR, SortCriterion::Date.label()),
            MenuItem::Criterion(SortCriterion::Length) => (ICON_SCHEDULE, SortCriterion::Length.label()),
            MenuItem::Criterion(SortCriterion::Name) => (ICON_SORT_ALPHA, SortCriterion::Name.label()),
            MenuItem::Descending => (ICON_SWAP_VERT, "Descending"),
        };

        let check = if self.is_checked(item) { ICON_CHECKED } else { ICON_UNCHECKED };

        ListItem::new(Line::from(vec![
            Span::styled(format!("{} ", icon), Style::default().fg(theme.card_meta_fg)),
            Span::styled(format!("{:<14}", label), Style::default().fg(theme.card_title_fg)),
            Span::styled(check, Style::default().fg(theme.accent_colour)),
        ]))
    }
}

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

//! UI rendering logic for song cards.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::ListItem,
};

use crate::{
    components::SongCard,
    render::icons::{ICON_ARTIST, ICON_COVER, ICON_PLAY, ICON_SINGER},
    theme::Theme,
    util::{
        asset::cover_url,
        format::{format_date, format_length},
    },
};

impl SongCard<'_> {
    pub(crate) fn to_list_item(&self, theme: &Theme) -> ListItem<'static> {
        ListItem::new(Text::from(self.lines(theme)))
    }

    fn lines(&self, theme: &Theme) -> Vec<Line<'static>> {
        let song = self.song;
        let fade = |style: Style| theme.fade_style(style, self.opacity);

        let marker = if self.selected { "\u{258C} " } else { "  " };

        let title = Line::from(vec![
            Span::styled(marker, fade(Style::default().fg(theme.accent_colour))),
            Span::styled(
                song.name.clone(),
                fade(Style::default().fg(theme.card_title_fg).add_modifier(Modifier::BOLD)),
            ),
        ]);

        let artist = Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{} ", ICON_ARTIST), fade(Style::default().fg(theme.card_meta_fg))),
            Span::styled(song.artists(), fade(Style::default().fg(theme.card_artist_fg))),
        ]);

        let singer = Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{} ", ICON_SINGER), fade(Style::default().fg(theme.card_meta_fg))),
            Span::styled(song.singers(), fade(Style::default().fg(theme.card_singer_fg))),
        ]);

        let meta_style = fade(Style::default().fg(theme.card_meta_fg));
        let meta = Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!(" {} ", song.song_type),
                fade(Style::default().fg(theme.tag_fg).bg(theme.tag_bg)),
            ),
            Span::styled(format!("  {}", format_date(&song.release_date)), meta_style),
            Span::styled(format!("  {}", format_length(song.length)), meta_style),
            Span::styled(
                format!("  {} Play", ICON_PLAY),
                fade(Style::default().fg(theme.accent_colour)),
            ),
        ]);

        let cover = Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("{} {}", ICON_COVER, cover_url(self.covers_dir, &song.cover)),
                fade(Style::default().fg(theme.card_cover_fg).add_modifier(Modifier::ITALIC)),
            ),
        ]);

        vec![title, artist, singer, meta, cover, Line::default()]
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use ratatui::style::Color;

    use super::*;
    use crate::model::tests::song;

    fn text(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_card_content() {
        let mut s = song("It's (Live)", (2020, 1, 1), 125.0, "Standalone");
        s.artist = "Alice,  Bob".to_string();
        s.singer = " Carol ,Dave".to_string();
        s.cover = "it's (live).png".to_string();

        let lines = SongCard::new(&s, Path::new("/covers")).lines(&Theme::default());
        assert_eq!(lines.len(), 6);

        let text = text(&lines);
        assert_eq!(text[0], "  It's (Live)");
        assert_eq!(text[1], format!("  {} Alice, Bob", ICON_ARTIST));
        assert_eq!(text[2], format!("  {} Carol, Dave", ICON_SINGER));
        assert_eq!(text[3], format!("   Standalone   2020/01/01  2:05  {} Play", ICON_PLAY));
        assert_eq!(text[4], format!("  {} file:///covers/it%27s%20%28live%29.png", ICON_COVER));
    }

    #[test]
    fn test_selected_card_is_marked() {
        let s = song("A", (2020, 1, 1), 1.0, "collab");
        let lines = SongCard::new(&s, Path::new("/c")).selected(true).lines(&Theme::default());
        assert!(text(&lines)[0].starts_with('\u{258C}'));
    }

    #[test]
    fn test_transparent_card_blends_into_background() {
        let theme = Theme::default();
        let s = song("A", (2020, 1, 1), 1.0, "collab");
        let lines = SongCard::new(&s, Path::new("/c")).opacity(0.0).lines(&theme);

        let title = &lines[0].spans[1];
        assert_eq!(title.style.fg, Some(theme.background_colour));
        assert!(!title.style.add_modifier.contains(Modifier::BOLD));

        let opaque = SongCard::new(&s, Path::new("/c")).lines(&theme);
        assert_eq!(opaque[0].spans[1].style.fg, Some(theme.card_title_fg));
        assert_ne!(theme.card_title_fg, Color::Reset);
    }
}

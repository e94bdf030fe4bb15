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

//! UI rendering logic for the playlist pane.
//!
//! This module draws the playlist entries with a header block, followed by the
//! inert playback controls.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
};

use crate::{
    components::PlaylistView,
    events::Focus,
    render::{
        Render, RenderContext,
        icons::{ICON_NEXT, ICON_PLAY},
    },
};

impl Render for PlaylistView {
    fn draw(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let playlist = ctx.songs.playlist();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        let border_colour = if ctx.focus == Focus::Playlist {
            theme.focus_border_colour
        } else {
            theme.border_colour
        };

        let items: Vec<ListItem> = playlist
            .iter()
            .map(|song| ListItem::new(song.to_string()))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(format!(" Playlist ({}) ", playlist.len()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_colour))
                    .padding(Padding::horizontal(1)),
            )
            .highlight_style(Style::default().bg(theme.highlight_bg).fg(theme.highlight_fg));

        f.render_stateful_widget(list, chunks[0], &mut self.list_state);

        // Playback is not supported, the controls are only shown
        let disabled = Style::default().fg(theme.disabled_colour);
        let controls = Line::from(vec![
            Span::styled(format!(" {ICON_PLAY} Play "), disabled),
            Span::raw(" "),
            Span::styled(format!(" {ICON_NEXT} Next "), disabled),
        ]);
        f.render_widget(Paragraph::new(controls), chunks[1]);
    }
}

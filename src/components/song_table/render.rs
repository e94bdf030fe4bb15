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

//! UI rendering logic for the catalog table.
//!
//! This module handles the visual representation of the catalog, including
//! column layout, selection highlighting, and theme application using the
//! Ratatui widget system.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Cell, Padding, Row, Table},
};

use crate::{
    components::SongTableView,
    events::Focus,
    render::{Render, RenderContext},
};

impl Render for SongTableView {
    fn draw(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let catalog = ctx.songs.catalog();

        let rows = catalog.iter().map(|song| {
            let mut cells = vec![
                Cell::from(Line::from(song.title.as_str()).style(Style::default().fg(theme.table_title_fg))),
                Cell::from(Line::from(song.artist.as_str()).style(Style::default().fg(theme.table_artist_fg))),
                Cell::from(Line::from(song.duration.as_str()).style(Style::default().fg(theme.table_duration_fg))),
            ];
            if ctx.show_path {
                cells.push(Cell::from(Line::from(song.media_path.as_str()).style(Style::default().fg(theme.table_path_fg))));
            }
            Row::new(cells)
        });

        let mut headers = vec!["Title", "Artist", "Duration"];
        let mut widths = vec![
            Constraint::Percentage(30),
            Constraint::Percentage(25),
            Constraint::Length(10),
        ];
        if ctx.show_path {
            headers.push("Path");
            widths.push(Constraint::Min(10));
        }

        let border_colour = if ctx.focus == Focus::Catalog {
            theme.focus_border_colour
        } else {
            theme.border_colour
        };

        let table = Table::new(rows, widths)
            .header(
                Row::new(headers)
                    .style(Style::default().bold().fg(theme.accent_colour))
                    .bottom_margin(1),
            )
            .row_highlight_style(Style::default().bg(theme.highlight_bg).fg(theme.highlight_fg))
            .block(
                Block::default()
                    .title(format!(" All songs ({}) ", catalog.len()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_colour))
                    .padding(Padding::horizontal(1)),
            );

        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}

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

//! UI rendering logic for the song form.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    components::{FormField, SongForm},
    events::Focus,
    render::{Render, RenderContext},
};

const LABEL_WIDTH: u16 = 11;

impl Render for SongForm {
    fn draw(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let focused = ctx.focus == Focus::Form;

        let block = Block::default()
            .title(" Add song ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if focused {
                theme.focus_border_colour
            } else {
                theme.border_colour
            }))
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(FormField::ALL.map(|_| Constraint::Length(1)))
            .split(inner);

        for (field, row) in FormField::ALL.into_iter().zip(rows.iter()) {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(LABEL_WIDTH), Constraint::Min(1)])
                .split(*row);

            let is_active = focused && field == self.active_field();
            let label_style = if is_active {
                Style::default().fg(theme.accent_colour)
            } else {
                Style::default()
            };
            f.render_widget(Paragraph::new(field.label()).style(label_style), columns[0]);

            let input = self.input(field);
            let width = columns[1].width.max(1) as usize;
            let scroll = input.visual_scroll(width);

            f.render_widget(
                Paragraph::new(input.value())
                    .scroll((0, scroll as u16))
                    .style(Style::default().bg(theme.input_bg)),
                columns[1],
            );

            if is_active && !ctx.commander_active {
                let cursor_x = columns[1].x + (input.visual_cursor().saturating_sub(scroll)) as u16;
                f.set_cursor_position((cursor_x, columns[1].y));
            }
        }
    }
}

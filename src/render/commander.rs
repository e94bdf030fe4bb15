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

//! Render the command-line interface.
//!
//! This module renders the visual representation of the command-line, the
//! current text, the cursor and so on.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::{commander::Commander, theme::Theme};

const PROMPT: &str = ":";

pub(crate) fn draw_commander(f: &mut Frame, area: Rect, commander: &Commander, theme: &Theme) {
    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(PROMPT.len() as u16), Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    let style = Style::default()
        .fg(theme.commander_colour)
        .bg(theme.input_bg);

    if !commander.active() {
        f.render_widget(Paragraph::new("").style(style), area);
        return;
    }

    let input = &commander.input;
    let width = container[1].width.max(1) as usize;
    let scroll = input.visual_scroll(width);

    f.render_widget(Paragraph::new(PROMPT).style(style), container[0]);
    f.render_widget(
        Paragraph::new(input.value())
            .scroll((0, scroll as u16))
            .style(style),
        container[1],
    );

    let cursor_x = container[1].x + (input.visual_cursor().saturating_sub(scroll)) as u16;
    let cursor_y = container[1].y;
    f.set_cursor_position((cursor_x, cursor_y));
}

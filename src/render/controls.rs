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

//! Control hints, the copy button and the status line.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    events::{Focus, StatusLine},
    render::{RenderContext, icons::ICON_COPY},
    theme::Theme,
};

/// Draws the catalog controls with their key bindings.
///
/// Update and Filter are shown for completeness but are always disabled.
pub(crate) fn draw_catalog_controls(f: &mut Frame, area: Rect, ctx: &RenderContext) {
    let theme = ctx.theme;
    let enabled = Style::default().fg(theme.accent_colour);
    let disabled = Style::default().fg(theme.disabled_colour);

    let control = |name: &str, binding: &str| {
        vec![
            Span::styled(format!(" {name} "), enabled.bold()),
            Span::raw(format!("[{binding}]  ")),
        ]
    };

    let mut spans = vec![];
    spans.extend(control("Add", "Enter in form"));
    spans.extend(control("Delete", "d"));
    spans.extend(control("Copy", ">"));
    spans.push(Span::styled(" Update ", disabled));
    spans.push(Span::styled(" Filter ", disabled));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draws the button between the catalog and the playlist.
pub(crate) fn draw_copy_button(f: &mut Frame, area: Rect, ctx: &RenderContext) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let colour = if ctx.focus == Focus::Catalog {
        ctx.theme.accent_colour
    } else {
        ctx.theme.border_colour
    };

    let button = Paragraph::new(ICON_COPY)
        .centered()
        .style(Style::default().fg(colour))
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(colour)));

    f.render_widget(button, rows[1]);
}

pub(crate) fn draw_status(f: &mut Frame, area: Rect, status: Option<&StatusLine>, theme: &Theme) {
    let Some(status) = status else {
        return;
    };

    let style = if status.is_error {
        Style::default().fg(theme.error_colour)
    } else {
        Style::default().fg(theme.accent_colour)
    };

    f.render_widget(Paragraph::new(format!(" {}", status.text)).style(style), area);
}

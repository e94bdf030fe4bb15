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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event. Every pane reads the songs it shows from the
//! controller through a [`RenderContext`], so what is on screen is always a
//! direct projection of the catalog and the playlist.

mod commander;
mod controls;
pub(crate) mod icons;


use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::{
    App,
    events::Focus,
    model::songs::SongController,
    render::{
        commander::draw_commander,
        controls::{draw_catalog_controls, draw_copy_button, draw_status},
    },
    theme::Theme,
};

/// Read-only state shared by every pane while a frame is drawn.
pub(crate) struct RenderContext<'a> {
    pub(crate) songs: &'a SongController,
    pub(crate) theme: &'a Theme,
    pub(crate) focus: Focus,
    pub(crate) show_path: bool,
    pub(crate) commander_active: bool,
}

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext);
}

/// Renders the user interface to the terminal frame.
///
/// The screen is split into the catalog side (table, form and controls), a
/// narrow column holding the copy button, and the playlist side. A status
/// line and the command line run along the bottom.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing the panes
///   to update their selection and scroll positions.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Outer layout: panes, status, command line
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    // Main layout: catalog, copy button, playlist
    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(outer[0]);

    let catalog_side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(6),
            Constraint::Length(1),
        ])
        .split(main[0]);

    let ctx = RenderContext {
        songs: &app.songs,
        theme: &app.theme,
        focus: app.focus,
        show_path: app.config.show_path,
        commander_active: app.commander.active(),
    };

    app.song_table.draw(f, catalog_side[0], &ctx);
    app.song_form.draw(f, catalog_side[1], &ctx);
    draw_catalog_controls(f, catalog_side[2], &ctx);

    draw_copy_button(f, main[1], &ctx);

    app.playlist_view.draw(f, main[2], &ctx);

    draw_status(f, outer[1], app.status.as_ref(), &app.theme);
    draw_commander(f, outer[2], &app.commander, &app.theme);
}

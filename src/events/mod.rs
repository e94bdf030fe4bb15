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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging user input (keyboard, command line) and the song collections.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through a
//!    channel.
//! 2. **Process**: [`handle_event`] applies the event to the
//!    [`SongController`](crate::model::songs::SongController). The controller
//!    answers every successful mutation with a change notification, which
//!    arrives back here as another event and is used to reconcile view state.
//! 3. **Render**: After each event is processed, the UI is re-drawn from the
//!    controller using the `ratatui` terminal.

mod handlers;
mod key_handlers;

#[cfg(test)]
mod tests;

use handlers::*;
use key_handlers::process_key_event;

use std::{io::Stdout, sync::mpsc::Sender};

use anyhow::Result;
use crossterm::event::{Event, KeyEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    model::{Song, songs::{SongController, SongObserver}},
    render::draw,
};

/// The pane that receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Catalog,
    Form,
    Playlist,
}

/// The most recent notice or error, shown below the main panes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StatusLine {
    pub(crate) text: String,
    pub(crate) is_error: bool,
}

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    AddSong(Song),
    RemoveSong(Option<usize>),
    CopyToPlaylist(Option<usize>),
    ClearForm,

    CatalogChanged(usize),
    PlaylistChanged(usize),

    SetFocus(Focus),

    Notice(String),
    Error(String),

    Tick,

    ExitApplication,
}

pub(crate) trait AppEventProcessor {
    fn process_event(
        &mut self,
        event: &Event,
        songs: &SongController,
        event_tx: &Sender<AppEvent>,
    ) -> Result<()>;
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        handle_event(app, event)?;

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Applies a single event to the application state.
pub(crate) fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::AddSong(song) => handle_add_song(app, song),
        AppEvent::RemoveSong(index) => handle_remove_song(app, index),
        AppEvent::CopyToPlaylist(index) => handle_copy_to_playlist(app, index),
        AppEvent::ClearForm => app.song_form.clear(),
        // Notifications can trail behind later mutations, so reconcile against
        // the collections as they are now
        AppEvent::CatalogChanged(_) => app
            .song_table
            .on_catalog_changed(app.songs.catalog().len()),
        AppEvent::PlaylistChanged(_) => app
            .playlist_view
            .on_playlist_changed(app.songs.playlist().len()),
        AppEvent::SetFocus(focus) => handle_set_focus(app, focus),
        AppEvent::Notice(text) => handle_notice(app, text),
        AppEvent::Error(text) => handle_error(app, text),
        AppEvent::Tick | AppEvent::ExitApplication => {}
    }

    Ok(())
}

impl SongObserver for Sender<AppEvent> {
    fn on_catalog_changed(&self, len: usize) {
        let _ = self.send(AppEvent::CatalogChanged(len));
    }

    fn on_playlist_changed(&self, len: usize) {
        let _ = self.send(AppEvent::PlaylistChanged(len));
    }
}

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

//! Keyboard routing.
//!
//! Key presses are offered first to the command line, then to the pane that
//! has focus. Global keys (quit, focus changes) are only honoured outside the
//! song form so that they can still be typed into its fields.

use std::sync::mpsc;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::{
    App,
    events::{AppEvent, AppEventProcessor, Focus, handle_event},
};

/// Maps keyboard input to application actions.
///
/// This function acts as the primary input router for the TUI, translating
/// low-level [`KeyEvent`]s into [`AppEvent`]s. It handles:
///
/// * **Application Control**: `Ctrl+C` from anywhere, `q` outside the form.
/// * **Command Line**: `:` opens the command line, which then takes all input
///   until it is submitted or dismissed.
/// * **Focus**: switching between the catalog, the form and the playlist.
/// * **Pane Input**: everything else goes to the focused pane.
///
/// # Errors
///
/// Returns an error if an event cannot be sent to the application channel.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.event_tx.send(AppEvent::ExitApplication)?;
        return Ok(());
    }

    let event = Event::Key(key);

    // While typing into the form a ':' is just text, e.g. a duration
    if app.commander.active() || app.focus != Focus::Form {
        let handled = app.commander.handle_event(&event, &app.event_tx)?;
        if handled {
            return Ok(());
        }
    }

    if app.focus != Focus::Form && process_global_key_event(app, key)? {
        return Ok(());
    }

    // Requests from the focused pane are applied before the next queued key
    // is read, so that key sees the selection they leave behind
    let (pane_tx, pane_rx) = mpsc::channel();

    match app.focus {
        Focus::Catalog => app.song_table.process_event(&event, &app.songs, &pane_tx)?,
        Focus::Form => app.song_form.process_event(&event, &app.songs, &pane_tx)?,
        Focus::Playlist => app
            .playlist_view
            .process_event(&event, &app.songs, &pane_tx)?,
    }

    for request in pane_rx.try_iter() {
        match request {
            AppEvent::ExitApplication => app.event_tx.send(request)?,
            _ => handle_event(app, request)?,
        }
    }

    Ok(())
}

/// Handles keys that mean the same thing in every pane except the form.
///
/// Returns `true` if the key was consumed.
fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<bool> {
    let focus = match (key.code, app.focus) {
        (KeyCode::Char('q'), _) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
            return Ok(true);
        }

        (KeyCode::Char('1'), _) | (KeyCode::Char('t'), _) => Focus::Catalog,
        (KeyCode::Char('2'), _) | (KeyCode::Char('a'), _) => Focus::Form,
        (KeyCode::Char('3'), _) | (KeyCode::Char('p'), _) => Focus::Playlist,

        (KeyCode::Tab, Focus::Catalog) => Focus::Form,
        (KeyCode::BackTab, Focus::Catalog) => Focus::Playlist,
        (KeyCode::Tab, _) | (KeyCode::BackTab, _) => Focus::Catalog,

        _ => return Ok(false),
    };

    app.event_tx.send(AppEvent::SetFocus(focus))?;

    Ok(true)
}

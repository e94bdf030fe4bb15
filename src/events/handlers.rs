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

//! Handlers for the individual application events.
//!
//! Handlers only ever mutate the song collections through the controller. The
//! view selection is reconciled in the same handler, the change notifications
//! that follow repeat that against the current collection and change nothing.

use tracing::{info, warn};

use crate::{
    App,
    events::{Focus, StatusLine},
    model::Song,
};

pub(super) fn handle_add_song(app: &mut App, song: Song) {
    let text = format!("Added \"{}\"", song.title);
    app.songs.append_song(song);
    app.song_table.on_catalog_changed(app.songs.catalog().len());
    app.status = Some(StatusLine { text, is_error: false });
}

// A missing index means nothing was selected, which is treated like any
// other out-of-range index
pub(super) fn handle_remove_song(app: &mut App, index: Option<usize>) {
    let Some(index) = index else {
        return;
    };

    if let Some(song) = app.songs.remove_song(index) {
        app.song_table.on_catalog_changed(app.songs.catalog().len());
        app.status = Some(StatusLine {
            text: format!("Removed \"{}\"", song.title),
            is_error: false,
        });
    }
}

pub(super) fn handle_copy_to_playlist(app: &mut App, index: Option<usize>) {
    let Some(index) = index else {
        return;
    };

    let Some(song) = app.songs.copy_to_playlist(index) else {
        return;
    };
    let text = format!("Copied \"{}\" to playlist", song.title);

    app.playlist_view.on_playlist_changed(app.songs.playlist().len());
    app.status = Some(StatusLine { text, is_error: false });
}

pub(super) fn handle_set_focus(app: &mut App, focus: Focus) {
    app.focus = focus;
}

pub(super) fn handle_notice(app: &mut App, text: String) {
    info!("{}", text);
    app.status = Some(StatusLine { text, is_error: false });
}

pub(super) fn handle_error(app: &mut App, text: String) {
    warn!("{}", text);
    app.status = Some(StatusLine { text, is_error: true });
}

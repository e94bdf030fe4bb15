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

//! Playlist pane state.
//!
//! The playlist is rendered one line per entry using the song label. Only the
//! list scroll position is held here. The Play and Next controls are shown
//! beneath the list but are not wired to anything.

mod event;
mod render;


use ratatui::widgets::ListState;

pub(crate) struct PlaylistView {
    pub(crate) list_state: ListState,
}

impl PlaylistView {
    pub(crate) fn new() -> Self {
        Self {
            list_state: ListState::default(),
        }
    }

    /// Moves the highlight to the newest entry so that it is scrolled into
    /// view.
    pub(crate) fn on_playlist_changed(&mut self, len: usize) {
        self.list_state.select(len.checked_sub(1));
    }

    fn goto_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = self.list_state.selected().map_or(0, |i| (i + 1).min(len - 1));
        self.list_state.select(Some(i));
    }

    fn goto_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(i));
    }

    fn goto_first(&mut self, len: usize) {
        if len > 0 {
            self.list_state.select(Some(0));
        }
    }

    fn goto_last(&mut self, len: usize) {
        self.list_state.select(len.checked_sub(1));
    }
}

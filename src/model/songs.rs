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

//! Song collection management.
//!
//! This module provides the state for the song catalog and the playlist
//! derived from it. The controller is the single source of truth for both
//! sequences, views only ever read from it and are told about changes through
//! the [`SongObserver`] trait.

use tracing::debug;

use crate::model::Song;

/// Receives notifications after the song collections have been mutated.
///
/// Notifications are only sent for mutations that actually changed a
/// collection, an operation rejected by the index guard notifies nobody.
pub(crate) trait SongObserver {
    fn on_catalog_changed(&self, len: usize);
    fn on_playlist_changed(&self, len: usize);
}

pub(crate) struct SongController {
    catalog: Vec<Song>,
    playlist: Vec<Song>,
    observers: Vec<Box<dyn SongObserver>>,
}

impl SongController {
    pub(crate) fn new() -> Self {
        Self {
            catalog: vec![],
            playlist: vec![],
            observers: vec![],
        }
    }

    pub(crate) fn subscribe(&mut self, observer: Box<dyn SongObserver>) {
        self.observers.push(observer);
    }

    pub(crate) fn catalog(&self) -> &[Song] {
        &self.catalog
    }

    pub(crate) fn playlist(&self) -> &[Song] {
        &self.playlist
    }

    /// Appends a song to the end of the catalog.
    pub(crate) fn append_song(&mut self, song: Song) {
        debug!(title = %song.title, artist = %song.artist, "Appending song to catalog");
        self.catalog.push(song);

        self.notify_catalog_changed();
    }

    /// Removes the catalog entry at `index`, shifting later entries down.
    ///
    /// An out-of-range index is silently ignored and `None` is returned.
    pub(crate) fn remove_song(&mut self, index: usize) -> Option<Song> {
        if index >= self.catalog.len() {
            return None;
        }

        let song = self.catalog.remove(index);
        debug!(index, title = %song.title, "Removed song from catalog");

        self.notify_catalog_changed();

        Some(song)
    }

    /// Appends a copy of the catalog entry at `index` to the playlist.
    ///
    /// The same entry may be copied any number of times. An out-of-range index
    /// is silently ignored and `None` is returned.
    pub(crate) fn copy_to_playlist(&mut self, index: usize) -> Option<&Song> {
        let song = self.catalog.get(index)?.clone();
        debug!(index, title = %song.title, "Copying song to playlist");
        self.playlist.push(song);

        self.notify_playlist_changed();

        self.playlist.last()
    }

    fn notify_catalog_changed(&self) {
        let len = self.catalog.len();
        for observer in &self.observers {
            observer.on_catalog_changed(len);
        }
    }

    fn notify_playlist_changed(&self) {
        let len = self.playlist.len();
        for observer in &self.observers {
            observer.on_playlist_changed(len);
        }
    }
}

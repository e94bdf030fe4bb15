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

//! Domain models and core data structures.
//!
//! This module defines the song record and the controller that owns the
//! catalog of all known songs and the playlist built from it.
//!
//! Songs carry no identity of their own, an entry is identified purely by its
//! position in the sequence that holds it.

pub(crate) mod songs;


use std::fmt;

/// A single song entry.
///
/// None of the fields are parsed or validated, the duration and the media
/// path are kept exactly as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Song {
    pub(crate) title: String,
    pub(crate) artist: String,
    pub(crate) duration: String,
    pub(crate) media_path: String,
}

impl Song {
    pub(crate) fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        duration: impl Into<String>,
        media_path: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            duration: duration.into(),
            media_path: media_path.into(),
        }
    }
}

/// The one-line label used for playlist entries, `title - artist (duration)`.
impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({})", self.title, self.artist, self.duration)
    }
}

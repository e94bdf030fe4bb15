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

//! Interactive panes.
//!
//! Each pane keeps only its own presentation state (selection, scroll offset,
//! field buffers). Song data is borrowed from the controller at draw time and
//! never copied into a view.

mod playlist;
mod song_form;
mod song_table;

pub(crate) use playlist::PlaylistView;
pub(crate) use song_form::{FormField, SongForm};
pub(crate) use song_table::SongTableView;

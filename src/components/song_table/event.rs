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

//! Input handling and event processing for the catalog table.
//!
//! This module maps raw terminal keyboard events to table navigation and to
//! the remove and copy-to-playlist requests for the selected row.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};

use crate::{
    components::SongTableView,
    events::{AppEvent, AppEventProcessor},
    model::songs::SongController,
};

impl AppEventProcessor for SongTableView {
    fn process_event(
        &mut self,
        event: &Event,
        songs: &SongController,
        event_tx: &Sender<AppEvent>,
    ) -> Result<()> {
        let Event::Key(key_event) = event else {
            return Ok(());
        };

        let len = songs.catalog().len();

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => self.goto_next(len),
            KeyCode::Char('k') | KeyCode::Up => self.goto_previous(len),
            KeyCode::Char('g') | KeyCode::Home => self.goto_first(len),
            KeyCode::Char('G') | KeyCode::End => self.goto_last(len),

            KeyCode::Char('d') | KeyCode::Delete => {
                event_tx.send(AppEvent::RemoveSong(self.selected()))?
            }

            KeyCode::Char('>') | KeyCode::Enter => {
                event_tx.send(AppEvent::CopyToPlaylist(self.selected()))?
            }

            _ => {}
        }

        Ok(())
    }
}

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

//! Event routing for the song form.
//!
//! Field navigation and submission are handled here, every other key is
//! delegated to the text input of the active field.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    components::SongForm,
    events::{AppEvent, AppEventProcessor, Focus},
    model::songs::SongController,
};

impl AppEventProcessor for SongForm {
    fn process_event(
        &mut self,
        event: &Event,
        _songs: &SongController,
        event_tx: &Sender<AppEvent>,
    ) -> Result<()> {
        let Event::Key(key_event) = event else {
            return Ok(());
        };

        match key_event.code {
            KeyCode::Tab | KeyCode::Down => self.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.previous_field(),

            KeyCode::Enter => event_tx.send(AppEvent::AddSong(self.to_song()))?,
            KeyCode::Esc => event_tx.send(AppEvent::SetFocus(Focus::Catalog))?,

            _ => {
                self.active_input_mut().handle_event(event);
            }
        }

        Ok(())
    }
}

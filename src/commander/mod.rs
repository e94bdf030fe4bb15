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

//! Command-line input logic and state management.
//!
//! This module implements the logic for a command-line processing component,
//! handling a text input component, and dispatching the corresponding
//! application events when typing is finished and a command is submitted.
//!
//! Supported commands:
//!
//! * `q`, `quit` - exit the application
//! * `add <title>;<artist>;<duration>;<path>` - add a song to the catalog,
//!   trailing fields may be left out
//! * `rm <index>` - remove the catalog entry at a zero-based index
//! * `cp <index>` - copy the catalog entry at a zero-based index to the
//!   playlist
//! * `clear` - clear the song form
//! * `1`, `2`, `3` - focus the catalog, the form or the playlist


use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use thiserror::Error;
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{
    events::{AppEvent, Focus},
    model::Song,
};

const FIELD_SEPARATOR: char = ';';

const SONG_FIELD_COUNT: usize = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("{0} needs an argument")]
    MissingArgument(&'static str),

    #[error("not an index: {0}")]
    InvalidIndex(String),

    #[error("a song has 4 fields, got {0}")]
    TooManyFields(usize),
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Quit,
    Add(Song),
    Remove(Option<usize>),
    Copy(Option<usize>),
    ClearForm,
    Focus(Focus),
}

impl Command {
    fn into_event(self) -> AppEvent {
        match self {
            Command::Quit => AppEvent::ExitApplication,
            Command::Add(song) => AppEvent::AddSong(song),
            Command::Remove(index) => AppEvent::RemoveSong(index),
            Command::Copy(index) => AppEvent::CopyToPlaylist(index),
            Command::ClearForm => AppEvent::ClearForm,
            Command::Focus(focus) => AppEvent::SetFocus(focus),
        }
    }
}

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Offers a terminal event to the command line.
    ///
    /// Returns `true` if the event was consumed, which is always the case while
    /// the command line is open.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return Ok(true);
            }

            return Ok(false);
        }

        match key_event.code {
            KeyCode::Esc => {
                self.active = false;
                self.input.reset();
            }

            KeyCode::Enter => {
                let buffer = self.input.value().to_string();
                self.input.reset();
                self.active = false;

                if !buffer.trim().is_empty() {
                    match parse_command(&buffer) {
                        Ok(command) => event_tx.send(command.into_event())?,
                        Err(e) => event_tx.send(AppEvent::Error(e.to_string()))?,
                    }
                }
            }

            _ => {
                // Delegate all other key events to the managed input component.
                self.input.handle_event(event);
            }
        }

        Ok(true)
    }
}

/// Parses a command-line buffer into a [`Command`].
///
/// Indexes are read as signed integers. A negative index parses successfully
/// but refers to no entry, so the resulting command does nothing. Song fields
/// given to `add` are taken exactly as typed after the first space.
pub(crate) fn parse_command(buffer: &str) -> Result<Command, CommandError> {
    let buffer = buffer.trim_start();
    let (name, args) = match buffer.split_once(char::is_whitespace) {
        Some((name, args)) => (name, args),
        None => (buffer, ""),
    };

    match name {
        "q" | "quit" => Ok(Command::Quit),
        "add" => parse_song(args).map(Command::Add),
        "rm" => parse_index("rm", args).map(Command::Remove),
        "cp" => parse_index("cp", args).map(Command::Copy),
        "clear" => Ok(Command::ClearForm),
        "1" => Ok(Command::Focus(Focus::Catalog)),
        "2" => Ok(Command::Focus(Focus::Form)),
        "3" => Ok(Command::Focus(Focus::Playlist)),
        cmd => Err(CommandError::Unknown(cmd.to_string())),
    }
}

fn parse_index(name: &'static str, args: &str) -> Result<Option<usize>, CommandError> {
    let args = args.trim();
    if args.is_empty() {
        return Err(CommandError::MissingArgument(name));
    }

    let index: i64 = args
        .parse()
        .map_err(|_| CommandError::InvalidIndex(args.to_string()))?;

    Ok(usize::try_from(index).ok())
}

fn parse_song(args: &str) -> Result<Song, CommandError> {
    if args.trim().is_empty() {
        return Err(CommandError::MissingArgument("add"));
    }

    let fields: Vec<&str> = args.split(FIELD_SEPARATOR).collect();
    if fields.len() > SONG_FIELD_COUNT {
        return Err(CommandError::TooManyFields(fields.len()));
    }

    let field = |i: usize| fields.get(i).copied().unwrap_or_default();

    Ok(Song::new(field(0), field(1), field(2), field(3)))
}

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

//! Song entry form.
//!
//! Four labelled text inputs, one per song field. Whatever is typed is taken
//! verbatim, the form performs no validation of its own.

mod event;
mod render;

#[cfg(test)]
mod tests;

use tui_input::Input;

use crate::model::Song;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormField {
    Title,
    Artist,
    Duration,
    Path,
}

impl FormField {
    pub(crate) const ALL: [FormField; 4] = [
        FormField::Title,
        FormField::Artist,
        FormField::Duration,
        FormField::Path,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title:",
            FormField::Artist => "Artist:",
            FormField::Duration => "Duration:",
            FormField::Path => "Path:",
        }
    }

    fn index(self) -> usize {
        match self {
            FormField::Title => 0,
            FormField::Artist => 1,
            FormField::Duration => 2,
            FormField::Path => 3,
        }
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

pub(crate) struct SongForm {
    inputs: [Input; 4],
    active: FormField,
}

impl SongForm {
    pub(crate) fn new() -> Self {
        Self {
            inputs: Default::default(),
            active: FormField::Title,
        }
    }

    pub(crate) fn active_field(&self) -> FormField {
        self.active
    }

    pub(crate) fn input(&self, field: FormField) -> &Input {
        &self.inputs[field.index()]
    }

    pub(crate) fn value(&self, field: FormField) -> &str {
        self.input(field).value()
    }

    /// Builds a song from the current field contents.
    pub(crate) fn to_song(&self) -> Song {
        Song::new(
            self.value(FormField::Title),
            self.value(FormField::Artist),
            self.value(FormField::Duration),
            self.value(FormField::Path),
        )
    }

    pub(crate) fn clear(&mut self) {
        for input in self.inputs.iter_mut() {
            input.reset();
        }
        self.active = FormField::Title;
    }

    fn active_input_mut(&mut self) -> &mut Input {
        &mut self.inputs[self.active.index()]
    }

    fn next_field(&mut self) {
        self.active = self.active.next();
    }

    fn previous_field(&mut self) {
        self.active = self.active.previous();
    }
}

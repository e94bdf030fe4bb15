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

use std::sync::mpsc;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use super::{FormField, SongForm};
use crate::{
    events::{AppEvent, AppEventProcessor, Focus},
    model::{Song, songs::SongController},
};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_into(form: &mut SongForm, text: &str, songs: &SongController, tx: &mpsc::Sender<AppEvent>) {
    for c in text.chars() {
        form.process_event(&key(KeyCode::Char(c)), songs, tx).unwrap();
    }
}

#[test]
fn fields_cycle_in_order() {
    let songs = SongController::new();
    let (tx, _rx) = mpsc::channel();
    let mut form = SongForm::new();
    assert_eq!(form.active_field(), FormField::Title);

    let mut seen = vec![];
    for _ in 0..4 {
        form.process_event(&key(KeyCode::Tab), &songs, &tx).unwrap();
        seen.push(form.active_field());
    }

    assert_eq!(
        seen,
        vec![FormField::Artist, FormField::Duration, FormField::Path, FormField::Title]
    );

    form.process_event(&key(KeyCode::Up), &songs, &tx).unwrap();
    assert_eq!(form.active_field(), FormField::Path);
}

#[test]
fn typed_text_goes_to_the_active_field() {
    let songs = SongController::new();
    let (tx, _rx) = mpsc::channel();
    let mut form = SongForm::new();

    type_into(&mut form, "A", &songs, &tx);
    form.process_event(&key(KeyCode::Down), &songs, &tx).unwrap();
    type_into(&mut form, "X", &songs, &tx);
    form.process_event(&key(KeyCode::Down), &songs, &tx).unwrap();
    type_into(&mut form, "3:00", &songs, &tx);
    form.process_event(&key(KeyCode::Down), &songs, &tx).unwrap();
    type_into(&mut form, "/a.mp3", &songs, &tx);

    assert_eq!(form.to_song(), Song::new("A", "X", "3:00", "/a.mp3"));
}

#[test]
fn enter_submits_without_clearing() {
    let songs = SongController::new();
    let (tx, rx) = mpsc::channel();
    let mut form = SongForm::new();
    type_into(&mut form, "Song", &songs, &tx);

    form.process_event(&key(KeyCode::Enter), &songs, &tx).unwrap();

    match rx.try_recv() {
        Ok(AppEvent::AddSong(song)) => assert_eq!(song, Song::new("Song", "", "", "")),
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(form.value(FormField::Title), "Song");
}

#[test]
fn empty_form_submits_empty_song() {
    let songs = SongController::new();
    let (tx, rx) = mpsc::channel();
    let mut form = SongForm::new();

    form.process_event(&key(KeyCode::Enter), &songs, &tx).unwrap();

    assert!(matches!(rx.try_recv(), Ok(AppEvent::AddSong(song)) if song == Song::default()));
}

#[test]
fn escape_returns_focus_to_the_catalog() {
    let songs = SongController::new();
    let (tx, rx) = mpsc::channel();
    let mut form = SongForm::new();

    form.process_event(&key(KeyCode::Esc), &songs, &tx).unwrap();

    assert!(matches!(rx.try_recv(), Ok(AppEvent::SetFocus(Focus::Catalog))));
}

#[test]
fn clear_resets_fields_and_focus() {
    let songs = SongController::new();
    let (tx, _rx) = mpsc::channel();
    let mut form = SongForm::new();
    type_into(&mut form, "T", &songs, &tx);
    form.process_event(&key(KeyCode::Tab), &songs, &tx).unwrap();
    type_into(&mut form, "A", &songs, &tx);

    form.clear();

    assert_eq!(form.to_song(), Song::default());
    assert_eq!(form.active_field(), FormField::Title);
}

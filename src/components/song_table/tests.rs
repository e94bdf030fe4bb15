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

use super::SongTableView;
use crate::{
    events::{AppEvent, AppEventProcessor},
    model::{Song, songs::SongController},
};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn controller_with(count: usize) -> SongController {
    let mut songs = SongController::new();
    for i in 0..count {
        songs.append_song(Song::new(format!("t{i}"), "a", "1:00", "/p"));
    }
    songs
}

#[test]
fn first_song_gets_selected() {
    let mut view = SongTableView::new();
    assert_eq!(view.selected(), None);

    view.on_catalog_changed(1);

    assert_eq!(view.selected(), Some(0));
}

#[test]
fn removing_last_row_clamps_selection() {
    let mut view = SongTableView::new();
    view.table_state.select(Some(2));

    view.on_catalog_changed(2);

    assert_eq!(view.selected(), Some(1));
}

#[test]
fn selection_in_range_is_kept() {
    let mut view = SongTableView::new();
    view.table_state.select(Some(1));

    view.on_catalog_changed(5);

    assert_eq!(view.selected(), Some(1));
}

#[test]
fn emptied_catalog_clears_selection() {
    let mut view = SongTableView::new();
    view.table_state.select(Some(0));

    view.on_catalog_changed(0);

    assert_eq!(view.selected(), None);
}

#[test]
fn navigation_wraps() {
    let songs = controller_with(3);
    let (tx, _rx) = mpsc::channel();
    let mut view = SongTableView::new();

    view.process_event(&key(KeyCode::Char('j')), &songs, &tx).unwrap();
    assert_eq!(view.selected(), Some(0));

    view.process_event(&key(KeyCode::Char('k')), &songs, &tx).unwrap();
    assert_eq!(view.selected(), Some(2));

    view.process_event(&key(KeyCode::Down), &songs, &tx).unwrap();
    assert_eq!(view.selected(), Some(0));

    view.process_event(&key(KeyCode::Char('G')), &songs, &tx).unwrap();
    assert_eq!(view.selected(), Some(2));

    view.process_event(&key(KeyCode::Char('g')), &songs, &tx).unwrap();
    assert_eq!(view.selected(), Some(0));
}

#[test]
fn navigation_on_empty_catalog_selects_nothing() {
    let songs = SongController::new();
    let (tx, _rx) = mpsc::channel();
    let mut view = SongTableView::new();

    view.process_event(&key(KeyCode::Char('j')), &songs, &tx).unwrap();
    view.process_event(&key(KeyCode::Char('G')), &songs, &tx).unwrap();

    assert_eq!(view.selected(), None);
}

#[test]
fn delete_and_copy_request_the_selected_row() {
    let songs = controller_with(3);
    let (tx, rx) = mpsc::channel();
    let mut view = SongTableView::new();
    view.table_state.select(Some(1));

    view.process_event(&key(KeyCode::Char('d')), &songs, &tx).unwrap();
    view.process_event(&key(KeyCode::Char('>')), &songs, &tx).unwrap();

    assert!(matches!(rx.try_recv(), Ok(AppEvent::RemoveSong(Some(1)))));
    assert!(matches!(rx.try_recv(), Ok(AppEvent::CopyToPlaylist(Some(1)))));
}

#[test]
fn delete_without_selection_requests_nothing_in_particular() {
    let songs = SongController::new();
    let (tx, rx) = mpsc::channel();
    let mut view = SongTableView::new();

    view.process_event(&key(KeyCode::Delete), &songs, &tx).unwrap();

    assert!(matches!(rx.try_recv(), Ok(AppEvent::RemoveSong(None))));
}

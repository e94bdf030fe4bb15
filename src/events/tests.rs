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

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{AppEvent, Focus, handle_event};
use crate::{App, config::AppConfig, model::Song};

/// Processes queued follow-up events, returning `true` if an exit was requested.
fn drain(app: &mut App) -> bool {
    let mut exit = false;
    while let Ok(event) = app.event_rx.try_recv() {
        if matches!(event, AppEvent::ExitApplication) {
            exit = true;
            continue;
        }
        handle_event(app, event).unwrap();
    }
    exit
}

fn send(app: &mut App, event: AppEvent) -> bool {
    handle_event(app, event).unwrap();
    drain(app)
}

fn press_with(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> bool {
    send(app, AppEvent::Key(KeyEvent::new(code, modifiers)))
}

fn press(app: &mut App, code: KeyCode) -> bool {
    press_with(app, code, KeyModifiers::NONE)
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn run_command(app: &mut App, command: &str) -> bool {
    press(app, KeyCode::Char(':'));
    type_text(app, command);
    press(app, KeyCode::Enter)
}

fn app_with_songs(songs: &[Song]) -> App {
    let mut app = App::new(AppConfig::default());
    for song in songs {
        send(&mut app, AppEvent::AddSong(song.clone()));
    }
    app
}

fn song_a() -> Song {
    Song::new("A", "X", "3:00", "/a.mp3")
}

fn song_b() -> Song {
    Song::new("B", "Y", "4:00", "/b.mp3")
}

#[test]
fn example_session() {
    let mut app = app_with_songs(&[song_a(), song_b()]);
    assert_eq!(app.songs.catalog(), &[song_a(), song_b()]);

    send(&mut app, AppEvent::CopyToPlaylist(Some(0)));
    assert_eq!(app.songs.playlist(), &[song_a()]);

    send(&mut app, AppEvent::RemoveSong(Some(0)));
    assert_eq!(app.songs.catalog(), &[song_b()]);
    assert_eq!(app.songs.playlist(), &[song_a()]);

    send(&mut app, AppEvent::RemoveSong(Some(5)));
    assert_eq!(app.songs.catalog().len(), 1);
}

#[test]
fn song_is_added_from_the_form() {
    let mut app = App::new(AppConfig::default());
    assert_eq!(app.focus, Focus::Form);

    type_text(&mut app, "A");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "X");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "3:00");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "/a.mp3");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.songs.catalog(), &[song_a()]);
    assert_eq!(app.song_table.selected(), Some(0));
    assert!(!app.commander.active());
    assert_eq!(
        app.status.as_ref().map(|s| s.text.as_str()),
        Some("Added \"A\"")
    );
}

#[test]
fn global_keys_are_text_inside_the_form() {
    let mut app = App::new(AppConfig::default());

    let exit = press(&mut app, KeyCode::Char('q'));
    type_text(&mut app, "p1");

    assert!(!exit);
    assert_eq!(app.focus, Focus::Form);
    assert_eq!(app.song_form.to_song().title, "qp1");
}

#[test]
fn ctrl_c_quits_from_the_form() {
    let mut app = App::new(AppConfig::default());

    assert!(press_with(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL));
}

#[test]
fn q_quits_outside_the_form() {
    let mut app = App::new(AppConfig::default());
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.focus, Focus::Catalog);

    assert!(press(&mut app, KeyCode::Char('q')));
}

#[test]
fn catalog_keys_delete_and_copy_the_selected_row() {
    let mut app = app_with_songs(&[song_a(), song_b()]);
    press(&mut app, KeyCode::Esc);

    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.song_table.selected(), Some(1));

    press(&mut app, KeyCode::Char('>'));
    press(&mut app, KeyCode::Char('>'));
    assert_eq!(app.songs.playlist(), &[song_b(), song_b()]);
    assert_eq!(app.playlist_view.list_state.selected(), Some(1));

    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.songs.catalog(), &[song_a()]);
    assert_eq!(app.song_table.selected(), Some(0));

    press(&mut app, KeyCode::Char('d'));
    assert!(app.songs.catalog().is_empty());
    assert_eq!(app.song_table.selected(), None);

    // Nothing left to select, so these do nothing
    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('>'));
    assert!(app.songs.catalog().is_empty());
    assert_eq!(app.songs.playlist().len(), 2);
}

#[test]
fn rejected_operations_change_nothing() {
    let mut app = app_with_songs(&[song_a()]);
    let status = app.status.clone();

    send(&mut app, AppEvent::RemoveSong(None));
    send(&mut app, AppEvent::RemoveSong(Some(1)));
    send(&mut app, AppEvent::CopyToPlaylist(None));
    send(&mut app, AppEvent::CopyToPlaylist(Some(1)));

    assert_eq!(app.songs.catalog(), &[song_a()]);
    assert!(app.songs.playlist().is_empty());
    assert_eq!(app.status, status);
}

#[test]
fn command_line_negative_and_large_indexes_are_ignored() {
    let mut app = app_with_songs(&[song_a()]);
    press(&mut app, KeyCode::Esc);

    run_command(&mut app, "rm -1");
    run_command(&mut app, "cp 99");

    assert_eq!(app.songs.catalog(), &[song_a()]);
    assert!(app.songs.playlist().is_empty());
}

#[test]
fn command_line_adds_copies_and_removes() {
    let mut app = App::new(AppConfig::default());
    press(&mut app, KeyCode::Esc);

    run_command(&mut app, "add A;X;3:00;/a.mp3");
    run_command(&mut app, "add B;Y;4:00;/b.mp3");
    run_command(&mut app, "cp 1");
    run_command(&mut app, "rm 0");

    assert_eq!(app.songs.catalog(), &[song_b()]);
    assert_eq!(app.songs.playlist(), &[song_b()]);
}

#[test]
fn command_line_errors_reach_the_status_line() {
    let mut app = App::new(AppConfig::default());
    press(&mut app, KeyCode::Esc);

    run_command(&mut app, "rm x");

    let status = app.status.expect("status line");
    assert!(status.is_error);
    assert_eq!(status.text, "not an index: x");
}

#[test]
fn command_line_quit() {
    let mut app = App::new(AppConfig::default());
    press(&mut app, KeyCode::Esc);

    assert!(run_command(&mut app, "q"));
}

#[test]
fn colon_is_text_inside_the_form() {
    let mut app = App::new(AppConfig::default());
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);

    type_text(&mut app, "3:00");

    assert!(!app.commander.active());
    assert_eq!(app.song_form.to_song().duration, "3:00");
}

#[test]
fn focus_keys() {
    let mut app = App::new(AppConfig::default());
    press(&mut app, KeyCode::Esc);

    press(&mut app, KeyCode::Char('p'));
    assert_eq!(app.focus, Focus::Playlist);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::Catalog);

    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.focus, Focus::Playlist);

    press(&mut app, KeyCode::Char('t'));
    assert_eq!(app.focus, Focus::Catalog);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::Form);
}

#[test]
fn clear_form_command() {
    let mut app = App::new(AppConfig::default());
    type_text(&mut app, "Title");
    press(&mut app, KeyCode::Esc);

    run_command(&mut app, "clear");

    assert_eq!(app.song_form.to_song(), Song::default());
}

#[test]
fn notices_and_errors_replace_the_status_line() {
    let mut app = App::new(AppConfig::default());

    send(&mut app, AppEvent::Error("boom".to_string()));
    assert!(app.status.as_ref().is_some_and(|s| s.is_error));

    send(&mut app, AppEvent::Notice("hello".to_string()));
    let status = app.status.expect("status line");
    assert!(!status.is_error);
    assert_eq!(status.text, "hello");
}

#[test]
fn queued_deletes_each_remove_a_row() {
    let song_c = Song::new("C", "Z", "5:00", "/c.mp3");
    let mut app = app_with_songs(&[song_a(), song_b(), song_c]);
    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('G'));
    assert_eq!(app.song_table.selected(), Some(2));

    // Both presses are waiting before either is handled
    for _ in 0..2 {
        let d = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE);
        app.event_tx.send(AppEvent::Key(d)).unwrap();
    }
    drain(&mut app);

    assert_eq!(app.songs.catalog(), &[song_a()]);
    assert_eq!(app.song_table.selected(), Some(0));
}

#[test]
fn queued_copies_follow_the_moving_selection() {
    let mut app = app_with_songs(&[song_a(), song_b()]);
    press(&mut app, KeyCode::Esc);

    for code in [KeyCode::Char('>'), KeyCode::Char('j'), KeyCode::Char('>')] {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        app.event_tx.send(AppEvent::Key(key)).unwrap();
    }
    drain(&mut app);

    assert_eq!(app.songs.playlist(), &[song_a(), song_b()]);
    assert_eq!(app.playlist_view.list_state.selected(), Some(1));
}

#[test]
fn late_change_notifications_use_the_current_catalog() {
    let mut app = app_with_songs(&[song_a()]);
    send(&mut app, AppEvent::RemoveSong(Some(0)));
    assert_eq!(app.song_table.selected(), None);

    send(&mut app, AppEvent::CatalogChanged(1));

    assert_eq!(app.song_table.selected(), None);
}

#[test]
fn number_keys_and_a_change_focus_outside_the_form() {
    let mut app = App::new(AppConfig::default());
    press(&mut app, KeyCode::Esc);

    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.focus, Focus::Playlist);

    press(&mut app, KeyCode::Char('1'));
    assert_eq!(app.focus, Focus::Catalog);

    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.focus, Focus::Form);

    // Typed into the title from here on
    type_text(&mut app, "a1");
    assert_eq!(app.focus, Focus::Form);
    assert_eq!(app.song_form.to_song().title, "a1");

    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.focus, Focus::Form);
}

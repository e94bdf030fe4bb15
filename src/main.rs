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

//! # Playlist Manager TUI.
//!
//! A terminal-based song catalog and playlist builder.
//!
//! Songs are typed into a form and collected in a catalog table, entries from
//! the catalog can then be copied into a playlist shown alongside it. All data
//! is held in memory for the lifetime of the process.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** owns all application state, manages the terminal
//!   lifecycle and renders the UI.
//! * **Helper Threads** capture key presses and periodic ticks and forward
//!   them to the main thread as events.
//! * The **Song Controller** is the single source of truth for the catalog and
//!   the playlist, and announces every change it makes as an event so the
//!   views can reconcile their selection state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is restored when the event loop ends, whether normally or
//! with an error. Communication between the helper threads and the main
//! thread is handled via `std::sync::mpsc` channels.

mod commander;
mod components;
mod config;
mod events;
mod logging;
mod model;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};
use tracing::{error, info};

use crate::{
    commander::Commander,
    components::{PlaylistView, SongForm, SongTableView},
    config::AppConfig,
    events::{AppEvent, Focus, StatusLine, process_events},
    model::songs::SongController,
    theme::Theme,
};

const TICK_INTERVAL: Duration = Duration::from_millis(250);

const STARTUP_HINT: &str =
    "Enter adds the song, Esc switches to the catalog, : opens the command line";

/// Application state.
pub(crate) struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub focus: Focus,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub songs: SongController,

    pub song_table: SongTableView,
    pub song_form: SongForm,
    pub playlist_view: PlaylistView,

    pub commander: Commander,
    pub status: Option<StatusLine>,
}

impl App {
    /// Create a new instance of application state.
    ///
    /// The event channel is subscribed to the song controller so that every
    /// change to the catalog or the playlist comes back as an [`AppEvent`].
    pub fn new(config: AppConfig) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let mut songs = SongController::new();
        songs.subscribe(Box::new(event_tx.clone()));

        Self {
            config,
            theme: Theme::default(),
            focus: Focus::Form,
            event_tx,
            event_rx,
            songs,
            song_table: SongTableView::new(),
            song_form: SongForm::new(),
            playlist_view: PlaylistView::new(),
            commander: Commander::new(),
            status: None,
        }
    }
}

/// The entry point of the application.
///
/// Loads the configuration, installs logging, initializes the application
/// state, manages the terminal lifecycle, and returns an error if any part of
/// the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    // The UI still works without a log, so only complain before it takes over
    match logging::configure_logging(&config) {
        Ok(path) => info!(log = %path.display(), "Starting choolist"),
        Err(e) => eprintln!("Logging disabled: {:#}", anyhow::Error::from(e)),
    }

    let mut app = App::new(config);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    if let Err(e) = &res {
        error!("{:#}", e);
    }
    info!("Exiting");

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();

    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&mut stdout, &hex).ok();
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is "best-effort" and does not return a result, as it is
/// called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg(terminal.backend_mut()).ok();
    terminal.show_cursor().ok();
}

/// Starts the helper threads and enters the main event loop.
///
/// This function spawns two long-running threads:
/// * An input thread to read key presses from the terminal.
/// * A tick thread to trigger periodic UI refreshes.
///
/// After spawning them, it hands control to [`process_events`] to manage the
/// UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let event = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                Ok(Event::Resize(_, _)) => AppEvent::Tick,
                Ok(_) => continue,
                Err(e) => {
                    let _ = tx_keys.send(AppEvent::Error(format!("Failed to read terminal input: {e}")));
                    break;
                }
            };
            if tx_keys.send(event).is_err() {
                break;
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    app.event_tx.send(AppEvent::Notice(STARTUP_HINT.to_string()))?;

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}

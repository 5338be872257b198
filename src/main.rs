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

//! # Tunedeck.
//!
//! A terminal music library browser with simulated playback.
//!
//! Songs and playlists live in an in-memory library that is rendered into a
//! tree of row elements, which the `ratatui` frontend then draws. Playing a
//! song highlights its row for the length of the song before moving on to
//! the next one.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** owns all state, manages the terminal lifecycle and
//!   renders the UI.
//! * **Timer Threads** wait out the current song and post an event when it
//!   ends, unless cancelled first.
//! * **Input and Tick Threads** capture user input and system ticks to drive
//!   the UI state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of an error. Every thread
//! talks to the main thread through a single `std::sync::mpsc` channel.

mod components;
mod config;
mod deck;
mod dom;
mod error;
mod events;
mod logging;
mod model;
mod player;
mod render;
mod theme;
mod util;
mod view;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
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
use tracing::info;

use crate::{
    components::{AddSongForm, SongTable},
    config::AppConfig,
    deck::Deck,
    dom::Document,
    events::{AppEvent, process_events},
    model::Library,
    player::{Sequencer, timer::ThreadScheduler},
    theme::Theme,
};

const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Application state.
struct App {
    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub deck: Deck<Document, ThreadScheduler>,

    pub song_table: SongTable,
    pub add_song_form: AddSongForm,

    /// The last recoverable error, shown in the status line.
    pub status: Option<String>,
}

impl App {
    /// Create a new instance of application state with the seed library.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::channel();

        let scheduler = ThreadScheduler::new(event_tx.clone());
        let sequencer = Sequencer::new(scheduler, config.millis_per_second);
        let deck = Deck::new(Library::seeded(), Document::new(), sequencer)
            .context("Failed to render the library")?;

        Ok(Self {
            theme: Theme::default(),
            event_tx,
            event_rx,
            deck,
            song_table: SongTable::new(),
            add_song_form: AddSongForm::new(),
            status: None,
        })
    }
}

/// The entry point of the application.
///
/// Loads the configuration, installs logging, initializes the application
/// state, manages the terminal lifecycle, and returns an error if any part of
/// the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    logging::init_logging(&config)?;
    info!(millis_per_second = config.millis_per_second, "starting");

    let mut app = App::new(&config).context("Failed to initalise application")?;

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
/// * Enables mouse capture so song rows can be clicked.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&hex).ok();
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode and mouse capture, leaving the alternate screen, and resetting
/// the background color. It also ensures the cursor is made visible again.
///
/// Cleanup is best-effort and does not return a result.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

/// Starts the input and tick threads and enters the main event loop.
///
/// Playback timer threads are spawned on demand by the sequencer.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw terminal events to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let sent = match event::read() {
                Ok(event::Event::Key(key)) => tx_input.send(AppEvent::Key(key)),
                Ok(event::Event::Mouse(mouse)) => tx_input.send(AppEvent::Mouse(mouse)),
                _ => Ok(()),
            };
            if sent.is_err() {
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

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}

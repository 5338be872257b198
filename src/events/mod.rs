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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging user input (keyboard and mouse), playback timers and the UI
//! rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through a
//!    channel fed by the input, tick and timer threads.
//! 2. **Process**: The [`process_events`] function updates the [`App`] state
//!    through the handlers, which mutate the library and patch the rendered
//!    rows.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.

pub(crate) mod handlers;
mod key_handlers;
mod mouse_handlers;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};
use tracing::{debug, info, warn};

use crate::{App, error::PlayerError, model::SongId, render::draw};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),

    /// A click on a control inside a song row.
    SongClick(SongClick),
    /// The add-song button was activated.
    AddSong,

    /// A scheduled playback transition fired.
    PlaybackElapsed { token: u64, song_id: SongId },

    Tick,

    ExitApplication,
}

/// The control inside a song row that a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ClickTarget {
    Play,
    Remove,
    /// Anywhere else in the row.
    Row,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SongClick {
    pub(crate) row_id: String,
    pub(crate) target: ClickTarget,
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            info!("exit requested");
            break;
        }

        dispatch_event(app, event)?;

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Applies one event to the application state.
///
/// User actions replace the status line with their outcome. Timer events
/// only ever set it, so an error from an earlier action stays visible.
fn dispatch_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => key_handlers::process_key_event(app, key)?,
        AppEvent::Mouse(mouse) => mouse_handlers::process_mouse_event(app, mouse)?,
        AppEvent::SongClick(click) => {
            let result = handlers::handle_song_click_event(&mut app.deck, click);
            report(app, result);
        }
        AppEvent::AddSong => {
            let result = handlers::handle_add_song_event(&mut app.deck, &mut app.add_song_form);
            if result.is_ok() {
                app.add_song_form.close();
            }
            report(app, result.map(|_| ()));
        }
        AppEvent::PlaybackElapsed { token, song_id } => {
            debug!(token, song = song_id, "playback timer elapsed");
            if let Err(e) = handlers::handle_playback_elapsed(&mut app.deck, token) {
                report(app, Err(e));
            }
        }
        AppEvent::Tick | AppEvent::ExitApplication => {}
    }

    app.song_table.clamp_selection(app.deck.library.songs().len());

    Ok(())
}

/// Surfaces a recoverable error in the status line; success clears it.
fn report(app: &mut App, result: Result<(), PlayerError>) {
    match result {
        Ok(()) => app.status = None,
        Err(e) => {
            warn!(error = %e, "action failed");
            app.status = Some(e.to_string());
        }
    }
}

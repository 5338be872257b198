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

//! Keyboard input routing.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use tracing::debug;

use crate::{
    App,
    components::FormAction,
    dom::{RowKind, Surface},
    events::AppEvent,
};

/// Maps keyboard input to application actions.
///
/// While the add-song form is open it receives every key. Otherwise the
/// song table gets the first chance to turn the key into a song click, and
/// remaining keys are handled globally:
///
/// * **Application Control**: quitting.
/// * **Playback**: stopping the current song.
/// * **Library Management**: opening the add-song form.
///
/// # Errors
///
/// Returns an error if an event cannot be posted to the event channel.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    let event = Event::Key(key);

    if app.add_song_form.active() {
        match app.add_song_form.process_event(&event) {
            Some(FormAction::Submit) => app.event_tx.send(AppEvent::AddSong)?,
            Some(FormAction::Cancel) => app.add_song_form.close(),
            None => {}
        }
        return Ok(());
    }

    let rows = app.deck.surface.rows(RowKind::Songs);
    if let Some(click) = app.song_table.process_event(&event, rows) {
        debug!(row = %click.row_id, target = ?click.target, "song click");
        app.event_tx.send(AppEvent::SongClick(click))?;
        return Ok(());
    }

    process_global_key_event(app, key)
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,
        KeyCode::Char('a') => app.add_song_form.open(),
        KeyCode::Char('s') => app.deck.sequencer.stop(&mut app.deck.surface),
        _ => {}
    }

    Ok(())
}

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

//! Mouse input routing.
//!
//! Mouse events are only used by the song table, where a left click on a
//! row's play or remove control becomes a song click.

use anyhow::Result;
use crossterm::event::{Event, MouseEvent};

use crate::{
    App,
    dom::{RowKind, Surface},
    events::AppEvent,
};

pub(super) fn process_mouse_event(app: &mut App, mouse: MouseEvent) -> Result<()> {
    if app.add_song_form.active() {
        return Ok(());
    }

    let rows = app.deck.surface.rows(RowKind::Songs);
    if let Some(click) = app.song_table.process_event(&Event::Mouse(mouse), rows) {
        app.event_tx.send(AppEvent::SongClick(click))?;
    }

    Ok(())
}

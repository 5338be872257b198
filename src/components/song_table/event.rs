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

//! Input handling for the song table.
//!
//! This module maps raw terminal keyboard and mouse events to cursor
//! movement and to clicks on the controls of a song row.

use crossterm::event::{Event, KeyCode, MouseButton, MouseEventKind};

use crate::{
    components::SongTable,
    dom::Element,
    events::{ClickTarget, SongClick},
};

impl SongTable {
    pub(crate) fn process_event(&mut self, event: &Event, rows: &[Element]) -> Option<SongClick> {
        match event {
            Event::Key(key_event) => match key_event.code {
                KeyCode::Char('j') | KeyCode::Down => self.goto_next(rows.len()),
                KeyCode::Char('k') | KeyCode::Up => self.goto_previous(rows.len()),
                KeyCode::Char('g') | KeyCode::Home => self.goto_first(),
                KeyCode::Char('G') | KeyCode::End => self.goto_last(rows.len()),

                KeyCode::Enter | KeyCode::Char('p') => return self.current_click(rows, ClickTarget::Play),
                KeyCode::Char('d') | KeyCode::Delete => return self.current_click(rows, ClickTarget::Remove),

                _ => {}
            },

            Event::Mouse(mouse_event) => match mouse_event.kind {
                MouseEventKind::ScrollDown => self.goto_next(rows.len()),
                MouseEventKind::ScrollUp => self.goto_previous(rows.len()),
                MouseEventKind::Down(MouseButton::Left) => {
                    let (index, click) = self.hit_test(mouse_event.column, mouse_event.row, rows)?;
                    self.table_state.select(Some(index));
                    return Some(click);
                }
                _ => {}
            },

            _ => {}
        }

        None
    }
}

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

//! Input handling for the add-song form.
//!
//! Navigation keys move between fields, `Enter` submits and `Esc` cancels.
//! Every other key event is delegated to the focused text input.

use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::components::{AddSongForm, FormAction};

impl AddSongForm {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<FormAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Esc => return Some(FormAction::Cancel),
            KeyCode::Enter => return Some(FormAction::Submit),
            KeyCode::Tab | KeyCode::Down => self.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.previous_field(),
            _ => {
                self.inputs[self.focus].handle_event(event);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(form: &mut AddSongForm, text: &str) {
        for c in text.chars() {
            assert!(form.process_event(&key(KeyCode::Char(c))).is_none());
        }
    }

    #[test]
    fn typing_fills_the_focused_field() {
        let mut form = AddSongForm::new();
        form.open();

        type_text(&mut form, "Zed");
        form.process_event(&key(KeyCode::Tab));
        type_text(&mut form, "Album");
        form.process_event(&key(KeyCode::BackTab));
        type_text(&mut form, "!");

        let fields = form.fields();
        assert_eq!(fields.title, "Zed!");
        assert_eq!(fields.album, "Album");
    }

    #[test]
    fn enter_submits_and_escape_cancels() {
        let mut form = AddSongForm::new();

        assert_eq!(form.process_event(&key(KeyCode::Enter)), Some(FormAction::Submit));
        assert_eq!(form.process_event(&key(KeyCode::Esc)), Some(FormAction::Cancel));
    }
}

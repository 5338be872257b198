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

//! The add-song input form.
//!
//! Five labelled text inputs supply, in this fixed order, the title, album,
//! artist, duration (`MM:SS`) and cover-art URI of a new song. The form only
//! collects text; validation happens when the song is added.

mod event;
mod render;

use tui_input::Input;

use crate::model::SongFields;

pub(crate) const FIELD_LABELS: [&str; 5] = ["Title", "Album", "Artist", "Duration (mm:ss)", "Cover art URI"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormAction {
    Submit,
    Cancel,
}

pub(crate) struct AddSongForm {
    inputs: [Input; 5],
    focus: usize,
    active: bool,
}

impl AddSongForm {
    pub(crate) fn new() -> Self {
        Self {
            inputs: Default::default(),
            focus: 0,
            active: false,
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    pub(crate) fn open(&mut self) {
        self.active = true;
        self.focus = 0;
    }

    pub(crate) fn close(&mut self) {
        self.active = false;
    }

    fn next_field(&mut self) {
        self.focus = (self.focus + 1) % self.inputs.len();
    }

    fn previous_field(&mut self) {
        self.focus = (self.focus + self.inputs.len() - 1) % self.inputs.len();
    }

    /// Reads the inputs into a fields record, in the fixed field order.
    pub(crate) fn fields(&self) -> SongFields {
        let [title, album, artist, duration, cover_art] = &self.inputs;

        SongFields {
            id: None,
            title: title.value().trim().to_string(),
            album: album.value().trim().to_string(),
            artist: artist.value().trim().to_string(),
            duration: duration.value().trim().to_string(),
            cover_art: cover_art.value().trim().to_string(),
        }
    }

    /// Clears every input and returns focus to the first one.
    pub(crate) fn reset(&mut self) {
        for input in self.inputs.iter_mut() {
            input.reset();
        }
        self.focus = 0;
    }

    #[cfg(test)]
    pub(crate) fn set_values(&mut self, values: [&str; 5]) {
        for (input, value) in self.inputs.iter_mut().zip(values) {
            *input = Input::new(value.to_string());
        }
    }
}

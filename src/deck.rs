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

//! The player core: the library, the surface it is rendered into and the
//! playback sequencer.
//!
//! The deck is built once at startup and passed by reference to the event
//! handlers, which keep the three parts consistent with each other.

use crate::{
    dom::Surface,
    error::PlayerError,
    model::Library,
    player::{Sequencer, timer::Scheduler},
    view,
};

pub(crate) struct Deck<D: Surface, S: Scheduler> {
    pub(crate) library: Library,
    pub(crate) surface: D,
    pub(crate) sequencer: Sequencer<S>,
}

impl<D: Surface, S: Scheduler> Deck<D, S> {
    /// Creates a deck and renders every song and playlist into `surface`.
    pub(crate) fn new(library: Library, surface: D, sequencer: Sequencer<S>) -> Result<Self, PlayerError> {
        let mut deck = Self {
            library,
            surface,
            sequencer,
        };
        view::generate_all(&mut deck.library, &mut deck.surface)?;

        Ok(deck)
    }
}

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

//! Recoverable errors raised by the player core.
//!
//! Application-level plumbing (terminal, channels) uses `anyhow`; the core
//! reports these typed errors so handlers can show them in the status line
//! and carry on.

use std::fmt;

use thiserror::Error;

/// The kind of entity a failed lookup was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntityKind {
    Song,
    Playlist,
    Row,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Song => "song",
            EntityKind::Playlist => "playlist",
            EntityKind::Row => "row",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum PlayerError {
    #[error("no {kind} with id '{id}'")]
    NotFound { kind: EntityKind, id: String },

    #[error("invalid input: {0}")]
    Validation(String),
}

impl PlayerError {
    pub(crate) fn not_found(kind: EntityKind, id: impl ToString) -> Self {
        PlayerError::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

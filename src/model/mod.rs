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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, songs and
//! the playlists that reference them, together with the [`Library`] that
//! owns both collections.

pub(crate) mod library;
pub(crate) mod seed;

pub(crate) use library::Library;

pub(crate) type SongId = u32;
pub(crate) type PlaylistId = u32;

/// An entity that can be located in a collection by its identifier.
pub(crate) trait Identified {
    type Id: Copy + PartialEq;

    fn id(&self) -> Self::Id;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Song {
    pub(crate) id: SongId,
    pub(crate) title: String,
    pub(crate) album: String,
    pub(crate) artist: String,
    /// Length of the song in seconds.
    pub(crate) duration: u64,
    /// URI of the cover image.
    pub(crate) cover_art: String,
}

impl Identified for Song {
    type Id = SongId;

    fn id(&self) -> SongId {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Playlist {
    pub(crate) id: PlaylistId,
    pub(crate) name: String,
    /// Ordered references into the library's songs, not owned.
    pub(crate) songs: Vec<SongId>,
}

impl Identified for Playlist {
    type Id = PlaylistId;

    fn id(&self) -> PlaylistId {
        self.id
    }
}

/// The raw values entered for a new song, before validation.
///
/// The duration is still the `MM:SS` text typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SongFields {
    pub(crate) id: Option<SongId>,
    pub(crate) title: String,
    pub(crate) album: String,
    pub(crate) artist: String,
    pub(crate) duration: String,
    pub(crate) cover_art: String,
}

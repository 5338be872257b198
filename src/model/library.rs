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

//! The song and playlist collection.
//!
//! [`Library`] is the single owner of the authoritative song and playlist
//! data. It is constructed once at startup from seed data and handed by
//! reference to the view and the event handlers.

use std::cmp::Ordering;

use tracing::debug;

use crate::{
    error::{EntityKind, PlayerError},
    model::{Playlist, PlaylistId, Song, SongId, seed},
    util::format::find_index,
};

/// Smallest range random song identifiers are drawn from.
const MIN_ID_SPACE: u32 = 100;

#[derive(Debug, Default)]
pub(crate) struct Library {
    songs: Vec<Song>,
    playlists: Vec<Playlist>,
}

impl Library {
    pub(crate) fn new(songs: Vec<Song>, playlists: Vec<Playlist>) -> Self {
        let mut library = Self { songs, playlists };
        library.sort_songs();
        library.sort_playlists();
        library
    }

    /// Creates a library populated with the built-in seed collection.
    pub(crate) fn seeded() -> Self {
        Self::new(seed::songs(), seed::playlists())
    }

    pub(crate) fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub(crate) fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub(crate) fn song(&self, id: SongId) -> Option<&Song> {
        find_index(id, &self.songs).map(|idx| &self.songs[idx])
    }

    pub(crate) fn playlist(&self, id: PlaylistId) -> Option<&Playlist> {
        find_index(id, &self.playlists).map(|idx| &self.playlists[idx])
    }

    /// Returns the song that follows `id` in the current title order.
    pub(crate) fn song_after(&self, id: SongId) -> Option<&Song> {
        find_index(id, &self.songs).and_then(|idx| self.songs.get(idx + 1))
    }

    /// Picks an identifier not used by any song.
    ///
    /// Candidates are drawn at random and redrawn on collision. The range
    /// grows with the collection so there is always plenty of free space.
    pub(crate) fn allocate_id(&self) -> SongId {
        let len = u32::try_from(self.songs.len()).unwrap_or(u32::MAX / 2);
        let space = MIN_ID_SPACE.max(len.saturating_mul(2));

        loop {
            let candidate = rand::random_range(0..space);
            if find_index(candidate, &self.songs).is_none() {
                return candidate;
            }
        }
    }

    /// Adds a song and restores title order.
    ///
    /// If the song's identifier is already taken a fresh one is allocated,
    /// so identifiers stay unique. Returns the identifier actually used and
    /// the position of the song after sorting.
    pub(crate) fn add_song(&mut self, mut song: Song) -> (SongId, usize) {
        if find_index(song.id, &self.songs).is_some() {
            let id = self.allocate_id();
            debug!(requested = song.id, allocated = id, "song id collision");
            song.id = id;
        }

        let id = song.id;
        self.songs.push(song);
        self.sort_songs();

        let position = find_index(id, &self.songs).unwrap_or(self.songs.len() - 1);
        (id, position)
    }

    /// Removes a song and every playlist reference to it.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::NotFound`] if no song has this identifier, in
    /// which case nothing is changed.
    pub(crate) fn remove_song(&mut self, id: SongId) -> Result<Song, PlayerError> {
        let idx = find_index(id, &self.songs).ok_or_else(|| PlayerError::not_found(EntityKind::Song, id))?;
        let song = self.songs.remove(idx);

        for playlist in self.playlists.iter_mut() {
            playlist.songs.retain(|&song_id| song_id != id);
        }

        Ok(song)
    }

    /// Total duration in seconds of the songs a playlist references.
    ///
    /// References to songs that are not in the library count as zero.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::NotFound`] for an unknown playlist.
    pub(crate) fn playlist_duration(&self, id: PlaylistId) -> Result<u64, PlayerError> {
        let playlist = self
            .playlist(id)
            .ok_or_else(|| PlayerError::not_found(EntityKind::Playlist, id))?;

        Ok(playlist
            .songs
            .iter()
            .filter_map(|&song_id| self.song(song_id))
            .map(|song| song.duration)
            .sum())
    }

    pub(crate) fn sort_songs(&mut self) {
        self.songs.sort_by(|a, b| compare_names(&a.title, &b.title));
    }

    pub(crate) fn sort_playlists(&mut self) {
        self.playlists.sort_by(|a, b| compare_names(&a.name, &b.name));
    }
}

/// Case-insensitive ordering for titles and names.
///
/// Names that differ only by case fall back to a plain comparison so the
/// order is total. The comparison is by code point after lowercasing, not
/// locale collation: accented letters sort after `z` (`"Éclair"` follows
/// `"Zebra"`).
pub(crate) fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

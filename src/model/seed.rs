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

//! The collection the player starts with.

use crate::model::{Playlist, Song};

const SEED_SONGS: &[(u32, &str, &str, &str, u64, &str)] = &[
    (1, "Vortex", "Wallflowers", "Jinjer", 242, "https://covers.example/wallflowers.jpg"),
    (2, "Vinda", "Godtfolk", "Songleikr", 160, "https://covers.example/godtfolk.jpg"),
    (7, "Shiroyama", "The Last Stand", "Sabaton", 213, "https://covers.example/the-last-stand.jpg"),
    (3, "Thunderstruck", "The Razors Edge", "AC/DC", 292, "https://covers.example/razors-edge.jpg"),
    (4, "All is One", "All is One", "Orphaned Land", 270, "https://covers.example/all-is-one.jpg"),
    (5, "As a Stone", "Show Us What You Got", "Full Trunk", 259, "https://covers.example/show-us.jpg"),
    (6, "Sons of Winter and Stars", "Time I", "Wintersun", 811, "https://covers.example/time-i.jpg"),
];

const SEED_PLAYLISTS: &[(u32, &str, &[u32])] = &[
    (1, "Metal", &[1, 7, 4, 6]),
    (5, "Israeli", &[4, 5]),
    (2, "Road Trip", &[3, 2, 5]),
];

pub(crate) fn songs() -> Vec<Song> {
    SEED_SONGS
        .iter()
        .map(|&(id, title, album, artist, duration, cover_art)| Song {
            id,
            title: title.to_string(),
            album: album.to_string(),
            artist: artist.to_string(),
            duration,
            cover_art: cover_art.to_string(),
        })
        .collect()
}

pub(crate) fn playlists() -> Vec<Playlist> {
    SEED_PLAYLISTS
        .iter()
        .map(|&(id, name, songs)| Playlist {
            id,
            name: name.to_string(),
            songs: songs.to_vec(),
        })
        .collect()
}

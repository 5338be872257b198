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

//! Projection of the library into rows on a rendering surface.
//!
//! Every song becomes a `div.song` row and every playlist a `div.playlists`
//! row. Row identifiers are derived from entity identifiers (`song12`,
//! `playlist3`) so handlers can find a row again later.
//!
//! The baseline strategy is a full rebuild ([`generate_songs`],
//! [`generate_playlists`]). Adding a song instead inserts one row at its
//! sorted position with [`insert_song_row`].

use tracing::debug;

use crate::{
    dom::{Element, RowKind, Surface, create_element},
    error::{EntityKind, PlayerError},
    model::{Library, Playlist, PlaylistId, Song, SongId},
    util::format::format_time,
};

const SONG_ROW_PREFIX: &str = "song";
const PLAYLIST_ROW_PREFIX: &str = "playlist";

pub(crate) const PLAY_BUTTON_CLASS: &str = "play-button";
pub(crate) const REMOVE_BUTTON_CLASS: &str = "remove-button";

const PLAY_LABEL: &str = "\u{25B6}";
const REMOVE_LABEL: &str = "\u{2715}";

pub(crate) fn song_row_id(id: SongId) -> String {
    format!("{}{}", SONG_ROW_PREFIX, id)
}

pub(crate) fn playlist_row_id(id: PlaylistId) -> String {
    format!("{}{}", PLAYLIST_ROW_PREFIX, id)
}

/// Resolves a song row identifier back to the song identifier.
///
/// # Errors
///
/// Returns [`PlayerError::NotFound`] if `row_id` is not exactly the
/// identifier [`song_row_id`] produces, so `song007` names no row.
pub(crate) fn parse_song_row_id(row_id: &str) -> Result<SongId, PlayerError> {
    row_id
        .strip_prefix(SONG_ROW_PREFIX)
        .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|digits| digits.parse().ok())
        .filter(|&id| song_row_id(id) == row_id)
        .ok_or_else(|| PlayerError::not_found(EntityKind::Row, row_id))
}

/// Builds the row for one song: cover, title, album, artist, duration and
/// the play and remove controls.
pub(crate) fn create_song_element(song: &Song) -> Element {
    let cover = create_element("img", vec![], &["img-format"], &[("src", &song.cover_art)]);
    let title = create_element("p", vec![song.title.as_str().into()], &["width"], &[]);
    let album = create_element("p", vec![song.album.as_str().into()], &["width"], &[]);
    let artist = create_element("p", vec![song.artist.as_str().into()], &["width"], &[]);
    let duration = create_element("p", vec![format_time(song.duration).into()], &["width"], &[]);

    let play = create_element("button", vec![PLAY_LABEL.into()], &["btn", PLAY_BUTTON_CLASS], &[]);
    let remove = create_element("button", vec![REMOVE_LABEL.into()], &["btn", REMOVE_BUTTON_CLASS], &[]);
    let buttons = create_element("div", vec![play.into(), remove.into()], &["btns"], &[]);

    create_element(
        "div",
        vec![cover.into(), title.into(), album.into(), artist.into(), duration.into(), buttons.into()],
        &["song"],
        &[("id", &song_row_id(song.id))],
    )
}

/// Builds the row for one playlist: name, song count and total duration.
pub(crate) fn create_playlist_element(playlist: &Playlist, library: &Library) -> Result<Element, PlayerError> {
    let name = create_element("span", vec![playlist.name.as_str().into()], &[], &[]);
    let count = create_element("span", vec![format!("Songs: {}", playlist.songs.len()).into()], &[], &[]);
    let duration = create_element("span", vec![playlist_duration(playlist.id, library)?.into()], &[], &[]);

    Ok(create_element(
        "div",
        vec![name.into(), count.into(), duration.into()],
        &["playlists"],
        &[("id", &playlist_row_id(playlist.id))],
    ))
}

/// Total duration of a playlist's songs, formatted as `MM:SS`.
pub(crate) fn playlist_duration(id: PlaylistId, library: &Library) -> Result<String, PlayerError> {
    library.playlist_duration(id).map(format_time)
}

/// Sorts the songs by title and rebuilds the songs container from scratch.
pub(crate) fn generate_songs(library: &mut Library, surface: &mut impl Surface) {
    library.sort_songs();

    surface.clear_rows(RowKind::Songs);
    for song in library.songs() {
        surface.append_row(RowKind::Songs, create_song_element(song));
    }

    debug!(container = RowKind::Songs.container_id(), rows = library.songs().len(), "rows generated");
}

/// Sorts the playlists by name and rebuilds the playlists container from
/// scratch.
pub(crate) fn generate_playlists(library: &mut Library, surface: &mut impl Surface) -> Result<(), PlayerError> {
    library.sort_playlists();

    surface.clear_rows(RowKind::Playlists);
    for playlist in library.playlists() {
        surface.append_row(RowKind::Playlists, create_playlist_element(playlist, library)?);
    }

    debug!(container = RowKind::Playlists.container_id(), rows = library.playlists().len(), "rows generated");

    Ok(())
}

/// Builds the whole page: every song row and every playlist row.
pub(crate) fn generate_all(library: &mut Library, surface: &mut impl Surface) -> Result<(), PlayerError> {
    generate_songs(library, surface);
    generate_playlists(library, surface)
}

/// Inserts the row for a newly added song at `index`, its position in the
/// sorted library, without rebuilding the other rows.
pub(crate) fn insert_song_row(song: &Song, index: usize, surface: &mut impl Surface) {
    let row = create_song_element(song);
    debug!(container = RowKind::Songs.container_id(), index, %row, "row inserted");
    surface.insert_row(RowKind::Songs, index, row);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dom::Document, model::Playlist};

    fn song(id: SongId, title: &str, duration: u64) -> Song {
        Song {
            id,
            title: title.to_string(),
            album: format!("{} album", title),
            artist: format!("{} artist", title),
            duration,
            cover_art: format!("{}.jpg", title),
        }
    }

    fn row_ids(doc: &Document, kind: RowKind) -> Vec<String> {
        doc.rows(kind)
            .iter()
            .filter_map(|r| r.id().map(str::to_string))
            .collect()
    }

    #[test]
    fn row_ids_round_trip() {
        assert_eq!(song_row_id(12), "song12");
        assert_eq!(playlist_row_id(3), "playlist3");
        assert_eq!(parse_song_row_id("song12").unwrap(), 12);
    }

    #[test]
    fn malformed_row_ids_are_not_found() {
        for row_id in ["", "song", "songx", "playlist1", "song-1", "song1a", "song99999999999", "song007", "song01", "song+1"] {
            assert!(matches!(parse_song_row_id(row_id), Err(PlayerError::NotFound { .. })), "{}", row_id);
        }
    }

    #[test]
    fn song_row_shows_fields_and_controls() {
        let row = create_song_element(&song(4, "Vortex", 242));

        assert_eq!(row.tag(), "div");
        assert_eq!(row.id(), Some("song4"));
        assert!(row.has_class("song"));

        let cells: Vec<&Element> = row.child_elements().collect();
        assert_eq!(cells[0].tag(), "img");
        assert!(cells[0].has_class("img-format"));
        assert_eq!(cells[0].attribute("src"), Some("Vortex.jpg"));

        let texts: Vec<String> = cells[1..5].iter().map(|c| c.text_content()).collect();
        assert_eq!(texts, ["Vortex", "Vortex album", "Vortex artist", "04:02"]);
        assert!(cells[1..5].iter().all(|c| c.has_class("width")));

        assert!(cells[5].has_class("btns"));
        assert!(row.find_by_class(PLAY_BUTTON_CLASS).is_some_and(|b| b.has_class("btn")));
        assert!(row.find_by_class(REMOVE_BUTTON_CLASS).is_some());
    }

    #[test]
    fn generate_songs_orders_rows_by_title() {
        let mut library = Library::new(vec![song(1, "B", 90), song(2, "A", 30)], vec![]);
        let mut doc = Document::new();

        generate_songs(&mut library, &mut doc);

        assert_eq!(row_ids(&doc, RowKind::Songs), ["song2", "song1"]);
        assert_eq!(format_time(90), "01:30");
    }

    #[test]
    fn generate_songs_rows_are_strictly_ascending() {
        let mut library = Library::seeded();
        let mut doc = Document::new();

        generate_songs(&mut library, &mut doc);

        let titles: Vec<String> = doc
            .rows(RowKind::Songs)
            .iter()
            .map(|r| r.child_elements().nth(1).map(|t| t.text_content().to_lowercase()).unwrap_or_default())
            .collect();
        assert_eq!(titles.len(), library.songs().len());
        assert!(titles.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn regenerating_replaces_rather_than_duplicates() {
        let mut library = Library::seeded();
        let mut doc = Document::new();

        generate_all(&mut library, &mut doc).unwrap();
        generate_all(&mut library, &mut doc).unwrap();

        assert_eq!(doc.rows(RowKind::Songs).len(), library.songs().len());
        assert_eq!(doc.rows(RowKind::Playlists).len(), library.playlists().len());
    }

    #[test]
    fn playlists_show_name_count_and_duration() {
        let mut library = Library::new(
            vec![song(1, "A", 90), song(2, "B", 45)],
            vec![
                Playlist { id: 2, name: "Zulu".to_string(), songs: vec![1, 2] },
                Playlist { id: 1, name: "alpha".to_string(), songs: vec![] },
            ],
        );
        let mut doc = Document::new();

        generate_playlists(&mut library, &mut doc).unwrap();

        assert_eq!(row_ids(&doc, RowKind::Playlists), ["playlist1", "playlist2"]);

        let zulu = doc.find_row(RowKind::Playlists, "playlist2").unwrap();
        assert!(zulu.has_class("playlists"));
        let spans: Vec<String> = zulu.child_elements().map(Element::text_content).collect();
        assert_eq!(spans, ["Zulu", "Songs: 2", "02:15"]);

        assert_eq!(playlist_duration(1, &library).unwrap(), "00:00");
        assert!(playlist_duration(9, &library).is_err());
    }

    #[test]
    fn inserted_row_lands_at_sorted_position() {
        let mut library = Library::new(vec![song(1, "Apple", 1), song(2, "Zebra", 1)], vec![]);
        let mut doc = Document::new();
        generate_songs(&mut library, &mut doc);

        let (id, position) = library.add_song(song(3, "Mango", 1));
        let added = library.song(id).cloned().unwrap();
        insert_song_row(&added, position, &mut doc);

        assert_eq!(row_ids(&doc, RowKind::Songs), ["song1", "song3", "song2"]);
    }
}

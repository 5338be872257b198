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

//! Mutation handlers and click dispatch.
//!
//! Each handler updates the library first and then patches the rendered rows
//! to match, so the surface never shows a song the library does not have.

use tracing::{debug, info};

use crate::{
    components::AddSongForm,
    deck::Deck,
    dom::{RowKind, Surface},
    error::PlayerError,
    events::{ClickTarget, SongClick},
    model::{Song, SongFields, SongId},
    player::timer::Scheduler,
    util::format::parse_time,
    view::{self, generate_playlists, insert_song_row, parse_song_row_id},
};

/// Adds a song built from raw input fields.
///
/// The `MM:SS` duration is converted to seconds, an identifier is allocated
/// when none was given and the new row is inserted at its sorted position.
///
/// # Errors
///
/// Returns [`PlayerError::Validation`] if the duration is malformed; nothing
/// is added in that case.
pub(crate) fn add_song<D: Surface, S: Scheduler>(
    deck: &mut Deck<D, S>,
    fields: SongFields,
) -> Result<SongId, PlayerError> {
    let duration = parse_time(&fields.duration)?;
    let id = fields.id.unwrap_or_else(|| deck.library.allocate_id());

    let (id, position) = deck.library.add_song(Song {
        id,
        title: fields.title,
        album: fields.album,
        artist: fields.artist,
        duration,
        cover_art: fields.cover_art,
    });

    if let Some(song) = deck.library.song(id) {
        info!(song = id, title = %song.title, position, "added song");
        insert_song_row(song, position, &mut deck.surface);
    }

    Ok(id)
}

/// Removes the song shown in the row `row_id`.
///
/// The song's row is removed and the playlist rows are regenerated, since
/// their song counts and durations may have changed. Removing the song that
/// is playing stops playback.
///
/// # Errors
///
/// Returns [`PlayerError::NotFound`] if the row identifier is malformed or
/// names a song that does not exist; nothing changes in that case.
pub(crate) fn remove_song<D: Surface, S: Scheduler>(
    deck: &mut Deck<D, S>,
    row_id: &str,
) -> Result<Song, PlayerError> {
    let id = parse_song_row_id(row_id)?;
    let song = deck.library.remove_song(id)?;

    if deck.sequencer.now_playing() == Some(id) {
        deck.sequencer.stop(&mut deck.surface);
    }

    deck.surface.remove_row(RowKind::Songs, &view::song_row_id(id));
    generate_playlists(&mut deck.library, &mut deck.surface)?;

    info!(song = id, title = %song.title, "removed song");

    Ok(song)
}

/// Dispatches a click inside a song row to the control it landed on.
///
/// Clicks that miss the play and remove controls are ignored.
pub(crate) fn handle_song_click_event<D: Surface, S: Scheduler>(
    deck: &mut Deck<D, S>,
    click: SongClick,
) -> Result<(), PlayerError> {
    match click.target {
        ClickTarget::Play => {
            let id = parse_song_row_id(&click.row_id)?;
            deck.sequencer.play_song(id, &deck.library, &mut deck.surface)
        }
        ClickTarget::Remove => remove_song(deck, &click.row_id).map(|_| ()),
        ClickTarget::Row => {
            debug!(row = %click.row_id, "click outside controls ignored");
            Ok(())
        }
    }
}

/// Reads the add-song inputs and adds the song they describe.
///
/// The form is cleared only when the song was added.
pub(crate) fn handle_add_song_event<D: Surface, S: Scheduler>(
    deck: &mut Deck<D, S>,
    form: &mut AddSongForm,
) -> Result<SongId, PlayerError> {
    let id = add_song(deck, form.fields())?;
    form.reset();

    Ok(id)
}

/// Moves playback on when a scheduled transition fires.
pub(crate) fn handle_playback_elapsed<D: Surface, S: Scheduler>(
    deck: &mut Deck<D, S>,
    token: u64,
) -> Result<(), PlayerError> {
    deck.sequencer.on_elapsed(token, &deck.library, &mut deck.surface)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dom::{Document, Element, SELECTED_CLASS},
        error::EntityKind,
        model::{Library, Playlist},
        player::{PlaybackState, Sequencer, tests::ManualScheduler},
    };

    fn song(id: SongId, title: &str, duration: u64) -> Song {
        Song {
            id,
            title: title.to_string(),
            album: "Album".to_string(),
            artist: "Artist".to_string(),
            duration,
            cover_art: "cover.png".to_string(),
        }
    }

    fn deck() -> Deck<Document, ManualScheduler> {
        let library = Library::new(
            vec![song(1, "B", 90), song(2, "A", 30), song(3, "M", 60)],
            vec![
                Playlist { id: 1, name: "Both".to_string(), songs: vec![1, 2] },
                Playlist { id: 2, name: "Just B".to_string(), songs: vec![1] },
            ],
        );
        Deck::new(library, Document::new(), Sequencer::new(ManualScheduler::default(), 1000)).unwrap()
    }

    fn fields(title: &str, duration: &str) -> SongFields {
        SongFields {
            id: None,
            title: title.to_string(),
            album: "New album".to_string(),
            artist: "New artist".to_string(),
            duration: duration.to_string(),
            cover_art: "new.png".to_string(),
        }
    }

    fn row_ids(deck: &Deck<Document, ManualScheduler>, kind: RowKind) -> Vec<String> {
        deck.surface
            .rows(kind)
            .iter()
            .filter_map(|r| r.id().map(str::to_string))
            .collect()
    }

    fn playlist_texts(deck: &Deck<Document, ManualScheduler>, row_id: &str) -> Vec<String> {
        deck.surface
            .find_row(RowKind::Playlists, row_id)
            .map(|r| r.child_elements().map(Element::text_content).collect())
            .unwrap_or_default()
    }

    fn click(row_id: &str, target: ClickTarget) -> SongClick {
        SongClick {
            row_id: row_id.to_string(),
            target,
        }
    }

    #[test]
    fn add_song_normalises_duration_and_inserts_sorted_row() {
        let mut deck = deck();

        let id = add_song(&mut deck, fields("Z", "02:05")).unwrap();

        assert_eq!(deck.library.song(id).map(|s| s.duration), Some(125));
        let rows = row_ids(&deck, RowKind::Songs);
        assert_eq!(rows.last(), Some(&view::song_row_id(id)));
        assert_eq!(rows.len(), 4);
    }

    #[test]
    fn add_song_row_lands_between_neighbours() {
        let mut deck = deck();

        let id = add_song(&mut deck, fields("c", "00:10")).unwrap();

        let expected = vec!["song2".to_string(), "song1".to_string(), view::song_row_id(id), "song3".to_string()];
        assert_eq!(row_ids(&deck, RowKind::Songs), expected);
    }

    #[test]
    fn add_song_honours_a_free_requested_id() {
        let mut deck = deck();
        let mut f = fields("New", "01:00");
        f.id = Some(77);

        assert_eq!(add_song(&mut deck, f).unwrap(), 77);
        assert!(deck.surface.find_row(RowKind::Songs, "song77").is_some());
    }

    #[test]
    fn add_song_rejects_malformed_duration() {
        let mut deck = deck();

        let err = add_song(&mut deck, fields("Bad", "2 minutes")).unwrap_err();

        assert!(matches!(err, PlayerError::Validation(_)));
        assert_eq!(deck.library.songs().len(), 3);
        assert_eq!(row_ids(&deck, RowKind::Songs).len(), 3);
    }

    #[test]
    fn remove_song_updates_rows_and_playlists() {
        let mut deck = deck();
        assert_eq!(playlist_texts(&deck, "playlist1"), ["Both", "Songs: 2", "02:00"]);

        let removed = remove_song(&mut deck, "song1").unwrap();

        assert_eq!(removed.id, 1);
        assert!(deck.surface.find_row(RowKind::Songs, "song1").is_none());
        assert!(deck.library.playlists().iter().all(|p| !p.songs.contains(&1)));
        assert_eq!(playlist_texts(&deck, "playlist1"), ["Both", "Songs: 1", "00:30"]);
        assert_eq!(playlist_texts(&deck, "playlist2"), ["Just B", "Songs: 0", "00:00"]);
    }

    #[test]
    fn remove_unknown_song_is_not_found() {
        let mut deck = deck();

        let err = remove_song(&mut deck, "song42").unwrap_err();
        assert_eq!(err, PlayerError::not_found(EntityKind::Song, 42));

        let err = remove_song(&mut deck, "garbage").unwrap_err();
        assert_eq!(err, PlayerError::not_found(EntityKind::Row, "garbage"));

        assert_eq!(row_ids(&deck, RowKind::Songs).len(), 3);
    }

    #[test]
    fn padded_row_id_removes_nothing() {
        let mut deck = deck();

        let err = remove_song(&mut deck, "song001").unwrap_err();

        assert_eq!(err, PlayerError::not_found(EntityKind::Row, "song001"));
        assert!(deck.library.song(1).is_some());
        assert_eq!(deck.library.playlist(1).map(|p| p.songs.clone()), Some(vec![1, 2]));
        assert!(deck.surface.find_row(RowKind::Songs, "song1").is_some());
    }

    #[test]
    fn removing_the_playing_song_stops_playback() {
        let mut deck = deck();
        handle_song_click_event(&mut deck, click("song2", ClickTarget::Play)).unwrap();

        remove_song(&mut deck, "song2").unwrap();

        assert_eq!(deck.sequencer.state(), PlaybackState::Idle);
        assert!(deck.surface.rows(RowKind::Songs).iter().all(|r| !r.has_class(SELECTED_CLASS)));
    }

    #[test]
    fn clicks_dispatch_to_controls() {
        let mut deck = deck();

        handle_song_click_event(&mut deck, click("song3", ClickTarget::Play)).unwrap();
        assert_eq!(deck.sequencer.state(), PlaybackState::Playing(3));

        handle_song_click_event(&mut deck, click("song1", ClickTarget::Remove)).unwrap();
        assert!(deck.library.song(1).is_none());

        handle_song_click_event(&mut deck, click("song2", ClickTarget::Row)).unwrap();
        assert_eq!(deck.sequencer.state(), PlaybackState::Playing(3));
        assert!(deck.library.song(2).is_some());
    }

    #[test]
    fn playing_an_unknown_row_is_not_found() {
        let mut deck = deck();

        let err = handle_song_click_event(&mut deck, click("song9", ClickTarget::Play)).unwrap_err();

        assert!(matches!(err, PlayerError::NotFound { .. }));
        assert_eq!(deck.sequencer.state(), PlaybackState::Idle);
    }

    #[test]
    fn elapsed_timer_advances_playback() {
        let mut deck = deck();
        handle_song_click_event(&mut deck, click("song1", ClickTarget::Play)).unwrap();
        let token = deck.sequencer_token();

        handle_playback_elapsed(&mut deck, token).unwrap();

        assert_eq!(deck.sequencer.state(), PlaybackState::Playing(3));
    }

    #[test]
    fn add_song_event_reads_form_and_resets_it() {
        let mut deck = deck();
        let mut form = AddSongForm::new();
        form.set_values(["Zed", "Album", "Artist", "03:00", "zed.png"]);

        let id = handle_add_song_event(&mut deck, &mut form).unwrap();

        let song = deck.library.song(id).unwrap();
        assert_eq!(song.title, "Zed");
        assert_eq!(song.duration, 180);
        assert_eq!(song.cover_art, "zed.png");
        assert_eq!(form.fields(), SongFields::default());
    }

    #[test]
    fn failed_add_song_event_keeps_form_values() {
        let mut deck = deck();
        let mut form = AddSongForm::new();
        form.set_values(["Zed", "Album", "Artist", "3 min", "zed.png"]);

        assert!(handle_add_song_event(&mut deck, &mut form).is_err());
        assert_eq!(form.fields().title, "Zed");
    }

    impl Deck<Document, ManualScheduler> {
        fn sequencer_token(&self) -> u64 {
            self.sequencer.scheduler().last_token()
        }
    }
}

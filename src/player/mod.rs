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

//! Playback sequencing and selection state.
//!
//! Playing a song means highlighting its row for as long as the song lasts
//! and then moving on to the next song in title order. The [`Sequencer`]
//! owns the highlight, the current [`PlaybackState`] and the single pending
//! transition, which it cancels whenever playback is restarted or stopped.

pub(crate) mod timer;

use std::time::Duration;

use tracing::debug;

use crate::{
    dom::{RowKind, SELECTED_CLASS, Surface},
    error::{EntityKind, PlayerError},
    model::{Library, SongId},
    player::timer::{ScheduledTask, Scheduler},
    view::song_row_id,
};

/// Represents the current playback status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PlaybackState {
    Idle,
    Playing(SongId),
}

pub(crate) struct Sequencer<S: Scheduler> {
    scheduler: S,
    state: PlaybackState,
    pending: Option<ScheduledTask>,
    next_token: u64,
    /// Wall-clock milliseconds per second of song duration.
    millis_per_second: u64,
}

impl<S: Scheduler> Sequencer<S> {
    pub(crate) fn new(scheduler: S, millis_per_second: u64) -> Self {
        Self {
            scheduler,
            state: PlaybackState::Idle,
            pending: None,
            next_token: 0,
            millis_per_second,
        }
    }

    pub(crate) fn state(&self) -> PlaybackState {
        self.state
    }

    pub(crate) fn now_playing(&self) -> Option<SongId> {
        match self.state {
            PlaybackState::Playing(id) => Some(id),
            PlaybackState::Idle => None,
        }
    }

    #[cfg(test)]
    pub(crate) fn scheduler(&self) -> &S {
        &self.scheduler
    }

    fn delay_for(&self, duration: u64) -> Duration {
        Duration::from_millis(duration.saturating_mul(self.millis_per_second))
    }

    /// Starts playing a song.
    ///
    /// Any pending transition from an earlier call is cancelled, the
    /// previous highlight is cleared and the song's row is highlighted. The
    /// move to the next song is scheduled after the song's duration.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::NotFound`] if the song or its row does not
    /// exist, leaving playback untouched.
    pub(crate) fn play_song(
        &mut self,
        id: SongId,
        library: &Library,
        surface: &mut impl Surface,
    ) -> Result<(), PlayerError> {
        let song = library
            .song(id)
            .ok_or_else(|| PlayerError::not_found(EntityKind::Song, id))?;
        let row_id = song_row_id(id);
        if surface.find_row(RowKind::Songs, &row_id).is_none() {
            return Err(PlayerError::not_found(EntityKind::Row, row_id));
        }

        self.cancel_pending();
        clear_selection(surface);
        if let Some(row) = surface.find_row_mut(RowKind::Songs, &row_id) {
            row.add_class(SELECTED_CLASS);
        }

        let token = self.next_token;
        self.next_token += 1;

        let delay = self.delay_for(song.duration);
        debug!(song = id, title = %song.title, ?delay, token, "playing");

        self.pending = Some(self.scheduler.schedule(token, id, delay));
        self.state = PlaybackState::Playing(id);

        Ok(())
    }

    /// Plays the song after `current` in title order, or stops if there is
    /// none.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::NotFound`] if the next song has no row; in that
    /// case playback is stopped.
    pub(crate) fn next_song(
        &mut self,
        current: SongId,
        library: &Library,
        surface: &mut impl Surface,
    ) -> Result<(), PlayerError> {
        match library.song_after(current).map(|song| song.id) {
            Some(next) => self.play_song(next, library, surface).inspect_err(|_| self.stop(surface)),
            None => {
                debug!(song = current, "end of songs");
                self.stop(surface);
                Ok(())
            }
        }
    }

    /// Handles the expiry of a scheduled transition.
    ///
    /// Expiries for tasks that were superseded or cancelled are ignored.
    pub(crate) fn on_elapsed(
        &mut self,
        token: u64,
        library: &Library,
        surface: &mut impl Surface,
    ) -> Result<(), PlayerError> {
        if self.pending.as_ref().map(ScheduledTask::token) != Some(token) {
            debug!(token, "ignoring stale playback timer");
            return Ok(());
        }
        self.pending = None;

        match self.state {
            PlaybackState::Playing(current) => self.next_song(current, library, surface),
            PlaybackState::Idle => Ok(()),
        }
    }

    /// Cancels any pending transition and clears the highlight.
    pub(crate) fn stop(&mut self, surface: &mut impl Surface) {
        self.cancel_pending();
        clear_selection(surface);
        self.state = PlaybackState::Idle;
    }

    fn cancel_pending(&mut self) {
        if let Some(task) = self.pending.take() {
            task.cancel();
        }
    }
}

fn clear_selection(surface: &mut impl Surface) {
    for row in surface.rows_mut(RowKind::Songs) {
        row.remove_class(SELECTED_CLASS);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::mpsc::{self, Receiver, TryRecvError};

    use super::*;
    use crate::{
        dom::Document,
        model::Song,
        view::generate_songs,
    };

    /// Records schedule requests instead of running timers.
    #[derive(Default)]
    pub(crate) struct ManualScheduler {
        pub(crate) requests: Vec<(u64, SongId, Duration, Receiver<()>)>,
    }

    impl ManualScheduler {
        pub(crate) fn last_token(&self) -> u64 {
            self.requests.last().map(|r| r.0).unwrap_or_default()
        }

        pub(crate) fn is_cancelled(&self, token: u64) -> bool {
            self.requests
                .iter()
                .find(|r| r.0 == token)
                .is_some_and(|r| matches!(r.3.try_recv(), Err(TryRecvError::Disconnected)))
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule(&mut self, token: u64, song_id: SongId, delay: Duration) -> ScheduledTask {
            let (cancel_tx, cancel_rx) = mpsc::channel();
            self.requests.push((token, song_id, delay, cancel_rx));
            ScheduledTask::new(token, cancel_tx)
        }
    }

    fn song(id: SongId, title: &str, duration: u64) -> Song {
        Song {
            id,
            title: title.to_string(),
            album: String::new(),
            artist: String::new(),
            duration,
            cover_art: String::new(),
        }
    }

    fn setup() -> (Library, Document, Sequencer<ManualScheduler>) {
        let mut library = Library::new(vec![song(1, "B", 90), song(2, "A", 30), song(3, "C", 5)], vec![]);
        let mut doc = Document::new();
        generate_songs(&mut library, &mut doc);
        (library, doc, Sequencer::new(ManualScheduler::default(), 1000))
    }

    fn selected(doc: &Document) -> Vec<String> {
        doc.rows(RowKind::Songs)
            .iter()
            .filter(|r| r.has_class(SELECTED_CLASS))
            .filter_map(|r| r.id().map(str::to_string))
            .collect()
    }

    #[test]
    fn play_highlights_row_and_schedules_by_duration() {
        let (library, mut doc, mut seq) = setup();

        seq.play_song(1, &library, &mut doc).unwrap();

        assert_eq!(seq.state(), PlaybackState::Playing(1));
        assert_eq!(selected(&doc), ["song1"]);
        let (_, song_id, delay, _) = &seq.scheduler.requests[0];
        assert_eq!(*song_id, 1);
        assert_eq!(*delay, Duration::from_secs(90));
    }

    #[test]
    fn time_scale_is_configurable() {
        let (library, mut doc, _) = setup();
        let mut seq = Sequencer::new(ManualScheduler::default(), 10);

        seq.play_song(2, &library, &mut doc).unwrap();

        assert_eq!(seq.scheduler.requests[0].2, Duration::from_millis(300));
    }

    #[test]
    fn elapsed_advances_in_title_order() {
        let (library, mut doc, mut seq) = setup();

        seq.play_song(2, &library, &mut doc).unwrap();
        let token = seq.scheduler.last_token();
        seq.on_elapsed(token, &library, &mut doc).unwrap();

        assert_eq!(seq.state(), PlaybackState::Playing(1));
        assert_eq!(selected(&doc), ["song1"]);
    }

    #[test]
    fn last_song_elapsing_returns_to_idle() {
        let (library, mut doc, mut seq) = setup();

        seq.play_song(3, &library, &mut doc).unwrap();
        let token = seq.scheduler.last_token();
        seq.on_elapsed(token, &library, &mut doc).unwrap();

        assert_eq!(seq.state(), PlaybackState::Idle);
        assert!(selected(&doc).is_empty());
    }

    #[test]
    fn manual_play_cancels_pending_transition() {
        let (library, mut doc, mut seq) = setup();

        seq.play_song(2, &library, &mut doc).unwrap();
        let first = seq.scheduler.last_token();
        seq.play_song(3, &library, &mut doc).unwrap();

        assert!(seq.scheduler.is_cancelled(first));
        assert_eq!(selected(&doc), ["song3"]);

        // An expiry that raced the cancel must not move the selection.
        seq.on_elapsed(first, &library, &mut doc).unwrap();
        assert_eq!(seq.state(), PlaybackState::Playing(3));
        assert_eq!(selected(&doc), ["song3"]);
    }

    #[test]
    fn unknown_song_leaves_playback_untouched() {
        let (library, mut doc, mut seq) = setup();
        seq.play_song(1, &library, &mut doc).unwrap();
        let token = seq.scheduler.last_token();

        let err = seq.play_song(42, &library, &mut doc).unwrap_err();

        assert_eq!(err, PlayerError::not_found(EntityKind::Song, 42));
        assert_eq!(seq.state(), PlaybackState::Playing(1));
        assert_eq!(selected(&doc), ["song1"]);
        assert!(!seq.scheduler.is_cancelled(token));
    }

    #[test]
    fn stop_clears_everything() {
        let (library, mut doc, mut seq) = setup();
        seq.play_song(1, &library, &mut doc).unwrap();
        let token = seq.scheduler.last_token();

        seq.stop(&mut doc);

        assert_eq!(seq.state(), PlaybackState::Idle);
        assert!(selected(&doc).is_empty());
        assert!(seq.scheduler.is_cancelled(token));
        assert_eq!(seq.now_playing(), None);
    }

    #[test]
    fn next_song_of_removed_song_goes_idle() {
        let (mut library, mut doc, mut seq) = setup();
        seq.play_song(1, &library, &mut doc).unwrap();
        let token = seq.scheduler.last_token();

        library.remove_song(1).unwrap();
        seq.on_elapsed(token, &library, &mut doc).unwrap();

        assert_eq!(seq.state(), PlaybackState::Idle);
    }
}

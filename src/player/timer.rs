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

//! Cancellable delayed transitions.
//!
//! The sequencer asks a [`Scheduler`] to post a playback event after a
//! delay. Each request returns a [`ScheduledTask`] handle; cancelling or
//! dropping the handle guarantees the event is never posted by that task.

use std::{
    sync::mpsc::{self, RecvTimeoutError, Sender},
    thread,
    time::Duration,
};

use crate::{events::AppEvent, model::SongId};

pub(crate) trait Scheduler {
    /// Arranges for `song_id`'s playback to be reported as elapsed after
    /// `delay`, tagged with `token`.
    fn schedule(&mut self, token: u64, song_id: SongId, delay: Duration) -> ScheduledTask;
}

/// Handle to one pending transition.
#[derive(Debug)]
pub(crate) struct ScheduledTask {
    token: u64,
    // Never sent on; the timer thread watches for disconnection.
    cancel_tx: Sender<()>,
}

impl ScheduledTask {
    pub(crate) fn new(token: u64, cancel_tx: Sender<()>) -> Self {
        Self { token, cancel_tx }
    }

    pub(crate) fn token(&self) -> u64 {
        self.token
    }

    pub(crate) fn cancel(self) {
        drop(self.cancel_tx);
    }
}

/// Schedules transitions on short-lived timer threads that post
/// [`AppEvent::PlaybackElapsed`] back to the main event loop.
pub(crate) struct ThreadScheduler {
    event_tx: Sender<AppEvent>,
}

impl ThreadScheduler {
    pub(crate) fn new(event_tx: Sender<AppEvent>) -> Self {
        Self { event_tx }
    }
}

impl Scheduler for ThreadScheduler {
    fn schedule(&mut self, token: u64, song_id: SongId, delay: Duration) -> ScheduledTask {
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();
        let event_tx = self.event_tx.clone();

        thread::spawn(move || {
            // Disconnection means the task was cancelled before the delay ran out.
            if let Err(RecvTimeoutError::Timeout) = cancel_rx.recv_timeout(delay) {
                let _ = event_tx.send(AppEvent::PlaybackElapsed { token, song_id });
            }
        });

        ScheduledTask::new(token, cancel_tx)
    }
}

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

//! Video playback control.
//!
//! This module provides the [`MediaPlayer`] interface the playlist uses to
//! drive one platform player instance per loaded video, and [`MpvPlayer`],
//! the implementation backed by MPV. Each [`MpvPlayer`] manages a background
//! worker thread owning its own MPV context, ensuring that MPV operations do
//! not block the main application thread.

mod commands;

use std::{
    path::Path,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
        mpsc,
    },
};

use thiserror::Error;
use tracing::debug;

use crate::{
    events::AppEvent, model::MediaId, player::commands::PlayerCommand, util::format::display_name,
};

#[derive(Debug, Error)]
pub(crate) enum PlayerError {
    #[error("the player for {0} is no longer running")]
    Disconnected(String),
}

/// A single platform player instance bound to one media source.
///
/// Rates are signed: a negative rate plays backwards. A player remembers the
/// last rate it was given while paused, so resuming continues at that rate.
pub(crate) trait MediaPlayer {
    /// Starts or resumes playback at the remembered rate.
    fn play(&mut self) -> Result<(), PlayerError>;

    fn pause(&mut self) -> Result<(), PlayerError>;

    /// Sets the playback rate without changing whether the player is paused.
    fn set_rate(&mut self, rate: f32) -> Result<(), PlayerError>;

    /// The effective playback rate, zero whenever the player is not playing.
    fn rate(&self) -> f32;

    fn is_playing(&self) -> bool {
        self.rate() != 0.0
    }

    fn seek_to_start(&mut self) -> Result<(), PlayerError>;

    /// Stops playback for good, releasing the media source.
    fn stop(&mut self) -> Result<(), PlayerError>;
}

/// A handle to an MPV playback engine for one media file.
///
/// This struct acts as a command proxy; it does not perform any playback
/// itself but instead sends instructions to a background worker thread. The
/// pause state is mirrored back from the worker, so [`MediaPlayer::rate`]
/// reflects pauses MPV makes on its own (at the end of a stream, say).
pub(crate) struct MpvPlayer {
    name: String,
    command_tx: mpsc::Sender<PlayerCommand>,
    paused: Arc<AtomicBool>,
    rate: f32,
}

impl MpvPlayer {
    /// Spawns the player worker thread and returns a new player handle.
    ///
    /// The media file is not opened until playback is first requested.
    ///
    /// # Arguments
    ///
    /// * `id` - Identity of the media item, reported with end-of-stream events.
    /// * `path` - The path to the video file on disk.
    /// * `event_tx` - A channel to send application-level events (like
    ///   end-of-stream notifications or errors) back to the main event loop.
    pub(crate) fn open(id: MediaId, path: &Path, event_tx: mpsc::Sender<AppEvent>) -> Self {
        let (command_tx, command_rx) = mpsc::channel::<PlayerCommand>();
        let paused = Arc::new(AtomicBool::new(true));

        commands::spawn_player_worker(
            id,
            path.to_path_buf(),
            command_rx,
            Arc::clone(&paused),
            event_tx,
        );

        Self {
            name: display_name(path),
            command_tx,
            paused,
            rate: 1.0,
        }
    }

    fn send(&self, command: PlayerCommand) -> Result<(), PlayerError> {
        self.command_tx
            .send(command)
            .map_err(|_| PlayerError::Disconnected(self.name.clone()))
    }
}

impl MediaPlayer for MpvPlayer {
    fn play(&mut self) -> Result<(), PlayerError> {
        self.send(PlayerCommand::Play)?;
        self.paused.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn pause(&mut self) -> Result<(), PlayerError> {
        self.send(PlayerCommand::Pause)?;
        self.paused.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn set_rate(&mut self, rate: f32) -> Result<(), PlayerError> {
        self.send(PlayerCommand::SetRate(rate))?;
        self.rate = rate;
        Ok(())
    }

    fn rate(&self) -> f32 {
        if self.paused.load(Ordering::SeqCst) {
            0.0
        } else {
            self.rate
        }
    }

    fn seek_to_start(&mut self) -> Result<(), PlayerError> {
        self.send(PlayerCommand::SeekToStart)
    }

    fn stop(&mut self) -> Result<(), PlayerError> {
        self.send(PlayerCommand::Stop)?;
        self.paused.store(true, Ordering::SeqCst);
        Ok(())
    }
}

impl Drop for MpvPlayer {
    fn drop(&mut self) {
        debug!(name = %self.name, "shutting down player");
        // The worker may already be gone
        let _ = self.command_tx.send(PlayerCommand::Shutdown);
    }
}

impl std::fmt::Debug for MpvPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MpvPlayer")
            .field("name", &self.name)
            .field("rate", &self.rate)
            .finish()
    }
}

/// A scripted in-memory player used by unit tests throughout the crate.
#[cfg(test)]
pub(crate) mod fake {
    use super::{MediaPlayer, PlayerError};

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum Call {
        Play,
        Pause,
        SetRate(f32),
        SeekToStart,
        Stop,
    }

    #[derive(Debug, Default)]
    pub(crate) struct FakePlayer {
        pub(crate) playing: bool,
        pub(crate) remembered_rate: Option<f32>,
        pub(crate) stopped: bool,
        pub(crate) disconnected: bool,
        pub(crate) calls: Vec<Call>,
    }

    impl FakePlayer {
        pub(crate) fn playing() -> Self {
            Self {
                playing: true,
                ..Self::default()
            }
        }

        pub(crate) fn disconnected() -> Self {
            Self {
                disconnected: true,
                ..Self::default()
            }
        }

        fn record(&mut self, call: Call) -> Result<(), PlayerError> {
            if self.disconnected {
                return Err(PlayerError::Disconnected("fake".to_string()));
            }
            self.calls.push(call);
            Ok(())
        }
    }

    impl MediaPlayer for FakePlayer {
        fn play(&mut self) -> Result<(), PlayerError> {
            self.record(Call::Play)?;
            self.playing = true;
            Ok(())
        }

        fn pause(&mut self) -> Result<(), PlayerError> {
            self.record(Call::Pause)?;
            self.playing = false;
            Ok(())
        }

        fn set_rate(&mut self, rate: f32) -> Result<(), PlayerError> {
            self.record(Call::SetRate(rate))?;
            self.remembered_rate = Some(rate);
            Ok(())
        }

        fn rate(&self) -> f32 {
            if self.playing {
                self.remembered_rate.unwrap_or(1.0)
            } else {
                0.0
            }
        }

        fn seek_to_start(&mut self) -> Result<(), PlayerError> {
            self.record(Call::SeekToStart)
        }

        fn stop(&mut self) -> Result<(), PlayerError> {
            self.record(Call::Stop)?;
            self.playing = false;
            self.stopped = true;
            Ok(())
        }
    }
}

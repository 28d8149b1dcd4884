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

//! MPV-backed video playback engine and event processing.
//!
//! This module provides the playback worker behind each [`MpvPlayer`]
//! handle. A worker thread owns one MPV context for one file and bridges the
//! gap between the handle's command-based interface and the low-level MPV
//! property observation system.
//!
//! # Architecture
//!
//! The engine operates using a dual-channel communication pattern:
//! 1. **Command Channel**: Receives [`PlayerCommand`]s from the handle to
//!    control playback (play, pause, rate, seek, etc.).
//! 2. **Event Channel**: Sends [`AppEvent`]s to notify the application of
//!    end-of-stream and worker failures.
//!
//! MPV is configured with `keep-open` so that a finished stream stays on its
//! last frame, paused, instead of unloading the file.
//!
//! [`MpvPlayer`]: crate::player::MpvPlayer

use anyhow::{Context, Result};
use mpv::Format;
use std::{
    path::PathBuf,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
        mpsc::{self, Receiver, Sender, TryRecvError},
    },
    thread,
};
use tracing::{debug, warn};

use crate::{events::AppEvent, model::MediaId};

#[derive(Debug)]
pub(crate) enum PlayerCommand {
    Play,
    Pause,
    SetRate(f32),
    SeekToStart,
    Stop,
    Shutdown,
}

/// Whether the worker loop should keep running after a batch of commands.
#[derive(Debug, PartialEq)]
enum Flow {
    Continue,
    Exit,
}

/// State owned by a worker for the lifetime of its MPV context.
struct Worker {
    id: MediaId,
    path: PathBuf,
    loaded: bool,
    paused: Arc<AtomicBool>,
    event_tx: Sender<AppEvent>,
}

/// Spawns a player worker thread to process playback commands for one file.
///
/// If the internal worker returns an error, it is caught here and sent as an
/// application error event; the handle will report itself disconnected on
/// its next command.
///
/// # Arguments
///
/// * `id` - Identity of the media item reported with end-of-stream events.
/// * `path` - The media file to play.
/// * `command_rx` - The receiving end of the player command channel.
/// * `paused` - Pause flag shared with the handle, kept in sync with MPV.
/// * `event_tx` - The channel used to send playback notifications and errors.
pub(crate) fn spawn_player_worker(
    id: MediaId,
    path: PathBuf,
    command_rx: Receiver<PlayerCommand>,
    paused: Arc<AtomicBool>,
    event_tx: Sender<AppEvent>,
) {
    let error_tx = event_tx.clone();

    thread::spawn(move || {
        let worker = Worker {
            id,
            path,
            loaded: false,
            paused,
            event_tx,
        };

        if let Err(e) = player_worker(worker, command_rx) {
            warn!(?id, "player worker failed: {:#}", e);
            let _ = error_tx.send(AppEvent::Error(format!("MPV player failure: {:#}", e)));
        }
    });
}

/// The primary execution loop for one player.
///
/// This function initializes a local `libmpv` context and alternates between
/// draining incoming commands and waiting briefly for MPV events, until the
/// handle shuts it down or MPV itself shuts down (for example when the user
/// closes the video window).
fn player_worker(mut worker: Worker, command_rx: Receiver<PlayerCommand>) -> Result<()> {
    let mut handler = (|| {
        let mut builder = mpv::MpvHandlerBuilder::new().context("Failed to create MPV builder")?;
        builder
            .set_option("keep-open", "yes")
            .context("Failed to set keep-open")?;
        builder
            .set_option("pause", "yes")
            .context("Failed to start paused")?;
        builder.build().context("Failed to build MPV handler")
    })()?;

    handler
        .observe_property::<bool>("pause", 0)
        .context("Failed to observe pause")?;
    handler
        .observe_property::<bool>("eof-reached", 0)
        .context("Failed to observe eof-reached")?;

    loop {
        if process_commands(&mut handler, &mut worker, &command_rx)? == Flow::Exit {
            debug!(id = ?worker.id, "player worker exiting");
            return Ok(());
        }
        if process_mpv_events(&mut handler, &worker)? == Flow::Exit {
            debug!(id = ?worker.id, "MPV shut down");
            return Ok(());
        }
    }
}

/// Drains and executes all pending commands from the handle.
fn process_commands(
    handler: &mut mpv::MpvHandler,
    worker: &mut Worker,
    command_rx: &mpsc::Receiver<PlayerCommand>,
) -> Result<Flow> {
    loop {
        let command = match command_rx.try_recv() {
            Ok(command) => command,
            Err(TryRecvError::Empty) => return Ok(Flow::Continue),
            Err(TryRecvError::Disconnected) => return Ok(Flow::Exit),
        };

        match command {
            PlayerCommand::Play => {
                if !worker.loaded {
                    let filename = worker.path.to_string_lossy().into_owned();
                    handler
                        .command(&["loadfile", &filename, "replace"])
                        .context(format!("Failed to load file: {}", &filename))?;
                    worker.loaded = true;
                }
                handler.set_property("pause", false)?;
            }
            PlayerCommand::Pause => {
                handler.set_property("pause", true)?;
            }
            PlayerCommand::SetRate(rate) => {
                let (speed, direction) = mpv_speed(rate);
                handler.set_property("speed", speed)?;
                handler.set_property("play-direction", direction)?;
            }
            PlayerCommand::SeekToStart => {
                if worker.loaded {
                    handler.command(&["seek", "0", "absolute"])?;
                }
            }
            PlayerCommand::Stop => {
                handler.command(&["stop"])?;
                worker.loaded = false;
            }
            PlayerCommand::Shutdown => return Ok(Flow::Exit),
        }
    }
}

/// Polls for MPV events and synchronizes the shared player state.
///
/// This function waits for up to 50ms for an event from the MPV context.
fn process_mpv_events(handler: &mut mpv::MpvHandler, worker: &Worker) -> Result<Flow> {
    if let Some(mpv_event) = handler.wait_event(0.05) {
        match mpv_event {
            mpv::Event::PropertyChange { name, change, .. } => match (name, change) {
                ("pause", Format::Flag(pause)) => {
                    worker.paused.store(pause, Ordering::SeqCst);
                }
                ("eof-reached", Format::Flag(true)) => {
                    worker
                        .event_tx
                        .send(AppEvent::PlaybackFinished(worker.id))
                        .context("Failed to send playback finished event")?;
                }
                _ => {}
            },
            mpv::Event::Shutdown => return Ok(Flow::Exit),
            _ => {}
        }
    }

    Ok(Flow::Continue)
}

/// Maps a signed playback rate onto MPV's unsigned `speed` and its
/// `play-direction`.
fn mpv_speed(rate: f32) -> (f64, &'static str) {
    let direction = if rate < 0.0 { "backward" } else { "forward" };
    (f64::from(rate.abs()), direction)
}

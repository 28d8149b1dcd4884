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

//! Application event handling.
//!
//! This module acts as the central hub for the "Controller" logic of the
//! application. Every input (key presses, probe results, end-of-stream
//! notifications from the players, periodic ticks) arrives as an
//! [`AppEvent`] on a single channel and is processed, in order, on the main
//! thread. The playlist is therefore only ever mutated from one thread.

mod handlers;
mod key_handlers;

use handlers::*;

use std::{io::Stdout, path::PathBuf};

use anyhow::{Result, anyhow};
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    model::{MediaId, ProbedMedia},
    playlist::mode::PlaybackMode,
    render::draw,
    tasks::{ProbeTicket, probe::ProbeError},
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    AddMedia(PathBuf),
    ProbeFinished {
        ticket: ProbeTicket,
        result: Result<ProbedMedia, ProbeError>,
    },
    /// Cancels in-flight probes, of one file name or of everything.
    CancelProbes(Option<String>),

    PlaybackFinished(MediaId),

    SetPlaybackMode(PlaybackMode),
    TogglePlaybackMode,
    ToggleMetadata,

    Tick,

    Error(String),
    FatalError(String),

    ExitApplication,
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed.
///
/// # Errors
///
/// Returns an error when a fatal error event is received, or when the
/// terminal can no longer be drawn to.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        match event {
            AppEvent::ExitApplication => break,
            AppEvent::FatalError(message) => return Err(anyhow!(message)),

            AppEvent::Key(key) => key_handlers::process_key_event(app, key)?,
            AppEvent::AddMedia(path) => handle_add_media(app, path)?,
            AppEvent::ProbeFinished { ticket, result } => {
                handle_probe_finished(app, ticket, result)
            }
            AppEvent::CancelProbes(name) => handle_cancel_probes(app, name),
            AppEvent::PlaybackFinished(id) => handle_playback_finished(app, id),
            AppEvent::SetPlaybackMode(mode) => handle_set_playback_mode(app, mode),
            AppEvent::TogglePlaybackMode => handle_toggle_playback_mode(app),
            AppEvent::ToggleMetadata => handle_toggle_metadata(app),
            AppEvent::Error(message) => handle_error(app, message),
            AppEvent::Tick => handle_tick(app),
        }

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

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

use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::{
    App,
    config::save_config,
    model::{MediaId, MediaItem, ProbedMedia},
    player::{MpvPlayer, PlayerError},
    playlist::mode::PlaybackMode,
    status::StatusMessage,
    tasks::{AppTask, ProbeTicket, probe::ProbeError},
    util::format::display_name,
};

pub(super) fn handle_add_media(app: &mut App, path: PathBuf) -> Result<()> {
    let ticket = app.probes.begin(&path);
    info!(?ticket, path = %path.display(), "loading");
    app.status = Some(StatusMessage::info(format!("Loading {}", display_name(&path))));
    app.task_tx.send(AppTask::Probe { ticket, path })?;

    Ok(())
}

pub(super) fn handle_probe_finished(
    app: &mut App,
    ticket: ProbeTicket,
    result: Result<ProbedMedia, ProbeError>,
) {
    let Some(path) = app.probes.complete(ticket) else {
        debug!(?ticket, "discarding result of cancelled probe");
        return;
    };

    match result {
        Ok(probed) => {
            let id = MediaId(ticket.0);
            let player = MpvPlayer::open(id, &probed.path, app.event_tx.clone());
            app.status = Some(StatusMessage::info(format!("Added {}", probed.name)));
            app.playlist.add(MediaItem::new(id, probed, player));
            app.playlist_view.sync(app.playlist.len());
        }
        Err(e) => {
            warn!(path = %path.display(), "probe failed: {}", e);
            app.status = Some(StatusMessage::error(format!(
                "Could not load {}: {}",
                display_name(&path),
                e
            )));
        }
    }
}

pub(super) fn handle_cancel_probes(app: &mut App, name: Option<String>) {
    if app.probes.is_empty() {
        app.status = Some(StatusMessage::info("Nothing is loading"));
        return;
    }

    let cancelled = match name {
        Some(name) => app.probes.cancel_named(&name),
        None => app.probes.cancel_all(),
    };
    info!(cancelled, "cancelled probes");
    app.status = Some(StatusMessage::info(format!("Cancelled {} pending", cancelled)));
}

pub(super) fn handle_playback_finished(app: &mut App, id: MediaId) {
    if !app.playlist.is_selected(id) {
        debug!(?id, "ignoring end of stream from an item that is not selected");
        return;
    }

    let result = app.playlist.on_playback_finished();
    report_player_result(app, result);
    if let Some(index) = app.playlist.selected_index() {
        app.playlist_view.select(index);
    }
}

pub(super) fn handle_set_playback_mode(app: &mut App, mode: PlaybackMode) {
    app.playlist.set_mode(mode);
    store_playback_mode(app, mode);
}

pub(super) fn handle_toggle_playback_mode(app: &mut App) {
    let mode = app.playlist.toggle_playback_mode();
    store_playback_mode(app, mode);
}

fn store_playback_mode(app: &mut App, mode: PlaybackMode) {
    app.status = Some(StatusMessage::info(format!("Playback mode: {}", mode)));
    app.config.playback_mode = mode;
    store_config(app);
}

pub(super) fn handle_toggle_metadata(app: &mut App) {
    app.playlist_view.show_metadata = !app.playlist_view.show_metadata;
    app.config.show_metadata = app.playlist_view.show_metadata;
    store_config(app);
}

fn store_config(app: &mut App) {
    if let Err(e) = save_config(&app.config) {
        warn!("failed to save configuration: {}", e);
        app.status = Some(StatusMessage::error(format!(
            "Could not save settings: {}",
            e
        )));
    }
}

pub(super) fn handle_error(app: &mut App, message: String) {
    warn!("{}", message);
    app.status = Some(StatusMessage::error(message));
}

pub(super) fn handle_tick(app: &mut App) {
    if app.status.as_ref().is_some_and(StatusMessage::is_expired) {
        app.status = None;
    }
}

/// Shows a failed player command in the status line; these are not fatal.
pub(super) fn report_player_result(app: &mut App, result: Result<(), PlayerError>) {
    if let Err(e) = result {
        warn!("player command failed: {}", e);
        app.status = Some(StatusMessage::error(e.to_string()));
    }
}

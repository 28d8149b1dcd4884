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

//! Keyboard input routing.
//!
//! Keys go first to the command line when it is open, then to the
//! application-level bindings below. The playback control keys (space, `j`,
//! `k`, `l`) are passed to the playlist as typed.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::{App, events::AppEvent, events::handlers::report_player_result};

/// Maps keyboard input to application actions and playback commands.
///
/// This function acts as the primary input router for the TUI, translating
/// low-level [`KeyEvent`]s into high-level domain logic. It handles:
///
/// * **Application Control**: Life-cycle events like exiting the program.
/// * **Navigation**: Moving the cursor through the playlist and selecting.
/// * **Playback**: Play/pause and the directional speed keys.
/// * **Playlist Management**: Adding and removing videos, changing the
///   playback mode.
///
/// # Errors
///
/// Returns an error if an event fails to send to the event loop.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    let handled = app.commander.handle_key(key, &app.event_tx)?;
    if handled {
        return Ok(());
    }

    process_global_key_event(app, key)
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let len = app.playlist.len();

    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        KeyCode::Char(c @ (' ' | 'j' | 'k' | 'l')) => {
            let result = app.playlist.handle_key(c.encode_utf8(&mut [0; 4]));
            report_player_result(app, result);
        }

        KeyCode::Down => app.playlist_view.next(len),
        KeyCode::Up => app.playlist_view.previous(len),
        KeyCode::Home => app.playlist_view.first(len),
        KeyCode::End => app.playlist_view.last(len),

        KeyCode::Enter => {
            if let Some(index) = app.playlist_view.cursor().filter(|&idx| idx < len) {
                let result = app.playlist.select(index);
                report_player_result(app, result);
            }
        }

        KeyCode::Char('x') | KeyCode::Delete => {
            if let Some(index) = app.playlist_view.cursor().filter(|&idx| idx < len) {
                let result = app.playlist.remove(index);
                report_player_result(app, result);
                app.playlist_view.sync(app.playlist.len());
            }
        }

        KeyCode::Char('m') => app.event_tx.send(AppEvent::TogglePlaybackMode)?,
        KeyCode::Char('i') => app.event_tx.send(AppEvent::ToggleMetadata)?,
        KeyCode::Char('a') => app.commander.open_with("add "),

        _ => {}
    }

    Ok(())
}

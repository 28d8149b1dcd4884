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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! Rendering only reads the playlist; it never changes playback state.

mod commander;
pub(crate) mod icons;
mod metadata;
mod player;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{
    App,
    render::{commander::draw_commander, metadata::draw_metadata, player::draw_player},
};

const METADATA_PANEL_WIDTH: u16 = 40;

/// Renders the user interface to the terminal frame.
///
/// The screen is split into the playlist (with the optional metadata panel
/// to its right), the player bar, and a single line shared by the command
/// line and status messages.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .split(area);

    let metadata_width = if app.playlist_view.show_metadata {
        METADATA_PANEL_WIDTH
    } else {
        0
    };

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(metadata_width)])
        .split(outer[0]);

    app.playlist_view
        .draw(f, main[0], &app.playlist, &app.probes, &app.theme);

    if app.playlist_view.show_metadata {
        // Details follow the cursor rather than the selection
        let item = app
            .playlist_view
            .cursor()
            .and_then(|idx| app.playlist.items().get(idx));
        draw_metadata(f, main[1], item, &app.theme);
    }

    draw_player(f, outer[1], app);

    draw_commander(f, outer[2], app);
}

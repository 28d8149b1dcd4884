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

//! UI rendering logic for the playlist view.

use std::time::Duration;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table},
};

use crate::{
    components::PlaylistView,
    model::MediaItem,
    player::MediaPlayer,
    playlist::PlaylistController,
    render::icons::{ICON_LOADING, ICON_PAUSE, ICON_PLAY},
    tasks::PendingProbes,
    theme::Theme,
    util::format::{display_name, format_time},
};

impl PlaylistView {
    pub(crate) fn draw<P: MediaPlayer>(
        &mut self,
        f: &mut Frame,
        area: Rect,
        playlist: &PlaylistController<P>,
        pending: &PendingProbes,
        theme: &Theme,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));

        f.render_widget(
            Paragraph::new(header_text(playlist, pending)).block(header_block),
            chunks[0],
        );

        let selected = playlist.selected_index();
        let item_rows = playlist
            .items()
            .iter()
            .enumerate()
            .map(|(idx, item)| item_row(item, selected == Some(idx), theme));

        let pending_rows = pending.paths().map(|path| {
            Row::new(vec![
                Cell::from(ICON_LOADING),
                Cell::from(""),
                Cell::from(""),
                Cell::from(display_name(path)),
            ])
            .style(Style::default().fg(theme.table_pending_fg).add_modifier(Modifier::ITALIC))
        });

        let table = Table::new(
            item_rows.chain(pending_rows),
            [
                Constraint::Length(2),
                Constraint::Length(8),
                Constraint::Length(16),
                Constraint::Min(0),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(""),
                Cell::from(Line::from("Time").alignment(Alignment::Right)),
                Cell::from("Size"),
                Cell::from("Name"),
            ])
            .style(Style::default().bold().fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(theme.highlight_colour))
        .block(Block::default().padding(Padding::horizontal(1)));

        f.render_stateful_widget(table, chunks[1], &mut self.table_state);
    }
}

fn item_row<'a, P: MediaPlayer>(item: &'a MediaItem<P>, selected: bool, theme: &Theme) -> Row<'a> {
    let marker = match (selected, item.player.is_playing()) {
        (true, true) => ICON_PLAY,
        (true, false) => ICON_PAUSE,
        (false, _) => "",
    };

    let size = match item.size.aspect_ratio() {
        Some(aspect) => format!("{}x{} {:.2}", item.size.width, item.size.height, aspect),
        None => format!("{}x{}", item.size.width, item.size.height),
    };

    let name_style = if selected {
        Style::default().fg(theme.table_name_fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.table_name_fg)
    };

    Row::new(vec![
        Cell::from(Line::from(marker).style(Style::default().fg(theme.table_marker_fg))),
        Cell::from(
            Line::from(format_time(item.duration))
                .style(Style::default().fg(theme.table_time_fg))
                .alignment(Alignment::Right),
        ),
        Cell::from(Line::from(size).style(Style::default().fg(theme.table_size_fg))),
        Cell::from(Line::from(item.name.as_str()).style(name_style)),
    ])
}

fn header_text<P: MediaPlayer>(playlist: &PlaylistController<P>, pending: &PendingProbes) -> String {
    if playlist.is_empty() && pending.is_empty() {
        return "Playlist is empty, press a to add a video".to_string();
    }

    let total_duration: Duration = playlist.items().iter().map(|item| item.duration).sum();
    let mut text = format!(
        "Playlist | {} videos | {} | {}",
        playlist.len(),
        format_time(total_duration),
        playlist.mode()
    );
    if !pending.is_empty() {
        text.push_str(&format!(" | {} loading", pending.len()));
    }
    text
}

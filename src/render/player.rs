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

//! Render the player bar.
//!
//! Shows the selected video, its playback state and rate, the current
//! playback mode, and where the rate sits on the speed ladder.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use crate::{
    App,
    player::MediaPlayer,
    playlist::speed::SPEED_LADDER,
    render::icons::{ICON_FF, ICON_PAUSE, ICON_PLAY, ICON_RW, ICON_STOP},
    util::format::{format_rate, format_time},
};

/// Renders the player bar for the selected item.
pub(crate) fn draw_player(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(app.theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner_area);

    let info_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(30)])
        .split(chunks[0]);

    let bold = Style::default().add_modifier(Modifier::BOLD);

    let Some(item) = app.playlist.selected_item() else {
        let idle = Line::from(vec![
            Span::styled(format!(" {} ", ICON_STOP), bold).fg(Color::White),
            Span::raw("Nothing loaded, press "),
            Span::styled("a", bold).fg(app.theme.accent_colour),
            Span::raw(" to add a video"),
        ]);
        f.render_widget(Paragraph::new(idle), info_chunks[0]);
        return;
    };

    let rate = item.player.rate();
    let icon = match rate {
        r if r == 0.0 => ICON_PAUSE,
        r if r < 0.0 => ICON_RW,
        r if r > 1.0 => ICON_FF,
        _ => ICON_PLAY,
    };

    let title_line = Line::from(vec![
        Span::styled(format!(" {} ", icon), bold).fg(Color::White),
        Span::styled(item.name.as_str(), bold).fg(app.theme.accent_colour),
    ]);
    f.render_widget(Paragraph::new(title_line), info_chunks[0]);

    let state_line = Line::from(vec![
        Span::styled(format_rate(rate), bold).fg(app.theme.accent_colour),
        Span::styled(" | ", bold).fg(Color::White),
        Span::styled(app.playlist.mode().label(), bold).fg(app.theme.accent_colour),
        Span::styled(" | ", bold).fg(Color::White),
        Span::styled(format_time(item.duration), bold).fg(app.theme.accent_colour),
    ]);
    f.render_widget(
        Paragraph::new(state_line).alignment(Alignment::Right),
        info_chunks[1],
    );

    let ladder_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(6)])
        .split(chunks[2]);

    let speed_gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(app.theme.accent_colour)
                .bg(app.theme.gauge_track_colour),
        )
        .ratio(ladder_ratio(app.playlist.speed()))
        .label("")
        .use_unicode(true);
    f.render_widget(speed_gauge, ladder_chunks[0]);

    let speed_label = Paragraph::new(format_rate(app.playlist.speed()))
        .alignment(Alignment::Right)
        .fg(Color::White);
    f.render_widget(speed_label, ladder_chunks[1]);
}

/// Position of a speed magnitude on the ladder, from 0 (slowest) to 1.
fn ladder_ratio(speed: f32) -> f64 {
    let steps = SPEED_LADDER.len().saturating_sub(1).max(1);
    let position = SPEED_LADDER
        .iter()
        .position(|&s| s == speed)
        .unwrap_or(0);
    position as f64 / steps as f64
}

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

//! Render the media details panel.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::{
    model::MediaItem,
    theme::Theme,
    util::format::{format_bitrate, format_file_size, format_frame_rate, format_time},
};

pub(crate) fn draw_metadata<P>(f: &mut Frame, area: Rect, item: Option<&MediaItem<P>>, theme: &Theme) {
    let block = Block::default()
        .title(" Details ")
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1));

    let lines = match item {
        Some(item) => detail_lines(item, theme),
        None => vec![Line::from(Span::styled(
            "No video under the cursor",
            Style::default().fg(theme.label_fg),
        ))],
    };

    let panel = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(panel, area);
}

fn detail_lines<'a, P>(item: &'a MediaItem<P>, theme: &Theme) -> Vec<Line<'a>> {
    let mut details = vec![
        ("Name", item.name.clone()),
        ("Duration", format_time(item.duration)),
        (
            "Resolution",
            format!("{}x{}", item.size.width, item.size.height),
        ),
    ];

    if let Some(aspect) = item.size.aspect_ratio() {
        details.push(("Aspect", format!("{:.3}", aspect)));
    }

    // Probing may not have been able to read any of these
    if let Some(metadata) = &item.metadata {
        let optional = [
            ("Video", metadata.video_codec.clone()),
            ("Audio", metadata.audio_codec.clone()),
            ("Bitrate", metadata.bitrate.map(format_bitrate)),
            ("Frame rate", metadata.frame_rate.map(format_frame_rate)),
            ("File size", metadata.file_size.map(format_file_size)),
            ("Bit depth", metadata.bit_depth.map(|depth| format!("{}-bit", depth))),
            ("Colour", metadata.color_space.clone()),
        ];
        details.extend(
            optional
                .into_iter()
                .filter_map(|(label, value)| value.map(|value| (label, value))),
        );
    }

    details.push(("Path", item.path.display().to_string()));

    details
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{:<11}", label), Style::default().fg(theme.label_fg)),
                Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
            ])
        })
        .collect()
}

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

//! Human-readable formatting of media details for the UI.

use std::{path::Path, time::Duration};

/// Formats a duration as `MM:SS`, or `H:MM:SS` from one hour up.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_time(Duration::from_secs(65)), "01:05");
/// assert_eq!(format_time(Duration::from_secs(3600)), "1:00:00");
/// ```
pub(crate) fn format_time(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let mins = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{:02}:{:02}", mins, secs)
    }
}

/// Formats a signed playback rate, such as `2×` or `-8×`.
pub(crate) fn format_rate(rate: f32) -> String {
    format!("{}\u{00D7}", rate)
}

pub(crate) fn format_bitrate(bits_per_second: u64) -> String {
    match bits_per_second {
        b if b >= 1_000_000 => format!("{:.1} Mbps", b as f64 / 1_000_000.0),
        b if b >= 1_000 => format!("{} kbps", b / 1_000),
        b => format!("{} bps", b),
    }
}

pub(crate) fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut size = bytes as f64 / 1024.0;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", size, UNITS[unit])
}

pub(crate) fn format_frame_rate(fps: f64) -> String {
    if (fps - fps.round()).abs() < 0.005 {
        format!("{:.0} fps", fps)
    } else {
        format!("{:.2} fps", fps)
    }
}

/// The file name of a path, for display.
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_switches_to_hours() {
        assert_eq!(format_time(Duration::from_secs(65)), "01:05");
        assert_eq!(format_time(Duration::from_secs(3599)), "59:59");
        assert_eq!(format_time(Duration::from_secs(3600)), "1:00:00");
        assert_eq!(format_time(Duration::from_secs(7322)), "2:02:02");
    }

    #[test]
    fn rates_keep_their_sign() {
        assert_eq!(format_rate(2.0), "2\u{00D7}");
        assert_eq!(format_rate(-64.0), "-64\u{00D7}");
    }

    #[test]
    fn bitrate_units() {
        assert_eq!(format_bitrate(800), "800 bps");
        assert_eq!(format_bitrate(128_000), "128 kbps");
        assert_eq!(format_bitrate(4_500_000), "4.5 Mbps");
    }

    #[test]
    fn file_size_units() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5.0 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3.0 GB");
    }

    #[test]
    fn frame_rates() {
        assert_eq!(format_frame_rate(25.0), "25 fps");
        assert_eq!(format_frame_rate(29.97), "29.97 fps");
    }

    #[test]
    fn display_name_prefers_file_name() {
        assert_eq!(display_name(Path::new("/videos/clip.mp4")), "clip.mp4");
        assert_eq!(display_name(Path::new("/")), "/");
    }
}

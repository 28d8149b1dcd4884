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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, the videos
//! loaded into a playlist session together with the details extracted when
//! each one was probed.

use std::{path::PathBuf, time::Duration};

/// Session-unique identity of a loaded media item.
///
/// Identities are never reused within a session, so late events (such as an
/// end-of-stream notification from a player that has since been removed) can
/// be matched against the current playlist safely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct MediaId(pub(crate) u64);

/// Natural display size of a video track, with any rotation already applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DisplaySize {
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl DisplaySize {
    /// Computes the display size of a track from its coded size and the
    /// rotation (in degrees) declared by the container.
    pub(crate) fn from_rotated(width: u32, height: u32, rotation: i64) -> Self {
        match rotation.rem_euclid(360) {
            90 | 270 => Self {
                width: height,
                height: width,
            },
            _ => Self { width, height },
        }
    }

    /// Width divided by height, or `None` for a degenerate size.
    pub(crate) fn aspect_ratio(&self) -> Option<f64> {
        if self.height == 0 {
            None
        } else {
            Some(self.width as f64 / self.height as f64)
        }
    }
}

/// Technical details of a video file, each of which may be unavailable.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct MediaMetadata {
    pub(crate) video_codec: Option<String>,
    pub(crate) audio_codec: Option<String>,
    /// Bits per second.
    pub(crate) bitrate: Option<u64>,
    pub(crate) frame_rate: Option<f64>,
    /// Bytes.
    pub(crate) file_size: Option<u64>,
    pub(crate) bit_depth: Option<u32>,
    pub(crate) color_space: Option<String>,
}

impl MediaMetadata {
    pub(crate) fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Everything learned about a file by a successful probe.
///
/// This is produced on the probe worker thread and handed to the main thread,
/// where a player is attached to it to form a [`MediaItem`].
#[derive(Debug, Clone)]
pub(crate) struct ProbedMedia {
    pub(crate) name: String,
    pub(crate) path: PathBuf,
    pub(crate) size: DisplaySize,
    pub(crate) duration: Duration,
    pub(crate) metadata: Option<MediaMetadata>,
}

/// One video loaded into the playlist, together with its player instance.
#[derive(Debug)]
pub(crate) struct MediaItem<P> {
    pub(crate) id: MediaId,
    pub(crate) name: String,
    pub(crate) path: PathBuf,
    pub(crate) size: DisplaySize,
    pub(crate) duration: Duration,
    pub(crate) metadata: Option<MediaMetadata>,
    pub(crate) player: P,
}

impl<P> MediaItem<P> {
    pub(crate) fn new(id: MediaId, probed: ProbedMedia, player: P) -> Self {
        Self {
            id,
            name: probed.name,
            path: probed.path,
            size: probed.size,
            duration: probed.duration,
            metadata: probed.metadata,
            player,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_size_swaps_for_quarter_turns() {
        let landscape = DisplaySize::from_rotated(1920, 1080, 0);
        assert_eq!(landscape, DisplaySize { width: 1920, height: 1080 });

        let portrait = DisplaySize::from_rotated(1920, 1080, 90);
        assert_eq!(portrait, DisplaySize { width: 1080, height: 1920 });

        let upside_down = DisplaySize::from_rotated(1920, 1080, 180);
        assert_eq!(upside_down, DisplaySize { width: 1920, height: 1080 });

        let negative = DisplaySize::from_rotated(1920, 1080, -90);
        assert_eq!(negative, DisplaySize { width: 1080, height: 1920 });
    }

    #[test]
    fn aspect_ratio_of_degenerate_size_is_none() {
        assert_eq!(DisplaySize { width: 640, height: 0 }.aspect_ratio(), None);
        assert_eq!(
            DisplaySize { width: 640, height: 480 }.aspect_ratio(),
            Some(640.0 / 480.0)
        );
    }

    #[test]
    fn metadata_without_fields_is_empty() {
        assert!(MediaMetadata::default().is_empty());

        let metadata = MediaMetadata {
            video_codec: Some("h264".to_string()),
            ..MediaMetadata::default()
        };
        assert!(!metadata.is_empty());
    }
}

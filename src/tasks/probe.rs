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

//! Media probing.
//!
//! Before a video joins the playlist it is opened in a headless, paused MPV
//! context to read its duration, video track geometry and codec details.
//! Files without a readable duration or without a video track are rejected.

use std::{
    path::Path,
    time::{Duration, Instant},
};

use thiserror::Error;
use tracing::debug;

use crate::{
    model::{DisplaySize, MediaMetadata, ProbedMedia},
    util::format::display_name,
};

/// Pixel formats are 8 bits per component unless they say otherwise.
const DEFAULT_BIT_DEPTH: u32 = 8;

/// How long a single wait for an MPV event may block.
const EVENT_WAIT_SECS: f64 = 0.1;

#[derive(Debug, Error)]
pub(crate) enum ProbeError {
    #[error("file not found")]
    NotFound,
    #[error("duration could not be read")]
    MissingDuration,
    #[error("no video track")]
    NoVideoTrack,
    #[error("could not open file ({0})")]
    LoadFailed(String),
    #[error("timed out after {0:?}")]
    Timeout(Duration),
    #[error("MPV error: {0}")]
    Mpv(String),
}

fn mpv_error(e: mpv::Error) -> ProbeError {
    ProbeError::Mpv(format!("{:?}", e))
}

/// Opens `path` without any audio or video output and reads everything the
/// playlist needs to know about it.
///
/// # Errors
///
/// Returns an error if the file cannot be opened within `timeout`, or if it
/// has no duration or no video track.
pub(crate) fn probe_file(path: &Path, timeout: Duration) -> Result<ProbedMedia, ProbeError> {
    if !path.is_file() {
        return Err(ProbeError::NotFound);
    }

    let mut handler = (|| {
        let mut builder = mpv::MpvHandlerBuilder::new()?;
        builder.set_option("vo", "null")?;
        builder.set_option("ao", "null")?;
        builder.set_option("pause", "yes")?;
        builder.build()
    })()
    .map_err(mpv_error)?;

    let filename = path.to_string_lossy();
    handler
        .command(&["loadfile", &filename, "replace"])
        .map_err(mpv_error)?;

    let deadline = Instant::now() + timeout;
    wait_for_file_loaded(&mut handler, deadline, timeout)?;

    if handler.get_property::<i64>("vid").is_err() {
        return Err(ProbeError::NoVideoTrack);
    }
    // Video parameters are only known once the first frame is decoded.
    wait_for_video_reconfig(&mut handler, deadline);

    read_media(&handler, path)
}

fn wait_for_file_loaded(
    handler: &mut mpv::MpvHandler,
    deadline: Instant,
    timeout: Duration,
) -> Result<(), ProbeError> {
    while Instant::now() < deadline {
        match handler.wait_event(EVENT_WAIT_SECS) {
            Some(mpv::Event::FileLoaded) => return Ok(()),
            Some(mpv::Event::EndFile(Ok(reason))) => {
                return Err(ProbeError::LoadFailed(format!("{:?}", reason)));
            }
            Some(mpv::Event::EndFile(Err(e))) => {
                return Err(ProbeError::LoadFailed(format!("{:?}", e)));
            }
            Some(mpv::Event::Shutdown) => {
                return Err(ProbeError::LoadFailed("MPV shut down".to_string()));
            }
            _ => {}
        }
    }

    Err(ProbeError::Timeout(timeout))
}

fn wait_for_video_reconfig(handler: &mut mpv::MpvHandler, deadline: Instant) {
    while Instant::now() < deadline {
        if let Some(mpv::Event::VideoReconfig) = handler.wait_event(EVENT_WAIT_SECS) {
            return;
        }
    }
    debug!("no video reconfiguration before the probe deadline");
}

fn read_media(handler: &mpv::MpvHandler, path: &Path) -> Result<ProbedMedia, ProbeError> {
    let duration = handler
        .get_property::<f64>("duration")
        .ok()
        .filter(|secs| secs.is_finite() && *secs > 0.0)
        .map(Duration::from_secs_f64)
        .ok_or(ProbeError::MissingDuration)?;

    let width = positive_property(handler, "width").ok_or(ProbeError::NoVideoTrack)?;
    let height = positive_property(handler, "height").ok_or(ProbeError::NoVideoTrack)?;
    let rotation = handler.get_property::<i64>("video-params/rotate").unwrap_or(0);

    let file_size = positive_property(handler, "file-size");
    let metadata = MediaMetadata {
        video_codec: string_property(handler, "video-format")
            .or_else(|| string_property(handler, "video-codec")),
        audio_codec: string_property(handler, "audio-codec-name")
            .or_else(|| string_property(handler, "audio-codec")),
        bitrate: file_size.and_then(|size| estimated_bitrate(size, duration)),
        frame_rate: handler
            .get_property::<f64>("container-fps")
            .ok()
            .filter(|fps| fps.is_finite() && *fps > 0.0),
        file_size,
        bit_depth: string_property(handler, "video-params/pixelformat")
            .and_then(|format| bit_depth_from_pixel_format(&format)),
        color_space: string_property(handler, "video-params/colormatrix"),
    };

    Ok(ProbedMedia {
        name: display_name(path),
        path: path.to_path_buf(),
        size: DisplaySize::from_rotated(width as u32, height as u32, rotation),
        duration,
        metadata: (!metadata.is_empty()).then_some(metadata),
    })
}

fn positive_property(handler: &mpv::MpvHandler, name: &str) -> Option<u64> {
    handler
        .get_property::<i64>(name)
        .ok()
        .and_then(|value| u64::try_from(value).ok())
        .filter(|value| *value > 0)
}

fn string_property(handler: &mpv::MpvHandler, name: &str) -> Option<String> {
    handler
        .get_property::<&str>(name)
        .ok()
        .map(str::to_string)
        .filter(|value| !value.is_empty())
}

/// Average bits per second over the whole file.
pub(crate) fn estimated_bitrate(file_size: u64, duration: Duration) -> Option<u64> {
    let secs = duration.as_secs_f64();
    if secs > 0.0 {
        Some((file_size as f64 * 8.0 / secs).round() as u64)
    } else {
        None
    }
}

/// Derives the bits per colour component from an FFmpeg pixel format name,
/// such as `yuv420p10le` (10 bits) or `nv12` (8 bits).
pub(crate) fn bit_depth_from_pixel_format(format: &str) -> Option<u32> {
    let format = format.trim().to_ascii_lowercase();
    if format.is_empty() {
        return None;
    }

    // Semi-planar high depth formats: p010, p016
    if let Some(depth) = format.strip_prefix('p').and_then(|d| d.parse::<u32>().ok()) {
        return Some(depth);
    }

    let stem = format
        .strip_suffix("le")
        .or_else(|| format.strip_suffix("be"))
        .unwrap_or(&format);
    let digits_at = stem
        .rfind(|c: char| !c.is_ascii_digit())
        .map_or(0, |idx| idx + 1);
    let (prefix, digits) = stem.split_at(digits_at);

    let has_depth_suffix = prefix.ends_with('p') || prefix == "gray";
    match digits.parse::<u32>() {
        Ok(depth) if has_depth_suffix && (9..=16).contains(&depth) => Some(depth),
        _ => Some(DEFAULT_BIT_DEPTH),
    }
}

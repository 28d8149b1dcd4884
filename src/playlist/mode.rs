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

//! Playback modes.
//!
//! The playback mode decides what happens when the selected video reaches the
//! end of its stream.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum PlaybackMode {
    /// Play the next video in list order, halting after the last one.
    #[default]
    Sequential,
    /// Restart the current video.
    LoopSingle,
    /// Stop at the end of the current video.
    Single,
    /// Play a randomly chosen video, possibly the same one again.
    Random,
}

impl PlaybackMode {
    /// The mode that follows this one when cycling through modes.
    pub(crate) fn next(self) -> Self {
        match self {
            PlaybackMode::Sequential => PlaybackMode::LoopSingle,
            PlaybackMode::LoopSingle => PlaybackMode::Single,
            PlaybackMode::Single => PlaybackMode::Random,
            PlaybackMode::Random => PlaybackMode::Sequential,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            PlaybackMode::Sequential => "Sequential",
            PlaybackMode::LoopSingle => "Loop",
            PlaybackMode::Single => "Single",
            PlaybackMode::Random => "Random",
        }
    }
}

impl fmt::Display for PlaybackMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown playback mode '{0}', expected one of: sequential, loop, single, random")]
pub(crate) struct ParseModeError(String);

impl FromStr for PlaybackMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" | "seq" => Ok(PlaybackMode::Sequential),
            "loop" | "loop-single" => Ok(PlaybackMode::LoopSingle),
            "single" | "once" => Ok(PlaybackMode::Single),
            "random" | "shuffle" => Ok(PlaybackMode::Random),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

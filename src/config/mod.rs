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

//! Application configuration.
//!
//! This module manages the application configuration file, and the location
//! of the log file that sits alongside it.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::playlist::mode::PlaybackMode;

const CONFIG_NAME: &str = "vidlist";
const LOG_FILE_NAME: &str = "vidlist.log";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub playback_mode: PlaybackMode,
    pub show_metadata: bool,
    /// Upper bound for loading a file and reading its video parameters.
    pub probe_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            playback_mode: PlaybackMode::default(),
            show_metadata: true,
            probe_timeout_secs: 10,
        }
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

pub fn save_config(cfg: &AppConfig) -> Result<(), confy::ConfyError> {
    confy::store(CONFIG_NAME, None, cfg)
}

/// Where the log file is written, next to the configuration file.
pub fn log_file_path() -> Result<PathBuf, confy::ConfyError> {
    let config_path = confy::get_configuration_file_path(CONFIG_NAME, None)?;
    let dir = config_path
        .parent()
        .map(PathBuf::from)
        .unwrap_or_default();
    Ok(dir.join(LOG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.playback_mode, PlaybackMode::Sequential);
        assert!(cfg.show_metadata);
        assert_eq!(cfg.probe_timeout_secs, 10);
    }
}

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

//! Command-line input logic and state management.
//!
//! The command line stands in for a file picker: it is opened with `:` (or
//! with `a`, pre-filled with `add `), edited with a text input component, and
//! on submission dispatches the corresponding application event.

use std::{path::PathBuf, sync::mpsc::Sender};

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{events::AppEvent, playlist::mode::PlaybackMode};

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Opens the command line with some text already typed.
    pub(crate) fn open_with(&mut self, prefix: &str) {
        self.active = true;
        self.input = Input::default().with_value(prefix.to_string());
    }

    /// Returns `true` if the key was consumed by the command line.
    pub(crate) fn handle_key(&mut self, key: KeyEvent, event_tx: &Sender<AppEvent>) -> Result<bool> {
        if !self.active {
            if key.code == KeyCode::Char(':') {
                self.active = true;
                return Ok(true);
            }
            return Ok(false);
        }

        match key.code {
            KeyCode::Esc => self.close(),

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                self.close();
                if !buffer.is_empty() {
                    run_command(&buffer, event_tx)?;
                }
            }

            _ => {
                // Delegate everything else to the managed input component
                self.input.handle_event(&Event::Key(key));
            }
        }

        Ok(true)
    }

    fn close(&mut self) {
        self.active = false;
        self.input.reset();
    }
}

fn run_command(buffer: &str, event_tx: &Sender<AppEvent>) -> Result<()> {
    let (cmd, args) = match buffer.split_once(char::is_whitespace) {
        Some((cmd, args)) => (cmd, args.trim()),
        None => (buffer, ""),
    };

    let event = match (cmd, args) {
        ("q" | "quit", _) => AppEvent::ExitApplication,

        ("add" | "open", "") => AppEvent::Error(format!("Usage: {} <path>", cmd)),
        ("add" | "open", path) => AppEvent::AddMedia(PathBuf::from(path)),

        ("mode", "") => AppEvent::TogglePlaybackMode,
        ("mode", name) => match name.parse::<PlaybackMode>() {
            Ok(mode) => AppEvent::SetPlaybackMode(mode),
            Err(e) => AppEvent::Error(e.to_string()),
        },

        ("cancel", "") => AppEvent::CancelProbes(None),
        ("cancel", name) => AppEvent::CancelProbes(Some(name.to_string())),

        ("info", _) => AppEvent::ToggleMetadata,

        (unknown, _) => AppEvent::Error(format!("Unknown command: {}", unknown)),
    };

    event_tx.send(event)?;

    Ok(())
}

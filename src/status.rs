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

//! Transient status line messages.

use std::time::{Duration, Instant};

const MESSAGE_LIFETIME: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct StatusMessage {
    pub(crate) text: String,
    pub(crate) is_error: bool,
    shown_at: Instant,
}

impl StatusMessage {
    pub(crate) fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
            shown_at: Instant::now(),
        }
    }

    /// Errors stay until replaced, informational messages fade.
    pub(crate) fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
            shown_at: Instant::now(),
        }
    }

    pub(crate) fn is_expired(&self) -> bool {
        !self.is_error && self.shown_at.elapsed() >= MESSAGE_LIFETIME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_messages_are_not_expired() {
        assert!(!StatusMessage::info("Added a.mp4").is_expired());
        assert!(!StatusMessage::error("Could not load b.mp4").is_expired());
    }

    #[test]
    fn old_info_expires_but_errors_do_not() {
        let mut info = StatusMessage::info("Added a.mp4");
        let mut error = StatusMessage::error("Could not load b.mp4");
        let long_ago = Instant::now()
            .checked_sub(MESSAGE_LIFETIME * 2)
            .expect("clock too close to its origin");
        info.shown_at = long_ago;
        error.shown_at = long_ago;

        assert!(info.is_expired());
        assert!(!error.is_expired());
    }
}

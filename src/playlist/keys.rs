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

//! Playback control keys.
//!
//! Maps the characters the playlist responds to onto control actions, and
//! remembers the previous one so that repeated presses can accelerate.

use crate::playlist::speed::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ControlKey {
    /// `space` or `k`.
    TogglePlayPause,
    /// `j` (reverse) or `l` (forward).
    Step(Direction),
}

impl ControlKey {
    /// Returns the control bound to a character, if any.
    pub(crate) fn from_char(c: char) -> Option<Self> {
        match c {
            ' ' | 'k' => Some(ControlKey::TogglePlayPause),
            'j' => Some(ControlKey::Step(Direction::Reverse)),
            'l' => Some(ControlKey::Step(Direction::Forward)),
            _ => None,
        }
    }
}

/// The most recently processed control key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct KeyHistory {
    previous: Option<ControlKey>,
}

impl KeyHistory {
    pub(crate) fn is_repeat(&self, key: ControlKey) -> bool {
        self.previous == Some(key)
    }

    pub(crate) fn record(&mut self, key: ControlKey) {
        self.previous = Some(key);
    }

    pub(crate) fn reset(&mut self) {
        self.previous = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_only_control_characters() {
        assert_eq!(ControlKey::from_char(' '), Some(ControlKey::TogglePlayPause));
        assert_eq!(ControlKey::from_char('k'), Some(ControlKey::TogglePlayPause));
        assert_eq!(
            ControlKey::from_char('j'),
            Some(ControlKey::Step(Direction::Reverse))
        );
        assert_eq!(
            ControlKey::from_char('l'),
            Some(ControlKey::Step(Direction::Forward))
        );
        assert_eq!(ControlKey::from_char('L'), None);
        assert_eq!(ControlKey::from_char('x'), None);
    }

    #[test]
    fn history_detects_repeats_until_reset() {
        let forward = ControlKey::Step(Direction::Forward);
        let mut history = KeyHistory::default();
        assert!(!history.is_repeat(forward));

        history.record(forward);
        assert!(history.is_repeat(forward));
        assert!(!history.is_repeat(ControlKey::Step(Direction::Reverse)));

        history.reset();
        assert!(!history.is_repeat(forward));
    }
}

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

//! Playback speed ladder.
//!
//! Directional speed keys step through a fixed ladder of rate magnitudes.
//! The ladder position is a newtype that can only ever hold a valid index.

/// Rate magnitudes reachable from the keyboard, in stepping order.
pub(crate) const SPEED_LADDER: [f32; 7] = [1.0, 2.0, 4.0, 8.0, 16.0, 32.0, 64.0];

/// Position of normal speed on the ladder.
const NORMAL_SPEED_INDEX: usize = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    fn sign(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Reverse => -1.0,
        }
    }
}

/// A position on [`SPEED_LADDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SpeedLadder(usize);

impl Default for SpeedLadder {
    fn default() -> Self {
        Self(NORMAL_SPEED_INDEX)
    }
}

impl SpeedLadder {
    /// Moves back to normal speed.
    pub(crate) fn reset(&mut self) {
        self.0 = NORMAL_SPEED_INDEX;
    }

    /// Steps to the next faster speed, wrapping from the fastest back to
    /// normal speed.
    pub(crate) fn advance(&mut self) {
        self.0 = (self.0 + 1) % SPEED_LADDER.len();
    }

    /// The rate magnitude at the current position.
    pub(crate) fn value(self) -> f32 {
        SPEED_LADDER[self.0]
    }

    /// The signed playback rate at the current position.
    pub(crate) fn rate(self, direction: Direction) -> f32 {
        self.value() * direction.sign()
    }
}

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

//! Terminal background colour control.
//!
//! Uses OSC escape sequences, which most modern terminal emulators (XTerm,
//! iTerm2, Alacritty, Kitty) understand. Terminals that do not simply ignore
//! them.

use std::io::{self, Write};

/// Sets the terminal background to a `#rrggbb` colour (OSC 11).
pub(crate) fn set_terminal_bg(hex_color: &str) {
    write_osc(&mut io::stdout(), &format!("11;{}", hex_color));
}

/// Restores the user's own background colour (OSC 111).
pub(crate) fn reset_terminal_bg() {
    write_osc(&mut io::stdout(), "111");
}

// Failures are ignored, the worst case is a background left unchanged
fn write_osc(out: &mut impl Write, body: &str) {
    let _ = write!(out, "\x1b]{}\x07", body);
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn osc_sequences() {
        let mut out = Vec::new();
        write_osc(&mut out, "11;#141824");
        write_osc(&mut out, "111");
        assert_eq!(out, b"\x1b]11;#141824\x07\x1b]111\x07");
    }
}

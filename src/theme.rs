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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and provides utilities
//! for converting colors between Ratatui's internal representation and external
//! formats (such as hexadecimal strings) used for terminal emulator styling.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) input_bg_colour: Color,
    pub(crate) muted_fg: Color,

    pub(crate) highlight_bg: Color,
    pub(crate) highlight_fg: Color,

    pub(crate) table_index_fg: Color,
    pub(crate) table_artist_fg: Color,
    pub(crate) table_track_fg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(12, 12, 14),
            accent_colour: Color::Rgb(245, 245, 245),
            border_colour: Color::Rgb(82, 82, 91),
            input_bg_colour: Color::Rgb(24, 24, 27),
            muted_fg: Color::Rgb(161, 161, 170),

            highlight_bg: Color::Rgb(245, 245, 245),
            highlight_fg: Color::Rgb(0, 0, 0),

            table_index_fg: Color::Rgb(113, 113, 122),
            table_artist_fg: Color::Rgb(212, 212, 216),
            table_track_fg: Color::Rgb(255, 255, 255),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is primarily used to set the terminal emulator's background color
    /// via escape sequences.
    ///
    /// # Arguments
    ///
    /// * `colour` - The Ratatui color to convert.
    ///
    /// Returns `None` if the provided color is not a [`Color::Rgb`] variant.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_colours_convert_to_hex() {
        assert_eq!(Theme::to_hex(Color::Rgb(12, 200, 255)).as_deref(), Some("#0cc8ff"));
    }

    #[test]
    fn named_colours_have_no_hex_form() {
        assert_eq!(Theme::to_hex(Color::Blue), None);
    }
}

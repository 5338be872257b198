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

//! Visual styling and colour configuration for the TUI.
//!
//! This module defines the application's colour palette and converts colours
//! into the hexadecimal strings used for terminal emulator styling.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) cursor_colour: Color,
    pub(crate) input_bg_colour: Color,
    pub(crate) error_colour: Color,

    pub(crate) table_fg: Color,
    pub(crate) table_dim_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(40, 20, 50),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            cursor_colour: Color::Rgb(70, 50, 110),
            input_bg_colour: Color::Rgb(50, 30, 60),
            error_colour: Color::Rgb(240, 90, 90),

            table_fg: Color::Rgb(255, 255, 255),
            table_dim_fg: Color::Rgb(162, 161, 166),
        }
    }

    /// Converts an RGB colour into a CSS-style hexadecimal string.
    ///
    /// Returns `None` for named or indexed colours, which have no fixed RGB
    /// value.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}

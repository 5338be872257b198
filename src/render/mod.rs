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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. The song and playlist rows come
//! straight from the rendering surface; this module only lays them out.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event to provide a reactive user interface.

mod icons;
mod player;
mod playlists;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Flex, Layout, Rect},
};

use crate::{
    App,
    dom::{RowKind, Surface},
    render::{player::draw_player, playlists::draw_playlists, status::draw_status},
    theme::Theme,
};

const PLAYLISTS_WIDTH: u16 = 44;

const FORM_WIDTH: u16 = 64;
const FORM_HEIGHT: u16 = 9;

/// A widget drawn from borrowed data of type `T`.
pub(crate) trait Render<T: ?Sized> {
    fn draw(&mut self, f: &mut Frame, area: Rect, data: &T, theme: &Theme);
}

/// Renders the user interface to the terminal frame.
///
/// The screen is split into the songs table and the playlists panel, with
/// the now-playing bar and the status line below. The add-song form is
/// drawn on top when it is open.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Outer layout: main, player, status
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    // Main layout: songs, playlists
    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(PLAYLISTS_WIDTH)])
        .split(outer[0]);

    app.song_table
        .draw(f, main[0], app.deck.surface.rows(RowKind::Songs), &app.theme);
    draw_playlists(f, main[1], app.deck.surface.rows(RowKind::Playlists), &app.theme);

    draw_player(f, outer[1], app);
    draw_status(f, outer[2], app);

    if app.add_song_form.active() {
        app.add_song_form.draw(f, centered(area, FORM_WIDTH, FORM_HEIGHT), &app.theme);
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

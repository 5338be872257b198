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

//! Render the status line.
//!
//! The last recoverable error is shown until the next successful action;
//! otherwise the line lists the key bindings.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::Paragraph,
};

use crate::App;

const HELP: &str = "j/k: move | Enter/p: play | d: remove | a: add song | s: stop | q: quit";

pub(crate) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let paragraph = match &app.status {
        Some(message) => Paragraph::new(message.as_str()).style(Style::default().fg(app.theme.error_colour)),
        None => Paragraph::new(HELP).style(Style::default().fg(app.theme.table_dim_fg)),
    };

    f.render_widget(paragraph, area);
}

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

//! Render the playlists panel.
//!
//! Each `div.playlists` row shows its spans (name, song count and total
//! duration) as the columns of one table row.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::{dom::Element, theme::Theme};

pub(crate) fn draw_playlists(f: &mut Frame, area: Rect, rows: &[Element], theme: &Theme) {
    let table_rows = rows.iter().map(|row| {
        let mut spans = row.child_elements().map(Element::text_content);
        let name = spans.next().unwrap_or_default();
        let count = spans.next().unwrap_or_default();
        let duration = spans.next().unwrap_or_default();

        Row::new(vec![
            Cell::from(Line::from(name).style(Style::default().fg(theme.accent_colour))),
            Cell::from(Line::from(count).style(Style::default().fg(theme.table_dim_fg))),
            Cell::from(Line::from(duration).style(Style::default().fg(theme.table_dim_fg)).alignment(Alignment::Right)),
        ])
    });

    let table = Table::new(
        table_rows,
        [Constraint::Fill(1), Constraint::Length(10), Constraint::Length(6)],
    )
    .block(
        Block::default()
            .title(" Playlists ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour)),
    );

    f.render_widget(table, area);
}

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

//! UI rendering logic for the song table.
//!
//! Each `div.song` row on the surface becomes one table row. Cells are
//! taken from the row's child elements in order: the cover image shows its
//! source, the `btns` group shows its buttons, everything else shows its
//! text. The row marked `songSelected` is painted in the accent colour.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Row, Table},
};

use super::CONTROLS_WIDTH;
use crate::{
    components::SongTable,
    dom::{Element, SELECTED_CLASS},
    render::Render,
    theme::Theme,
    view::{PLAY_BUTTON_CLASS, REMOVE_BUTTON_CLASS},
};

const HEADERS: [&str; 6] = ["Cover", "Title", "Album", "Artist", "Time", ""];

impl Render<[Element]> for SongTable {
    fn draw(&mut self, f: &mut Frame, area: Rect, rows: &[Element], theme: &Theme) {
        let block = Block::default()
            .title(" Songs ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour));
        self.area = block.inner(area);

        let table_rows = rows.iter().map(|row| {
            let cells = row.child_elements().map(|cell| {
                let line = Line::from(cell_text(cell));
                if cell.has_class("btns") {
                    Cell::from(line.style(Style::default().fg(theme.accent_colour)))
                } else {
                    Cell::from(line)
                }
            });

            let style = if row.has_class(SELECTED_CLASS) {
                Style::default().fg(Color::Black).bg(theme.accent_colour)
            } else {
                Style::default().fg(theme.table_fg)
            };

            Row::new(cells).style(style)
        });

        let table = Table::new(
            table_rows,
            [
                Constraint::Fill(1),
                Constraint::Fill(2),
                Constraint::Fill(2),
                Constraint::Fill(2),
                Constraint::Length(5),
                Constraint::Length(CONTROLS_WIDTH),
            ],
        )
        .header(
            Row::new(HEADERS.iter().map(|h| Cell::from(Line::from(*h).alignment(Alignment::Left))))
                .style(Style::default().bold().fg(theme.accent_colour))
                .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(theme.cursor_colour).fg(Color::White))
        .block(block);

        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}

fn cell_text(cell: &Element) -> String {
    if cell.tag() == "img" {
        cell.attribute("src").unwrap_or_default().to_string()
    } else if cell.has_class("btns") {
        let label = |class: &str| cell.find_by_class(class).map(Element::text_content).unwrap_or_default();
        format!("{}  {}", label(PLAY_BUTTON_CLASS), label(REMOVE_BUTTON_CLASS))
    } else {
        cell.text_content()
    }
}

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

//! UI rendering logic for the add-song form.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
};

use crate::{components::AddSongForm, components::add_song::FIELD_LABELS, theme::Theme};

const LABEL_WIDTH: u16 = 18;

impl AddSongForm {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .title(" Add song ")
            .title_bottom(" Enter: add | Tab: next field | Esc: cancel ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent_colour))
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        f.render_widget(Clear, area);
        f.render_widget(block, area);

        let lines = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1); 5])
            .split(inner);

        for (idx, (input, label)) in self.inputs.iter().zip(FIELD_LABELS).enumerate() {
            let focused = idx == self.focus;

            let label_style = if focused {
                Style::default().bold().fg(theme.accent_colour)
            } else {
                Style::default().fg(theme.table_fg)
            };

            let line = Line::from(vec![
                Span::styled(format!("{:<width$}", label, width = usize::from(LABEL_WIDTH)), label_style),
                Span::styled(input.value(), Style::default().fg(theme.table_fg).bg(theme.input_bg_colour)),
            ]);
            f.render_widget(Paragraph::new(line), lines[idx]);

            if focused {
                let cursor_x = lines[idx].x + LABEL_WIDTH + input.visual_cursor() as u16;
                f.set_cursor_position((cursor_x, lines[idx].y));
            }
        }
    }
}

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

//! Cursor and hit-testing state for the songs container.
//!
//! The rows themselves live on the rendering surface; this component only
//! tracks which row the keyboard cursor is on and where the table was last
//! drawn, so key presses and mouse clicks can be turned into song clicks.

mod event;
mod render;

use ratatui::{layout::Rect, widgets::TableState};

use crate::{
    dom::Element,
    events::{ClickTarget, SongClick},
};

/// Rows taken by the header and its bottom margin.
const HEADER_HEIGHT: u16 = 2;

/// Width of the controls column, holding the play and remove buttons.
const CONTROLS_WIDTH: u16 = 5;

pub(crate) struct SongTable {
    pub(crate) table_state: TableState,
    area: Rect,
}

impl SongTable {
    pub(crate) fn new() -> Self {
        Self {
            table_state: TableState::new().with_selected(Some(0)),
            area: Rect::default(),
        }
    }

    fn goto_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => if i == 0 { len - 1 } else { i - 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        self.table_state.select_first();
    }

    fn goto_last(&mut self, len: usize) {
        self.table_state.select(len.checked_sub(1));
    }

    /// Keeps the cursor on an existing row after rows were removed.
    pub(crate) fn clamp_selection(&mut self, len: usize) {
        match self.table_state.selected() {
            _ if len == 0 => self.table_state.select(None),
            Some(i) if i >= len => self.table_state.select(Some(len - 1)),
            None => self.table_state.select(Some(0)),
            _ => {}
        }
    }

    fn current_click(&self, rows: &[Element], target: ClickTarget) -> Option<SongClick> {
        let row = rows.get(self.table_state.selected()?)?;
        row.id().map(|row_id| SongClick {
            row_id: row_id.to_string(),
            target,
        })
    }

    /// Maps a terminal cell to the row and control under it.
    ///
    /// Returns `None` outside the body of the table.
    fn hit_test(&self, column: u16, line: u16, rows: &[Element]) -> Option<(usize, SongClick)> {
        let body_top = self.area.y.saturating_add(HEADER_HEIGHT);
        if column < self.area.x || column >= self.area.right() || line < body_top || line >= self.area.bottom() {
            return None;
        }

        let index = self.table_state.offset() + usize::from(line - body_top);
        let row_id = rows.get(index)?.id()?.to_string();

        let controls_x = self.area.right().saturating_sub(CONTROLS_WIDTH);
        let target = match column.checked_sub(controls_x) {
            Some(0..=1) => ClickTarget::Play,
            Some(3..) => ClickTarget::Remove,
            _ => ClickTarget::Row,
        };

        Some((index, SongClick { row_id, target }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::create_element;

    fn rows(n: usize) -> Vec<Element> {
        (0..n)
            .map(|i| create_element("div", vec![], &["song"], &[("id", &format!("song{}", i))]))
            .collect()
    }

    #[test]
    fn cursor_wraps_around() {
        let mut table = SongTable::new();

        table.goto_previous(3);
        assert_eq!(table.table_state.selected(), Some(2));

        table.goto_next(3);
        assert_eq!(table.table_state.selected(), Some(0));

        table.goto_last(3);
        assert_eq!(table.table_state.selected(), Some(2));
    }

    #[test]
    fn clamps_after_rows_disappear() {
        let mut table = SongTable::new();
        table.table_state.select(Some(4));

        table.clamp_selection(2);
        assert_eq!(table.table_state.selected(), Some(1));

        table.clamp_selection(0);
        assert_eq!(table.table_state.selected(), None);

        table.clamp_selection(3);
        assert_eq!(table.table_state.selected(), Some(0));
    }

    #[test]
    fn current_click_targets_cursor_row() {
        let mut table = SongTable::new();
        table.table_state.select(Some(1));

        let click = table.current_click(&rows(3), ClickTarget::Remove).unwrap();

        assert_eq!(click.row_id, "song1");
        assert_eq!(click.target, ClickTarget::Remove);
        assert!(table.current_click(&[], ClickTarget::Play).is_none());
    }

    #[test]
    fn hit_test_resolves_rows_and_controls() {
        let mut table = SongTable::new();
        table.area = Rect::new(10, 5, 40, 10);
        let rows = rows(3);

        // Header lines are not part of any row.
        assert!(table.hit_test(12, 6, &rows).is_none());

        let (index, click) = table.hit_test(12, 8, &rows).unwrap();
        assert_eq!(index, 1);
        assert_eq!(click.row_id, "song1");
        assert_eq!(click.target, ClickTarget::Row);

        let controls_x = table.area.right() - CONTROLS_WIDTH;
        assert_eq!(table.hit_test(controls_x, 7, &rows).unwrap().1.target, ClickTarget::Play);
        assert_eq!(table.hit_test(controls_x + 2, 7, &rows).unwrap().1.target, ClickTarget::Row);
        assert_eq!(table.hit_test(controls_x + 4, 7, &rows).unwrap().1.target, ClickTarget::Remove);

        // Below the last row and outside the table.
        assert!(table.hit_test(12, 10, &rows).is_none());
        assert!(table.hit_test(5, 7, &rows).is_none());
    }
}

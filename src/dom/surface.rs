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

//! The rendering surface the view writes rows into.
//!
//! The core never talks to a concrete UI toolkit. It only sees the two
//! fixed row containers through the [`Surface`] trait. [`Document`] is the
//! in-memory implementation, drawn to the terminal by the render module.

use crate::dom::Element;

/// The fixed row containers provided by the page layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RowKind {
    Songs,
    Playlists,
}

impl RowKind {
    /// The identifier of the container element.
    pub(crate) fn container_id(&self) -> &'static str {
        match self {
            RowKind::Songs => "songs",
            RowKind::Playlists => "playlists",
        }
    }
}

pub(crate) trait Surface {
    fn rows(&self, kind: RowKind) -> &[Element];

    fn rows_mut(&mut self, kind: RowKind) -> &mut [Element];

    /// Appends a row at the end of the container.
    fn append_row(&mut self, kind: RowKind, row: Element);

    /// Inserts a row before the row currently at `index`, or at the end if
    /// `index` is past the last row.
    fn insert_row(&mut self, kind: RowKind, index: usize, row: Element);

    /// Removes the row with the given element identifier, returning it.
    fn remove_row(&mut self, kind: RowKind, row_id: &str) -> Option<Element>;

    fn clear_rows(&mut self, kind: RowKind);

    fn find_row(&self, kind: RowKind, row_id: &str) -> Option<&Element> {
        self.rows(kind).iter().find(|row| row.id() == Some(row_id))
    }

    fn find_row_mut(&mut self, kind: RowKind, row_id: &str) -> Option<&mut Element> {
        self.rows_mut(kind).iter_mut().find(|row| row.id() == Some(row_id))
    }

    fn position(&self, kind: RowKind, row_id: &str) -> Option<usize> {
        self.rows(kind).iter().position(|row| row.id() == Some(row_id))
    }
}

#[derive(Debug, Default)]
pub(crate) struct Document {
    songs: Vec<Element>,
    playlists: Vec<Element>,
}

impl Document {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn container(&mut self, kind: RowKind) -> &mut Vec<Element> {
        match kind {
            RowKind::Songs => &mut self.songs,
            RowKind::Playlists => &mut self.playlists,
        }
    }
}

impl Surface for Document {
    fn rows(&self, kind: RowKind) -> &[Element] {
        match kind {
            RowKind::Songs => &self.songs,
            RowKind::Playlists => &self.playlists,
        }
    }

    fn rows_mut(&mut self, kind: RowKind) -> &mut [Element] {
        self.container(kind)
    }

    fn append_row(&mut self, kind: RowKind, row: Element) {
        self.container(kind).push(row);
    }

    fn insert_row(&mut self, kind: RowKind, index: usize, row: Element) {
        let rows = self.container(kind);
        let index = index.min(rows.len());
        rows.insert(index, row);
    }

    fn remove_row(&mut self, kind: RowKind, row_id: &str) -> Option<Element> {
        let idx = self.position(kind, row_id)?;
        Some(self.container(kind).remove(idx))
    }

    fn clear_rows(&mut self, kind: RowKind) {
        self.container(kind).clear();
    }
}

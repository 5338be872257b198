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

//! Render the now-playing bar.
//!
//! Shows the song the sequencer is playing, with its album, artist and
//! length, or a stopped indicator when playback is idle.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    App,
    player::PlaybackState,
    render::icons::{ICON_PLAY, ICON_STOP},
    util,
};

pub(crate) fn draw_player(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(app.theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let now_playing = match app.deck.sequencer.state() {
        PlaybackState::Playing(id) => app.deck.library.song(id),
        PlaybackState::Idle => None,
    };

    let bold = Style::default().add_modifier(Modifier::BOLD);

    let line = match now_playing {
        Some(song) => Line::from(vec![
            Span::styled(format!(" {} ", ICON_PLAY), bold).fg(Color::White),
            Span::styled(&song.title, bold).fg(app.theme.accent_colour),
            Span::raw(" from "),
            Span::styled(&song.album, bold).fg(app.theme.accent_colour),
            Span::raw(" by "),
            Span::styled(&song.artist, bold).fg(app.theme.accent_colour),
            Span::raw(format!(" ({})", util::format::format_time(song.duration))),
        ]),
        None => Line::from(vec![
            Span::styled(format!(" {} ", ICON_STOP), bold).fg(Color::White),
            Span::styled("Stopped", Style::default().fg(app.theme.table_dim_fg)),
        ]),
    };

    f.render_widget(Paragraph::new(line), inner_area);
}

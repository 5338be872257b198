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

//! Conversions between raw values and the strings shown in the interface.

use crate::{error::PlayerError, model::Identified};

/// Formats a duration in seconds into a human-readable `MM:SS` string.
///
/// Minutes are not wrapped into hours, so long playlists simply grow the
/// minute field.
///
/// # Examples
///
/// ```
/// assert_eq!(format_time(65), "01:05");
/// assert_eq!(format_time(3600), "60:00");
/// ```
pub(crate) fn format_time(total_seconds: u64) -> String {
    let mins = total_seconds / 60;
    let secs = total_seconds % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Parses an `MM:SS` string back into a number of seconds.
///
/// Both fields must be plain decimal digits and the seconds field must be
/// below 60. Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`PlayerError::Validation`] if the text is not of the form
/// `MM:SS`.
pub(crate) fn parse_time(text: &str) -> Result<u64, PlayerError> {
    let invalid = || PlayerError::Validation(format!("'{}' is not a mm:ss duration", text));

    let (mins, secs) = text.trim().split_once(':').ok_or_else(invalid)?;

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(mins) || !all_digits(secs) || secs.len() != 2 {
        return Err(invalid());
    }

    let mins: u64 = mins.parse().map_err(|_| invalid())?;
    let secs: u64 = secs.parse().map_err(|_| invalid())?;
    if secs >= 60 {
        return Err(invalid());
    }

    mins.checked_mul(60)
        .and_then(|m| m.checked_add(secs))
        .ok_or_else(invalid)
}

/// Returns the position of the first entity in `collection` with the given
/// identifier, or `None` if there is no such entity.
pub(crate) fn find_index<T: Identified>(id: T::Id, collection: &[T]) -> Option<usize> {
    collection.iter().position(|item| item.id() == id)
}

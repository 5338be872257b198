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

//! Application configuration.
//!
//! This module manages the application configuration file.

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "tunedeck";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    /// Wall-clock milliseconds a song plays for, per second of its duration.
    pub millis_per_second: u64,
    pub log_file: String,
    /// Default log filter, overridden by `RUST_LOG`.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            millis_per_second: 1000,
            log_file: "tunedeck.log".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Loads the configuration, writing the defaults on first run.
///
/// An unreadable or invalid file falls back to the defaults.
pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_play_in_real_time() {
        let config = AppConfig::default();

        assert_eq!(config.millis_per_second, 1000);
        assert_eq!(config.version, 1);
    }
}

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
//! This module manages the application configuration file. Only presentation
//! and logging preferences live here, songs are never written to disk.

#[cfg(test)]
mod tests;

use std::{
    env,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const CONFIG_NAME: &str = "choolist";

const CONFIG_PATH_VAR: &str = "CHOOLIST_CONFIG";

const LOG_FILE_NAME: &str = "choolist.log";

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to locate the configuration directory")]
    Locate(#[from] confy::ConfyError),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub log_filter: String,
    pub log_file: String,
    pub show_path: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            log_filter: "info".to_string(),
            log_file: String::new(),
            show_path: true,
        }
    }
}

impl AppConfig {
    /// Resolves where log output goes.
    ///
    /// An explicit `log_file` wins, otherwise the log sits next to the
    /// configuration file.
    pub(crate) fn log_path(&self) -> Result<PathBuf, ConfigError> {
        if !self.log_file.trim().is_empty() {
            return Ok(PathBuf::from(self.log_file.trim()));
        }

        let config_path = match config_path_override() {
            Some(path) => path,
            None => confy::get_configuration_file_path(CONFIG_NAME, None)?,
        };

        Ok(log_path_beside(&config_path))
    }
}

/// Loads the configuration, falling back to defaults if it cannot be read.
///
/// `CHOOLIST_CONFIG` points at an alternative configuration file, otherwise
/// the platform configuration directory is used.
pub(crate) fn load_config() -> AppConfig {
    match config_path_override() {
        Some(path) => load_config_from(&path),
        None => confy::load(CONFIG_NAME, None).unwrap_or_default(),
    }
}

pub(crate) fn load_config_from(path: &Path) -> AppConfig {
    confy::load_path(path).unwrap_or_default()
}

fn config_path_override() -> Option<PathBuf> {
    env::var_os(CONFIG_PATH_VAR)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
}

fn log_path_beside(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(dir) => dir.join(LOG_FILE_NAME),
        None => PathBuf::from(LOG_FILE_NAME),
    }
}

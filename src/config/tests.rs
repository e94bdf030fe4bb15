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

use std::{fs, path::PathBuf};

use super::{AppConfig, load_config_from, log_path_beside};

#[test]
fn load_config_from_reads_all_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "version = 1\nlog_filter = \"choolist=debug\"\nlog_file = \"/tmp/choo.log\"\nshow_path = false\n",
    )
    .unwrap();

    let cfg = load_config_from(&path);

    assert_eq!(
        cfg,
        AppConfig {
            version: 1,
            log_filter: "choolist=debug".to_string(),
            log_file: "/tmp/choo.log".to_string(),
            show_path: false,
        }
    );
}

#[test]
fn load_config_from_fills_missing_keys_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "show_path = false\n").unwrap();

    let cfg = load_config_from(&path);

    assert!(!cfg.show_path);
    assert_eq!(cfg.log_filter, "info");
    assert_eq!(cfg.version, 1);
}

#[test]
fn load_config_from_falls_back_to_defaults_on_garbage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "this is [not toml").unwrap();

    assert_eq!(load_config_from(&path), AppConfig::default());
}

#[test]
fn load_config_from_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent").join("config.toml");

    assert_eq!(load_config_from(&path), AppConfig::default());
}

#[test]
fn explicit_log_file_wins() {
    let cfg = AppConfig {
        log_file: "  /var/tmp/choolist.log ".to_string(),
        ..AppConfig::default()
    };

    assert_eq!(
        cfg.log_path().unwrap(),
        PathBuf::from("/var/tmp/choolist.log")
    );
}

#[test]
fn default_log_file_sits_next_to_config() {
    let config_path = PathBuf::from("/home/someone/.config/choolist/default-config.toml");

    assert_eq!(
        log_path_beside(&config_path),
        PathBuf::from("/home/someone/.config/choolist/choolist.log")
    );
}

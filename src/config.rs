// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::path::{Path, PathBuf};

use hex_color::HexColor;
use log::{info, warn};
use serde_json::Value;

use crate::editor::CURSOR_MARKER;
use crate::errors::EditorError;

pub const CONFIG_FILE_NAME: &str = ".seameditconfig";

#[derive(Clone, Debug, PartialEq)]
pub struct EditorConfig {
    pub cursor_marker: char,
    pub marker_color: Option<(u8, u8, u8)>,
    pub show_menu: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            cursor_marker: CURSOR_MARKER,
            marker_color: None,
            show_menu: true,
        }
    }
}

fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    match HexColor::parse(s) {
        Ok(c) => Some((c.r, c.g, c.b)),
        Err(e) => {
            warn!("ignoring marker_color {:?}: {:?}", s, e);
            None
        }
    }
}

// A marker must be exactly one character.
fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

impl EditorConfig {
    // Lenient: unknown keys are ignored and malformed values keep their defaults.
    pub fn from_value(value: &Value) -> Self {
        let mut config = EditorConfig::default();
        if let Some(marker) = value
            .get("cursor_marker")
            .and_then(Value::as_str)
            .and_then(single_char)
        {
            config.cursor_marker = marker;
        }
        config.marker_color = value
            .get("marker_color")
            .and_then(Value::as_str)
            .and_then(parse_hex_color);
        if let Some(show) = value.get("show_menu").and_then(Value::as_bool) {
            config.show_menu = show;
        }
        config
    }

    pub fn from_file(path: &Path) -> Result<Self, EditorError> {
        let text = std::fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&text)
            .map_err(|e| EditorError::Format(format!("{}: {}", path.display(), e)))?;
        info!("read config from {}", path.display());
        Ok(Self::from_value(&value))
    }
}

pub fn find_config() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        let path = PathBuf::from(home).join(CONFIG_FILE_NAME);
        if path.exists() {
            return Some(path);
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        let path = cwd.join(CONFIG_FILE_NAME);
        if path.exists() {
            return Some(path);
        }
    }
    None
}

// An unusable config file is reported and replaced by the defaults.
pub fn load_config(explicit: Option<&Path>) -> EditorConfig {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_config(),
    };
    match path {
        Some(path) => EditorConfig::from_file(&path).unwrap_or_else(|e| {
            warn!("Error reading {}: {}", path.display(), e);
            EditorConfig::default()
        }),
        None => EditorConfig::default(),
    }
}

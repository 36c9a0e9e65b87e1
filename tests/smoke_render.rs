// SPDX-License-Identifier: MIT 
// Copyright (c) 2025 Thomas Junier 

mod common;

use crate::common::utils;

use seam_edit::config::EditorConfig;
use seam_edit::editor::CursorBuffer;

#[test]
fn renders_without_panic() {
    let mut buffer = CursorBuffer::from_parts("how now brown", "cow");
    let buf = utils::render(&mut buffer, &EditorConfig::default(), 40, 10);
    let screen = utils::buffer_text(&buf);

    assert!(!screen.trim().is_empty());
    assert!(utils::screen_line(&buf, 1).contains("how now brown^cow"));
}

#[test]
fn renders_status_line() {
    let mut buffer = CursorBuffer::from_parts("ab", "cd");
    let buf = utils::render(&mut buffer, &EditorConfig::default(), 40, 6);
    let status = utils::screen_line(&buf, 5);
    assert!(status.starts_with("2/4 | F1: help"));

    let mut empty = CursorBuffer::new();
    let buf = utils::render(&mut empty, &EditorConfig::default(), 40, 6);
    assert!(utils::screen_line(&buf, 5).starts_with("0/0 [empty]"));
}

#[test]
fn renders_configured_marker() {
    let config = EditorConfig {
        cursor_marker: '|',
        marker_color: Some((255, 0, 0)),
        ..EditorConfig::default()
    };
    let mut buffer = CursorBuffer::from_parts("ab", "cd");
    let buf = utils::render(&mut buffer, &config, 20, 5);
    assert!(utils::screen_line(&buf, 1).contains("ab|cd"));
}

#[test]
fn renders_in_tiny_terminal() {
    let mut buffer = CursorBuffer::from_parts("a long line that will not fit", "");
    let buf = utils::render(&mut buffer, &EditorConfig::default(), 5, 2);
    assert_eq!(buf.area.width, 5);
}

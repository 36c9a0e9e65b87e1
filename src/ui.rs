// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
pub mod key_handling;
pub mod render;

use bitflags::bitflags;

use ratatui::style::{Color, Modifier, Style};

use crate::{command::EditCommand, config::EditorConfig, editor::CursorBuffer};

// Which ends of the buffer the cursor touches. An empty buffer is at both.

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct SeamEdges: u8 {
        const AT_FRONT = 0b01;
        const AT_END   = 0b10;
        const BOTH     = 0b11;
    }
}

pub struct UI<'a> {
    buffer: &'a mut CursorBuffer,
    marker: char,
    marker_style: Style,
    show_help: bool,
    last_command: Option<EditCommand>,
    dirty: bool,
}

impl<'a> UI<'a> {
    pub fn new(buffer: &'a mut CursorBuffer, config: &EditorConfig) -> Self {
        let marker_style = match config.marker_color {
            Some((r, g, b)) => Style::default()
                .fg(Color::Rgb(r, g, b))
                .add_modifier(Modifier::BOLD),
            None => Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
        };
        UI {
            buffer,
            marker: config.cursor_marker,
            marker_style,
            show_help: false,
            last_command: None,
            dirty: true,
        }
    }

    pub fn buffer(&self) -> &CursorBuffer {
        &*self.buffer
    }

    pub fn marker(&self) -> char {
        self.marker
    }

    pub fn marker_style(&self) -> Style {
        self.marker_style
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.dirty = true;
    }

    pub fn apply(&mut self, command: EditCommand) {
        self.buffer.apply(command);
        self.last_command = Some(command);
        self.dirty = true;
    }

    pub fn edges(&self) -> SeamEdges {
        let mut edges = SeamEdges::empty();
        if self.buffer.is_cursor_at_front() {
            edges |= SeamEdges::AT_FRONT;
        }
        if self.buffer.is_cursor_at_end() {
            edges |= SeamEdges::AT_END;
        }
        edges
    }

    pub fn status_line(&self) -> String {
        let edges = self.edges();
        let edges = if edges == SeamEdges::BOTH {
            " [empty]"
        } else if edges.contains(SeamEdges::AT_FRONT) {
            " [front]"
        } else if edges.contains(SeamEdges::AT_END) {
            " [end]"
        } else {
            ""
        };
        let last = match self.last_command {
            Some(command) => format!(" | {}", command),
            None => String::from(" | F1: help"),
        };
        format!(
            "{}/{}{}{}",
            self.buffer.cursor_position(),
            self.buffer.len(),
            edges,
            last
        )
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

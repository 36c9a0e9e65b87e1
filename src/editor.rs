// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// A text buffer with a cursor, kept as two chains: `left` holds the characters before the
// cursor and `right` the characters after it, both in reading order. The cursor is the seam
// between them; it is at the front iff `left` is empty and at the end iff `right` is empty.

use std::fmt;

use log::debug;
use serde::Serialize;

use crate::command::EditCommand;
use crate::node::{Chars, NodeId, NodePool};


pub const CURSOR_MARKER: char = '^';

#[derive(Clone, Debug, Default)]
pub struct CursorBuffer {
    pool: NodePool,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

/// Plain-text view of a buffer, for output.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub left: String,
    pub right: String,
    pub cursor: usize,
}

impl CursorBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(left: &str, right: &str) -> Self {
        let mut pool = NodePool::new();
        let left = pool.build(left);
        let right = pool.build(right);
        CursorBuffer { pool, left, right }
    }

    pub fn is_cursor_at_front(&self) -> bool {
        self.left.is_none()
    }

    pub fn is_cursor_at_end(&self) -> bool {
        self.right.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of characters before the cursor.
    pub fn cursor_position(&self) -> usize {
        self.pool.list_length(self.left)
    }

    pub fn len(&self) -> usize {
        self.pool.list_length(self.left) + self.pool.list_length(self.right)
    }

    pub fn left_chars(&self) -> Chars<'_> {
        self.pool.chars(self.left)
    }

    pub fn right_chars(&self) -> Chars<'_> {
        self.pool.chars(self.right)
    }

    pub fn left_text(&self) -> String {
        self.pool.collect_string(self.left)
    }

    pub fn right_text(&self) -> String {
        self.pool.collect_string(self.right)
    }

    pub fn text(&self) -> String {
        self.left_chars().chain(self.right_chars()).collect()
    }

    /// Character at 0-based `index` in the whole buffer.
    pub fn char_at(&self, index: usize) -> Option<char> {
        let left_len = self.cursor_position();
        let found = if index < left_len {
            self.pool.node_at_position(self.left, index + 1)
        } else {
            self.pool.node_at_position(self.right, index - left_len + 1)
        };
        // Positions are 1-based and never zero here.
        found.ok().flatten().map(|id| self.pool.data(id))
    }

    pub fn contains(&self, c: char) -> bool {
        self.pool.search(self.left, c).is_some() || self.pool.search(self.right, c).is_some()
    }

    /// Number of allocated nodes; always equal to `len()`.
    pub fn node_count(&self) -> usize {
        self.pool.live()
    }

    // ****************************************************************
    /*
     * Editing
     *
     * None of these fail: at a boundary (front or end, as appropriate) they do nothing.
     * */

    /// Inserts `c` before the cursor; the cursor ends up after it.
    pub fn insert_char(&mut self, c: char) {
        debug!("insert {:?} at {}", c, self.cursor_position());
        match self.pool.last_node(self.left) {
            Some(tail) if !self.is_cursor_at_end() => {
                self.pool.insert_after(tail, c);
            }
            _ => self.left = Some(self.pool.tail_insert(self.left, c)),
        }
    }

    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars() {
            self.insert_char(c);
        }
    }

    /// Removes the character after the cursor.
    pub fn delete_char(&mut self) {
        if let Some(head) = self.right {
            debug!("delete {:?}", self.pool.data(head));
            self.right = self.pool.remove_head(head);
        }
    }

    /// Removes the character before the cursor.
    pub fn backspace(&mut self) {
        if let Some(head) = self.left {
            self.left = self.pool.remove_tail(head);
            debug!("backspace, cursor now at {}", self.cursor_position());
        }
    }

    pub fn front_of_string(&mut self) {
        // Already at the front: nothing to splice.
        let Some(tail) = self.pool.last_node(self.left) else {
            return;
        };
        let displaced = self.pool.set_link(tail, self.right);
        debug_assert!(displaced.is_none());
        self.right = self.left.take();
        debug!("cursor to front");
    }

    pub fn end_of_string(&mut self) {
        if self.is_cursor_at_end() {
            return;
        }
        let right = self.right.take();
        match self.pool.last_node(self.left) {
            Some(tail) => {
                let displaced = self.pool.set_link(tail, right);
                debug_assert!(displaced.is_none());
            }
            None => self.left = right,
        }
        debug!("cursor to end");
    }

    pub fn move_cursor_left(&mut self) {
        let Some(head) = self.left else {
            return;
        };
        // The last node of `left` becomes the head of `right`.
        let (rest, moved) = self.pool.detach_tail(head);
        let displaced = self.pool.set_link(moved, self.right);
        debug_assert!(displaced.is_none());
        self.left = rest;
        self.right = Some(moved);
    }

    pub fn move_cursor_right(&mut self) {
        let Some(head) = self.right else {
            return;
        };
        let c = self.pool.data(head);
        self.left = Some(self.pool.tail_insert(self.left, c));
        self.right = self.pool.remove_head(head);
    }

    pub fn apply(&mut self, command: EditCommand) {
        match command {
            EditCommand::Insert(c) => self.insert_char(c),
            EditCommand::MoveRight => self.move_cursor_right(),
            EditCommand::MoveLeft => self.move_cursor_left(),
            EditCommand::ToFront => self.front_of_string(),
            EditCommand::ToEnd => self.end_of_string(),
            EditCommand::DeleteForward => self.delete_char(),
            EditCommand::DeleteBackward => self.backspace(),
        }
    }

    // ****************************************************************
    // Output

    /// Left text, `marker`, right text.
    pub fn render_with(&self, marker: char) -> String {
        self.left_chars()
            .chain(std::iter::once(marker))
            .chain(self.right_chars())
            .collect()
    }

    pub fn render(&self) -> String {
        self.render_with(CURSOR_MARKER)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            left: self.left_text(),
            right: self.right_text(),
            cursor: self.cursor_position(),
        }
    }
}

impl fmt::Display for CursorBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl PartialEq for CursorBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.left_chars().eq(other.left_chars()) && self.right_chars().eq(other.right_chars())
    }
}

impl Eq for CursorBuffer {}

// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fmt;

use regex::Regex;

use crate::errors::EditorError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditCommand {
    Insert(char),
    MoveRight,
    MoveLeft,
    ToFront,
    ToEnd,
    DeleteForward,
    DeleteBackward,
}

impl fmt::Display for EditCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditCommand::Insert(c) => write!(f, "insert {:?}", c),
            EditCommand::MoveRight => write!(f, "move right"),
            EditCommand::MoveLeft => write!(f, "move left"),
            EditCommand::ToFront => write!(f, "to front"),
            EditCommand::ToEnd => write!(f, "to end"),
            EditCommand::DeleteForward => write!(f, "delete forward"),
            EditCommand::DeleteBackward => write!(f, "delete backward"),
        }
    }
}

// Menu choices 2 to 7; choice 1 (insert) needs an argument and is handled by the menu itself.
pub fn from_menu_choice(choice: u32) -> Option<EditCommand> {
    match choice {
        2 => Some(EditCommand::MoveRight),
        3 => Some(EditCommand::MoveLeft),
        4 => Some(EditCommand::ToFront),
        5 => Some(EditCommand::ToEnd),
        6 => Some(EditCommand::DeleteForward),
        7 => Some(EditCommand::DeleteBackward),
        _ => None,
    }
}

fn from_letter(letter: &str) -> Option<EditCommand> {
    match letter {
        "r" => Some(EditCommand::MoveRight),
        "l" => Some(EditCommand::MoveLeft),
        "f" => Some(EditCommand::ToFront),
        "e" => Some(EditCommand::ToEnd),
        "d" => Some(EditCommand::DeleteForward),
        "b" => Some(EditCommand::DeleteBackward),
        _ => None,
    }
}

/// Parses an edit script: `;`-separated tokens, each either `i:TEXT` (insert every character of
/// TEXT) or one of `r l f e d b`, optionally preceded by a repeat count (`3l`).
///
/// ```text
/// i:how now brown cow; 3l; b; i:C
/// ```
pub fn parse_script(script: &str) -> Result<Vec<EditCommand>, EditorError> {
    let token_re = Regex::new(r"^(?:i:(?P<text>.*)|(?P<count>\d+)?(?P<op>[rlfedb]))$")?;
    let mut commands = Vec::new();
    for raw in script.split(';') {
        // Leading whitespace before 'i:' is dropped, but inserted text keeps its own spaces.
        let token = raw.trim_start();
        if token.trim_end().is_empty() {
            continue;
        }
        let token = if token.starts_with("i:") {
            token
        } else {
            token.trim_end()
        };
        let caps = token_re
            .captures(token)
            .ok_or_else(|| EditorError::Format(format!("unknown edit command '{}'", token)))?;
        if let Some(text) = caps.name("text") {
            commands.extend(text.as_str().chars().map(EditCommand::Insert));
            continue;
        }
        let count = match caps.name("count") {
            Some(m) => m
                .as_str()
                .parse::<usize>()
                .map_err(|e| EditorError::Format(format!("bad count in '{}': {}", token, e)))?,
            None => 1,
        };
        let op = caps
            .name("op")
            .and_then(|m| from_letter(m.as_str()))
            .ok_or_else(|| EditorError::Format(format!("unknown edit command '{}'", token)))?;
        commands.extend(std::iter::repeat(op).take(count));
    }
    Ok(commands)
}

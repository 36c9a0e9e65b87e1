// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Thomas Junier
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use log::debug;

use super::UI;
use crate::command::EditCommand::{
    self, DeleteBackward, DeleteForward, Insert, MoveLeft, MoveRight, ToEnd, ToFront,
};

// Returns true IFF the user quits.
pub fn handle_key_press(ui: &mut UI, key_event: KeyEvent) -> bool {
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
    let command: Option<EditCommand> = match key_event.code {
        KeyCode::Esc => return true,
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => return true,
        // Emacs-style motions
        KeyCode::Char('a') if ctrl => Some(ToFront),
        KeyCode::Char('e') if ctrl => Some(ToEnd),
        KeyCode::Char('b') if ctrl => Some(MoveLeft),
        KeyCode::Char('f') if ctrl => Some(MoveRight),
        KeyCode::Char('d') if ctrl => Some(DeleteForward),
        KeyCode::Char('h') if ctrl => Some(DeleteBackward),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(c) => Some(Insert(c)),
        KeyCode::Left => Some(MoveLeft),
        KeyCode::Right => Some(MoveRight),
        KeyCode::Home => Some(ToFront),
        KeyCode::End => Some(ToEnd),
        KeyCode::Backspace => Some(DeleteBackward),
        KeyCode::Delete => Some(DeleteForward),
        KeyCode::F(1) => {
            ui.toggle_help();
            None
        }
        _ => None,
    };
    if let Some(command) = command {
        debug!("key {:?} -> {}", key_event.code, command);
        ui.apply(command);
    }
    false
}

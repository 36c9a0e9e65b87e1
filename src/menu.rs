// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// Line-oriented front-end: a numbered menu, one edit per line, the buffer printed after each.

use std::io::{BufRead, Write};

use itertools::Itertools;
use log::debug;

use crate::command::{from_menu_choice, EditCommand};
use crate::config::EditorConfig;
use crate::editor::CursorBuffer;
use crate::errors::EditorError;

const MENU_OPTIONS: &[(u32, &str)] = &[
    (0, "Exit"),
    (1, "Insert Character"),
    (2, "Move cursor right"),
    (3, "Move cursor left"),
    (4, "Move cursor to front"),
    (5, "Move cursor to rear"),
    (6, "Delete character following"),
    (7, "Delete character preceding"),
];

pub fn menu_text() -> String {
    let options = MENU_OPTIONS
        .iter()
        .map(|(n, label)| format!("{}: {}", n, label))
        .join("\n");
    format!(
        "Please select from one of the following menu options:\n{}",
        options
    )
}

// None at end of input.
fn next_line<R: BufRead>(input: &mut R) -> Result<Option<String>, EditorError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let len = line.trim_end_matches(|c: char| c == '\n' || c == '\r').len();
    line.truncate(len);
    Ok(Some(line))
}

pub fn read_initial_string<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<String, EditorError> {
    writeln!(output, "Please enter an initial string:")?;
    Ok(next_line(input)?.unwrap_or_default())
}

pub fn run_menu<R: BufRead, W: Write>(
    buffer: &mut CursorBuffer,
    config: &EditorConfig,
    input: &mut R,
    output: &mut W,
) -> Result<(), EditorError> {
    let marker = config.cursor_marker;
    writeln!(output, "{}\n", buffer.render_with(marker))?;
    loop {
        if config.show_menu {
            writeln!(output, "{}", menu_text())?;
        }
        let Some(line) = next_line(input)? else {
            break;
        };
        let choice = match line.trim().parse::<u32>() {
            Ok(n) => n,
            Err(_) => {
                writeln!(output, "Not a menu option: {:?}", line.trim())?;
                continue;
            }
        };
        debug!("menu choice {}", choice);
        match choice {
            0 => {
                writeln!(output, "{}", buffer.render_with(marker))?;
                break;
            }
            1 => {
                writeln!(output, "Input Character:")?;
                let Some(entry) = next_line(input)? else {
                    break;
                };
                // Only the first word is taken, like a token-based prompt.
                let word = entry.split_whitespace().next().unwrap_or("");
                for c in word.chars() {
                    buffer.apply(EditCommand::Insert(c));
                }
            }
            n => match from_menu_choice(n) {
                Some(command) => buffer.apply(command),
                None => {
                    writeln!(output, "Not a menu option: {}", n)?;
                    continue;
                }
            },
        }
        writeln!(output, "{}", buffer.render_with(marker))?;
    }
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(initial: &str, keys: &str, config: &EditorConfig) -> (CursorBuffer, String) {
        let mut buffer = CursorBuffer::from_parts(initial, "");
        let mut input = Cursor::new(keys.as_bytes().to_vec());
        let mut output = Vec::new();
        run_menu(&mut buffer, config, &mut input, &mut output).unwrap();
        (buffer, String::from_utf8(output).unwrap())
    }

    fn quiet() -> EditorConfig {
        EditorConfig {
            show_menu: false,
            ..EditorConfig::default()
        }
    }

    #[test]
    fn test_menu_text() {
        let text = menu_text();
        assert!(text.starts_with("Please select"));
        assert!(text.contains("\n0: Exit\n"));
        assert!(text.ends_with("7: Delete character preceding"));
    }

    #[test]
    fn test_menu_session_00() {
        let (buffer, out) = session("abc", "3\n3\n1\nXY Z\n0\n", &quiet());
        assert_eq!(buffer.render(), "aXY^bc");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec!["abc^", "", "ab^c", "a^bc", "Input Character:", "aXY^bc", "aXY^bc"]
        );
    }

    #[test]
    fn test_menu_session_05() {
        // every movement and deletion choice
        let (buffer, _) = session("abcd", "4\n2\n6\n5\n7\n", &quiet());
        assert_eq!(buffer.render(), "ac^");
    }

    #[test]
    fn test_menu_bad_input() {
        let (buffer, out) = session("ab", "x\n9\n\n3\n", &quiet());
        assert_eq!(buffer.render(), "a^b");
        assert!(out.contains("Not a menu option: \"x\""));
        assert!(out.contains("Not a menu option: 9"));
    }

    #[test]
    fn test_menu_shown_and_marker() {
        let config = EditorConfig {
            cursor_marker: '|',
            ..EditorConfig::default()
        };
        let (_, out) = session("ab", "0\n", &config);
        assert!(out.starts_with("ab|\n\nPlease select"));
        assert_eq!(out.matches("0: Exit").count(), 1);
    }

    #[test]
    fn test_read_initial_string() {
        let mut input = Cursor::new(b"how now brown\r\n".to_vec());
        let mut output = Vec::new();
        let s = read_initial_string(&mut input, &mut output).unwrap();
        assert_eq!(s, "how now brown");
        assert_eq!(output, b"Please enter an initial string:\n");
        let mut empty = Cursor::new(Vec::new());
        assert_eq!(read_initial_string(&mut empty, &mut output).unwrap(), "");
    }
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    io::{self, stdout, Write},
    path::PathBuf,
    time::Duration,
};

use log::info;

use clap::Parser;

use crossterm::{
    event::{self, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};

use ratatui::{
    prelude::{CrosstermBackend, Rect, Terminal},
    TerminalOptions, Viewport,
};

use crate::command::parse_script;
use crate::config::{load_config, EditorConfig};
use crate::editor::CursorBuffer;
use crate::errors::EditorError;
use crate::menu::{read_initial_string, run_menu};
use crate::ui::{key_handling::handle_key_press, render::render_ui, UI};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct Cli {
    /// Text before the cursor (asked for in menu mode if absent)
    left: Option<String>,

    /// Text after the cursor
    #[arg(short, long, default_value = "")]
    right: String,

    /// Apply an edit script, e.g. "i:abc; 2l; b", and print the result
    #[arg(short = 'x', long = "exec")]
    script: Option<String>,

    /// Print the buffer after every scripted edit
    #[arg(short, long)]
    verbose: bool,

    /// Print scripted results as JSON
    #[arg(short, long)]
    json: bool,

    /// Full-screen editing
    #[arg(short = 'T', long)]
    tui: bool,

    /// Cursor marker (overrides the config file)
    #[arg(short, long)]
    marker: Option<char>,

    /// Do not print the menu before each choice
    #[arg(long = "no-menu")]
    no_menu: bool,

    /// Config file (default: ~/.seameditconfig, then ./.seameditconfig)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fixed terminal width (mostly used for testing/debugging)
    #[arg(short, long, requires = "height")]
    width: Option<u16>,

    /// Fixed terminal height ("tall" -- -h is already used)
    #[arg(short = 't', long, requires = "width")]
    height: Option<u16>,

    /// Poll wait time [ms]
    #[clap(long = "poll-wait-time", default_value_t = 50)]
    poll_wait_time: u64,
}

fn print_state<W: Write>(
    buffer: &CursorBuffer,
    config: &EditorConfig,
    json: bool,
    out: &mut W,
) -> Result<(), EditorError> {
    if json {
        let line = serde_json::to_string(&buffer.snapshot())
            .map_err(|e| EditorError::Format(e.to_string()))?;
        writeln!(out, "{}", line)?;
    } else {
        writeln!(out, "{}", buffer.render_with(config.cursor_marker))?;
    }
    Ok(())
}

// In verbose mode the starting state and every intermediate state are printed; otherwise only
// the final one.
fn run_script<W: Write>(
    buffer: &mut CursorBuffer,
    script: &str,
    config: &EditorConfig,
    verbose: bool,
    json: bool,
    out: &mut W,
) -> Result<(), EditorError> {
    let commands = parse_script(script)?;
    info!("running {} scripted edits", commands.len());
    if verbose {
        print_state(buffer, config, json, out)?;
    }
    for command in commands {
        buffer.apply(command);
        if verbose {
            print_state(buffer, config, json, out)?;
        }
    }
    if !verbose {
        print_state(buffer, config, json, out)?;
    }
    Ok(())
}

fn run_tui(buffer: &mut CursorBuffer, config: &EditorConfig, cli: &Cli) -> Result<(), EditorError> {
    stdout().execute(EnterAlternateScreen)?;
    enable_raw_mode()?;

    let backend = CrosstermBackend::new(stdout());
    // Fix viewport dimensions IFF supplied (mainly for tests)
    let viewport = match (cli.width, cli.height) {
        (Some(width), Some(height)) => Viewport::Fixed(Rect::new(0, 0, width, height)),
        _ => Viewport::Fullscreen,
    };
    let mut terminal = Terminal::with_options(backend, TerminalOptions { viewport })?;
    terminal.clear()?;

    let mut app_ui = UI::new(buffer, config);
    let poll_wait = Duration::from_millis(cli.poll_wait_time);
    terminal.draw(|f| render_ui(f, &mut app_ui))?;

    // main loop
    loop {
        // Wait for an event (or timeout)
        if event::poll(poll_wait)? {
            match event::read()? {
                event::Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app_ui.clear_dirty();
                    let done = handle_key_press(&mut app_ui, key);
                    if done {
                        break;
                    }
                    if app_ui.take_dirty() {
                        terminal.draw(|f| render_ui(f, &mut app_ui))?;
                    }
                }
                event::Event::Resize(_, _) => {
                    terminal.draw(|f| render_ui(f, &mut app_ui))?;
                }
                _ => {}
            }
        }
    }

    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;

    println!("{}", buffer.render_with(config.cursor_marker));
    Ok(())
}

pub fn run() -> Result<(), EditorError> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_deref());
    if let Some(marker) = cli.marker {
        config.cursor_marker = marker;
    }
    if cli.no_menu {
        config.show_menu = false;
    }

    if let Some(script) = &cli.script {
        info!("script mode");
        let mut buffer = CursorBuffer::from_parts(cli.left.as_deref().unwrap_or(""), &cli.right);
        let mut out = stdout().lock();
        return run_script(&mut buffer, script, &config, cli.verbose, cli.json, &mut out);
    }

    if cli.tui {
        info!("full-screen mode");
        let mut buffer = CursorBuffer::from_parts(cli.left.as_deref().unwrap_or(""), &cli.right);
        return run_tui(&mut buffer, &config, &cli);
    }

    info!("menu mode");
    let mut input = io::stdin().lock();
    let mut output = stdout().lock();
    let left = match &cli.left {
        Some(left) => left.clone(),
        None => read_initial_string(&mut input, &mut output)?,
    };
    let mut buffer = CursorBuffer::from_parts(&left, &cli.right);
    run_menu(&mut buffer, &config, &mut input, &mut output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn script_output(left: &str, right: &str, script: &str, verbose: bool, json: bool) -> String {
        let mut buffer = CursorBuffer::from_parts(left, right);
        let mut out = Vec::new();
        run_script(
            &mut buffer,
            script,
            &EditorConfig::default(),
            verbose,
            json,
            &mut out,
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parse() {
        let cli = Cli::try_parse_from(["seam-edit", "ab", "-r", "cd", "-x", "l", "-m", "|"]).unwrap();
        assert_eq!(cli.left.as_deref(), Some("ab"));
        assert_eq!(cli.right, "cd");
        assert_eq!(cli.script.as_deref(), Some("l"));
        assert_eq!(cli.marker, Some('|'));
        assert!(Cli::try_parse_from(["seam-edit", "-w", "80"]).is_err());
    }

    #[test]
    fn test_run_script_00() {
        let out = script_output("ab", "cd", "l; i:X", false, false);
        insta::assert_snapshot!(out.trim_end(), @"aX^bcd");
    }

    #[test]
    fn test_run_script_verbose() {
        let out = script_output("ab", "cd", "f;e", true, false);
        assert_eq!(out, "ab^cd\n^abcd\nabcd^\n");
    }

    #[test]
    fn test_run_script_json() {
        let out = script_output("", "", "i:hi; l", false, true);
        assert_eq!(out, "{\"left\":\"h\",\"right\":\"i\",\"cursor\":1}\n");
    }

    #[test]
    fn test_run_script_error() {
        let mut buffer = CursorBuffer::from_parts("ab", "");
        let mut out = Vec::new();
        let res = run_script(
            &mut buffer,
            "l; nope",
            &EditorConfig::default(),
            false,
            false,
            &mut out,
        );
        assert!(matches!(res, Err(EditorError::Format(_))));
        // Nothing is applied when the script does not parse
        assert_eq!(buffer.render(), "ab^");
        assert!(out.is_empty());
    }
}

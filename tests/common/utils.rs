// SPDX-License-Identifier: MIT 
// Copyright (c) 2025 Thomas Junier 

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, KeyEventKind};

use ratatui::{
    backend::TestBackend,
    buffer::Buffer,
    prelude::{Rect, Position, Terminal},
    TerminalOptions,
    Viewport,
};

use seam_edit::{
    config::EditorConfig,
    editor::CursorBuffer,
    ui::{
        render::render_ui,
        UI,
    },
};

#[allow(dead_code)]
pub fn render(buffer: &mut CursorBuffer, config: &EditorConfig, w: u16, h: u16) -> Buffer {
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).expect("terminal");
    let mut ui = UI::new(buffer, config);
    terminal.draw(|f| render_ui(f, &mut ui)).expect("draw");
    terminal.backend().buffer().clone()
}

#[allow(dead_code)]
pub fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            out.push(buf.cell(Position::from((x, y)))
                .expect("Wrong position")
                .symbol()
                .chars()
                .next()
                .unwrap_or(' '));
            }
        out.push('\n');
    }
    out
}

#[allow(dead_code)]
pub fn keypress(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

#[allow(dead_code)]
pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: crossterm::event::KeyEventState::NONE,
    }
}

#[allow(dead_code)]
pub fn with_rig<F>(
    left: &str,
    right: &str,
    term_width: u16,
    term_height: u16,
    mut f: F) 
    where
        F: FnMut(&mut UI, &mut Terminal<TestBackend>),
{
    let mut buffer = CursorBuffer::from_parts(left, right);
    let config = EditorConfig::default();
    let mut ui = UI::new(&mut buffer, &config);

    let backend = TestBackend::new(term_width, term_height);
    let viewport = Viewport::Fixed(Rect::new(0, 0, term_width, term_height));
    let mut terminal = Terminal::with_options(backend, TerminalOptions { viewport })
        .expect("creating test-backend terminal");
    // Initial draw
    terminal.draw(|f| render_ui(f, &mut ui)).expect("initial draw");

    // Events and assertions here
    f(&mut ui, &mut terminal);
}

#[allow(dead_code)]
pub fn screen_line(buffer: &Buffer, y: u16) -> String {
    let screen = buffer.area;
    (0..screen.width)
        .map(|x| buffer.cell(Position::from((x, y)))
            .expect("Wrong position")
            .symbol())
        .collect()
}

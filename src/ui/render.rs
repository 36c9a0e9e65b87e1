// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use ratatui::{
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

use super::UI;

const HELP_LINES: &[&str] = &[
    "←, C-b       move left",
    "→, C-f       move right",
    "Home, C-a    to front",
    "End, C-e     to end",
    "Bksp, C-h    delete preceding",
    "Del, C-d     delete following",
    "Esc, C-c     quit",
    "F1           toggle this help",
];

fn buffer_line<'a>(ui: &UI) -> Line<'a> {
    let buffer = ui.buffer();
    Line::from(vec![
        Span::raw(buffer.left_text()),
        Span::styled(ui.marker().to_string(), ui.marker_style()),
        Span::raw(buffer.right_text()),
    ])
}

pub fn render_ui(f: &mut Frame, ui: &mut UI) {
    let [main, status] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(f.area());

    let text_pane = Paragraph::new(buffer_line(ui))
        .wrap(Wrap { trim: false })
        .block(Block::bordered().title(" seam-edit "));

    if ui.show_help() {
        let help_height = HELP_LINES.len() as u16 + 2;
        let [text_area, help_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(help_height)]).areas(main);
        let help: Vec<Line> = HELP_LINES.iter().map(|l| Line::raw(*l)).collect();
        let help_pane = Paragraph::new(help).block(Block::bordered().title(" Help "));
        f.render_widget(text_pane, text_area);
        f.render_widget(help_pane, help_area);
    } else {
        f.render_widget(text_pane, main);
    }

    let status_line =
        Paragraph::new(ui.status_line()).style(Style::default().add_modifier(Modifier::DIM));
    f.render_widget(status_line, status);
}

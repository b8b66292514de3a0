//! UI rendering helpers for the terminal user interface.
//!
//! This module renders the select screen with `ratatui`. Geometry lives in
//! `ui::layout` so the runtime can hit-test mouse events against the same
//! rectangles that were drawn.

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Modifier, Style, Stylize},
    text::{Line, Text},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::audio::AudioOutput;
use crate::config::{PointerKind, UiSettings};

pub mod layout;

const CONTROLS: &[(&str, &str)] = &[
    ("1-6", "theme"),
    ("arrows/hjkl", "move"),
    ("enter/space", "choose"),
    ("esc", "close"),
    ("q", "quit"),
];

fn controls_text() -> String {
    CONTROLS
        .iter()
        .map(|(k, v)| format!("[{k}] {v}"))
        .collect::<Vec<String>>()
        .join(" | ")
}

fn status_text<O: AudioOutput>(app: &App<O>) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push(format!(" THEME: {}", app.board.track()));
    if app.board.is_started() {
        parts.push("AUDIO: on".to_string());
    } else {
        parts.push("AUDIO: press any key or click to start".to_string());
    }
    parts.push(format!("SOUNDS: {}", app.board.player().active().len()));
    parts.push(
        match app.pointer {
            PointerKind::Fine => "POINTER: mouse",
            PointerKind::Coarse => "POINTER: touch",
        }
        .to_string(),
    );
    if let Some(f) = app.chosen() {
        parts.push(format!("CHOSEN: {}", f.name));
    }

    parts.join(" • ")
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw<O: AudioOutput>(frame: &mut Frame, app: &App<O>, ui_settings: &UiSettings) {
    let areas = layout::areas(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" charsel ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, areas.header);

    // Theme buttons
    for (track, rect) in layout::track_buttons(areas.tracks) {
        let mut button = Paragraph::new(format!("{track}"))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        if track == app.board.track() {
            button = button.reversed();
        }
        frame.render_widget(button, rect);
    }

    // Fighter grid
    let cells = layout::grid_cells(areas.grid, app.fighters.len(), app.columns);
    for (i, rect) in cells.iter().enumerate() {
        let fighter = &app.fighters[i];
        let mut style = Style::default();
        if i == app.cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        if app.pending_tap == Some(i) {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        let cell = Paragraph::new(fighter.name.as_str())
            .alignment(Alignment::Center)
            .style(style)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(cell, *rect);
    }

    // Status box
    let status = Paragraph::new(status_text(app))
        .block(Block::bordered().title(" status "))
        .wrap(Wrap { trim: true });
    frame.render_widget(status, areas.status);

    // Chosen-fighter overlay, kept inside the grid area.
    if let Some(fighter) = app.chosen() {
        let art_lines = fighter.art.lines().count() as u16;
        let art_width = fighter
            .art
            .lines()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0) as u16;
        let width = art_width.max(fighter.name.chars().count() as u16) + 6;
        let popup_area = layout::centered_rect_sized(width.max(24), art_lines + 5, areas.grid);
        frame.render_widget(Clear, popup_area);

        let mut lines: Vec<Line> = fighter.art.lines().map(Line::from).collect();
        lines.push(Line::default());
        lines.push(Line::from(fighter.name.as_str()).bold());

        let popup = Paragraph::new(Text::from(lines))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" chosen (esc closes) ")
                    .padding(Padding {
                        left: 1,
                        right: 1,
                        top: 0,
                        bottom: 0,
                    }),
            );
        frame.render_widget(popup, popup_area);
    }

    let footer = Paragraph::new(controls_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, areas.footer);
}

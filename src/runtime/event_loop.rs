use std::time::Duration;

use crossterm::event;
use ratatui::layout::Rect;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, Flow};
use crate::audio::AudioOutput;
use crate::config;
use crate::runtime::binder::{Binder, Screen};
use crate::ui;

/// Main terminal event loop: reaps finished sounds, draws, and dispatches
/// input. Returns `Ok(())` when the user quits.
pub fn run<O: AudioOutput>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App<O>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut binder = Binder::new();

    loop {
        // Natural completions are only observable by polling.
        app.tick();

        let mut area = Rect::default();
        terminal.draw(|f| {
            area = f.area();
            ui::draw(f, app, &settings.ui);
        })?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }

        let ev = event::read()?;
        let screen = Screen {
            area,
            fighters: app.fighters.len(),
            columns: app.columns,
        };
        for input in binder.translate(&ev, &screen) {
            if app.handle(input) == Flow::Quit {
                return Ok(());
            }
        }
    }
}

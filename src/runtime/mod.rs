use std::env;
use std::io::Stdout;
use std::path::PathBuf;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::audio::RodioOutput;

mod binder;
mod event_loop;
mod logging;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let loaded = settings::load_settings();
    let mut settings = loaded.settings;
    let log_gate = logging::init(&settings.log);
    if let Some(reason) = loaded.fallback {
        log::warn!("{reason}");
    }

    if let Some(dir) = env::args().nth(1) {
        settings.audio.sounds_dir = PathBuf::from(dir);
    }

    // Clips load before the terminal switches to the alternate screen, so
    // load failures stay visible.
    let mut app = startup::build_app(&settings, RodioOutput::new());

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    log_gate.hold();
    let run_result = event_loop::run(&mut terminal, &settings, &mut app);

    let restored = restore_terminal(&mut terminal);
    // Anything logged while the TUI was up (e.g. a missing audio device)
    // lands on the normal screen now.
    log_gate.release();
    restored?;

    run_result
}

fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

#[cfg(test)]
mod tests;

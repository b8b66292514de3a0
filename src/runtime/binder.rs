//! Translation of terminal events into select-screen inputs.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::app::{Input, Step};
use crate::audio::TrackNo;
use crate::ui::layout;

/// Geometry needed to hit-test the pointer.
pub struct Screen {
    pub area: Rect,
    pub fighters: usize,
    pub columns: usize,
}

/// Stateful event translator. Remembers whether the unlock gesture has been
/// seen and which cell the pointer is currently over.
#[derive(Default)]
pub struct Binder {
    unlocked: bool,
    hovered: Option<usize>,
}

impl Binder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translate(&mut self, event: &Event, screen: &Screen) -> Vec<Input> {
        match event {
            Event::Key(key) => self.key(key),
            Event::Mouse(mouse) => self.mouse(mouse, screen),
            _ => Vec::new(),
        }
    }

    fn unlock_once(&mut self, out: &mut Vec<Input>) {
        if !self.unlocked {
            self.unlocked = true;
            out.push(Input::Unlock);
        }
    }

    fn key(&mut self, key: &KeyEvent) -> Vec<Input> {
        if key.kind != KeyEventKind::Press {
            return Vec::new();
        }
        let mut out = Vec::new();
        self.unlock_once(&mut out);

        let mapped = match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => TrackNo::from_digit(c).map(Input::Track),
            KeyCode::Left | KeyCode::Char('h') => Some(Input::Cursor(Step::Left)),
            KeyCode::Right | KeyCode::Char('l') => Some(Input::Cursor(Step::Right)),
            KeyCode::Up | KeyCode::Char('k') => Some(Input::Cursor(Step::Up)),
            KeyCode::Down | KeyCode::Char('j') => Some(Input::Cursor(Step::Down)),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Input::Confirm),
            KeyCode::Esc => Some(Input::Dismiss),
            KeyCode::Char('q') => Some(Input::Quit),
            _ => None,
        };
        out.extend(mapped);
        out
    }

    fn mouse(&mut self, mouse: &MouseEvent, screen: &Screen) -> Vec<Input> {
        let areas = layout::areas(screen.area);
        let cells = layout::grid_cells(areas.grid, screen.fighters, screen.columns);
        let (x, y) = (mouse.column, mouse.row);

        let mut out = Vec::new();
        match mouse.kind {
            MouseEventKind::Down(_) => self.unlock_once(&mut out),
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(cell) = layout::cell_at(&cells, x, y) {
                    out.push(Input::Click(cell));
                } else if let Some(track) =
                    layout::track_at(&layout::track_buttons(areas.tracks), x, y)
                {
                    out.push(Input::Track(track));
                }
            }
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                let over = layout::cell_at(&cells, x, y);
                if over != self.hovered {
                    self.hovered = over;
                    out.extend(over.map(Input::PointerEnter));
                }
            }
            _ => {}
        }
        out
    }
}

//! Application model types: `App` and `Overlay`.
//!
//! The `App` struct holds the roster, the keyboard cursor, the touch tap state
//! and the overlay, and routes every `Input` to the soundboard.

use crate::audio::{AudioOutput, Soundboard, TrackNo};
use crate::config::PointerKind;
use crate::roster::Fighter;

use super::input::{Flow, Input, Step};

/// The "chosen fighter" popup.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Overlay {
    pub active: bool,
    /// Roster index whose portrait and name are shown.
    pub fighter: Option<usize>,
}

/// The main application model.
pub struct App<O: AudioOutput> {
    pub fighters: Vec<Fighter>,
    pub board: Soundboard<O>,
    pub pointer: PointerKind,
    pub columns: usize,
    pub cursor: usize,
    /// On a coarse pointer, the cell that received the first tap.
    pub pending_tap: Option<usize>,
    pub overlay: Overlay,
}

impl<O: AudioOutput> App<O> {
    pub fn new(fighters: Vec<Fighter>, board: Soundboard<O>, pointer: PointerKind, columns: u16) -> Self {
        Self {
            fighters,
            board,
            pointer,
            columns: usize::from(columns.max(1)),
            cursor: 0,
            pending_tap: None,
            overlay: Overlay::default(),
        }
    }

    pub fn handle(&mut self, input: Input) -> Flow {
        match input {
            Input::Unlock => {
                self.board.unlock();
            }
            Input::Track(track) => self.set_track(track),
            Input::PointerEnter(cell) => self.pointer_enter(cell),
            Input::Click(cell) => self.click(cell),
            Input::Cursor(step) => {
                if self.move_cursor(step) {
                    self.board.hover();
                }
            }
            Input::Confirm => {
                if self.has_fighters() {
                    self.select(self.cursor);
                }
            }
            Input::Dismiss => self.overlay.active = false,
            Input::Quit => {
                self.board.stop_all();
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    /// Per-frame housekeeping: reap finished sounds. A jingle that ends on
    /// its own closes the overlay (the soundboard resumes the theme).
    pub fn tick(&mut self) {
        if self.board.tick() {
            self.overlay.active = false;
        }
    }

    pub fn has_fighters(&self) -> bool {
        !self.fighters.is_empty()
    }

    pub fn chosen(&self) -> Option<&Fighter> {
        if !self.overlay.active {
            return None;
        }
        self.overlay.fighter.and_then(|i| self.fighters.get(i))
    }

    fn set_track(&mut self, track: TrackNo) {
        if self.board.set_track(track) && self.board.is_started() {
            self.overlay.active = false;
        }
    }

    fn pointer_enter(&mut self, cell: usize) {
        if self.pointer == PointerKind::Coarse || cell >= self.fighters.len() {
            return;
        }
        self.board.hover();
    }

    fn click(&mut self, cell: usize) {
        if cell >= self.fighters.len() {
            return;
        }
        self.board.unlock();
        self.cursor = cell;

        if self.pointer == PointerKind::Coarse && self.pending_tap != Some(cell) {
            // First tap only previews.
            self.pending_tap = Some(cell);
            self.board.hover();
            return;
        }
        self.select(cell);
    }

    fn select(&mut self, cell: usize) {
        self.board.unlock();
        self.board.choose();
        self.overlay = Overlay {
            active: true,
            fighter: Some(cell),
        };
        if let Some(f) = self.fighters.get(cell) {
            log::debug!("chose {} on track {}", f.name, self.board.track());
        }
    }

    /// Move the keyboard cursor within the grid. Returns false at an edge.
    pub fn move_cursor(&mut self, step: Step) -> bool {
        let n = self.fighters.len();
        if n == 0 {
            return false;
        }
        let cols = self.columns;
        let cur = self.cursor.min(n - 1);
        let next = match step {
            Step::Left if cur % cols > 0 => cur - 1,
            Step::Right if (cur + 1) % cols != 0 && cur + 1 < n => cur + 1,
            Step::Up if cur >= cols => cur - cols,
            Step::Down if cur + cols < n => cur + cols,
            _ => return false,
        };
        self.cursor = next;
        true
    }
}

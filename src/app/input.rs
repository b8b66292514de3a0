use crate::audio::TrackNo;

/// Everything the select screen reacts to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Input {
    /// First user interaction; grants audio.
    Unlock,
    /// Number key or track button.
    Track(TrackNo),
    /// Pointer moved onto a cell.
    PointerEnter(usize),
    /// Pointer click (or tap) on a cell.
    Click(usize),
    /// Keyboard cursor movement.
    Cursor(Step),
    /// Keyboard selection of the cursor cell.
    Confirm,
    /// Hide the overlay.
    Dismiss,
    Quit,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Step {
    Left,
    Right,
    Up,
    Down,
}

/// Whether the runtime should keep going after an input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

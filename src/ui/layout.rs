//! Screen geometry shared by rendering and mouse hit testing.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::audio::TrackNo;

/// Tallest a grid cell is allowed to get.
const MAX_CELL_HEIGHT: u16 = 5;

pub struct Areas {
    pub header: Rect,
    pub tracks: Rect,
    pub grid: Rect,
    pub status: Rect,
    pub footer: Rect,
}

pub fn areas(area: Rect) -> Areas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);
    Areas {
        header: chunks[0],
        tracks: chunks[1],
        grid: chunks[2],
        status: chunks[3],
        footer: chunks[4],
    }
}

/// One button per theme, left to right.
pub fn track_buttons(area: Rect) -> Vec<(TrackNo, Rect)> {
    let n = u16::from(TrackNo::COUNT);
    let w = area.width / n;
    if w == 0 {
        return Vec::new();
    }
    TrackNo::all()
        .enumerate()
        .map(|(i, track)| {
            let rect = Rect {
                x: area.x + i as u16 * w,
                y: area.y,
                width: w,
                height: area.height,
            };
            (track, rect)
        })
        .collect()
}

/// Cell rectangles for `count` fighters laid out row-major in `columns`.
pub fn grid_cells(area: Rect, count: usize, columns: usize) -> Vec<Rect> {
    if count == 0 || columns == 0 {
        return Vec::new();
    }
    let cols = columns.min(count);
    let rows = count.div_ceil(cols);
    let w = area.width / cols as u16;
    let h = (area.height / rows as u16).min(MAX_CELL_HEIGHT);
    if w == 0 || h == 0 {
        return Vec::new();
    }

    (0..count)
        .map(|i| Rect {
            x: area.x + (i % cols) as u16 * w,
            y: area.y + (i / cols) as u16 * h,
            width: w,
            height: h,
        })
        .collect()
}

pub fn contains(r: Rect, x: u16, y: u16) -> bool {
    x >= r.x && x < r.x.saturating_add(r.width) && y >= r.y && y < r.y.saturating_add(r.height)
}

/// Index of the cell under `(x, y)`.
pub fn cell_at(cells: &[Rect], x: u16, y: u16) -> Option<usize> {
    cells.iter().position(|&r| contains(r, x, y))
}

/// Theme button under `(x, y)`.
pub fn track_at(buttons: &[(TrackNo, Rect)], x: u16, y: u16) -> Option<TrackNo> {
    buttons
        .iter()
        .find(|(_, r)| contains(*r, x, y))
        .map(|(t, _)| *t)
}

/// Compute a centered rectangle with given size constrained to `r`.
pub fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

//! Clip naming conventions and the theme number type.
//!
//! Every clip is addressed by name. Themes and jingles come in numbered sets,
//! one per selectable track: `select-N` loops in the background and `chosen-N`
//! plays when a fighter is picked.

use std::fmt;

/// Short confirmation blip.
pub const CLICK: &str = "click";
/// Played when the pointer enters a cell.
pub const HOVER: &str = "hover";

const JINGLE_PREFIX: &str = "chosen";
const THEME_PREFIX: &str = "select";

/// A theme number in `1..=TrackNo::COUNT`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackNo(u8);

impl TrackNo {
    pub const COUNT: u8 = 6;

    pub fn new(n: u8) -> Option<Self> {
        (1..=Self::COUNT).contains(&n).then_some(Self(n))
    }

    /// Map a digit key to a track number.
    pub fn from_digit(c: char) -> Option<Self> {
        c.to_digit(10).and_then(|d| Self::new(d as u8))
    }

    pub fn all() -> impl Iterator<Item = TrackNo> {
        (1..=Self::COUNT).map(TrackNo)
    }
}

impl Default for TrackNo {
    fn default() -> Self {
        Self(Self::COUNT)
    }
}

impl fmt::Display for TrackNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn jingle(track: TrackNo) -> String {
    format!("{JINGLE_PREFIX}-{track}")
}

pub fn theme(track: TrackNo) -> String {
    format!("{THEME_PREFIX}-{track}")
}

pub fn is_jingle(name: &str) -> bool {
    name.starts_with(JINGLE_PREFIX)
}

pub fn is_theme(name: &str) -> bool {
    name.starts_with(THEME_PREFIX)
}

/// Every clip the screen can play, in load order.
pub fn all_clip_names() -> Vec<String> {
    let mut names = vec![CLICK.to_string(), HOVER.to_string()];
    names.extend(TrackNo::all().map(jingle));
    names.extend(TrackNo::all().map(theme));
    names
}

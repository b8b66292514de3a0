//! Audio subsystem: clip loading, voices, the active-sound registry and the
//! soundboard that owns the background theme.

mod clips;
mod controller;
mod cues;
mod output;
mod player;
mod registry;

pub use clips::load_clips;
pub use controller::Soundboard;
pub use cues::{TrackNo, all_clip_names};
pub use output::{AudioOutput, RodioOutput};
pub use player::SoundPlayer;

#[cfg(test)]
pub(crate) mod fake;

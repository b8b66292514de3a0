use crate::app::App;
use crate::audio::{self, AudioOutput, SoundPlayer, Soundboard, TrackNo};
use crate::config::Settings;
use crate::roster;

/// Load every clip and the roster, then assemble the select screen on `output`.
///
/// Clip loading completes before this returns, so the screen never starts
/// with a partially populated store.
pub fn build_app<O: AudioOutput>(settings: &Settings, output: O) -> App<O> {
    let names = audio::all_clip_names();
    let clips = audio::load_clips(&settings.audio.sounds_dir, &names, &settings.audio.extension);
    if clips.is_empty() {
        log::warn!(
            "no clips loaded from {}; the screen will be silent",
            settings.audio.sounds_dir.display()
        );
    }

    let fighters = roster::load_or_builtin(settings.roster.path.as_deref());
    let track = TrackNo::new(settings.audio.initial_track).unwrap_or_default();

    let player = SoundPlayer::new(clips, output, settings.audio.volume);
    App::new(
        fighters,
        Soundboard::new(player, track),
        settings.input.pointer,
        settings.ui.columns,
    )
}

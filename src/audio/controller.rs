//! The soundboard: selected theme, the unlock gate and the background loop.

use super::cues::{self, TrackNo};
use super::output::AudioOutput;
use super::player::SoundPlayer;
use super::registry::SoundId;

/// Owns all sound state of the select screen.
///
/// At most one instance is the background loop at any time; starting a new
/// loop always stops the previous one first.
pub struct Soundboard<O: AudioOutput> {
    player: SoundPlayer<O>,
    track: TrackNo,
    started: bool,
    theme: Option<SoundId>,
}

impl<O: AudioOutput> Soundboard<O> {
    pub fn new(player: SoundPlayer<O>, track: TrackNo) -> Self {
        Self {
            player,
            track,
            started: false,
            theme: None,
        }
    }

    pub fn track(&self) -> TrackNo {
        self.track
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    #[cfg(test)]
    pub fn theme(&self) -> Option<SoundId> {
        self.theme
    }

    pub fn player(&self) -> &SoundPlayer<O> {
        &self.player
    }

    /// First user interaction: open the output and start the theme.
    /// Returns false when already unlocked.
    pub fn unlock(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        self.player.resume_output();
        self.play_theme(self.track);
        log::debug!("audio unlocked on track {}", self.track);
        true
    }

    /// Switch to `track`. Returns false (and does nothing) if it is already
    /// selected. Before unlock only the selection changes.
    pub fn set_track(&mut self, track: TrackNo) -> bool {
        if track == self.track {
            return false;
        }
        self.track = track;
        log::debug!("track -> {track}");

        if self.started {
            self.stop_all();
            self.player.play(cues::CLICK, false);
            self.play_theme(track);
        }
        true
    }

    /// Replace the background loop with the theme for `track`.
    pub fn play_theme(&mut self, track: TrackNo) -> Option<SoundId> {
        if let Some(id) = self.theme.take() {
            self.player.stop(id);
        }
        self.theme = self.player.play(&cues::theme(track), true);
        self.theme
    }

    /// Halt every sound, including the background loop.
    pub fn stop_all(&mut self) -> usize {
        self.theme = None;
        self.player.stop_all()
    }

    /// Hover cue, only once audio is unlocked.
    pub fn hover(&mut self) -> Option<SoundId> {
        if !self.started {
            return None;
        }
        self.player.play(cues::HOVER, false)
    }

    /// Selection: cut any theme or jingle in flight, then play the
    /// confirmation blip and the jingle for the current track.
    pub fn choose(&mut self) -> Option<SoundId> {
        self.player
            .stop_where(|clip| cues::is_theme(clip) || cues::is_jingle(clip));
        if self
            .theme
            .is_some_and(|id| !self.player.active().contains(id))
        {
            self.theme = None;
        }

        self.player.play(cues::CLICK, false);
        self.player.play(&cues::jingle(self.track), false)
    }

    /// Reap sounds that finished on their own. When a jingle ends naturally
    /// the theme resumes; returns true in that case.
    pub fn tick(&mut self) -> bool {
        let mut jingle_done = false;
        for finished in self.player.reap_finished() {
            if self.theme == Some(finished.id) {
                self.theme = None;
            }
            if cues::is_jingle(&finished.clip) {
                jingle_done = true;
            }
        }

        if jingle_done {
            self.play_theme(self.track);
        }
        jingle_done
    }
}

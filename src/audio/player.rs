use super::clips::ClipStore;
use super::output::AudioOutput;
use super::registry::{ActiveSounds, Finished, SoundId};

/// Starts voices for loaded clips and keeps them in the registry.
pub struct SoundPlayer<O: AudioOutput> {
    clips: ClipStore,
    output: O,
    active: ActiveSounds<O::Voice>,
    volume: f32,
}

impl<O: AudioOutput> SoundPlayer<O> {
    pub fn new(clips: ClipStore, output: O, volume: f32) -> Self {
        Self {
            clips,
            output,
            active: ActiveSounds::new(),
            volume,
        }
    }

    /// Start a new instance of `name`. Every call creates its own voice, so the
    /// same clip can overlap itself. Returns `None` when the clip never loaded.
    pub fn play(&mut self, name: &str, looping: bool) -> Option<SoundId> {
        let clip = self.clips.get(name)?;
        let voice = self.output.start(clip, looping, self.volume)?;
        Some(self.active.insert(name, looping, voice))
    }

    pub fn resume_output(&mut self) {
        self.output.resume();
    }

    pub fn stop(&mut self, id: SoundId) -> bool {
        self.active.stop(id)
    }

    pub fn stop_where(&mut self, pred: impl FnMut(&str) -> bool) -> usize {
        self.active.stop_where(pred)
    }

    pub fn stop_all(&mut self) -> usize {
        self.active.stop_all()
    }

    pub fn reap_finished(&mut self) -> Vec<Finished> {
        self.active.reap_finished()
    }

    pub fn active(&self) -> &ActiveSounds<O::Voice> {
        &self.active
    }

    #[cfg(test)]
    pub fn output(&self) -> &O {
        &self.output
    }
}

//! Tracking of every sound currently playing.
//!
//! The registry owns each voice from the moment it starts until it is either
//! stopped or reaped after finishing on its own. Removal is the interruption:
//! a stopped instance leaves the map before its voice is silenced, so only
//! entries still present can ever be reported as a natural completion.

use std::collections::BTreeMap;

use super::output::Voice;

/// Identifier of one playback instance. Never reused.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SoundId(u64);

struct Playback<V> {
    clip: String,
    looping: bool,
    voice: V,
}

/// A playback that ended naturally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finished {
    pub id: SoundId,
    pub clip: String,
}

pub struct ActiveSounds<V> {
    next_id: u64,
    playing: BTreeMap<SoundId, Playback<V>>,
}

impl<V: Voice> ActiveSounds<V> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            playing: BTreeMap::new(),
        }
    }

    /// Start tracking `voice`, which is already playing `clip`.
    pub fn insert(&mut self, clip: &str, looping: bool, voice: V) -> SoundId {
        let id = SoundId(self.next_id);
        self.next_id += 1;
        self.playing.insert(
            id,
            Playback {
                clip: clip.to_string(),
                looping,
                voice,
            },
        );
        id
    }

    /// Interrupt and forget one instance. Returns false if it was not tracked.
    pub fn stop(&mut self, id: SoundId) -> bool {
        match self.playing.remove(&id) {
            Some(p) => {
                p.voice.stop();
                true
            }
            None => false,
        }
    }

    /// Interrupt every instance whose clip name matches `pred`.
    pub fn stop_where(&mut self, mut pred: impl FnMut(&str) -> bool) -> usize {
        let ids: Vec<SoundId> = self
            .playing
            .iter()
            .filter(|(_, p)| pred(&p.clip))
            .map(|(&id, _)| id)
            .collect();
        for id in &ids {
            self.stop(*id);
        }
        ids.len()
    }

    /// Interrupt every tracked instance and clear the registry.
    pub fn stop_all(&mut self) -> usize {
        let n = self.playing.len();
        for p in std::mem::take(&mut self.playing).into_values() {
            p.voice.stop();
        }
        n
    }

    /// Remove instances that finished on their own and report them.
    pub fn reap_finished(&mut self) -> Vec<Finished> {
        let done: Vec<SoundId> = self
            .playing
            .iter()
            .filter(|(_, p)| !p.looping && p.voice.is_finished())
            .map(|(&id, _)| id)
            .collect();

        done.into_iter()
            .filter_map(|id| {
                self.playing
                    .remove(&id)
                    .map(|p| Finished { id, clip: p.clip })
            })
            .collect()
    }

    pub fn contains(&self, id: SoundId) -> bool {
        self.playing.contains_key(&id)
    }

    #[cfg(test)]
    pub fn clip_of(&self, id: SoundId) -> Option<&str> {
        self.playing.get(&id).map(|p| p.clip.as_str())
    }

    /// Names of all playing clips, oldest first.
    #[cfg(test)]
    pub fn clips(&self) -> impl Iterator<Item = &str> {
        self.playing.values().map(|p| p.clip.as_str())
    }

    pub fn len(&self) -> usize {
        self.playing.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.playing.is_empty()
    }
}

impl<V: Voice> Default for ActiveSounds<V> {
    fn default() -> Self {
        Self::new()
    }
}

//! In-memory output used by tests.

use std::cell::Cell;
use std::rc::Rc;

use super::clips::{Clip, ClipStore};
use super::output::{AudioOutput, Voice};

#[derive(Default)]
struct VoiceState {
    stopped: Cell<bool>,
    finished: Cell<bool>,
}

/// Test handle onto a started voice.
#[derive(Clone)]
pub struct VoiceHandle {
    pub looping: bool,
    state: Rc<VoiceState>,
}

impl VoiceHandle {
    pub fn is_stopped(&self) -> bool {
        self.state.stopped.get()
    }

    /// Simulate the voice reaching the end of its clip.
    pub fn finish(&self) {
        self.state.finished.set(true);
    }
}

pub struct FakeVoice {
    state: Rc<VoiceState>,
}

impl Voice for FakeVoice {
    fn stop(&self) {
        self.state.stopped.set(true);
    }

    fn is_finished(&self) -> bool {
        self.state.finished.get() || self.state.stopped.get()
    }
}

#[derive(Default)]
pub struct FakeOutput {
    pub resumed: u32,
    started: Vec<VoiceHandle>,
}

impl FakeOutput {
    pub fn started(&self) -> Vec<VoiceHandle> {
        self.started.clone()
    }

    pub fn started_count(&self) -> usize {
        self.started.len()
    }

    pub fn last(&self) -> Option<VoiceHandle> {
        self.started.last().cloned()
    }
}

impl AudioOutput for FakeOutput {
    type Voice = FakeVoice;

    fn resume(&mut self) {
        self.resumed += 1;
    }

    fn start(&mut self, _clip: &Clip, looping: bool, _volume: f32) -> Option<FakeVoice> {
        let state = Rc::new(VoiceState::default());
        self.started.push(VoiceHandle {
            looping,
            state: state.clone(),
        });
        Some(FakeVoice { state })
    }
}

/// A store holding a short silent clip for every name in `names`.
pub fn store_with(names: &[&str]) -> ClipStore {
    let mut store = ClipStore::default();
    for name in names {
        store.insert(*name, Clip::new(vec![0.0; 64], 1, 44_100));
    }
    store
}

/// A store with the full cue set loaded.
pub fn full_store() -> ClipStore {
    let names = super::cues::all_clip_names();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    store_with(&refs)
}

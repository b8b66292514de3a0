//! Audio output seam.
//!
//! `AudioOutput` starts voices; a `Voice` is one independent playback that can
//! be stopped and polled for completion. `RodioOutput` is the real device
//! implementation.

use rodio::{OutputStream, OutputStreamBuilder, Sink};

use super::clips::Clip;

/// One in-flight playback of a clip.
pub trait Voice {
    /// Stop playback. Must be a silent no-op if the voice already finished.
    fn stop(&self);
    /// True once a one-shot voice has played to the end.
    fn is_finished(&self) -> bool;
}

pub trait AudioOutput {
    type Voice: Voice;

    /// Make the output ready to produce sound (the first user interaction
    /// calls this).
    fn resume(&mut self);

    /// Start a new, independent voice for `clip`. Returns `None` if the
    /// output cannot play right now.
    fn start(&mut self, clip: &Clip, looping: bool, volume: f32) -> Option<Self::Voice>;
}

/// `rodio` output. The device is opened lazily on first use.
pub struct RodioOutput {
    stream: Option<OutputStream>,
    open_failed: bool,
}

impl RodioOutput {
    pub fn new() -> Self {
        Self {
            stream: None,
            open_failed: false,
        }
    }

    fn stream(&mut self) -> Option<&OutputStream> {
        if self.stream.is_none() && !self.open_failed {
            match OutputStreamBuilder::open_default_stream() {
                Ok(mut stream) => {
                    // rodio logs to stderr when OutputStream is dropped, which would
                    // land on top of the TUI.
                    stream.log_on_drop(false);
                    self.stream = Some(stream);
                }
                Err(err) => {
                    log::error!("no audio output device: {err}");
                    self.open_failed = true;
                }
            }
        }
        self.stream.as_ref()
    }
}

impl Default for RodioOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioOutput for RodioOutput {
    type Voice = RodioVoice;

    fn resume(&mut self) {
        let _ = self.stream();
    }

    fn start(&mut self, clip: &Clip, looping: bool, volume: f32) -> Option<RodioVoice> {
        let stream = self.stream()?;
        let sink = Sink::connect_new(stream.mixer());
        sink.set_volume(volume);
        sink.append(clip.to_source(looping));
        sink.play();
        Some(RodioVoice { sink })
    }
}

pub struct RodioVoice {
    sink: Sink,
}

impl Voice for RodioVoice {
    fn stop(&self) {
        self.sink.stop();
    }

    fn is_finished(&self) -> bool {
        self.sink.empty()
    }
}

//! Startup clip loading.
//!
//! Clips are read and fully decoded into memory once so that playback never
//! touches the disk. Each file is loaded on its own scoped thread; a failed
//! clip is logged and simply left out of the store.

use std::collections::HashMap;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use rodio::decoder::DecoderError;
use rodio::{ChannelCount, Decoder, SampleRate, Source};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: DecoderError,
    },
    #[error("{} decoded to no samples", path.display())]
    Empty { path: PathBuf },
    #[error("loader thread for {} panicked", path.display())]
    Worker { path: PathBuf },
}

/// Decoded, immutable audio data. Cloning shares the sample buffer.
#[derive(Debug, Clone)]
pub struct Clip {
    samples: Arc<[f32]>,
    channels: ChannelCount,
    sample_rate: SampleRate,
}

impl Clip {
    pub fn new(samples: Vec<f32>, channels: ChannelCount, sample_rate: SampleRate) -> Self {
        Self {
            samples: samples.into(),
            channels,
            sample_rate,
        }
    }

    pub fn channels(&self) -> ChannelCount {
        self.channels
    }

    pub fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }

    pub fn len_samples(&self) -> usize {
        self.samples.len()
    }

    /// A fresh `rodio` source positioned at the start of the clip. The
    /// source reads the shared buffer; nothing is copied.
    pub fn to_source(&self, looping: bool) -> ClipSource {
        ClipSource {
            samples: Arc::clone(&self.samples),
            pos: 0,
            looping,
            channels: self.channels,
            sample_rate: self.sample_rate,
        }
    }
}

/// Playback cursor over a [`Clip`]'s samples. A looping source wraps back to
/// the first sample instead of ending.
#[derive(Debug, Clone)]
pub struct ClipSource {
    samples: Arc<[f32]>,
    pos: usize,
    looping: bool,
    channels: ChannelCount,
    sample_rate: SampleRate,
}

impl ClipSource {
    #[cfg(test)]
    pub fn shares_samples_with(&self, clip: &Clip) -> bool {
        Arc::ptr_eq(&self.samples, &clip.samples)
    }
}

impl Iterator for ClipSource {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.pos >= self.samples.len() {
            if !self.looping || self.samples.is_empty() {
                return None;
            }
            self.pos = 0;
        }
        let sample = self.samples[self.pos];
        self.pos += 1;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.looping && !self.samples.is_empty() {
            (usize::MAX, None)
        } else {
            let left = self.samples.len().saturating_sub(self.pos);
            (left, Some(left))
        }
    }
}

impl Source for ClipSource {
    fn current_span_len(&self) -> Option<usize> {
        None
    }

    fn channels(&self) -> ChannelCount {
        self.channels
    }

    fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }

    fn total_duration(&self) -> Option<Duration> {
        if self.looping {
            return None;
        }
        let frames = self.samples.len() as u64 / u64::from(self.channels.max(1));
        let nanos = (frames * 1_000_000_000).checked_div(u64::from(self.sample_rate))?;
        Some(Duration::from_nanos(nanos))
    }
}

/// Name -> decoded clip. Populated once at startup.
#[derive(Debug, Clone, Default)]
pub struct ClipStore {
    clips: HashMap<String, Clip>,
}

impl ClipStore {
    pub fn insert(&mut self, name: impl Into<String>, clip: Clip) {
        self.clips.insert(name.into(), clip);
    }

    pub fn get(&self, name: &str) -> Option<&Clip> {
        self.clips.get(name)
    }

    #[cfg(test)]
    pub fn contains(&self, name: &str) -> bool {
        self.clips.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}

/// Path of clip `name` under `dir` with the given extension.
pub fn clip_path(dir: &Path, name: &str, extension: &str) -> PathBuf {
    let ext = extension.trim().trim_start_matches('.');
    dir.join(format!("{name}.{ext}"))
}

/// Read and decode a single clip file.
pub fn load_clip(path: &Path) -> Result<Clip, ClipError> {
    let bytes = std::fs::read(path).map_err(|source| ClipError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let decoder = Decoder::new(Cursor::new(bytes)).map_err(|source| ClipError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let channels = decoder.channels();
    let sample_rate = decoder.sample_rate();
    let samples: Vec<f32> = decoder.collect();
    if samples.is_empty() {
        return Err(ClipError::Empty {
            path: path.to_path_buf(),
        });
    }

    Ok(Clip::new(samples, channels, sample_rate))
}

/// Load every clip in `names` from `dir` concurrently and wait for all of them.
///
/// Failures are logged and skipped; the returned store only contains clips
/// that decoded successfully.
pub fn load_clips(dir: &Path, names: &[String], extension: &str) -> ClipStore {
    let results: Vec<(&String, Result<Clip, ClipError>)> = thread::scope(|scope| {
        let handles: Vec<_> = names
            .iter()
            .map(|name| {
                let path = clip_path(dir, name, extension);
                (name, path.clone(), scope.spawn(move || load_clip(&path)))
            })
            .collect();

        handles
            .into_iter()
            .map(|(name, path, handle)| {
                let res = handle
                    .join()
                    .unwrap_or_else(|_| Err(ClipError::Worker { path }));
                (name, res)
            })
            .collect()
    });

    let mut store = ClipStore::default();
    for (name, res) in results {
        match res {
            Ok(clip) => {
                log::debug!(
                    "clip `{name}`: {} samples, {} ch @ {} Hz",
                    clip.len_samples(),
                    clip.channels(),
                    clip.sample_rate()
                );
                store.insert(name.clone(), clip);
            }
            Err(err) => log::error!("clip `{name}` unavailable: {err}"),
        }
    }

    log::info!(
        "loaded {}/{} clips from {}",
        store.len(),
        names.len(),
        dir.display()
    );
    store
}

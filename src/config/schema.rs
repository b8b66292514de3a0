use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/charsel/config.toml` or `~/.config/charsel/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `CHARSEL__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub input: InputSettings,
    pub ui: UiSettings,
    pub roster: RosterSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Directory holding `<name>.<extension>` clips.
    pub sounds_dir: PathBuf,
    /// File extension of every clip (without dot).
    pub extension: String,
    /// Theme selected at startup (1..=6).
    pub initial_track: u8,
    /// Master volume applied to every voice (1.0 = unchanged).
    pub volume: f32,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            sounds_dir: PathBuf::from("assets/sounds"),
            extension: "flac".to_string(),
            initial_track: 6,
            volume: 1.0,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// How mouse input should be interpreted.
    pub pointer: PointerKind,
}

/// Pointer precision. A terminal cannot tell a touchscreen from a mouse, so
/// this is configured rather than detected.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PointerKind {
    /// Mouse-like: hovering plays a cue, one click selects.
    #[default]
    #[serde(alias = "mouse")]
    Fine,
    /// Touch-like: no hover, first tap previews, second tap selects.
    #[serde(alias = "touch")]
    Coarse,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Number of cells per grid row.
    pub columns: u16,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ Choose your opponent ~ ".to_string(),
            columns: 4,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RosterSettings {
    /// Optional roster file; the built-in roster is used when unset.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Default filter when `RUST_LOG` is not set.
    pub level: String,
    /// Write log records to this file instead of stderr.
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}

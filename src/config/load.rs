use std::{env, path::PathBuf};

use super::schema::Settings;
use crate::audio::TrackNo;

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, then environment variables
/// (prefix `CHARSEL__`), and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("CHARSEL")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if TrackNo::new(self.audio.initial_track).is_none() {
            return Err(format!(
                "audio.initial_track must be within 1..={}",
                TrackNo::COUNT
            ));
        }
        if self.audio.volume.is_nan() || self.audio.volume < 0.0 {
            return Err("audio.volume must be >= 0".to_string());
        }
        if self.audio.extension.trim().trim_start_matches('.').is_empty() {
            return Err("audio.extension must not be empty".to_string());
        }
        if self.ui.columns == 0 {
            return Err("ui.columns must be >= 1".to_string());
        }
        Ok(())
    }
}

/// Resolve the config path from `CHARSEL_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("CHARSEL_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/charsel/config.toml`
/// or `~/.config/charsel/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("charsel").join("config.toml"))
}

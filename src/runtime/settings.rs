use crate::config;

/// Settings plus the reason they fell back to defaults, if they did.
pub struct Loaded {
    pub settings: config::Settings,
    pub fallback: Option<String>,
}

/// Load settings; config is optional, so failures never prevent startup.
pub fn load_settings() -> Loaded {
    match config::Settings::load() {
        Ok(s) => match s.validate() {
            Ok(()) => Loaded {
                settings: s,
                fallback: None,
            },
            Err(msg) => Loaded {
                settings: config::Settings::default(),
                fallback: Some(format!("invalid config, using defaults: {msg}")),
            },
        },
        Err(e) => Loaded {
            settings: config::Settings::default(),
            fallback: Some(format!("failed to load config, using defaults: {e}")),
        },
    }
}

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::model::Fighter;

pub use super::builtin::builtin;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid roster {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("roster {} lists no fighters", path.display())]
    Empty { path: PathBuf },
}

/// On-disk roster layout:
///
/// ```toml
/// [[fighter]]
/// name = "Brass Golem"
/// art = """
///  [=====]
///  |o   o|
/// """
/// ```
#[derive(Debug, Deserialize)]
struct RosterFile {
    #[serde(default)]
    fighter: Vec<Fighter>,
}

/// Parse roster TOML text.
pub fn parse(text: &str) -> Result<Vec<Fighter>, toml::de::Error> {
    let file: RosterFile = toml::from_str(text)?;
    Ok(file.fighter)
}

pub fn load(path: &Path) -> Result<Vec<Fighter>, RosterError> {
    let text = std::fs::read_to_string(path).map_err(|source| RosterError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let fighters = parse(&text).map_err(|source| RosterError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    if fighters.is_empty() {
        return Err(RosterError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(fighters)
}

/// Load the configured roster, falling back to the built-in one.
pub fn load_or_builtin(path: Option<&Path>) -> Vec<Fighter> {
    let Some(path) = path else {
        return builtin();
    };
    match load(path) {
        Ok(fighters) => fighters,
        Err(err) => {
            log::warn!("{err}; using built-in roster");
            builtin()
        }
    }
}

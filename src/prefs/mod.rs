//! Preference persistence — YAML load/save/reset for startup defaults.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine::ScrambleOptions;

/// Persistent preferences stored at `~/.jumble/prefs.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Prefs {
    /// Scramble options applied at startup.
    pub options: ScrambleOptions,
    /// Preferred theme name, if any.
    pub theme: Option<String>,
    /// Schema version for forward compatibility.
    pub version: u32,
}

impl Prefs {
    /// Create default preferences.
    pub fn new() -> Self {
        Self {
            options: ScrambleOptions::default(),
            theme: None,
            version: 1,
        }
    }
}

impl Default for Prefs {
    fn default() -> Self {
        Self::new()
    }
}

/// Default path for the preferences file.
pub fn default_prefs_path() -> PathBuf {
    let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(".jumble");
    path.push("prefs.yaml");
    path
}

/// Load preferences from a YAML file. Returns defaults if the file doesn't exist.
pub fn load_prefs(path: &Path) -> Result<Prefs, io::Error> {
    if !path.exists() {
        return Ok(Prefs::new());
    }
    let content = std::fs::read_to_string(path)?;
    serde_yaml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Save preferences to a YAML file, creating parent directories as needed.
pub fn save_prefs(path: &Path, prefs: &Prefs) -> Result<(), io::Error> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let yaml = serde_yaml::to_string(prefs).map_err(io::Error::other)?;
    std::fs::write(path, yaml)
}

/// Reset preferences by removing the file and returning fresh defaults.
pub fn reset_prefs(path: &Path) -> Result<Prefs, io::Error> {
    if path.exists() {
        std::fs::remove_file(path)?;
    }
    Ok(Prefs::new())
}

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Auto-stop limit for a dictation session, matching the browser widget.
const DEFAULT_RECORDING_LIMIT_SECS: u64 = 60;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct MurmurConfig {
    pub recording_limit_secs: u64,
    pub debug_logging: bool,
}

impl Default for MurmurConfig {
    fn default() -> Self {
        Self {
            recording_limit_secs: DEFAULT_RECORDING_LIMIT_SECS,
            debug_logging: false,
        }
    }
}

impl MurmurConfig {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("murmur")
            .join("config.json")
    }

    /// Load the config file, falling back to defaults when it is missing
    /// or unreadable.
    pub fn load() -> Self {
        let path = Self::config_path();
        match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("ignoring invalid config {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    pub fn recording_limit(&self) -> Duration {
        Duration::from_secs(self.recording_limit_secs)
    }
}

use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{CgpaError, Result};
use crate::store::RecordStore;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub data_dir: String,
    #[serde(default = "default_store_file")]
    pub store_file: String,
}

fn default_store_file() -> String {
    "results.csv".to_string()
}

fn home() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: home().join("Documents").join("cgpa").to_string_lossy().to_string(),
            store_file: default_store_file(),
        }
    }
}

impl Settings {
    pub fn store_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.store_file)
    }

    pub fn open_store(&self) -> RecordStore {
        RecordStore::new(self.store_path())
    }
}

/// Where the settings JSON lives. Normally `~/.config/cgpa/settings.json`.
#[derive(Debug, Clone)]
pub struct SettingsFile {
    path: PathBuf,
}

impl SettingsFile {
    pub fn locate() -> Self {
        Self::at(home().join(".config").join("cgpa").join("settings.json"))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Saved settings, or the defaults when the file is missing or unreadable.
    pub fn load(&self) -> Settings {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                if self.exists() {
                    warn!("ignoring unreadable settings at {}: {e}", self.path.display());
                }
                return Settings::default();
            }
        };
        serde_json::from_str(&content).unwrap_or_else(|e| {
            warn!("ignoring unreadable settings at {}: {e}", self.path.display());
            Settings::default()
        })
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(settings)
            .map_err(|e| CgpaError::Settings(e.to_string()))?;
        std::fs::write(&self.path, format!("{json}\n"))?;
        debug!("wrote settings to {}", self.path.display());
        Ok(())
    }
}

pub fn shellexpand_path(path: &str) -> String {
    if let Some(rest) = path.strip_prefix('~') {
        if let Some(home) = dirs::home_dir() {
            return format!("{}{rest}", home.to_string_lossy());
        }
    }
    std::fs::canonicalize(path)
        .unwrap_or_else(|_| PathBuf::from(path))
        .to_string_lossy()
        .to_string()
}

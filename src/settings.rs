use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Returns the base data directory for the PassForge settings file.
pub fn data_dir() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "PassForge", "PassForge") {
        let dir = proj_dirs.data_dir();
        let _ = fs::create_dir_all(dir);
        dir.to_path_buf()
    } else {
        PathBuf::from(".")
    }
}

/// User preferences. Generated passwords and the history are deliberately
/// not part of this; only knobs and the theme survive a restart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Seconds until the current password expires and regenerates (10-300, default 30)
    pub regenerate_seconds: u32,
    /// Clipboard clear timeout in seconds (10-120, default 30)
    pub clipboard_clear_seconds: u32,
    /// Start in dark mode
    pub dark_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            regenerate_seconds: 30,
            clipboard_clear_seconds: 30,
            dark_mode: true,
        }
    }
}

impl AppSettings {
    /// Returns the path to the settings file
    fn settings_path() -> PathBuf {
        data_dir().join("settings.json")
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::settings_path();
        if path.exists() {
            if let Ok(data) = fs::read_to_string(&path) {
                if let Ok(settings) = serde_json::from_str(&data) {
                    return settings;
                }
            }
            log::warn!("settings file at {:?} was unreadable, using defaults", path);
        }
        Self::default()
    }

    /// Save settings to file
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let path = Self::settings_path();
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    /// Validate and clamp the regeneration interval to the allowed range
    pub fn set_regenerate_interval(&mut self, seconds: u32) {
        self.regenerate_seconds = seconds.clamp(10, 300);
    }

    /// Validate and clamp clipboard timeout to the allowed range
    pub fn set_clipboard_timeout(&mut self, seconds: u32) {
        self.clipboard_clear_seconds = seconds.clamp(10, 120);
    }

    /// Get the regeneration interval as u64 for comparison with Instant
    pub fn regenerate_timeout_u64(&self) -> u64 {
        self.regenerate_seconds as u64
    }

    /// Get clipboard timeout as u64 for comparison with Instant
    pub fn clipboard_timeout_u64(&self) -> u64 {
        self.clipboard_clear_seconds as u64
    }
}

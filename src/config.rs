//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_LOG_FILTER: &str = "student_registration_tui=info";
const DEFAULT_TICK_RATE_MS: u64 = 100;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Log filter directive, used when `RUST_LOG` is unset
    pub log_filter: Option<String>,
    /// Write logs to this file instead of stderr
    pub log_file: Option<PathBuf>,
    /// Capture mouse clicks to focus fields
    pub mouse_capture: Option<bool>,
    /// Event poll interval in milliseconds
    pub tick_rate_ms: Option<u64>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "student-registration", "student-registration-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    pub fn mouse_capture(&self) -> bool {
        self.mouse_capture.unwrap_or(true)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.unwrap_or(DEFAULT_TICK_RATE_MS).max(1))
    }
}

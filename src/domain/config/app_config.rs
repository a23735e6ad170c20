//! Application configuration value object

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::vibe::{Direction, Era};

/// Default Gemini model
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub era: Option<String>,
    pub direction: Option<String>,
    pub clipboard: Option<bool>,
    pub history_path: Option<PathBuf>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            model: Some(DEFAULT_MODEL.to_string()),
            era: Some(Era::default().to_string()),
            direction: Some(Direction::default().to_string()),
            clipboard: Some(false),
            history_path: None,
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            model: other.model.or(self.model),
            era: other.era.or(self.era),
            direction: other.direction.or(self.direction),
            clipboard: other.clipboard.or(self.clipboard),
            history_path: other.history_path.or(self.history_path),
        }
    }

    /// Get era as parsed Era, or default if not set/invalid
    pub fn era_or_default(&self) -> Era {
        self.era
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get direction as parsed Direction, or default if not set/invalid
    pub fn direction_or_default(&self) -> Direction {
        self.direction
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get model name, or the default model if not set
    pub fn model_or_default(&self) -> &str {
        self.model
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(DEFAULT_MODEL)
    }

    /// Get clipboard setting, or false if not set
    pub fn clipboard_or_default(&self) -> bool {
        self.clipboard.unwrap_or(false)
    }
}

//! Indicator configuration persistence
//!
//! Stores user preferences in `~/.config/segdrop/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Opacity applied to the dragged window when the application leaves it unset
pub const DEFAULT_DRAGGED_WINDOW_OPACITY: f32 = 0.7;

/// Configuration shared between the embedding application and the overlay
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorConfig {
    /// Opacity of the window being dragged (0.0..=1.0), `None` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dragged_window_opacity: Option<f32>,
}

impl IndicatorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{}", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config at {}: {}", path.display(), e))?;
        Self::from_yaml(&content)
            .map_err(|e| format!("Failed to parse config at {}: {}", path.display(), e))
    }

    pub fn from_yaml(content: &str) -> Result<Self, String> {
        let config: Self = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        if let Some(opacity) = config.dragged_window_opacity {
            if !(0.0..=1.0).contains(&opacity) {
                return Err(format!(
                    "dragged_window_opacity must be within 0.0..=1.0, got {}",
                    opacity
                ));
            }
        }
        Ok(config)
    }

    /// Save config to the default location
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Set the dragged-window opacity only if nobody chose one yet
    ///
    /// Returns `true` when the default was written.
    pub fn try_set_default_dragged_window_opacity(&mut self, opacity: f32) -> bool {
        if self.dragged_window_opacity.is_some() {
            return false;
        }
        tracing::debug!(opacity, "defaulting dragged window opacity");
        self.dragged_window_opacity = Some(opacity);
        true
    }
}

//! User settings persisted as JSON in the platform config directory.
//!
//! Missing fields fall back to their defaults, so older or hand-written files
//! keep working.

use crate::constants::{
    BADGE_MARGIN, BADGE_SIZE, DEFAULT_CONTAINER_WIDTH, DRAG_REGION_INSET, HANDLE_HIT_SIZE,
    HANDLE_SIZE, SETTINGS_DIR_NAME, SETTINGS_FILE_NAME,
};
use crate::error::{SettingsError, SettingsResult};
use crate::handles::HandleMetrics;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Width of the image container; the canvas height follows the image
    pub container_width: f32,
    pub handle_size: f32,
    pub handle_hit_size: f32,
    pub drag_inset: f32,
    pub badge_size: f32,
    pub badge_margin: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            container_width: DEFAULT_CONTAINER_WIDTH,
            handle_size: HANDLE_SIZE,
            handle_hit_size: HANDLE_HIT_SIZE,
            drag_inset: DRAG_REGION_INSET,
            badge_size: BADGE_SIZE,
            badge_margin: BADGE_MARGIN,
        }
    }
}

impl Settings {
    /// `<config dir>/area-selector/settings.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
    }

    /// Load from the default location, falling back to defaults on any error.
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> SettingsResult<Self> {
        let content = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> SettingsResult<()> {
        let sizes = [
            ("container_width", self.container_width),
            ("handle_size", self.handle_size),
            ("handle_hit_size", self.handle_hit_size),
            ("badge_size", self.badge_size),
        ];
        for (name, value) in sizes {
            if !value.is_finite() || value <= 0.0 {
                return Err(SettingsError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }
        for (name, value) in [("drag_inset", self.drag_inset), ("badge_margin", self.badge_margin)] {
            if !value.is_finite() || value < 0.0 {
                return Err(SettingsError::Invalid(format!("{name} must not be negative, got {value}")));
            }
        }
        Ok(())
    }

    pub fn handle_metrics(&self) -> HandleMetrics {
        HandleMetrics {
            handle_size: self.handle_size,
            hit_size: self.handle_hit_size,
            drag_inset: self.drag_inset,
            badge_size: self.badge_size,
            badge_margin: self.badge_margin,
        }
    }
}

//! User settings, read from `settings.json` in the platform config dir.
//!
//! A missing file gives the defaults. A file that fails to parse also gives
//! the defaults, with a warning, so a typo never blocks the editor.

use crate::constants::{APP_DIR_NAME, DEFAULT_PREVIEW_OPACITY, DEFAULT_REGION_OPACITY, SETTINGS_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Draw the current type mode in the top-left corner
    pub show_mode_label: bool,
    /// Opacity of committed regions
    pub region_opacity: f32,
    /// Opacity of the in-progress preview
    pub preview_opacity: f32,
    /// Where the file store keeps its values (defaults to the data dir)
    pub storage_dir: Option<PathBuf>,
    /// Background image used when none is given on the command line
    pub background: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_mode_label: true,
            region_opacity: DEFAULT_REGION_OPACITY,
            preview_opacity: DEFAULT_PREVIEW_OPACITY,
            storage_dir: None,
            background: None,
        }
    }
}

pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR_NAME).join(SETTINGS_FILE))
}

impl Settings {
    /// Load from the default location.
    pub fn load() -> Self {
        match default_settings_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(error) => {
                if error.kind() != io::ErrorKind::NotFound {
                    warn!(?error, ?path, "failed to read settings");
                }
                return Self::default();
            }
        };
        match serde_json::from_str::<Settings>(&text) {
            Ok(settings) => {
                debug!(?path, "settings loaded");
                settings.sanitized()
            }
            Err(error) => {
                warn!(?error, ?path, "failed to parse settings, using defaults");
                Self::default()
            }
        }
    }

    fn sanitized(mut self) -> Self {
        self.region_opacity = clamp_opacity(self.region_opacity, DEFAULT_REGION_OPACITY);
        self.preview_opacity = clamp_opacity(self.preview_opacity, DEFAULT_PREVIEW_OPACITY);
        self
    }
}

fn clamp_opacity(value: f32, fallback: f32) -> f32 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(0.0, 1.0)
    }
}

//! Site configuration.
//!
//! Loaded from an optional JSON file. Every field has a default, so a
//! partial file (or none at all) is valid.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};
use crate::section::Section;

/// Offset (px) past which the navigation bar switches to its solid treatment
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 50.0;

/// Space (px) left above a section after navigating to it
pub const DEFAULT_HEADER_CLEARANCE: f64 = 100.0;

pub const DEFAULT_WINDOW_WIDTH: f64 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f64 = 900.0;

/// Page shell and window settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub scroll_threshold: f64,
    pub header_clearance: f64,
    pub window_width: f64,
    pub window_height: f64,
    /// Section to scroll to once the page has mounted
    pub start_section: Option<Section>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            header_clearance: DEFAULT_HEADER_CLEARANCE,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            start_section: None,
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> SiteResult<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a config file
    pub fn load(path: &Path) -> SiteResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json(&raw)?;
        tracing::debug!(path = %path.display(), ?config, "Loaded site config");
        Ok(config)
    }

    /// Load the file at `path`, or the default location when `None`.
    ///
    /// A missing default file yields defaults silently. Anything else that
    /// goes wrong is logged and also yields defaults.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match default_config_path() {
                Some(p) => (p, false),
                None => return Self::default(),
            },
        };

        if !explicit && !path.exists() {
            return Self::default();
        }

        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Falling back to default config");
                Self::default()
            }
        }
    }

    /// Apply window size overrides, ignoring any that are not finite and
    /// positive.
    pub fn with_window_size(mut self, width: Option<f64>, height: Option<f64>) -> Self {
        if let Some(width) = width {
            match window_dimension("width", width) {
                Ok(width) => self.window_width = width,
                Err(e) => tracing::warn!(error = %e, "Ignoring window width override"),
            }
        }
        if let Some(height) = height {
            match window_dimension("height", height) {
                Ok(height) => self.window_height = height,
                Err(e) => tracing::warn!(error = %e, "Ignoring window height override"),
            }
        }
        self
    }

    fn validate(&self) -> SiteResult<()> {
        let checks = [
            ("scroll_threshold", self.scroll_threshold),
            ("header_clearance", self.header_clearance),
        ];
        for (name, value) in checks {
            if !value.is_finite() || value < 0.0 {
                return Err(SiteError::InvalidConfig(format!(
                    "{} must be a finite, non-negative number (got {})",
                    name, value
                )));
            }
        }
        window_dimension("window_width", self.window_width)?;
        window_dimension("window_height", self.window_height)?;
        Ok(())
    }
}

fn window_dimension(name: &str, value: f64) -> SiteResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SiteError::InvalidConfig(format!(
            "{} must be positive (got {})",
            name, value
        )));
    }
    Ok(value)
}

/// `<config_dir>/casadeoro/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("casadeoro").join("config.json"))
}

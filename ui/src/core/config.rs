//! Navbar configuration.
//!
//! Everything has a default; a config file only needs the fields it changes:
//! ```json
//! { "breakpoint": "md", "brand": "BadBank" }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::layout::Breakpoint;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown breakpoint `{0}` (expected xs, sm, md, lg or xl)")]
    UnknownBreakpoint(String),
    #[error("invalid navbar config: {0}")]
    Invalid(String),
    #[error("malformed navbar config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read navbar config: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub breakpoint: Breakpoint,
    pub brand: String,
    pub header_height_px: u16,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            breakpoint: Breakpoint::default(),
            brand: "BadBank".to_string(),
            header_height_px: 60,
        }
    }
}

impl NavConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Self::from_json_over(raw, &Self::default())
    }

    /// Parse `raw` with the fields it leaves out taken from `base`.
    pub fn from_json_over(raw: &str, base: &Self) -> Result<Self, ConfigError> {
        let overrides: serde_json::Map<String, serde_json::Value> = serde_json::from_str(raw)?;
        let mut merged = serde_json::to_value(base)?;
        if let Some(fields) = merged.as_object_mut() {
            fields.extend(overrides);
        }
        let config: Self = serde_json::from_value(merged)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.header_height_px == 0 {
            return Err(ConfigError::Invalid(
                "header_height_px must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    pub fn load_or_default() -> Self {
        Self::load_or(Self::default())
    }

    /// Load `navbar.json` from the platform config directory on top of
    /// `base`. A missing file yields `base`; an unreadable one is logged and
    /// ignored.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_or(base: Self) -> Self {
        let Some(path) = config_path() else {
            return base;
        };
        match Self::load_from_over(&path, &base) {
            Ok(Some(config)) => {
                tracing::debug!(path = %path.display(), "loaded navbar config");
                config
            }
            Ok(None) => base,
            Err(err) => {
                tracing::warn!(path = %path.display(), "{err}; using default navbar config");
                base
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load_or(base: Self) -> Self {
        base
    }

    /// Read a config file; `Ok(None)` when it does not exist.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Result<Option<Self>, ConfigError> {
        Self::load_from_over(path, &Self::default())
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_over(path: &std::path::Path, base: &Self) -> Result<Option<Self>, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(raw) => Self::from_json_over(&raw, base).map(Some),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn config_path() -> Option<std::path::PathBuf> {
    directories::ProjectDirs::from("org", "BadBank", "badbank")
        .map(|dirs| dirs.config_dir().join("navbar.json"))
}

//! Configuration file loading
//!
//! Settings come from `fxboard.toml`; every field has a default so an absent
//! file or section is fine.
//!
//! ```toml
//! [gateway]
//! base_url = "http://localhost:8080"
//! timeout_ms = 10000
//!
//! [ui]
//! mode = "grid"
//! cells_px = 8
//! tick_rate_ms = 250
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use fxboard_client::GatewayConfig;
use fxboard_client::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "FXBOARD_CONFIG";

const CONFIG_FILE: &str = "fxboard.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub gateway: GatewaySettings,
    #[serde(default)]
    pub ui: UiSettings,
}

/// Currency service connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewaySettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    u64::try_from(DEFAULT_TIMEOUT.as_millis()).unwrap_or(u64::MAX)
}

/// How the list is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Single column; scrolling past the end loads the next page
    List,
    /// Card grid sized from the viewport, with numbered pages
    #[default]
    Grid,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ViewMode::List => "list",
            ViewMode::Grid => "grid",
        })
    }
}

impl FromStr for ViewMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "list" => Ok(ViewMode::List),
            "grid" => Ok(ViewMode::Grid),
            _ => Err(CoreError::Config(format!(
                "unknown mode '{s}' (expected list or grid)"
            ))),
        }
    }
}

/// Terminal UI settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiSettings {
    #[serde(default)]
    pub mode: ViewMode,
    /// Width in pixels one terminal cell stands for when sizing the grid
    #[serde(default = "default_cells_px")]
    pub cells_px: u32,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            mode: ViewMode::default(),
            cells_px: default_cells_px(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

fn default_cells_px() -> u32 {
    8
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Settings {
    /// Parse settings from TOML text
    ///
    /// # Errors
    /// Returns `CoreError::Config` if the text is not valid settings TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, CoreError> {
        toml::from_str(content).map_err(|e| CoreError::Config(e.to_string()))
    }

    /// Load settings from a file
    ///
    /// # Errors
    /// Returns `CoreError::Config` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CoreError::Config(format!("{}: {e}", path.display())))?;
        let settings = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Load from an explicit path, the environment, or the default locations
    ///
    /// Falls back to defaults when no file exists.
    ///
    /// # Errors
    /// Returns `CoreError::Config` if a chosen file cannot be read or parsed.
    pub fn load_default(explicit: Option<&Path>) -> Result<Self, CoreError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Self::load(&PathBuf::from(path));
        }

        let mut paths = vec![PathBuf::from(CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("fxboard").join(CONFIG_FILE));
        }

        for path in paths {
            if path.exists() {
                return Self::load(&path);
            }
        }

        tracing::debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    /// Gateway configuration described by these settings
    ///
    /// # Errors
    /// Returns `CoreError::Config` if the base URL is invalid.
    pub fn gateway_config(&self) -> Result<GatewayConfig, CoreError> {
        let config = GatewayConfig::new(&self.gateway.base_url)
            .map_err(|e| CoreError::Config(e.to_string()))?;
        Ok(config.with_timeout(Duration::from_millis(self.gateway.timeout_ms)))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.gateway.timeout_ms, 10_000);
        assert_eq!(settings.ui.mode, ViewMode::Grid);
    }

    #[test]
    fn test_partial_sections() {
        let settings = Settings::from_toml_str(
            r#"
            [gateway]
            base_url = "https://fx.example.com"

            [ui]
            mode = "list"
            "#,
        )
        .unwrap();
        assert_eq!(settings.gateway.base_url, "https://fx.example.com");
        assert_eq!(settings.gateway.timeout_ms, 10_000);
        assert_eq!(settings.ui.mode, ViewMode::List);
        assert_eq!(settings.ui.cells_px, 8);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            Settings::from_toml_str("[gateway\nbase_url ="),
            Err(CoreError::Config(_))
        ));
    }

    #[test]
    fn test_gateway_config() {
        let mut settings = Settings::default();
        settings.gateway.timeout_ms = 1500;
        let config = settings.gateway_config().unwrap();
        assert_eq!(config.timeout(), Duration::from_millis(1500));

        settings.gateway.base_url = "::nope::".to_string();
        assert!(settings.gateway_config().is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ui]\ntick_rate_ms = 100").unwrap();

        let settings = Settings::load_default(Some(file.path())).unwrap();
        assert_eq!(settings.ui.tick_rate_ms, 100);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let missing = Path::new("/definitely/not/here/fxboard.toml");
        assert!(Settings::load_default(Some(missing)).is_err());
    }

    #[test]
    fn test_view_mode_parsing() {
        assert_eq!("LIST".parse::<ViewMode>(), Ok(ViewMode::List));
        assert!("table".parse::<ViewMode>().is_err());
        assert_eq!(ViewMode::Grid.to_string(), "grid");
    }
}

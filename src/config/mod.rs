//! Configuration management.

use serde::Deserialize;
use std::path::PathBuf;

/// Main configuration for biosurvey.
#[derive(Debug, Clone)]
pub struct BiosurveyConfig {
    /// Path of the tracker snapshot file.
    pub state_path: PathBuf,
    /// Minimum discovery value (in millions) for a body without
    /// observations to be listed at all.
    pub min_listed_value: f64,
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Snapshot file path.
    pub state_path: Option<String>,
    /// Minimum listed discovery value.
    pub min_listed_value: Option<f64>,
}

impl Default for BiosurveyConfig {
    fn default() -> Self {
        Self {
            state_path: PathBuf::from(".biosurvey/state.json"),
            min_listed_value: 1.0,
        }
    }
}

impl BiosurveyConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &std::path::Path) -> crate::Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| crate::Error::OperationFailed {
                operation: "read_config_file".to_string(),
                cause: e.to_string(),
            })?;

        let file: ConfigFile =
            toml::from_str(&contents).map_err(|e| crate::Error::OperationFailed {
                operation: "parse_config_file".to_string(),
                cause: e.to_string(),
            })?;

        Ok(Self::from_config_file(file))
    }

    /// Loads configuration from the default location.
    ///
    /// Checks the following paths in order:
    /// 1. Platform-specific config dir (`~/Library/Application Support/biosurvey/` on macOS)
    /// 2. XDG config dir (`~/.config/biosurvey/` for Unix compatibility)
    ///
    /// Returns default configuration if no config file is found.
    #[must_use]
    pub fn load_default() -> Self {
        let Some(base_dirs) = directories::BaseDirs::new() else {
            return Self::default();
        };

        // Check platform-specific config dir first
        let platform_config = base_dirs.config_dir().join("biosurvey").join("config.toml");
        if platform_config.exists() {
            if let Ok(config) = Self::load_from_file(&platform_config) {
                return config;
            }
        }

        // Fall back to XDG-style ~/.config/biosurvey/ for Unix compatibility
        let xdg_config = base_dirs
            .home_dir()
            .join(".config")
            .join("biosurvey")
            .join("config.toml");
        if xdg_config.exists() {
            if let Ok(config) = Self::load_from_file(&xdg_config) {
                return config;
            }
        }

        Self::default()
    }

    /// Converts a `ConfigFile` to `BiosurveyConfig`.
    fn from_config_file(file: ConfigFile) -> Self {
        let mut config = Self::default();
        if let Some(state_path) = file.state_path {
            config.state_path = PathBuf::from(state_path);
        }
        if let Some(min_listed_value) = file.min_listed_value {
            config.min_listed_value = min_listed_value;
        }
        config
    }

    /// Sets the snapshot file path.
    #[must_use]
    pub fn with_state_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.state_path = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_defaults() {
        let config = BiosurveyConfig::new();
        assert_eq!(config.state_path, PathBuf::from(".biosurvey/state.json"));
        assert!((config.min_listed_value - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_config_file() {
        let file: ConfigFile =
            toml::from_str("state_path = \"/tmp/survey.json\"\nmin_listed_value = 0.5\n").unwrap();
        let config = BiosurveyConfig::from_config_file(file);
        assert_eq!(config.state_path, PathBuf::from("/tmp/survey.json"));
        assert!((config.min_listed_value - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_builder() {
        let config = BiosurveyConfig::new().with_state_path("/var/lib/biosurvey/state.json");
        assert_eq!(
            config.state_path,
            PathBuf::from("/var/lib/biosurvey/state.json")
        );
    }
}

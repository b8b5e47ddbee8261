//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application
//! configuration in TOML format with platform-specific directory
//! resolution. Configuration covers everything outside the datasets: where
//! the data directory lives, where the server binds, and the product
//! metadata shown in the viewer's header panel.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::APP_NAME;

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Directory holding the dataset files and the `models/` mesh library.
    /// Defaults to `./data` when unset.
    pub data_dir: Option<PathBuf>,
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3002,
        }
    }
}

/// One selectable product variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductVariant {
    /// Display label of the variant.
    pub label: String,
    /// Variants that exist in the catalog but cannot be selected yet.
    #[serde(default)]
    pub disabled: bool,
}

/// Product metadata shown in the product panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductConfig {
    /// Product display name.
    pub name: String,
    /// Available product variants.
    pub variants: Vec<ProductVariant>,
}

impl Default for ProductConfig {
    fn default() -> Self {
        Self {
            name: "Toy dog".to_string(),
            variants: vec![
                ProductVariant {
                    label: "with googly eyes".to_string(),
                    disabled: false,
                },
                ProductVariant {
                    label: "without googly eyes".to_string(),
                    disabled: true,
                },
            ],
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system locations.
    #[serde(default)]
    pub paths: PathConfig,
    /// Server bind settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Product metadata.
    #[serde(default)]
    pub product: ProductConfig,
}

impl Config {
    /// Gets the platform-specific configuration directory.
    ///
    /// - Linux: `~/.config/AssemblyViewer/`
    /// - macOS: `~/Library/Application Support/AssemblyViewer/`
    /// - Windows: `%APPDATA%\AssemblyViewer\`
    pub fn config_dir() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine config directory")?;
        Ok(base.join(APP_NAME.replace(' ', "")))
    }

    /// Gets the full path of the configuration file.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns true if a configuration file exists.
    pub fn exists() -> bool {
        Self::config_path().map(|path| path.exists()).unwrap_or(false)
    }

    /// Loads the configuration from the platform config directory.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Loads the configuration from a specific file.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Saves the configuration to the platform config directory.
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;

        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Resolves the data directory (configured or the `./data` default).
    pub fn data_dir(&self) -> PathBuf {
        self.paths
            .data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("data"))
    }

    /// Resolves the mesh library directory inside the data directory.
    pub fn models_dir(&self) -> PathBuf {
        self.data_dir().join("models")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3002);
        assert_eq!(config.data_dir(), PathBuf::from("data"));
        assert_eq!(config.models_dir(), PathBuf::from("data").join("models"));
        assert_eq!(config.product.variants.len(), 2);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = Config::default();
        config.paths.data_dir = Some(PathBuf::from("/srv/viewer/data"));
        config.server.port = 8080;

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed: Config = toml::from_str("[server]\nhost = \"0.0.0.0\"\nport = 80\n").unwrap();
        assert_eq!(parsed.server.host, "0.0.0.0");
        assert_eq!(parsed.product.name, "Toy dog");
        assert!(parsed.paths.data_dir.is_none());
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = Config::load_from(&dir.path().join("missing.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[product]\nname = \"Toy cat\"\nvariants = []\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.product.name, "Toy cat");
        assert!(config.product.variants.is_empty());
    }
}

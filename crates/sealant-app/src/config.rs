//! Configuration management for sealant-calculator
//!
//! Config stored at: ~/.config/sealant-calculator/config.json

use sealant_domain::service::{DEFAULT_U_PROFILE_FACTOR, DEFAULT_WASTAGE_PERCENT};
use sealant_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_CARTRIDGE_KEY;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Cartridge key used when none is given
    #[serde(default = "default_cartridge")]
    pub default_cartridge: String,

    /// Add the wastage allowance to every estimate
    #[serde(default = "default_true")]
    pub allow_wastage: bool,

    /// Wastage allowance in percent
    #[serde(default = "default_wastage_percent")]
    pub wastage_percent: f64,

    /// Area multiplier for U-joints
    #[serde(default = "default_u_profile_factor")]
    pub u_profile_factor: f64,

    /// Extra cartridge catalogue (TOML)
    #[serde(default)]
    pub catalogue_path: Option<PathBuf>,

    /// Base URL that share links point at
    #[serde(default)]
    pub share_base_url: Option<String>,

    /// Link shortener endpoint override
    #[serde(default)]
    pub shortener_endpoint: Option<String>,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_cartridge() -> String {
    DEFAULT_CARTRIDGE_KEY.to_string()
}

fn default_true() -> bool {
    true
}

fn default_wastage_percent() -> f64 {
    DEFAULT_WASTAGE_PERCENT
}

fn default_u_profile_factor() -> f64 {
    DEFAULT_U_PROFILE_FACTOR
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: default_output_format(),
            default_cartridge: default_cartridge(),
            allow_wastage: true,
            wastage_percent: default_wastage_percent(),
            u_profile_factor: default_u_profile_factor(),
            catalogue_path: None,
            share_base_url: None,
            shortener_endpoint: None,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("sealant-calculator");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from an explicit path, or create default
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveError(format!("{}: {}", parent.display(), e)))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        tracing::info!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Wastage percent actually applied (0 when disabled)
    pub fn effective_wastage_percent(&self) -> f64 {
        if self.allow_wastage {
            self.wastage_percent
        } else {
            0.0
        }
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Sealant Calculator Configuration")?;
        writeln!(f, "================================")?;
        writeln!(f)?;
        writeln!(f, "Output format:     {}", self.output_format)?;
        writeln!(f, "Default cartridge: {}", self.default_cartridge)?;
        writeln!(
            f,
            "Wastage:           {}",
            if self.allow_wastage {
                format!("{}%", self.wastage_percent)
            } else {
                "off".to_string()
            }
        )?;
        writeln!(f, "U-joint factor:    {}", self.u_profile_factor)?;
        writeln!(
            f,
            "Catalogue:         {}",
            self.catalogue_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in only)".to_string())
        )?;
        writeln!(
            f,
            "Share base URL:    {}",
            self.share_base_url.as_deref().unwrap_or("(not set)")
        )?;
        writeln!(
            f,
            "Shortener:         {}",
            self.shortener_endpoint.as_deref().unwrap_or("(default)")
        )?;

        Ok(())
    }
}

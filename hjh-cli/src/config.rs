//! Configuration handling for HJH CLI
//!
//! Supports loading configuration from hjh.toml files with CLI argument overrides.

use anyhow::{Context, Result};
use clap::ValueEnum;
use hjh_core::{HelixPair, Placement};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CliError, CliResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub placement: PlacementConfig,
    #[serde(default)]
    pub middle_helix: MiddleHelixConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Worker threads for running placements; rayon's default when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threads: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementConfig {
    /// Placements to run when none are given on the command line
    #[serde(default = "default_placements")]
    pub placements: Vec<Placement>,

    /// Junction length when none is given on the command line
    #[serde(default)]
    pub junction_length: usize,
}

/// Fixed insert for three-segment placements
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MiddleHelixConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side1: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side2: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format for fragment records
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fragments in 5'->3' column order, one record per line
    Table,
    Json,
}

// Default value functions
fn default_placements() -> Vec<Placement> { vec![Placement::CenterLocation] }
fn default_format() -> OutputFormat { OutputFormat::Table }

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            placements: default_placements(),
            junction_length: 0,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { format: default_format() }
    }
}

impl MiddleHelixConfig {
    /// Validated middle helix, if both strands are configured
    pub fn helix_pair(&self) -> CliResult<Option<HelixPair>> {
        match (&self.side1, &self.side2) {
            (Some(side1), Some(side2)) => Ok(Some(HelixPair::new(side1.as_str(), side2.as_str())?)),
            (None, None) => Ok(None),
            _ => Err(CliError::config(
                "[middle_helix] needs both side1 and side2",
            )),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => {
                log::info!("Loading configuration from: {}", path.display());
                Self::load_from_file(path)?
            }
            None => {
                // Try to find hjh.toml in current directory
                let default_path = PathBuf::from("hjh.toml");
                if default_path.exists() {
                    log::info!("Loading configuration from: hjh.toml");
                    Self::load_from_file(&default_path)?
                } else {
                    log::debug!("Using default configuration");
                    Self::default()
                }
            }
        };

        Ok(config)
    }

    /// Load configuration from a specific TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file(&self, path: &Path) -> CliResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Defaults plus a sample middle helix
    pub fn example() -> Self {
        Self {
            middle_helix: MiddleHelixConfig {
                side1: Some("GAGTCATC".to_string()),
                side2: Some("GATGACTC".to_string()),
            },
            ..Self::default()
        }
    }

    /// Generate example configuration file content
    pub fn example_toml() -> CliResult<String> {
        Ok(toml::to_string_pretty(&Self::example())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.placement.placements, vec![Placement::CenterLocation]);
        assert_eq!(config.placement.junction_length, 0);
        assert_eq!(config.output.format, OutputFormat::Table);
        assert!(config.general.threads.is_none());
    }

    #[test]
    fn test_config_roundtrip() -> Result<()> {
        let mut config = Config::default();
        config.placement.placements = vec![Placement::AlongHelix, Placement::DoubleDouble];
        config.output.format = OutputFormat::Json;
        let temp_file = NamedTempFile::new()?;

        config.save_to_file(temp_file.path())?;
        let loaded = Config::load_from_file(temp_file.path())?;

        assert_eq!(loaded.placement.placements, config.placement.placements);
        assert_eq!(loaded.output.format, OutputFormat::Json);

        Ok(())
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[placement]\njunction_length = 3\n").unwrap();
        assert_eq!(config.placement.junction_length, 3);
        assert_eq!(config.placement.placements, vec![Placement::CenterLocation]);
        assert_eq!(config.output.format, OutputFormat::Table);
    }

    #[test]
    fn test_example_toml_generation() {
        let example = Config::example_toml().unwrap();
        assert!(example.contains("[placement]"));
        assert!(example.contains("[middle_helix]"));
        assert!(example.contains("center_location"));

        let parsed: Config = toml::from_str(&example).unwrap();
        assert!(parsed.middle_helix.helix_pair().unwrap().is_some());
    }

    #[test]
    fn test_middle_helix_needs_both_sides() {
        let middle = MiddleHelixConfig {
            side1: Some("GATC".to_string()),
            side2: None,
        };
        assert!(matches!(middle.helix_pair(), Err(CliError::Config { .. })));
    }
}

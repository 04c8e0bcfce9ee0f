//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use opskills_core::report::BandThresholds;

/// Output formats understood by `opskills score`.
pub const FORMATS: &[&str] = &["text", "json", "markdown", "md"];

/// Top-level opskills configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpskillsConfig {
    /// Default output format for `score`.
    #[serde(default = "default_format")]
    pub output_format: String,
    /// Band thresholds for text and markdown output.
    #[serde(default)]
    pub bands: BandThresholds,
    /// Default tracing directive, replacing `opskills=info`.
    #[serde(default)]
    pub log_filter: Option<String>,
}

fn default_format() -> String {
    "text".to_string()
}

impl Default for OpskillsConfig {
    fn default() -> Self {
        Self {
            output_format: default_format(),
            bands: BandThresholds::default(),
            log_filter: None,
        }
    }
}

impl OpskillsConfig {
    fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            FORMATS.contains(&self.output_format.as_str()),
            "unknown output_format '{}', expected one of {:?}",
            self.output_format,
            FORMATS
        );
        anyhow::ensure!(
            self.bands.medium <= self.bands.high && self.bands.high <= 100,
            "bands must satisfy medium <= high <= 100 (got medium={}, high={})",
            self.bands.medium,
            self.bands.high
        );
        Ok(())
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `opskills.toml` in the current directory
/// 2. `~/.config/opskills/config.toml`
///
/// Environment variable override: `OPSKILLS_FORMAT`.
pub fn load_config_from(path: Option<&Path>) -> Result<OpskillsConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("opskills.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => parse_config(&path)?,
        None => OpskillsConfig::default(),
    };

    if let Ok(format) = std::env::var("OPSKILLS_FORMAT") {
        config.output_format = format;
    }

    config.validate()?;
    Ok(config)
}

fn parse_config(path: &Path) -> Result<OpskillsConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str::<OpskillsConfig>(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("opskills"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = OpskillsConfig::default();
        assert_eq!(config.output_format, "text");
        assert_eq!(config.bands.high, 75);
        assert_eq!(config.bands.medium, 50);
        assert!(config.log_filter.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_partial_config() {
        let config: OpskillsConfig = toml::from_str(
            r#"
output_format = "markdown"

[bands]
high = 80
"#,
        )
        .unwrap();
        assert_eq!(config.output_format, "markdown");
        assert_eq!(config.bands.high, 80);
        assert_eq!(config.bands.medium, 50);
    }

    #[test]
    fn rejects_inverted_bands() {
        let config = OpskillsConfig {
            bands: BandThresholds { high: 40, medium: 60 },
            ..OpskillsConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_unknown_format() {
        let config = OpskillsConfig {
            output_format: "yaml".into(),
            ..OpskillsConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn explicit_missing_path_fails() {
        let err = load_config_from(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_path_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "log_filter = \"opskills=debug\"\n").unwrap();
        let config = parse_config(&path).unwrap();
        assert_eq!(config.log_filter.as_deref(), Some("opskills=debug"));
    }
}

//! Gradebook configuration.
//!
//! Settings come from a TOML file, then environment overrides are applied on
//! top. Every field has a default, so running without any file is fine.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::model::GradeScale;

/// Largest accepted `average_decimals`.
pub const MAX_AVERAGE_DECIMALS: usize = 10;

/// Top-level gradebook configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GradebookConfig {
    /// Lowest accepted grade.
    #[serde(default = "default_min_grade")]
    pub min_grade: f64,
    /// Highest accepted grade.
    #[serde(default = "default_max_grade")]
    pub max_grade: f64,
    /// Decimal places used when printing averages.
    #[serde(default = "default_average_decimals")]
    pub average_decimals: usize,
}

fn default_min_grade() -> f64 {
    0.0
}
fn default_max_grade() -> f64 {
    10.0
}
fn default_average_decimals() -> usize {
    2
}

impl Default for GradebookConfig {
    fn default() -> Self {
        Self {
            min_grade: default_min_grade(),
            max_grade: default_max_grade(),
            average_decimals: default_average_decimals(),
        }
    }
}

impl GradebookConfig {
    /// The validated grade scale described by this config.
    pub fn scale(&self) -> Result<GradeScale> {
        GradeScale::new(self.min_grade, self.max_grade).context("invalid gradebook config")
    }

    /// Check the grade scale and the average precision.
    pub fn validate(&self) -> Result<()> {
        self.scale()?;
        if self.average_decimals > MAX_AVERAGE_DECIMALS {
            anyhow::bail!(
                "average_decimals must be at most {MAX_AVERAGE_DECIMALS}, got {}",
                self.average_decimals
            );
        }
        Ok(())
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(v) = std::env::var("GRADEBOOK_MIN_GRADE") {
            self.min_grade = v
                .trim()
                .parse()
                .with_context(|| format!("GRADEBOOK_MIN_GRADE is not a number: {v}"))?;
        }
        if let Ok(v) = std::env::var("GRADEBOOK_MAX_GRADE") {
            self.max_grade = v
                .trim()
                .parse()
                .with_context(|| format!("GRADEBOOK_MAX_GRADE is not a number: {v}"))?;
        }
        if let Ok(v) = std::env::var("GRADEBOOK_AVERAGE_DECIMALS") {
            self.average_decimals = v
                .trim()
                .parse()
                .with_context(|| format!("GRADEBOOK_AVERAGE_DECIMALS is not a count: {v}"))?;
        }
        Ok(())
    }
}

/// Parse a config from TOML text, without env overrides.
pub fn parse_config_str(content: &str) -> Result<GradebookConfig> {
    let config: GradebookConfig = toml::from_str(content).context("failed to parse config")?;
    config.validate()?;
    Ok(config)
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `gradebook.toml` in the current directory
/// 2. `~/.config/gradebook/config.toml`
///
/// Environment variable overrides: `GRADEBOOK_MIN_GRADE`, `GRADEBOOK_MAX_GRADE`,
/// `GRADEBOOK_AVERAGE_DECIMALS`.
pub fn load_config_from(path: Option<&Path>) -> Result<GradebookConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("gradebook.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<GradebookConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => GradebookConfig::default(),
    };

    config.apply_env_overrides()?;
    config.validate()?;
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("gradebook"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GradebookConfig::default();
        assert_eq!(config.min_grade, 0.0);
        assert_eq!(config.max_grade, 10.0);
        assert_eq!(config.average_decimals, 2);
        assert_eq!(config.scale().unwrap(), GradeScale::default());
    }

    #[test]
    fn parse_partial_config() {
        let config = parse_config_str("max_grade = 20.0\n").unwrap();
        assert_eq!(config.min_grade, 0.0);
        assert_eq!(config.max_grade, 20.0);
        assert_eq!(config.average_decimals, 2);
    }

    #[test]
    fn parse_rejects_inverted_scale() {
        let err = parse_config_str("min_grade = 10.0\nmax_grade = 0.0\n").unwrap_err();
        assert!(format!("{err:#}").contains("invalid grade scale"));
    }

    #[test]
    fn parse_rejects_excessive_precision() {
        assert!(parse_config_str("average_decimals = 10\n").is_ok());
        let err = parse_config_str("average_decimals = 70000\n").unwrap_err();
        assert!(err.to_string().contains("average_decimals must be at most 10"));
    }

    #[test]
    fn load_rejects_excessive_precision() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gradebook.toml");
        std::fs::write(&path, "average_decimals = 11\n").unwrap();
        assert!(load_config_from(Some(&path)).is_err());
    }

    #[test]
    fn parse_rejects_wrong_type() {
        assert!(parse_config_str("average_decimals = \"two\"\n").is_err());
    }

    #[test]
    fn load_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gradebook.toml");
        std::fs::write(&path, "min_grade = 1.0\nmax_grade = 5.0\naverage_decimals = 1\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.scale().unwrap(), GradeScale::new(1.0, 5.0).unwrap());
        assert_eq!(config.average_decimals, 1);
    }

    #[test]
    fn load_missing_explicit_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_from(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }
}

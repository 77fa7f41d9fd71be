//! Runner configuration, read from `patterns.toml`.
//!
//! ```toml
//! color = true
//! banner = true
//! patterns = ["singleton", "observer"]
//! log_filter = "design_patterns=info"
//! ```

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::error::{PatternError, Result};

pub const DEFAULT_CONFIG_FILE: &str = "patterns.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunnerConfig {
    pub color: bool,
    pub banner: bool,
    pub patterns: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            color: true,
            banner: true,
            patterns: Vec::new(),
            log_filter: None,
        }
    }
}

impl RunnerConfig {
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: RunnerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| PatternError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_toml(&content)
    }

    /// Explicit path (must exist) → `patterns.toml` in `dir` if present →
    /// defaults. `NO_COLOR` is applied last.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => {
                let candidate: PathBuf = dir.join(DEFAULT_CONFIG_FILE);
                if candidate.is_file() {
                    tracing::debug!("Loading runner config from {}", candidate.display());
                    Self::from_file(&candidate)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_no_color(std::env::var_os("NO_COLOR").as_deref(), false);
        Ok(config)
    }

    /// `NO_COLOR` (any value, taken from `no_color_env`) or the `--no-color`
    /// flag turns color off. Neither can turn it back on.
    pub fn apply_no_color(&mut self, no_color_env: Option<&OsStr>, no_color_flag: bool) {
        if no_color_env.is_some() || no_color_flag {
            self.color = false;
        }
    }

    /// Every configured name must resolve in the catalog.
    pub fn validate(&self) -> Result<()> {
        for name in &self.patterns {
            if name.trim().is_empty() {
                return Err(PatternError::InvalidConfig(
                    "pattern names must not be empty".to_string(),
                ));
            }
            catalog::resolve(name)?;
        }
        Ok(())
    }

    /// Configured patterns in the given order, or the whole catalog.
    pub fn selection(&self) -> Result<Vec<&'static catalog::Pattern>> {
        if self.patterns.is_empty() {
            return Ok(catalog::all().iter().collect());
        }
        self.patterns.iter().map(|name| catalog::resolve(name)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_no_color_env_forces_color_off() {
        let mut config = RunnerConfig::default();
        config.apply_no_color(Some(OsStr::new("1")), false);
        assert!(!config.color);

        let mut config = RunnerConfig::default();
        config.apply_no_color(Some(OsStr::new("")), false);
        assert!(!config.color);
    }

    #[test]
    fn test_no_color_flag_overrides_config_file() {
        let mut config = RunnerConfig::parse_toml("color = true").unwrap();
        config.apply_no_color(None, true);
        assert!(!config.color);
    }

    #[test]
    fn test_color_kept_without_env_or_flag() {
        let mut config = RunnerConfig::parse_toml("color = true").unwrap();
        config.apply_no_color(None, false);
        assert!(config.color);

        let mut config = RunnerConfig::parse_toml("color = false").unwrap();
        config.apply_no_color(None, false);
        assert!(!config.color);
    }

    #[test]
    fn test_defaults() {
        let config = RunnerConfig::default();
        assert!(config.color);
        assert!(config.banner);
        assert!(config.patterns.is_empty());
        assert_eq!(config.selection().unwrap().len(), catalog::all().len());
    }

    #[test]
    fn test_parse_partial_toml_keeps_defaults() {
        let config = RunnerConfig::parse_toml("banner = false\n").unwrap();
        assert!(!config.banner);
        assert!(config.color);
    }

    #[test]
    fn test_parse_selection_in_order() {
        let config =
            RunnerConfig::parse_toml("patterns = [\"Observer\", \"chain\", \"singleton\"]\n").unwrap();
        let names: Vec<&str> = config.selection().unwrap().iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["observer", "chain_of_responsibility", "singleton"]);
    }

    #[test]
    fn test_unknown_pattern_rejected() {
        let result = RunnerConfig::parse_toml("patterns = [\"singletn\"]\n");
        assert!(matches!(
            result,
            Err(PatternError::UnknownPattern { suggestion: Some(ref s), .. }) if s == "singleton"
        ));
    }

    #[test]
    fn test_empty_pattern_name_rejected() {
        let result = RunnerConfig::parse_toml("patterns = [\" \"]\n");
        assert!(matches!(result, Err(PatternError::InvalidConfig(_))));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = RunnerConfig::parse_toml("colour = false\n");
        assert!(matches!(result, Err(PatternError::ConfigParse(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "color = false").unwrap();
        writeln!(file, "log_filter = \"design_patterns=debug\"").unwrap();

        let config = RunnerConfig::from_file(file.path()).unwrap();
        assert!(!config.color);
        assert_eq!(config.log_filter.as_deref(), Some("design_patterns=debug"));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        let result = RunnerConfig::load(Some(&missing), dir.path());
        assert!(matches!(result, Err(PatternError::ConfigRead { .. })));
    }

    #[test]
    fn test_load_picks_up_default_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "banner = false\n").unwrap();

        let config = RunnerConfig::load(None, dir.path()).unwrap();
        assert!(!config.banner);
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = RunnerConfig::load(None, dir.path()).unwrap();
        assert!(config.banner);
        assert!(config.patterns.is_empty());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = RunnerConfig {
            color: false,
            banner: true,
            patterns: vec!["proxy".to_string()],
            log_filter: None,
        };
        let text = toml::to_string(&config).unwrap();
        assert_eq!(RunnerConfig::parse_toml(&text).unwrap(), config);
    }
}

//! Configuration management and validation.
//!
//! Provides the converter configuration with TOML file loading, a layered
//! file-then-CLI override flow, and builder-style construction for tests
//! and embedding callers.

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_DELIMITER, DEFAULT_SOURCE_NAME};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Policy for records that share a variant identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollisionPolicy {
    /// Emit one document per input line; duplicate identifiers simply
    /// repeat downstream
    EmitPerLine,
    /// Buffer the whole file and merge records sharing an identifier into
    /// a list, in first-seen order
    GroupById,
}

/// Converter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Source name that keys each record in emitted documents
    pub source_name: String,

    /// Field delimiter separating the four schema columns
    pub delimiter: char,

    /// Expected total line count, used for progress estimation only
    pub expected_lines: Option<u64>,

    /// Remove null-like fields from records before emission
    pub sweep_nulls: bool,

    /// How to handle duplicate variant identifiers
    pub collision_policy: CollisionPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_name: DEFAULT_SOURCE_NAME.to_string(),
            delimiter: DEFAULT_DELIMITER,
            expected_lines: None,
            sweep_nulls: false,
            collision_policy: CollisionPolicy::EmitPerLine,
        }
    }
}

impl Config {
    /// Create configuration with a custom source name
    pub fn with_source_name(mut self, source_name: impl Into<String>) -> Self {
        self.source_name = source_name.into();
        self
    }

    /// Create configuration with a custom field delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Create configuration with an expected line count for progress display
    pub fn with_expected_lines(mut self, expected_lines: u64) -> Self {
        self.expected_lines = Some(expected_lines);
        self
    }

    /// Enable removal of null-like fields before emission
    pub fn with_sweep_nulls(mut self) -> Self {
        self.sweep_nulls = true;
        self
    }

    /// Create configuration with a custom collision policy
    pub fn with_collision_policy(mut self, collision_policy: CollisionPolicy) -> Self {
        self.collision_policy = collision_policy;
        self
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Default configuration file location under the user config directory
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration using the layered approach (file -> defaults)
    ///
    /// An explicitly provided file must exist and parse. Without one, the
    /// default config path is used when present, otherwise built-in defaults.
    /// CLI overrides are applied by the caller on top of the returned value.
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        match config_file {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Self::default_config_path().ok();
                match default_path.filter(|path| path.exists()) {
                    Some(path) => Self::from_file(&path),
                    None => {
                        debug!("No config file found, using defaults");
                        Ok(Self::default())
                    }
                }
            }
        }
    }

    /// Validate configuration values for consistency
    pub fn validate(&self) -> Result<()> {
        if self.source_name.is_empty() {
            return Err(Error::configuration("Source name cannot be empty"));
        }

        if self.source_name.chars().any(char::is_whitespace) {
            return Err(Error::configuration(format!(
                "Source name cannot contain whitespace: '{}'",
                self.source_name
            )));
        }

        // A line-oriented format cannot delimit fields with line endings
        if self.delimiter == '\n' || self.delimiter == '\r' {
            return Err(Error::configuration(
                "Delimiter cannot be a line ending character",
            ));
        }

        if self.expected_lines == Some(0) {
            return Err(Error::configuration(
                "Expected line count must be greater than 0 when specified",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.source_name, "ncer");
        assert_eq!(config.delimiter, '\t');
        assert_eq!(config.expected_lines, None);
        assert!(!config.sweep_nulls);
        assert_eq!(config.collision_policy, CollisionPolicy::EmitPerLine);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = Config::default()
            .with_source_name("gnomad")
            .with_delimiter(',')
            .with_expected_lines(290_366)
            .with_sweep_nulls()
            .with_collision_policy(CollisionPolicy::GroupById);

        assert_eq!(config.source_name, "gnomad");
        assert_eq!(config.delimiter, ',');
        assert_eq!(config.expected_lines, Some(290_366));
        assert!(config.sweep_nulls);
        assert_eq!(config.collision_policy, CollisionPolicy::GroupById);
    }

    #[test]
    fn test_validate_rejects_empty_source_name() {
        let config = Config::default().with_source_name("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_whitespace_source_name() {
        let config = Config::default().with_source_name("my source");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_line_ending_delimiter() {
        assert!(Config::default().with_delimiter('\n').validate().is_err());
        assert!(Config::default().with_delimiter('\r').validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_expected_lines() {
        let config = Config::default().with_expected_lines(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
source_name = "ncer"
delimiter = "\t"
expected_lines = 1000
sweep_nulls = true
collision_policy = "group-by-id"
"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.source_name, "ncer");
        assert_eq!(config.delimiter, '\t');
        assert_eq!(config.expected_lines, Some(1000));
        assert!(config.sweep_nulls);
        assert_eq!(config.collision_policy, CollisionPolicy::GroupById);
    }

    #[test]
    fn test_from_file_partial_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"source_name = "regulome""#).unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.source_name, "regulome");
        assert_eq!(config.delimiter, '\t');
        assert_eq!(config.collision_policy, CollisionPolicy::EmitPerLine);
    }

    #[test]
    fn test_from_file_missing() {
        let result = Config::from_file(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_layered_explicit_file_must_exist() {
        let result = Config::load_layered(Some(Path::new("/nonexistent/config.toml")));
        assert!(result.is_err());
    }
}

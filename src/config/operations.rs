//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{DocgenError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(DocgenError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            DocgenError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from a YAML file if it exists, otherwise use defaults.
    ///
    /// A config file that exists but is invalid is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.is_file() {
            tracing::debug!(path = %path.display(), "loading config");
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| {
                DocgenError::UserError(format!("failed to parse config YAML: {}", e))
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `specs_dir` must be non-empty
    /// - file names must be non-empty plain names (no separators, no `..`)
    /// - the three file names must be pairwise distinct
    pub fn validate(&self) -> Result<()> {
        if self.specs_dir.trim().is_empty() {
            return Err(DocgenError::UserError(
                "config validation failed: specs_dir must be non-empty".to_string(),
            ));
        }

        let names = [
            ("input_file", &self.input_file),
            ("plan_file", &self.plan_file),
            ("tasks_file", &self.tasks_file),
        ];

        for (key, name) in names {
            if name.trim().is_empty() {
                return Err(DocgenError::UserError(format!(
                    "config validation failed: {} must be non-empty",
                    key
                )));
            }
            if name.contains('/') || name.contains('\\') || name.contains("..") {
                return Err(DocgenError::UserError(format!(
                    "config validation failed: {} must be a plain file name (found '{}')",
                    key, name
                )));
            }
        }

        for (i, (key_a, a)) in names.iter().enumerate() {
            for (key_b, b) in names.iter().skip(i + 1) {
                if a == b {
                    return Err(DocgenError::UserError(format!(
                        "config validation failed: {} and {} are both '{}'",
                        key_a, key_b, a
                    )));
                }
            }
        }

        Ok(())
    }
}

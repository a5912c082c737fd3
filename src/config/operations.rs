//! Config loading, validation, and utility operations.

use super::model::Config;
use super::types::CONFIG_FILE_NAME;
use crate::error::{PromptError, Result};
use crate::segment::TagSet;
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(PromptError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PromptError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load `.promptbuddy.yaml` from a workspace root, falling back to the
    /// defaults when the file does not exist.
    pub fn load_from_workspace<P: AsRef<Path>>(root: P) -> Result<Self> {
        let path = root.as_ref().join(CONFIG_FILE_NAME);
        if path.is_file() {
            tracing::debug!(path = %path.display(), "loading config");
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| PromptError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - tag spellings must form a valid, unambiguous grammar
    /// - `diff_command` must be non-empty and shell-splittable
    /// - `languages` keys must be non-empty and have no leading dots
    pub fn validate(&self) -> Result<()> {
        self.tag_set().map_err(|e| {
            PromptError::UserError(format!("config validation failed: {}", e))
        })?;

        self.diff_argv()?;

        for ext in self.languages.keys() {
            if ext.is_empty() {
                return Err(PromptError::UserError(
                    "config validation failed: languages keys must be non-empty".to_string(),
                ));
            }
            if ext.starts_with('.') {
                return Err(PromptError::UserError(format!(
                    "config validation failed: languages keys must not have leading dots (found '{}'). Use '{}' instead.",
                    ext,
                    ext.trim_start_matches('.')
                )));
            }
        }

        Ok(())
    }

    /// Compile the configured tag spellings.
    pub fn tag_set(&self) -> Result<TagSet> {
        TagSet::new(
            self.context_tags.as_slice(),
            self.diff_tags.as_slice(),
            self.note_tags.as_slice(),
        )
    }

    /// Split `diff_command` into program and arguments.
    pub fn diff_argv(&self) -> Result<Vec<String>> {
        let argv = shell_words::split(&self.diff_command).map_err(|e| {
            PromptError::UserError(format!(
                "config validation failed: cannot parse diff_command '{}': {}",
                self.diff_command, e
            ))
        })?;

        if argv.is_empty() {
            return Err(PromptError::UserError(
                "config validation failed: diff_command must not be empty".to_string(),
            ));
        }

        Ok(argv)
    }

    /// Language overrides with keys normalized to lowercase.
    pub fn normalized_languages(&self) -> Vec<(String, String)> {
        self.languages
            .iter()
            .map(|(ext, lang)| (ext.to_lowercase(), lang.clone()))
            .collect()
    }
}

use anyhow::{anyhow, Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::narration::patterns::{CodeBlockMode, PatternLibrary, DEFAULT_RESERVED_LABELS};
use crate::narration::{NarrationProfile, PipelineConfig, SubstitutionEntry};

/// Application configuration module
/// This module handles loading and validating the optional JSON configuration.
/// Every field has a default, so an empty object `{}` is a valid config.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Narration language
    #[serde(default)]
    pub profile: NarrationProfile,

    /// Narrate or strip fenced code blocks
    #[serde(default)]
    pub code_blocks: CodeBlockMode,

    /// Substitution table settings
    #[serde(default)]
    pub substitutions: SubstitutionsConfig,

    /// `#label` lines removed from documents
    #[serde(default = "default_reserved_labels")]
    pub reserved_labels: Vec<String>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Substitution table settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SubstitutionsConfig {
    // @field: Include the profile's built-in table
    #[serde(default = "default_true")]
    pub use_builtin: bool,

    // @field: Entries applied after the built-in ones
    #[serde(default)]
    pub extra: Vec<SubstitutionEntry>,
}

impl Default for SubstitutionsConfig {
    fn default() -> Self {
        Self {
            use_builtin: true,
            extra: Vec::new(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching filter for the log crate
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_reserved_labels() -> Vec<String> {
    DEFAULT_RESERVED_LABELS.iter().map(|label| label.to_string()).collect()
}

impl Config {
    /// Load a configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if let Some(entry) = self.substitutions.extra.iter().find(|entry| entry.source.is_empty()) {
            return Err(anyhow!(
                "Substitution source must not be empty (target: '{}')",
                entry.target
            ));
        }

        if let Some(label) = self
            .reserved_labels
            .iter()
            .find(|label| !PatternLibrary::is_valid_label(label))
        {
            return Err(anyhow!(
                "Reserved label '{}' must be a lowercase identifier with hyphens",
                label
            ));
        }

        Ok(())
    }

    /// Pipeline settings derived from this configuration
    pub fn pipeline_config(&self) -> PipelineConfig {
        let mut substitutions = if self.substitutions.use_builtin {
            self.profile.builtin_substitutions()
        } else {
            Default::default()
        };
        substitutions.extend(self.substitutions.extra.iter().cloned());

        PipelineConfig::new(self.profile)
            .with_code_blocks(self.code_blocks)
            .with_substitutions(substitutions)
            .with_reserved_labels(self.reserved_labels.clone())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            profile: NarrationProfile::default(),
            code_blocks: CodeBlockMode::default(),
            substitutions: SubstitutionsConfig::default(),
            reserved_labels: default_reserved_labels(),
            log_level: LogLevel::default(),
        }
    }
}

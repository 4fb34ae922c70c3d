// crates/tag-gate-config/src/config.rs
// ============================================================================
// Module: Tag Gate Configuration
// Description: TOML configuration model, loading, validation, and write-back.
// Purpose: Provide strict config parsing with hard limits.
// Dependencies: tag-gate-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Limit violations and unknown fields fail closed. Blank or duplicate tag
//! names are not fatal: they are surfaced by [`TagGateConfig::diagnostics`]
//! and resolved at runtime by the first-occurrence rule of the registry.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use tag_gate_core::GateConfig;
use tag_gate_core::LevelGate;
use tag_gate_core::LogLevel;
use tag_gate_core::MissingTagBehavior;
use tag_gate_core::RegistryConflict;
use tag_gate_core::Tag;
use tag_gate_core::TagRegistry;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "tag-gate.toml";
/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "TAG_GATE_CONFIG";
/// Maximum configuration file size in bytes.
pub const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum length of the full configuration path.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum number of tag entries.
pub const MAX_TAGS: usize = 4096;
/// Maximum tag name length in bytes.
pub const MAX_TAG_NAME_LENGTH: usize = 128;

// ============================================================================
// SECTION: Configuration Model
// ============================================================================

/// Top-level `tag-gate.toml` model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TagGateConfig {
    /// Message decoration settings.
    #[serde(default)]
    pub decoration: DecorationConfig,
    /// Per-level gates.
    #[serde(default)]
    pub gates: GatesConfig,
    /// Policy for tags absent from the registry.
    #[serde(default)]
    pub missing_tags: MissingTagsConfig,
    /// Ordered tag entries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TagEntry>,
}

/// `[decoration]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecorationConfig {
    /// Prefix emitted text with `[<origin>] `.
    pub use_class_prefix: bool,
    /// Strip one known suffix from the origin name.
    pub remove_class_suffixes: bool,
}

impl Default for DecorationConfig {
    fn default() -> Self {
        Self {
            use_class_prefix: true,
            remove_class_suffixes: true,
        }
    }
}

/// `[gates]` section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GatesConfig {
    /// Gate for info messages.
    pub info: LevelGate,
    /// Gate for warning messages.
    pub warning: LevelGate,
    /// Gate for error messages.
    pub error: LevelGate,
}

/// `[missing_tags]` section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MissingTagsConfig {
    /// Behavior when a tag is not registered.
    pub behavior: MissingTagBehavior,
}

/// One `[[tags]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TagEntry {
    /// Tag name.
    pub name: String,
    /// Emit info messages under an explicit gate.
    #[serde(default = "default_enabled")]
    pub log_info: bool,
    /// Emit warning messages under an explicit gate.
    #[serde(default = "default_enabled")]
    pub log_warning: bool,
    /// Emit error messages under an explicit gate.
    #[serde(default = "default_enabled")]
    pub log_error: bool,
}

/// Serde default for tag level flags.
const fn default_enabled() -> bool {
    true
}

impl TagEntry {
    /// Converts the entry to a registry tag without name validation.
    #[must_use]
    pub fn to_tag(&self) -> Tag {
        Tag {
            name: self.name.clone(),
            log_info: self.log_info,
            log_warning: self.log_warning,
            log_error: self.log_error,
        }
    }
}

impl From<&Tag> for TagEntry {
    fn from(tag: &Tag) -> Self {
        Self {
            name: tag.name.clone(),
            log_info: tag.allows(LogLevel::Info),
            log_warning: tag.allows(LogLevel::Warning),
            log_error: tag.allows(LogLevel::Error),
        }
    }
}

/// Outcome of [`TagGateConfig::normalize`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NormalizeReport {
    /// Entries removed for blank or duplicate names.
    pub removed: usize,
    /// Default tags appended.
    pub added: usize,
}

impl TagGateConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        Self::load_from(&resolved)
    }

    /// Loads configuration from an already resolved path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the path, size, encoding, syntax, or
    /// limits are invalid.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        validate_path(path)?;
        let bytes = fs::read(path).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::from_toml_str(content)
    }

    /// Parses and validates configuration text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown fields and
    /// [`ConfigError::Invalid`] for limit violations.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration against hard limits.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a limit is exceeded.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tags.len() > MAX_TAGS {
            return Err(ConfigError::Invalid(format!("tags exceeds max entries ({MAX_TAGS})")));
        }
        for (index, entry) in self.tags.iter().enumerate() {
            if entry.name.len() > MAX_TAG_NAME_LENGTH {
                return Err(ConfigError::Invalid(format!(
                    "tags[{index}].name exceeds max length ({MAX_TAG_NAME_LENGTH} bytes)"
                )));
            }
        }
        Ok(())
    }

    /// Returns non-fatal tag diagnostics in entry order.
    #[must_use]
    pub fn diagnostics(&self) -> Vec<RegistryConflict> {
        let mut registry: TagRegistry = self.tags.iter().map(TagEntry::to_tag).collect();
        registry.rebuild().to_vec()
    }

    /// Builds the runtime gate configuration.
    #[must_use]
    pub fn to_gate_config(&self) -> GateConfig {
        GateConfig {
            use_class_prefix: self.decoration.use_class_prefix,
            remove_class_suffixes: self.decoration.remove_class_suffixes,
            missing_tag_behavior: self.missing_tags.behavior,
            info: self.gates.info,
            warning: self.gates.warning,
            error: self.gates.error,
            registry: self.tags.iter().map(TagEntry::to_tag).collect(),
        }
    }

    /// Captures a runtime gate configuration, including tags added at runtime.
    #[must_use]
    pub fn from_gate_config(config: &GateConfig) -> Self {
        Self {
            decoration: DecorationConfig {
                use_class_prefix: config.use_class_prefix,
                remove_class_suffixes: config.remove_class_suffixes,
            },
            gates: GatesConfig {
                info: config.info,
                warning: config.warning,
                error: config.error,
            },
            missing_tags: MissingTagsConfig {
                behavior: config.missing_tag_behavior,
            },
            tags: config.registry.iter().map(TagEntry::from).collect(),
        }
    }

    /// Drops blank and duplicate entries, keeping first occurrences, and
    /// optionally appends the built-in default tags that are absent.
    pub fn normalize(&mut self, add_defaults: bool) -> NormalizeReport {
        let mut gate = self.to_gate_config();
        let removed = gate.registry.remove_invalid_or_duplicate();
        let added = if add_defaults { gate.add_default_tags() } else { 0 };
        self.tags = gate.registry.iter().map(TagEntry::from).collect();
        NormalizeReport {
            removed,
            added,
        }
    }

    /// Renders the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when serialization fails.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|err| ConfigError::Invalid(format!("config serialization failed: {err}")))
    }

    /// Validates and writes the configuration to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when validation, serialization, or the write
    /// fails.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        validate_path(path)?;
        self.validate()?;
        let content = self.to_toml_string()?;
        if content.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        fs::write(path, content).map_err(|err| ConfigError::Io(err.to_string()))
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading or writing configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from an explicit argument, the environment, or
/// the default filename.
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] when the environment path is too long.
pub fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates a config path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================

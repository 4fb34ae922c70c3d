// crates/tag-gate-config/src/source.rs
// ============================================================================
// Module: File Config Source
// Description: ConfigSource backed by tag-gate.toml.
// Purpose: Let loggers load gate settings lazily from disk.
// Dependencies: tag-gate-core
// ============================================================================

//! ## Overview
//! [`FileConfigSource`] resolves its path at load time, so a logger that is
//! invalidated picks up both file edits and environment changes. A missing
//! file maps to [`ConfigSourceError::NotFound`]; anything else that prevents
//! a valid config maps to [`ConfigSourceError::Load`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;

use tag_gate_core::ConfigSource;
use tag_gate_core::ConfigSourceError;
use tag_gate_core::GateConfig;

use crate::config::TagGateConfig;
use crate::config::resolve_path;

// ============================================================================
// SECTION: File Source
// ============================================================================

/// Configuration source reading `tag-gate.toml`.
#[derive(Debug, Clone, Default)]
pub struct FileConfigSource {
    /// Explicit path; `None` defers to the environment and default name.
    path: Option<PathBuf>,
}

impl FileConfigSource {
    /// Creates a source with an optional explicit path.
    #[must_use]
    pub const fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
        }
    }

    /// Creates a source reading a fixed path.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self::new(Some(path.into()))
    }
}

impl ConfigSource for FileConfigSource {
    fn load(&self) -> Result<GateConfig, ConfigSourceError> {
        let resolved = resolve_path(self.path.as_deref())
            .map_err(|err| ConfigSourceError::Load(err.to_string()))?;
        if !resolved.is_file() {
            return Err(ConfigSourceError::NotFound(resolved.display().to_string()));
        }
        let config = TagGateConfig::load_from(&resolved)
            .map_err(|err| ConfigSourceError::Load(err.to_string()))?;
        Ok(config.to_gate_config())
    }
}

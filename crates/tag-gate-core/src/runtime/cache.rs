// crates/tag-gate-core/src/runtime/cache.rs
// ============================================================================
// Module: Tag Gate Configuration Cache
// Description: Lazily loaded, lock-guarded gate configuration.
// Purpose: Load once, serialize all access, and reload after invalidation.
// Dependencies: crate::{core, interfaces, runtime::engine}
// ============================================================================

//! ## Overview
//! [`GateCache`] owns the single lock guarding a [`GateConfig`]. The first
//! access loads from the configured [`ConfigSource`]; a failed load falls back
//! to [`GateConfig::default`] and reports a warning through the sink. After
//! loading, the registry lookup is rebuilt and any conflicts are reported at
//! error level. [`GateCache::invalidate`] drops the cached value so the next
//! access loads again.
//!
//! Load diagnostics are queued under the lock and delivered after it is
//! released. Records the sink rejects stay queued for the next access.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Mutex;

use thiserror::Error;

use crate::core::GateConfig;
use crate::core::LogLevel;
use crate::interfaces::ConfigSource;
use crate::interfaces::LogRecord;
use crate::interfaces::LogSink;
use crate::interfaces::SinkError;
use crate::interfaces::StaticConfigSource;
use crate::runtime::engine::ENGINE_LABEL;
use crate::runtime::engine::conflict_notices;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Runtime errors for shared gate access.
#[derive(Debug, Error)]
pub enum GateError {
    /// The configuration lock was poisoned by a panicking holder.
    #[error("gate configuration lock poisoned")]
    Poisoned,
    /// A record could not be delivered.
    #[error(transparent)]
    Sink(#[from] SinkError),
}

// ============================================================================
// SECTION: Cache
// ============================================================================

/// Boxed configuration source shared across threads.
type SharedSource = Box<dyn ConfigSource + Send + Sync>;

/// State guarded by the cache lock.
#[derive(Default)]
struct CacheState {
    /// Cached configuration; `None` until loaded.
    config: Option<GateConfig>,
    /// Load diagnostics not yet delivered to a sink.
    pending: Vec<LogRecord>,
}

/// Lazily loaded configuration behind a single lock.
pub struct GateCache {
    /// Source consulted on first access and after invalidation.
    source: SharedSource,
    /// Cached configuration and undelivered diagnostics.
    state: Mutex<CacheState>,
}

impl GateCache {
    /// Creates an empty cache backed by `source`.
    #[must_use]
    pub fn new(source: impl ConfigSource + Send + Sync + 'static) -> Self {
        Self {
            source: Box::new(source),
            state: Mutex::new(CacheState::default()),
        }
    }

    /// Creates a cache whose source always yields `config`.
    #[must_use]
    pub fn from_config(config: GateConfig) -> Self {
        Self::new(StaticConfigSource::new(config))
    }

    /// Runs `f` with exclusive access to the configuration, loading it first
    /// when needed. Pending load diagnostics are delivered to `sink` after the
    /// lock is released.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Poisoned`] when the lock is poisoned, or
    /// [`GateError::Sink`] when a load diagnostic cannot be delivered. `f` has
    /// already run in that case and the undelivered diagnostics stay queued.
    pub fn with_config<R>(
        &self,
        sink: &dyn LogSink,
        f: impl FnOnce(&mut GateConfig) -> R,
    ) -> Result<R, GateError> {
        let mut guard = self.state.lock().map_err(|_| GateError::Poisoned)?;
        let state = &mut *guard;
        let config = state.config.get_or_insert_with(|| {
            let (config, records) = self.load_config();
            state.pending.extend(records);
            config
        });
        let output = f(config);
        let pending = std::mem::take(&mut state.pending);
        drop(guard);
        self.deliver_pending(sink, pending)?;
        Ok(output)
    }

    /// Drops the cached configuration. The next access reloads it.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Poisoned`] when the lock is poisoned.
    pub fn invalidate(&self) -> Result<(), GateError> {
        let mut guard = self.state.lock().map_err(|_| GateError::Poisoned)?;
        guard.config = None;
        drop(guard);
        Ok(())
    }

    /// Returns true when a configuration is cached.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.state.lock().is_ok_and(|guard| guard.config.is_some())
    }

    /// Delivers `records` in order. On failure the undelivered tail is
    /// queued ahead of anything queued since.
    fn deliver_pending(
        &self,
        sink: &dyn LogSink,
        mut records: Vec<LogRecord>,
    ) -> Result<(), GateError> {
        let mut failure = None;
        for (index, record) in records.iter().enumerate() {
            if let Err(err) = sink.deliver(record) {
                failure = Some((index, err));
                break;
            }
        }
        let Some((index, err)) = failure else {
            return Ok(());
        };
        records.drain(.. index);
        if let Ok(mut guard) = self.state.lock() {
            records.append(&mut guard.pending);
            guard.pending = records;
        }
        Err(err.into())
    }

    /// Loads from the source and builds the registry lookup.
    fn load_config(&self) -> (GateConfig, Vec<LogRecord>) {
        let mut diagnostics = Vec::new();
        let mut config = match self.source.load() {
            Ok(config) => config,
            Err(err) => {
                diagnostics.push(LogRecord::notice(
                    LogLevel::Warning,
                    format!("{ENGINE_LABEL} {err}. Falling back to the all-enabled default."),
                ));
                GateConfig::default()
            }
        };
        let conflicts = conflict_notices(config.registry.rebuild());
        diagnostics
            .extend(conflicts.into_iter().map(|notice| LogRecord::notice(notice.level, notice.text)));
        (config, diagnostics)
    }
}

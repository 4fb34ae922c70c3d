// crates/tag-gate-sink/tests/common/mod.rs
// ============================================================================
// Module: Sink Test Helpers
// Description: Shared writers for sink tests.
// Purpose: Capture sink output and simulate writer failures.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Provides an inspectable in-memory writer and an always-failing writer.

use std::io::Write;
use std::sync::Arc;
use std::sync::Mutex;

// ============================================================================
// SECTION: Shared Buffer
// ============================================================================

/// Cloneable writer whose contents stay readable after the sink takes it.
#[derive(Clone)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    /// Creates a new empty shared buffer.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns the contents as a string.
    pub fn to_string_lossy(&self) -> String {
        let guard = self.inner.lock().expect("buffer lock");
        String::from_utf8_lossy(&guard).to_string()
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().expect("buffer lock").is_empty()
    }
}

impl Default for SharedBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.inner.lock().expect("buffer lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

// ============================================================================
// SECTION: Failing Writer
// ============================================================================

/// A writer that always fails.
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::other("simulated write failure"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

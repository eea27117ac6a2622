// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Engine configuration.
//!
//! # Architecture
//!
//! - **Level 1 (Static)**: compile-time limits ([`MAX_ARRAY_SIZE`], [`FORMAT_BUFFER_SIZE`])
//! - **Level 2 (Dynamic)**: [`EngineConfig`], overridable from the environment and
//!   published process-wide through an `ArcSwap`
//!
//! Environment overrides:
//! - `UA_TYPES_MAX_ARRAY_BYTES`: byte budget for a single array allocation
//! - `UA_TYPES_FORMAT_BUFFER_SIZE`: scratch buffer size for formatted strings

use arc_swap::ArcSwap;
use std::env;
use std::sync::{Arc, OnceLock};

/// Upper bound, in bytes, of any single array allocation.
///
/// Length fields come straight off the wire; anything larger is treated as
/// corrupt and allocated as an absent array.
pub const MAX_ARRAY_SIZE: usize = 104_857_600;

/// Scratch buffer size used when rendering formatted strings.
pub const FORMAT_BUFFER_SIZE: usize = 1024;

pub const ENV_MAX_ARRAY_BYTES: &str = "UA_TYPES_MAX_ARRAY_BYTES";
pub const ENV_FORMAT_BUFFER_SIZE: &str = "UA_TYPES_FORMAT_BUFFER_SIZE";

/// Runtime limits of the generic engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub max_array_bytes: usize,
    pub format_buffer_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_array_bytes: MAX_ARRAY_SIZE,
            format_buffer_size: FORMAT_BUFFER_SIZE,
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by any `UA_TYPES_*` variables that parse.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(bytes) = parse_usize(&lookup, ENV_MAX_ARRAY_BYTES) {
            config.max_array_bytes = bytes;
        }
        if let Some(size) = parse_usize(&lookup, ENV_FORMAT_BUFFER_SIZE) {
            if size > 0 {
                config.format_buffer_size = size;
            }
        }

        config
    }

    #[must_use]
    pub fn with_max_array_bytes(mut self, bytes: usize) -> Self {
        self.max_array_bytes = bytes;
        self
    }

    #[must_use]
    pub fn with_format_buffer_size(mut self, size: usize) -> Self {
        self.format_buffer_size = size.max(1);
        self
    }
}

fn parse_usize(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<usize> {
    let raw = lookup(key)?;
    match raw.trim().parse::<usize>() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("[config] ignoring {}={:?}: not an unsigned integer", key, raw);
            None
        }
    }
}

fn global_cell() -> &'static ArcSwap<EngineConfig> {
    static GLOBAL: OnceLock<ArcSwap<EngineConfig>> = OnceLock::new();
    GLOBAL.get_or_init(|| ArcSwap::from_pointee(EngineConfig::from_env()))
}

/// Process-wide configuration picked up by [`crate::Engine::system`].
pub fn global() -> Arc<EngineConfig> {
    global_cell().load_full()
}

/// Atomically replace the process-wide configuration.
pub fn set_global(config: EngineConfig) {
    log::debug!(
        "[config] global config updated: max_array_bytes={} format_buffer_size={}",
        config.max_array_bytes,
        config.format_buffer_size
    );
    global_cell().store(Arc::new(config));
}

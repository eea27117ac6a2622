// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Value providers for variable nodes.
//!
//! The engine never locks; a source shared between the server loop and
//! other threads serializes access itself. [`SharedValue`] is the reference
//! shape: readers deep-copy under a read lock, writers build the new value
//! outside the lock and swap it in under the write lock.

use parking_lot::RwLock;

use crate::builtin::{DataValue, DateTime, UaType};
use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::status::StatusCode;
use crate::value::Value;
use crate::variant::Variant;

/// Source of a node's current value.
pub trait DataSource: Send + Sync {
    fn read(&self) -> Result<DataValue>;

    /// Replace the current value. Read-only sources reject writes.
    fn write(&self, _value: &Variant) -> std::result::Result<(), StatusCode> {
        Err(StatusCode::BAD_NOT_WRITABLE)
    }
}

/// Read-only source reporting the current time.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClockSource;

impl DataSource for ClockSource {
    fn read(&self) -> Result<DataValue> {
        let now = DateTime::now();
        Ok(DataValue::new(Variant::from_value(Value::DateTime(now)))
            .with_status(StatusCode::GOOD)
            .with_source_timestamp(now))
    }
}

/// Writable value guarded by a reader/writer lock.
#[derive(Debug, Default)]
pub struct SharedValue {
    current: RwLock<Variant>,
}

impl SharedValue {
    pub fn new(initial: Variant) -> Self {
        Self {
            current: RwLock::new(initial),
        }
    }

    /// Deep copy of the current value.
    pub fn snapshot(&self) -> Result<Variant> {
        self.current.read().copy()
    }

    /// Install `value`, returning the previous one.
    pub fn replace(&self, value: Variant) -> Variant {
        std::mem::replace(&mut *self.current.write(), value)
    }

    /// Write through `engine`. The copy is made before the lock is taken; on
    /// failure the current value is untouched.
    pub fn write_with(&self, engine: &Engine<'_>, value: &Variant) -> Result<()> {
        let copy = value.copy_with(engine)?;
        let previous = self.replace(copy);
        drop(previous);
        Ok(())
    }
}

impl DataSource for SharedValue {
    fn read(&self) -> Result<DataValue> {
        let value = self.snapshot()?;
        Ok(DataValue::new(value)
            .with_status(StatusCode::GOOD)
            .with_source_timestamp(DateTime::now()))
    }

    fn write(&self, value: &Variant) -> std::result::Result<(), StatusCode> {
        self.write_with(&Engine::system(), value)
            .map_err(|err: Error| {
                log::warn!("[datasource] write rejected: {}", err);
                err.status_code()
            })
    }
}

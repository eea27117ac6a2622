// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Timestamped value container.

use crate::engine::Engine;
use crate::error::Result;
use crate::status::StatusCode;
use crate::variant::Variant;

use super::datetime::DateTime;
use super::UaType;

/// Presence bits of the wire encoding mask.
pub mod mask {
    pub const VALUE: u8 = 0x01;
    pub const STATUS: u8 = 0x02;
    pub const SOURCE_TIMESTAMP: u8 = 0x04;
    pub const SERVER_TIMESTAMP: u8 = 0x08;
    pub const SOURCE_PICOSECONDS: u8 = 0x10;
    pub const SERVER_PICOSECONDS: u8 = 0x20;
}

/// Value with optional status and source/server timestamps.
///
/// Every optional field is an `Option`; the wire presence mask is derived
/// from them by [`DataValue::encoding_mask`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataValue {
    pub value: Option<Variant>,
    pub status: Option<StatusCode>,
    pub source_timestamp: Option<DateTime>,
    pub server_timestamp: Option<DateTime>,
    pub source_picoseconds: Option<u16>,
    pub server_picoseconds: Option<u16>,
}

impl DataValue {
    pub fn new(value: Variant) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn with_source_timestamp(mut self, ts: DateTime) -> Self {
        self.source_timestamp = Some(ts);
        self
    }

    #[must_use]
    pub fn with_server_timestamp(mut self, ts: DateTime) -> Self {
        self.server_timestamp = Some(ts);
        self
    }

    pub fn encoding_mask(&self) -> u8 {
        let mut bits = 0;
        if self.value.is_some() {
            bits |= mask::VALUE;
        }
        if self.status.is_some() {
            bits |= mask::STATUS;
        }
        if self.source_timestamp.is_some() {
            bits |= mask::SOURCE_TIMESTAMP;
        }
        if self.server_timestamp.is_some() {
            bits |= mask::SERVER_TIMESTAMP;
        }
        if self.source_picoseconds.is_some() {
            bits |= mask::SOURCE_PICOSECONDS;
        }
        if self.server_picoseconds.is_some() {
            bits |= mask::SERVER_PICOSECONDS;
        }
        bits
    }

    /// Status reported for the value; absent means `Good`.
    pub fn status_or_good(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::GOOD)
    }
}

impl UaType for DataValue {
    fn copy_with(&self, engine: &Engine<'_>) -> Result<Self> {
        let value = match &self.value {
            Some(v) => Some(v.copy_with(engine)?),
            None => None,
        };
        Ok(Self {
            value,
            status: self.status,
            source_timestamp: self.source_timestamp,
            server_timestamp: self.server_timestamp,
            source_picoseconds: self.source_picoseconds,
            server_picoseconds: self.server_picoseconds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::FailingAllocator;
    use crate::value::Value;

    #[test]
    fn test_encoding_mask() {
        assert_eq!(DataValue::default().encoding_mask(), 0);
        let dv = DataValue::new(Variant::default())
            .with_status(StatusCode::BAD_NO_DATA)
            .with_server_timestamp(DateTime(1));
        assert_eq!(dv.encoding_mask(), mask::VALUE | mask::STATUS | mask::SERVER_TIMESTAMP);
        let ps = DataValue {
            source_picoseconds: Some(10),
            server_picoseconds: Some(20),
            ..DataValue::default()
        };
        assert_eq!(ps.encoding_mask(), 0x30);
    }

    #[test]
    fn test_copy_is_deep() {
        let mut variant = Variant::default();
        variant
            .copy_set_value(&Value::from(crate::UaString::from_text("v").unwrap()))
            .unwrap();
        let dv = DataValue::new(variant).with_source_timestamp(DateTime(99));
        let copy = dv.copy().unwrap();
        assert_eq!(copy, dv);
        drop(dv);
        assert_eq!(copy.source_timestamp, Some(DateTime(99)));
    }

    #[test]
    fn test_copy_failure_resets() {
        let mut variant = Variant::default();
        variant.copy_set_value(&Value::String(crate::UaString::from_text("v").unwrap())).unwrap();
        let dv = DataValue::new(variant).with_status(StatusCode::GOOD_CLAMPED);
        let alloc = FailingAllocator::fail_nth(1);
        let mut dst = DataValue::default().with_status(StatusCode::BAD_TIMEOUT);
        assert!(dv.copy_into(&mut dst, &Engine::with_allocator(&alloc)).is_err());
        assert_eq!(dst, DataValue::default());
        assert_eq!(dst.status_or_good(), StatusCode::GOOD);
    }
}

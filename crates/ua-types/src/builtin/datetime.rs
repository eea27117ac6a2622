// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Protocol timestamps: 100 ns ticks since 1601-01-01 00:00 UTC.

use std::fmt;

use chrono::{Datelike, Timelike, Utc};

use crate::engine::Engine;
use crate::error::Result;

use super::string::UaString;

/// Seconds from 1601-01-01 to 1970-01-01.
pub const UNIX_EPOCH_BIAS_SEC: i64 = 11_644_473_600;
pub const TICKS_PER_MICROSECOND: i64 = 10;
pub const TICKS_PER_SECOND: i64 = TICKS_PER_MICROSECOND * 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[repr(transparent)]
pub struct DateTime(pub i64);

/// Broken-down calendar view of a [`DateTime`] (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateTimeStruct {
    pub nano_sec: i16,
    pub micro_sec: i16,
    pub milli_sec: i16,
    pub sec: i16,
    pub min: i16,
    pub hour: i16,
    pub day: i16,
    pub month: i16,
    pub year: i16,
}

impl DateTime {
    pub const MIN: DateTime = DateTime(0);

    pub fn now() -> Self {
        let now = Utc::now();
        Self::from_unix(now.timestamp(), now.timestamp_subsec_micros())
    }

    /// From Unix seconds plus a microsecond fraction.
    pub fn from_unix(secs: i64, micros: u32) -> Self {
        let ticks = secs
            .saturating_add(UNIX_EPOCH_BIAS_SEC)
            .saturating_mul(TICKS_PER_SECOND)
            .saturating_add(i64::from(micros) * TICKS_PER_MICROSECOND);
        DateTime(ticks)
    }

    /// Whole seconds since the Unix epoch.
    pub fn to_unix(self) -> i64 {
        self.0.div_euclid(TICKS_PER_SECOND) - UNIX_EPOCH_BIAS_SEC
    }

    pub fn ticks(self) -> i64 {
        self.0
    }

    pub fn to_struct(self) -> DateTimeStruct {
        let t = self.0;
        let mut out = DateTimeStruct {
            nano_sec: ((t % 10) * 100) as i16,
            micro_sec: ((t % 10_000) / 10) as i16,
            milli_sec: ((t % 10_000_000) / 10_000) as i16,
            ..DateTimeStruct::default()
        };

        let unix = t / TICKS_PER_SECOND - UNIX_EPOCH_BIAS_SEC;
        if let Some(ts) = chrono::DateTime::<Utc>::from_timestamp(unix, 0) {
            out.sec = ts.second() as i16;
            out.min = ts.minute() as i16;
            out.hour = ts.hour() as i16;
            out.day = ts.day() as i16;
            out.month = ts.month() as i16;
            out.year = ts.year() as i16;
        }
        out
    }

    /// Render as `MM/DD/YYYY HH:MM:SS.mmm.uuu.nnn`.
    pub fn to_ua_string(self, engine: &Engine<'_>) -> Result<UaString> {
        let s = self.to_struct();
        UaString::copy_fmt(
            engine,
            format_args!(
                "{:2}/{:2}/{:4} {:2}:{:2}:{:2}.{:3}.{:3}.{:3}",
                s.month, s.day, s.year, s.hour, s.min, s.sec, s.milli_sec, s.micro_sec, s.nano_sec
            ),
        )
    }
}

impl From<i64> for DateTime {
    fn from(ticks: i64) -> Self {
        DateTime(ticks)
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unix = self.0.div_euclid(TICKS_PER_SECOND) - UNIX_EPOCH_BIAS_SEC;
        let nanos = self.0.rem_euclid(TICKS_PER_SECOND) * 100;
        match chrono::DateTime::<Utc>::from_timestamp(unix, nanos as u32) {
            Some(ts) => write!(f, "{}", ts.format("%Y-%m-%dT%H:%M:%S%.7fZ")),
            None => write!(f, "DateTime({})", self.0),
        }
    }
}

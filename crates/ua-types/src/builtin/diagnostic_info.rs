// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Diagnostic information chains.
//!
//! Each level optionally owns the next one through a boxed link. Presence is
//! the `Option` itself, so there is no separate flag to disagree with the
//! pointer. Chains are finite: a value can only own links created before it.

use crate::engine::Engine;
use crate::error::Result;
use crate::status::StatusCode;

use super::string::UaString;
use super::UaType;

/// Presence bits of the wire encoding mask.
pub mod mask {
    pub const SYMBOLIC_ID: u8 = 0x01;
    pub const NAMESPACE_URI: u8 = 0x02;
    pub const LOCALIZED_TEXT: u8 = 0x04;
    pub const LOCALE: u8 = 0x08;
    pub const ADDITIONAL_INFO: u8 = 0x10;
    pub const INNER_STATUS_CODE: u8 = 0x20;
    pub const INNER_DIAGNOSTIC_INFO: u8 = 0x40;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticInfo {
    /// Index into the response string table.
    pub symbolic_id: Option<i32>,
    pub namespace_uri: Option<i32>,
    pub localized_text: Option<i32>,
    pub locale: Option<i32>,
    pub additional_info: Option<UaString>,
    pub inner_status_code: Option<StatusCode>,
    pub inner_diagnostic_info: Option<Box<DiagnosticInfo>>,
}

impl DiagnosticInfo {
    pub fn encoding_mask(&self) -> u8 {
        let mut bits = 0;
        for (present, bit) in [
            (self.symbolic_id.is_some(), mask::SYMBOLIC_ID),
            (self.namespace_uri.is_some(), mask::NAMESPACE_URI),
            (self.localized_text.is_some(), mask::LOCALIZED_TEXT),
            (self.locale.is_some(), mask::LOCALE),
            (self.additional_info.is_some(), mask::ADDITIONAL_INFO),
            (self.inner_status_code.is_some(), mask::INNER_STATUS_CODE),
            (self.inner_diagnostic_info.is_some(), mask::INNER_DIAGNOSTIC_INFO),
        ] {
            if present {
                bits |= bit;
            }
        }
        bits
    }

    pub fn has_inner(&self) -> bool {
        self.inner_diagnostic_info.is_some()
    }

    /// Number of levels in the chain, this one included.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut cursor = self.inner_diagnostic_info.as_deref();
        while let Some(inner) = cursor {
            depth += 1;
            cursor = inner.inner_diagnostic_info.as_deref();
        }
        depth
    }

    /// Attach `inner` as the next level, returning the previous link.
    pub fn set_inner(&mut self, inner: DiagnosticInfo) -> Option<Box<DiagnosticInfo>> {
        self.inner_diagnostic_info.replace(Box::new(inner))
    }
}

impl UaType for DiagnosticInfo {
    fn copy_with(&self, engine: &Engine<'_>) -> Result<Self> {
        let additional_info = match &self.additional_info {
            Some(s) => Some(s.copy_with(engine)?),
            None => None,
        };
        let inner_diagnostic_info = match &self.inner_diagnostic_info {
            Some(inner) => Some(engine.alloc_box(inner.copy_with(engine)?)?),
            None => None,
        };
        Ok(Self {
            symbolic_id: self.symbolic_id,
            namespace_uri: self.namespace_uri,
            localized_text: self.localized_text,
            locale: self.locale,
            additional_info,
            inner_status_code: self.inner_status_code,
            inner_diagnostic_info,
        })
    }
}

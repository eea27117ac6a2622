// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Qualified names and localized texts.

use std::fmt;

use crate::engine::Engine;
use crate::error::Result;

use super::string::UaString;
use super::UaType;

/// Name qualified by a namespace index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    pub namespace_index: u16,
    pub name: UaString,
}

impl QualifiedName {
    pub fn new(namespace_index: u16, name: &str) -> Result<Self> {
        Ok(Self {
            namespace_index,
            name: UaString::from_text(name)?,
        })
    }

    /// Name in namespace 0.
    pub fn from_text(name: &str) -> Result<Self> {
        Self::new(0, name)
    }
}

impl UaType for QualifiedName {
    fn copy_with(&self, engine: &Engine<'_>) -> Result<Self> {
        Ok(Self {
            namespace_index: self.namespace_index,
            name: self.name.copy_with(engine)?,
        })
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace_index, self.name)
    }
}

/// Human-readable text tagged with a locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LocalizedText {
    pub locale: UaString,
    pub text: UaString,
}

impl LocalizedText {
    pub fn new(locale: &str, text: &str) -> Result<Self> {
        Ok(Self {
            locale: UaString::from_text(locale)?,
            text: UaString::from_text(text)?,
        })
    }

    /// Text with an empty locale.
    pub fn from_text(text: &str) -> Result<Self> {
        Ok(Self {
            locale: UaString::empty(),
            text: UaString::from_text(text)?,
        })
    }
}

impl UaType for LocalizedText {
    fn copy_with(&self, engine: &Engine<'_>) -> Result<Self> {
        Ok(Self {
            locale: self.locale.copy_with(engine)?,
            text: self.text.copy_with(engine)?,
        })
    }
}

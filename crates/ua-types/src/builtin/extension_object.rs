// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Extension objects: an encoded structure tagged with its type id.

use crate::engine::Engine;
use crate::error::{Error, Result};

use super::node_id::NodeId;
use super::string::{ByteString, XmlElement};
use super::UaType;

/// Wire encoding byte of an extension object body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ExtensionObjectEncoding {
    NoBody = 0,
    ByteString = 1,
    Xml = 2,
}

impl TryFrom<u8> for ExtensionObjectEncoding {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::NoBody),
            1 => Ok(Self::ByteString),
            2 => Ok(Self::Xml),
            other => Err(Error::Encoding(format!(
                "unknown extension object encoding 0x{:02x}",
                other
            ))),
        }
    }
}

/// Encoded body; the variant is the encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum ExtensionBody {
    #[default]
    None,
    Binary(ByteString),
    Xml(XmlElement),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ExtensionObject {
    pub type_id: NodeId,
    pub body: ExtensionBody,
}

impl ExtensionObject {
    pub fn binary(type_id: NodeId, body: ByteString) -> Self {
        Self {
            type_id,
            body: ExtensionBody::Binary(body),
        }
    }

    pub fn encoding(&self) -> ExtensionObjectEncoding {
        match self.body {
            ExtensionBody::None => ExtensionObjectEncoding::NoBody,
            ExtensionBody::Binary(_) => ExtensionObjectEncoding::ByteString,
            ExtensionBody::Xml(_) => ExtensionObjectEncoding::Xml,
        }
    }

    /// Rebuild from a decoded encoding byte and raw body bytes.
    pub fn from_encoded(
        engine: &Engine<'_>,
        type_id: NodeId,
        encoding: u8,
        body: &[u8],
    ) -> Result<Self> {
        let body = match ExtensionObjectEncoding::try_from(encoding)? {
            ExtensionObjectEncoding::NoBody => ExtensionBody::None,
            ExtensionObjectEncoding::ByteString => {
                ExtensionBody::Binary(ByteString::from_bytes_with(engine, body)?)
            }
            ExtensionObjectEncoding::Xml => {
                ExtensionBody::Xml(XmlElement::from_bytes_with(engine, body)?)
            }
        };
        Ok(Self { type_id, body })
    }

    pub fn body_bytes(&self) -> &[u8] {
        match &self.body {
            ExtensionBody::None => &[],
            ExtensionBody::Binary(b) => b.as_bytes(),
            ExtensionBody::Xml(x) => x.as_bytes(),
        }
    }
}

impl UaType for ExtensionObject {
    fn copy_with(&self, engine: &Engine<'_>) -> Result<Self> {
        let body = match &self.body {
            ExtensionBody::None => ExtensionBody::None,
            ExtensionBody::Binary(b) => ExtensionBody::Binary(b.copy_with(engine)?),
            ExtensionBody::Xml(x) => ExtensionBody::Xml(x.copy_with(engine)?),
        };
        Ok(Self {
            type_id: self.type_id.copy_with(engine)?,
            body,
        })
    }
}

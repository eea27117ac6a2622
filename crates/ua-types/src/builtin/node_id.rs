// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Node identifiers.
//!
//! The identifier is a sum type, so the active encoding can never disagree
//! with the stored payload.

use std::fmt;

use crate::engine::Engine;
use crate::error::Result;

use super::guid::Guid;
use super::string::{ByteString, UaString};
use super::{BuiltinType, UaType};

/// Identifier encodings of a [`NodeId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    Numeric(u32),
    String(UaString),
    Guid(Guid),
    ByteString(ByteString),
}

impl Identifier {
    /// Wire tag of the encoding.
    pub fn tag(&self) -> u8 {
        match self {
            Identifier::Numeric(_) => 0,
            Identifier::String(_) => 3,
            Identifier::Guid(_) => 4,
            Identifier::ByteString(_) => 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub namespace_index: u16,
    pub identifier: Identifier,
}

impl Default for NodeId {
    fn default() -> Self {
        Self::NULL
    }
}

impl NodeId {
    /// Numeric 0 in namespace 0.
    pub const NULL: NodeId = NodeId {
        namespace_index: 0,
        identifier: Identifier::Numeric(0),
    };

    pub const fn numeric(namespace_index: u16, value: u32) -> Self {
        Self {
            namespace_index,
            identifier: Identifier::Numeric(value),
        }
    }

    pub fn string(namespace_index: u16, text: &str) -> Result<Self> {
        Ok(Self {
            namespace_index,
            identifier: Identifier::String(UaString::from_text(text)?),
        })
    }

    pub const fn guid(namespace_index: u16, guid: Guid) -> Self {
        Self {
            namespace_index,
            identifier: Identifier::Guid(guid),
        }
    }

    pub fn byte_string(namespace_index: u16, bytes: &[u8]) -> Result<Self> {
        Ok(Self {
            namespace_index,
            identifier: Identifier::ByteString(ByteString::from_bytes(bytes)?),
        })
    }

    /// Tag-specific null test: namespace 0 and a zero numeric, zero guid,
    /// or a string/byte string of length exactly 0.
    pub fn is_null(&self) -> bool {
        if self.namespace_index != 0 {
            return false;
        }
        match &self.identifier {
            Identifier::Numeric(v) => *v == 0,
            Identifier::String(s) => s.length() == 0,
            Identifier::Guid(g) => g.is_null(),
            Identifier::ByteString(b) => b.length() == 0,
        }
    }

    /// Numeric id in namespace 0 naming one of the 25 builtin types.
    pub fn is_basic_type(&self) -> bool {
        self.builtin_type().is_some()
    }

    pub fn builtin_type(&self) -> Option<BuiltinType> {
        match self.identifier {
            Identifier::Numeric(v) if self.namespace_index == 0 => BuiltinType::from_id(v),
            _ => None,
        }
    }

    pub fn as_numeric(&self) -> Option<u32> {
        match self.identifier {
            Identifier::Numeric(v) => Some(v),
            _ => None,
        }
    }
}

impl UaType for NodeId {
    fn copy_with(&self, engine: &Engine<'_>) -> Result<Self> {
        let identifier = match &self.identifier {
            Identifier::Numeric(v) => Identifier::Numeric(*v),
            Identifier::String(s) => Identifier::String(s.copy_with(engine)?),
            Identifier::Guid(g) => Identifier::Guid(*g),
            Identifier::ByteString(b) => Identifier::ByteString(b.copy_with(engine)?),
        };
        Ok(Self {
            namespace_index: self.namespace_index,
            identifier,
        })
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace_index != 0 {
            write!(f, "ns={};", self.namespace_index)?;
        }
        match &self.identifier {
            Identifier::Numeric(v) => write!(f, "i={}", v),
            Identifier::String(s) => write!(f, "s={}", s),
            Identifier::Guid(g) => write!(f, "g={}", g),
            Identifier::ByteString(b) => {
                f.write_str("b=")?;
                for byte in b.as_bytes() {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
        }
    }
}

/// Node id qualified by a namespace URI and a server index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ExpandedNodeId {
    pub node_id: NodeId,
    pub namespace_uri: UaString,
    pub server_index: u32,
}

impl ExpandedNodeId {
    pub fn new(node_id: NodeId) -> Self {
        Self {
            node_id,
            ..Self::default()
        }
    }

    pub fn is_null(&self) -> bool {
        self.node_id.is_null()
    }
}

impl UaType for ExpandedNodeId {
    fn copy_with(&self, engine: &Engine<'_>) -> Result<Self> {
        Ok(Self {
            node_id: self.node_id.copy_with(engine)?,
            namespace_uri: self.namespace_uri.copy_with(engine)?,
            server_index: self.server_index,
        })
    }
}

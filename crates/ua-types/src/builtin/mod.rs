// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Builtin (namespace-zero) types.
//!
//! # Layout
//!
//! - [`BuiltinType`]: the 25 reserved type ids and the global builtin
//!   descriptor table
//! - [`UaType`]: the uniform init/copy/destroy contract every builtin implements
//! - one module per builtin with owned memory (strings, node ids, texts,
//!   extension objects, data values, diagnostic infos)
//!
//! Scalars (`bool`, integers, floats), [`DateTime`], [`Guid`] and
//! [`StatusCode`] are fixed-size: init is zero, copy is bitwise and
//! destroy releases nothing.

use std::mem::size_of;
use std::sync::OnceLock;

use crate::engine::Engine;
use crate::error::Result;
use crate::status::StatusCode;
use crate::types::DataType;
use crate::variant::Variant;

pub mod data_value;
pub mod datetime;
pub mod diagnostic_info;
pub mod extension_object;
pub mod guid;
pub mod node_id;
pub mod string;
pub mod text;

pub use data_value::DataValue;
pub use datetime::{DateTime, DateTimeStruct};
pub use diagnostic_info::DiagnosticInfo;
pub use extension_object::{ExtensionBody, ExtensionObject, ExtensionObjectEncoding};
pub use guid::Guid;
pub use node_id::{ExpandedNodeId, Identifier, NodeId};
pub use string::{ByteString, UaString, XmlElement};
pub use text::{LocalizedText, QualifiedName};

/// Reserved namespace-zero type ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum BuiltinType {
    Boolean = 1,
    SByte = 2,
    Byte = 3,
    Int16 = 4,
    UInt16 = 5,
    Int32 = 6,
    UInt32 = 7,
    Int64 = 8,
    UInt64 = 9,
    Float = 10,
    Double = 11,
    String = 12,
    DateTime = 13,
    Guid = 14,
    ByteString = 15,
    XmlElement = 16,
    NodeId = 17,
    ExpandedNodeId = 18,
    StatusCode = 19,
    QualifiedName = 20,
    LocalizedText = 21,
    ExtensionObject = 22,
    DataValue = 23,
    Variant = 24,
    DiagnosticInfo = 25,
}

impl BuiltinType {
    pub const ALL: [BuiltinType; 25] = [
        Self::Boolean,
        Self::SByte,
        Self::Byte,
        Self::Int16,
        Self::UInt16,
        Self::Int32,
        Self::UInt32,
        Self::Int64,
        Self::UInt64,
        Self::Float,
        Self::Double,
        Self::String,
        Self::DateTime,
        Self::Guid,
        Self::ByteString,
        Self::XmlElement,
        Self::NodeId,
        Self::ExpandedNodeId,
        Self::StatusCode,
        Self::QualifiedName,
        Self::LocalizedText,
        Self::ExtensionObject,
        Self::DataValue,
        Self::Variant,
        Self::DiagnosticInfo,
    ];

    /// Look up a builtin by its numeric namespace-zero id.
    pub fn from_id(id: u32) -> Option<Self> {
        let index = usize::try_from(id).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    pub fn id(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::SByte => "SByte",
            Self::Byte => "Byte",
            Self::Int16 => "Int16",
            Self::UInt16 => "UInt16",
            Self::Int32 => "Int32",
            Self::UInt32 => "UInt32",
            Self::Int64 => "Int64",
            Self::UInt64 => "UInt64",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::String => "String",
            Self::DateTime => "DateTime",
            Self::Guid => "Guid",
            Self::ByteString => "ByteString",
            Self::XmlElement => "XmlElement",
            Self::NodeId => "NodeId",
            Self::ExpandedNodeId => "ExpandedNodeId",
            Self::StatusCode => "StatusCode",
            Self::QualifiedName => "QualifiedName",
            Self::LocalizedText => "LocalizedText",
            Self::ExtensionObject => "ExtensionObject",
            Self::DataValue => "DataValue",
            Self::Variant => "Variant",
            Self::DiagnosticInfo => "DiagnosticInfo",
        }
    }

    /// True for types without owned memory.
    pub fn is_fixed_size(self) -> bool {
        matches!(
            self,
            Self::Boolean
                | Self::SByte
                | Self::Byte
                | Self::Int16
                | Self::UInt16
                | Self::Int32
                | Self::UInt32
                | Self::Int64
                | Self::UInt64
                | Self::Float
                | Self::Double
                | Self::DateTime
                | Self::Guid
                | Self::StatusCode
        )
    }

    /// Element size used for array budgeting; the packed size for fixed types.
    pub fn mem_size(self) -> usize {
        match self {
            Self::Boolean | Self::SByte | Self::Byte => 1,
            Self::Int16 | Self::UInt16 => 2,
            Self::Int32 | Self::UInt32 | Self::Float | Self::StatusCode => 4,
            Self::Int64 | Self::UInt64 | Self::Double | Self::DateTime => 8,
            Self::Guid => 16,
            Self::String => size_of::<UaString>(),
            Self::ByteString => size_of::<ByteString>(),
            Self::XmlElement => size_of::<XmlElement>(),
            Self::NodeId => size_of::<NodeId>(),
            Self::ExpandedNodeId => size_of::<ExpandedNodeId>(),
            Self::QualifiedName => size_of::<QualifiedName>(),
            Self::LocalizedText => size_of::<LocalizedText>(),
            Self::ExtensionObject => size_of::<ExtensionObject>(),
            Self::DataValue => size_of::<DataValue>(),
            Self::Variant => size_of::<Variant>(),
            Self::DiagnosticInfo => size_of::<DiagnosticInfo>(),
        }
    }

    pub fn node_id(self) -> NodeId {
        NodeId::numeric(0, self.id())
    }

    /// Descriptor in the global builtin table.
    pub fn data_type(self) -> &'static DataType {
        &builtin_table()[usize::from(self as u8) - 1]
    }
}

impl std::fmt::Display for BuiltinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Global builtin descriptor table, indexed by `id - 1`.
pub fn builtin_table() -> &'static [DataType] {
    static TABLE: OnceLock<Vec<DataType>> = OnceLock::new();
    TABLE.get_or_init(|| {
        BuiltinType::ALL
            .iter()
            .enumerate()
            .map(|(index, kind)| DataType {
                name: kind.name().to_string(),
                type_id: kind.node_id(),
                type_index: index,
                mem_size: kind.mem_size(),
                fixed_size: kind.is_fixed_size(),
                builtin: Some(*kind),
                members: Vec::new(),
            })
            .collect()
    })
}

/// Uniform lifecycle contract of a protocol type.
///
/// `Default` is `init`. Copies are all-or-nothing: on error the partially
/// built value is dropped, and `copy_into` resets its destination to the
/// init state. `delete` consumes the value, so nothing can touch it after
/// destruction.
pub trait UaType: Default + Sized {
    /// Deep copy, admitting every owned buffer through `engine`.
    fn copy_with(&self, engine: &Engine<'_>) -> Result<Self>;

    /// Deep copy with the system allocator.
    fn copy(&self) -> Result<Self> {
        self.copy_with(&Engine::system())
    }

    /// Copy into `dst`, leaving it in the init state on failure.
    fn copy_into(&self, dst: &mut Self, engine: &Engine<'_>) -> Result<()> {
        match self.copy_with(engine) {
            Ok(copy) => {
                *dst = copy;
                Ok(())
            }
            Err(err) => {
                *dst = Self::default();
                Err(err)
            }
        }
    }

    /// Release owned members and return to the init state.
    fn destroy_members(&mut self) {
        *self = Self::default();
    }

    fn delete(self) {
        drop(self);
    }
}

macro_rules! impl_fixed_ua_type {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl UaType for $ty {
                #[inline]
                fn copy_with(&self, _engine: &Engine<'_>) -> Result<Self> {
                    Ok(*self)
                }
            }
        )+
    };
}

impl_fixed_ua_type!(bool, i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);
impl_fixed_ua_type!(DateTime, Guid, StatusCode);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for kind in BuiltinType::ALL {
            assert_eq!(BuiltinType::from_id(kind.id()), Some(kind));
        }
        assert_eq!(BuiltinType::from_id(0), None);
        assert_eq!(BuiltinType::from_id(26), None);
        assert_eq!(BuiltinType::Variant.id(), 24);
    }

    #[test]
    fn test_builtin_table() {
        let table = builtin_table();
        assert_eq!(table.len(), 25);
        let guid = BuiltinType::Guid.data_type();
        assert_eq!(guid.name(), "Guid");
        assert_eq!(guid.mem_size(), 16);
        assert!(guid.is_fixed_size());
        assert_eq!(guid.type_index(), 13);
        assert_eq!(guid.builtin(), Some(BuiltinType::Guid));
        assert!(!BuiltinType::NodeId.data_type().is_fixed_size());
        assert_eq!(BuiltinType::Double.node_id(), NodeId::numeric(0, 11));
    }

    #[test]
    fn test_scalar_copy_is_bitwise() {
        assert_eq!(42i32.copy(), Ok(42));
        assert_eq!(f64::MIN_POSITIVE.copy(), Ok(f64::MIN_POSITIVE));
        assert_eq!(true.copy(), Ok(true));
        let nan = f32::NAN.copy().map(f32::to_bits);
        assert_eq!(nan, Ok(f32::NAN.to_bits()));
    }

    #[test]
    fn test_scalar_destroy_on_zeroed_value() {
        let mut v = u64::default();
        v.destroy_members();
        assert_eq!(v, 0);
        let mut code = StatusCode::BAD_TIMEOUT;
        code.destroy_members();
        assert_eq!(code, StatusCode::GOOD);
    }
}

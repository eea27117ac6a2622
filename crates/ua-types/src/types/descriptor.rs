// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type descriptors driving the generic engine.
//!
//! A [`DataType`] records the in-memory layout of one protocol type: its
//! size, whether it is fixed-size (no owned memory anywhere inside), and the
//! ordered list of [`DataTypeMember`]s. Member types are resolved once, when
//! the owning table is built, into [`DataTypeRef`] handles.

use std::fmt;
use std::sync::Arc;

use crate::builtin::node_id::NodeId;
use crate::builtin::BuiltinType;

/// Size of an array member's length field.
pub(crate) const ARRAY_LENGTH_SIZE: usize = 4;
/// Size of an array member's data pointer slot.
pub(crate) const ARRAY_POINTER_SIZE: usize = std::mem::size_of::<usize>();

/// Resolved type of a member, array element or variant payload.
#[derive(Clone)]
pub enum DataTypeRef {
    /// Entry of the global builtin table.
    Builtin(BuiltinType),
    /// Application-defined type, shared with the table that declared it.
    Structure(Arc<DataType>),
}

impl DataTypeRef {
    /// Descriptor backing this reference.
    pub fn data_type(&self) -> &DataType {
        match self {
            Self::Builtin(kind) => kind.data_type(),
            Self::Structure(ty) => ty,
        }
    }

    pub fn name(&self) -> &str {
        self.data_type().name()
    }

    pub fn mem_size(&self) -> usize {
        self.data_type().mem_size()
    }

    pub fn is_fixed_size(&self) -> bool {
        self.data_type().is_fixed_size()
    }

    pub fn builtin(&self) -> Option<BuiltinType> {
        match self {
            Self::Builtin(kind) => Some(*kind),
            Self::Structure(_) => None,
        }
    }

    pub fn type_id(&self) -> &NodeId {
        self.data_type().type_id()
    }
}

impl From<BuiltinType> for DataTypeRef {
    fn from(kind: BuiltinType) -> Self {
        Self::Builtin(kind)
    }
}

impl From<Arc<DataType>> for DataTypeRef {
    fn from(ty: Arc<DataType>) -> Self {
        Self::Structure(ty)
    }
}

impl PartialEq for DataTypeRef {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Builtin(a), Self::Builtin(b)) => a == b,
            (Self::Structure(a), Self::Structure(b)) => same_type(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for DataTypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin(kind) => write!(f, "Builtin({:?})", kind),
            Self::Structure(ty) => write!(f, "Structure({})", ty.name),
        }
    }
}

/// Two structure descriptors denote the same type when they are the same
/// allocation, or carry the same type id and an identical layout.
pub(crate) fn same_type(a: &Arc<DataType>, b: &Arc<DataType>) -> bool {
    Arc::ptr_eq(a, b) || same_layout(a, b)
}

fn same_layout(a: &DataType, b: &DataType) -> bool {
    a.type_id == b.type_id
        && a.name == b.name
        && a.mem_size == b.mem_size
        && a.fixed_size == b.fixed_size
        && a.members.len() == b.members.len()
        && a.members.iter().zip(&b.members).all(|(x, y)| {
            x.name == y.name
                && x.padding == y.padding
                && x.is_array == y.is_array
                && x.offset == y.offset
                && x.member_type == y.member_type
        })
}

/// Layout of one member inside a structure.
#[derive(Debug, Clone)]
pub struct DataTypeMember {
    pub(crate) name: String,
    /// Scalar members: bytes of padding before the member.
    /// Array members: `padding >> 3` bytes before the length field,
    /// `padding & 7` bytes between the length field and the data pointer.
    pub(crate) padding: u8,
    pub(crate) is_array: bool,
    pub(crate) offset: usize,
    pub(crate) member_type: DataTypeRef,
}

impl DataTypeMember {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn padding(&self) -> u8 {
        self.padding
    }

    pub fn is_array(&self) -> bool {
        self.is_array
    }

    /// True if the member type lives in the builtin table.
    pub fn is_builtin(&self) -> bool {
        matches!(self.member_type, DataTypeRef::Builtin(_))
    }

    /// Byte offset of the member (of the length field for arrays).
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn member_type(&self) -> &DataTypeRef {
        &self.member_type
    }

    /// Bytes occupied by the member including its padding.
    pub(crate) fn footprint(&self) -> usize {
        if self.is_array {
            usize::from(self.padding >> 3)
                + ARRAY_LENGTH_SIZE
                + usize::from(self.padding & 0x07)
                + ARRAY_POINTER_SIZE
        } else {
            usize::from(self.padding) + self.member_type.mem_size()
        }
    }
}

/// Runtime layout metadata of a protocol type.
#[derive(Debug)]
pub struct DataType {
    pub(crate) name: String,
    pub(crate) type_id: NodeId,
    pub(crate) type_index: usize,
    pub(crate) mem_size: usize,
    pub(crate) fixed_size: bool,
    pub(crate) builtin: Option<BuiltinType>,
    pub(crate) members: Vec<DataTypeMember>,
}

impl DataType {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_id(&self) -> &NodeId {
        &self.type_id
    }

    /// Position of the type inside its table.
    pub fn type_index(&self) -> usize {
        self.type_index
    }

    /// In-memory size in bytes; the packed size for fixed-size types.
    pub fn mem_size(&self) -> usize {
        self.mem_size
    }

    pub fn is_fixed_size(&self) -> bool {
        self.fixed_size
    }

    pub fn builtin(&self) -> Option<BuiltinType> {
        self.builtin
    }

    pub fn members(&self) -> &[DataTypeMember] {
        &self.members
    }

    pub fn member(&self, name: &str) -> Option<&DataTypeMember> {
        self.members.iter().find(|m| m.name == name)
    }

    pub fn member_index(&self, name: &str) -> Option<usize> {
        self.members.iter().position(|m| m.name == name)
    }
}

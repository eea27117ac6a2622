// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type-erased values handled by the generic engine.
//!
//! A [`Value`] holds one instance of any builtin or application-defined
//! type. Structures carry their descriptor; fixed-size structures store a
//! packed little-endian block laid out at the descriptor's member offsets,
//! others store one [`Member`] per descriptor member.

use std::fmt;
use std::mem::size_of;
use std::ops::Deref;
use std::sync::Arc;

use crate::array::Array;
use crate::builtin::{
    BuiltinType, ByteString, DataValue, DateTime, DiagnosticInfo, ExpandedNodeId,
    ExtensionObject, Guid, LocalizedText, NodeId, QualifiedName, UaString, XmlElement,
};
use crate::error::{Error, Result};
use crate::status::StatusCode;
use crate::types::descriptor::same_type;
use crate::types::{DataType, DataTypeMember, DataTypeRef};
use crate::variant::Variant;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Boolean(bool),
    SByte(i8),
    Byte(u8),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Float(f32),
    Double(f64),
    String(UaString),
    DateTime(DateTime),
    Guid(Guid),
    ByteString(ByteString),
    XmlElement(XmlElement),
    NodeId(NodeId),
    ExpandedNodeId(ExpandedNodeId),
    StatusCode(StatusCode),
    QualifiedName(QualifiedName),
    LocalizedText(LocalizedText),
    ExtensionObject(ExtensionObject),
    DataValue(Box<DataValue>),
    Variant(Box<Variant>),
    DiagnosticInfo(Box<DiagnosticInfo>),
    Structure(Structure),
}

impl Value {
    /// Init state of a builtin.
    pub fn init_builtin(kind: BuiltinType) -> Self {
        match kind {
            BuiltinType::Boolean => Value::Boolean(false),
            BuiltinType::SByte => Value::SByte(0),
            BuiltinType::Byte => Value::Byte(0),
            BuiltinType::Int16 => Value::Int16(0),
            BuiltinType::UInt16 => Value::UInt16(0),
            BuiltinType::Int32 => Value::Int32(0),
            BuiltinType::UInt32 => Value::UInt32(0),
            BuiltinType::Int64 => Value::Int64(0),
            BuiltinType::UInt64 => Value::UInt64(0),
            BuiltinType::Float => Value::Float(0.0),
            BuiltinType::Double => Value::Double(0.0),
            BuiltinType::String => Value::String(UaString::default()),
            BuiltinType::DateTime => Value::DateTime(DateTime::default()),
            BuiltinType::Guid => Value::Guid(Guid::default()),
            BuiltinType::ByteString => Value::ByteString(ByteString::default()),
            BuiltinType::XmlElement => Value::XmlElement(XmlElement::default()),
            BuiltinType::NodeId => Value::NodeId(NodeId::default()),
            BuiltinType::ExpandedNodeId => Value::ExpandedNodeId(ExpandedNodeId::default()),
            BuiltinType::StatusCode => Value::StatusCode(StatusCode::default()),
            BuiltinType::QualifiedName => Value::QualifiedName(QualifiedName::default()),
            BuiltinType::LocalizedText => Value::LocalizedText(LocalizedText::default()),
            BuiltinType::ExtensionObject => Value::ExtensionObject(ExtensionObject::default()),
            BuiltinType::DataValue => Value::DataValue(Box::default()),
            BuiltinType::Variant => Value::Variant(Box::default()),
            BuiltinType::DiagnosticInfo => Value::DiagnosticInfo(Box::default()),
        }
    }

    fn kind(&self) -> std::result::Result<BuiltinType, &Arc<DataType>> {
        let kind = match self {
            Value::Boolean(_) => BuiltinType::Boolean,
            Value::SByte(_) => BuiltinType::SByte,
            Value::Byte(_) => BuiltinType::Byte,
            Value::Int16(_) => BuiltinType::Int16,
            Value::UInt16(_) => BuiltinType::UInt16,
            Value::Int32(_) => BuiltinType::Int32,
            Value::UInt32(_) => BuiltinType::UInt32,
            Value::Int64(_) => BuiltinType::Int64,
            Value::UInt64(_) => BuiltinType::UInt64,
            Value::Float(_) => BuiltinType::Float,
            Value::Double(_) => BuiltinType::Double,
            Value::String(_) => BuiltinType::String,
            Value::DateTime(_) => BuiltinType::DateTime,
            Value::Guid(_) => BuiltinType::Guid,
            Value::ByteString(_) => BuiltinType::ByteString,
            Value::XmlElement(_) => BuiltinType::XmlElement,
            Value::NodeId(_) => BuiltinType::NodeId,
            Value::ExpandedNodeId(_) => BuiltinType::ExpandedNodeId,
            Value::StatusCode(_) => BuiltinType::StatusCode,
            Value::QualifiedName(_) => BuiltinType::QualifiedName,
            Value::LocalizedText(_) => BuiltinType::LocalizedText,
            Value::ExtensionObject(_) => BuiltinType::ExtensionObject,
            Value::DataValue(_) => BuiltinType::DataValue,
            Value::Variant(_) => BuiltinType::Variant,
            Value::DiagnosticInfo(_) => BuiltinType::DiagnosticInfo,
            Value::Structure(s) => return Err(&s.data_type),
        };
        Ok(kind)
    }

    /// Builtin kind of the value, `None` for structures.
    pub fn builtin_type(&self) -> Option<BuiltinType> {
        self.kind().ok()
    }

    /// Descriptor reference matching this value.
    pub fn data_type_ref(&self) -> DataTypeRef {
        match self.kind() {
            Ok(kind) => DataTypeRef::Builtin(kind),
            Err(ty) => DataTypeRef::Structure(Arc::clone(ty)),
        }
    }

    pub fn type_name(&self) -> &str {
        match self.kind() {
            Ok(kind) => kind.name(),
            Err(ty) => ty.name(),
        }
    }

    /// True if the value is an instance of `ty`.
    pub fn matches(&self, ty: &DataTypeRef) -> bool {
        match (self, ty) {
            (Value::Structure(s), DataTypeRef::Structure(t)) => same_type(&s.data_type, t),
            (Value::Structure(_), DataTypeRef::Builtin(_)) => false,
            (v, DataTypeRef::Builtin(kind)) => v.builtin_type() == Some(*kind),
            (_, DataTypeRef::Structure(_)) => false,
        }
    }

    pub(crate) fn check(&self, ty: &DataTypeRef) -> Result<()> {
        if self.matches(ty) {
            Ok(())
        } else {
            Err(Error::mismatch(ty.name(), self.type_name()))
        }
    }

    /// Fixed-size payload of this value, if any.
    pub fn as_scalar<T: FixedScalar>(&self) -> Option<T> {
        T::from_value(self)
    }

    pub fn as_structure(&self) -> Option<&Structure> {
        match self {
            Value::Structure(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_structure_mut(&mut self) -> Option<&mut Structure> {
        match self {
            Value::Structure(s) => Some(s),
            _ => None,
        }
    }
}

macro_rules! value_from {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )+
    };
}

value_from! {
    bool => Boolean,
    i8 => SByte,
    u8 => Byte,
    i16 => Int16,
    u16 => UInt16,
    i32 => Int32,
    u32 => UInt32,
    i64 => Int64,
    u64 => UInt64,
    f32 => Float,
    f64 => Double,
    UaString => String,
    DateTime => DateTime,
    Guid => Guid,
    ByteString => ByteString,
    XmlElement => XmlElement,
    NodeId => NodeId,
    ExpandedNodeId => ExpandedNodeId,
    StatusCode => StatusCode,
    QualifiedName => QualifiedName,
    LocalizedText => LocalizedText,
    ExtensionObject => ExtensionObject,
    Structure => Structure,
}

impl From<DataValue> for Value {
    fn from(v: DataValue) -> Self {
        Value::DataValue(Box::new(v))
    }
}

impl From<Variant> for Value {
    fn from(v: Variant) -> Self {
        Value::Variant(Box::new(v))
    }
}

impl From<DiagnosticInfo> for Value {
    fn from(v: DiagnosticInfo) -> Self {
        Value::DiagnosticInfo(Box::new(v))
    }
}

/// Fixed-size builtin with a packed little-endian representation.
pub trait FixedScalar: Copy + Into<Value> {
    const KIND: BuiltinType;
    const SIZE: usize;

    fn write_le(self, out: &mut [u8]);
    fn read_le(bytes: &[u8]) -> Self;
    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! fixed_numeric {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl FixedScalar for $ty {
                const KIND: BuiltinType = BuiltinType::$variant;
                const SIZE: usize = size_of::<$ty>();

                #[inline]
                fn write_le(self, out: &mut [u8]) {
                    out[..Self::SIZE].copy_from_slice(&self.to_le_bytes());
                }

                #[inline]
                fn read_le(bytes: &[u8]) -> Self {
                    let mut buf = [0u8; size_of::<$ty>()];
                    buf.copy_from_slice(&bytes[..Self::SIZE]);
                    <$ty>::from_le_bytes(buf)
                }

                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => Some(*v),
                        _ => None,
                    }
                }
            }
        )+
    };
}

fixed_numeric! {
    i8 => SByte,
    u8 => Byte,
    i16 => Int16,
    u16 => UInt16,
    i32 => Int32,
    u32 => UInt32,
    i64 => Int64,
    u64 => UInt64,
    f32 => Float,
    f64 => Double,
}

impl FixedScalar for bool {
    const KIND: BuiltinType = BuiltinType::Boolean;
    const SIZE: usize = 1;

    fn write_le(self, out: &mut [u8]) {
        out[0] = u8::from(self);
    }

    fn read_le(bytes: &[u8]) -> Self {
        bytes[0] != 0
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Boolean(v) => Some(*v),
            _ => None,
        }
    }
}

impl FixedScalar for DateTime {
    const KIND: BuiltinType = BuiltinType::DateTime;
    const SIZE: usize = 8;

    fn write_le(self, out: &mut [u8]) {
        self.0.write_le(out);
    }

    fn read_le(bytes: &[u8]) -> Self {
        DateTime(i64::read_le(bytes))
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::DateTime(v) => Some(*v),
            _ => None,
        }
    }
}

impl FixedScalar for StatusCode {
    const KIND: BuiltinType = BuiltinType::StatusCode;
    const SIZE: usize = 4;

    fn write_le(self, out: &mut [u8]) {
        self.0.write_le(out);
    }

    fn read_le(bytes: &[u8]) -> Self {
        StatusCode(u32::read_le(bytes))
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::StatusCode(v) => Some(*v),
            _ => None,
        }
    }
}

impl FixedScalar for Guid {
    const KIND: BuiltinType = BuiltinType::Guid;
    const SIZE: usize = Guid::SIZE;

    fn write_le(self, out: &mut [u8]) {
        out[..Self::SIZE].copy_from_slice(&self.to_bytes());
    }

    fn read_le(bytes: &[u8]) -> Self {
        let mut buf = [0u8; Guid::SIZE];
        buf.copy_from_slice(&bytes[..Self::SIZE]);
        Guid::from_bytes(buf)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Guid(v) => Some(*v),
            _ => None,
        }
    }
}

/// Write a fixed-size value into its packed slot. `out` must be exactly
/// `value`'s packed size.
pub(crate) fn pack_into(value: &Value, out: &mut [u8]) -> Result<()> {
    match value {
        Value::Boolean(v) => v.write_le(out),
        Value::SByte(v) => v.write_le(out),
        Value::Byte(v) => v.write_le(out),
        Value::Int16(v) => v.write_le(out),
        Value::UInt16(v) => v.write_le(out),
        Value::Int32(v) => v.write_le(out),
        Value::UInt32(v) => v.write_le(out),
        Value::Int64(v) => v.write_le(out),
        Value::UInt64(v) => v.write_le(out),
        Value::Float(v) => v.write_le(out),
        Value::Double(v) => v.write_le(out),
        Value::DateTime(v) => v.write_le(out),
        Value::Guid(v) => v.write_le(out),
        Value::StatusCode(v) => v.write_le(out),
        Value::Structure(Structure {
            data_type,
            body: StructureBody::Packed(bytes),
        }) => {
            if bytes.len() != out.len() {
                return Err(Error::Internal(format!(
                    "packed {} is {} bytes, slot holds {}",
                    data_type.name(),
                    bytes.len(),
                    out.len()
                )));
            }
            out.copy_from_slice(bytes)
        }
        other => {
            return Err(Error::Internal(format!(
                "{} has no packed representation",
                other.type_name()
            )))
        }
    }
    Ok(())
}

/// Packed bytes of a fixed-size value; any other value is handed back.
pub(crate) fn into_packed(value: Value) -> std::result::Result<Box<[u8]>, Value> {
    fn packed<T: FixedScalar>(v: T) -> Box<[u8]> {
        let mut out = vec![0u8; T::SIZE].into_boxed_slice();
        v.write_le(&mut out);
        out
    }

    Ok(match value {
        Value::Boolean(v) => packed(v),
        Value::SByte(v) => packed(v),
        Value::Byte(v) => packed(v),
        Value::Int16(v) => packed(v),
        Value::UInt16(v) => packed(v),
        Value::Int32(v) => packed(v),
        Value::UInt32(v) => packed(v),
        Value::Int64(v) => packed(v),
        Value::UInt64(v) => packed(v),
        Value::Float(v) => packed(v),
        Value::Double(v) => packed(v),
        Value::DateTime(v) => packed(v),
        Value::Guid(v) => packed(v),
        Value::StatusCode(v) => packed(v),
        Value::Structure(Structure {
            body: StructureBody::Packed(bytes),
            ..
        }) => bytes,
        other => return Err(other),
    })
}

/// Read a fixed-size value of type `ty` from its packed slot.
pub(crate) fn unpack(ty: &DataTypeRef, bytes: &[u8]) -> Value {
    match ty {
        DataTypeRef::Builtin(kind) => match kind {
            BuiltinType::Boolean => Value::Boolean(bool::read_le(bytes)),
            BuiltinType::SByte => Value::SByte(i8::read_le(bytes)),
            BuiltinType::Byte => Value::Byte(u8::read_le(bytes)),
            BuiltinType::Int16 => Value::Int16(i16::read_le(bytes)),
            BuiltinType::UInt16 => Value::UInt16(u16::read_le(bytes)),
            BuiltinType::Int32 => Value::Int32(i32::read_le(bytes)),
            BuiltinType::UInt32 => Value::UInt32(u32::read_le(bytes)),
            BuiltinType::Int64 => Value::Int64(i64::read_le(bytes)),
            BuiltinType::UInt64 => Value::UInt64(u64::read_le(bytes)),
            BuiltinType::Float => Value::Float(f32::read_le(bytes)),
            BuiltinType::Double => Value::Double(f64::read_le(bytes)),
            BuiltinType::DateTime => Value::DateTime(DateTime::read_le(bytes)),
            BuiltinType::Guid => Value::Guid(Guid::read_le(bytes)),
            BuiltinType::StatusCode => Value::StatusCode(StatusCode::read_le(bytes)),
            other => Value::init_builtin(*other),
        },
        DataTypeRef::Structure(t) => Value::Structure(Structure {
            data_type: Arc::clone(t),
            body: StructureBody::Packed(bytes[..t.mem_size()].into()),
        }),
    }
}

/// Instance of an application-defined type.
#[derive(Clone)]
pub struct Structure {
    pub(crate) data_type: Arc<DataType>,
    pub(crate) body: StructureBody,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum StructureBody {
    /// Fixed-size types: `mem_size` bytes, members at their offsets.
    Packed(Box<[u8]>),
    /// One entry per descriptor member, in order.
    Members(Vec<Member>),
}

/// Slot of a non-fixed-size structure.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Scalar(Value),
    Array(Array),
}

impl Structure {
    pub fn data_type(&self) -> &Arc<DataType> {
        &self.data_type
    }

    pub fn is_packed(&self) -> bool {
        matches!(self.body, StructureBody::Packed(_))
    }

    /// Packed block of a fixed-size structure.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match &self.body {
            StructureBody::Packed(bytes) => Some(bytes),
            StructureBody::Members(_) => None,
        }
    }

    fn lookup(&self, name: &str) -> Result<(usize, &DataTypeMember)> {
        let index = self.data_type.member_index(name).ok_or_else(|| {
            Error::Internal(format!("{} has no member {}", self.data_type.name(), name))
        })?;
        Ok((index, &self.data_type.members()[index]))
    }

    /// Scalar member by name.
    pub fn field(&self, name: &str) -> Option<ElementRef<'_>> {
        let (index, member) = self.lookup(name).ok()?;
        if member.is_array() {
            return None;
        }
        match &self.body {
            StructureBody::Packed(bytes) => {
                let end = member.offset() + member.member_type().mem_size();
                Some(ElementRef::Owned(unpack(
                    member.member_type(),
                    &bytes[member.offset()..end],
                )))
            }
            StructureBody::Members(members) => match members.get(index)? {
                Member::Scalar(v) => Some(ElementRef::Borrowed(v)),
                Member::Array(_) => None,
            },
        }
    }

    /// Array member by name.
    pub fn array(&self, name: &str) -> Option<&Array> {
        let (index, _) = self.lookup(name).ok()?;
        match &self.body {
            StructureBody::Members(members) => match members.get(index)? {
                Member::Array(a) => Some(a),
                Member::Scalar(_) => None,
            },
            StructureBody::Packed(_) => None,
        }
    }

    /// Mutable access to a non-packed scalar member.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut Value> {
        let (index, _) = self.lookup(name).ok()?;
        match &mut self.body {
            StructureBody::Members(members) => match members.get_mut(index)? {
                Member::Scalar(v) => Some(v),
                Member::Array(_) => None,
            },
            StructureBody::Packed(_) => None,
        }
    }

    /// Replace a scalar member, moving `value` in. The previous value is dropped.
    pub fn set_field(&mut self, name: &str, value: Value) -> Result<()> {
        let (index, member) = self.lookup(name)?;
        if member.is_array() {
            return Err(Error::mismatch(
                format!("{}[]", member.member_type().name()),
                value.type_name(),
            ));
        }
        value.check(member.member_type())?;
        let start = member.offset();
        let end = start + member.member_type().mem_size();
        match &mut self.body {
            StructureBody::Packed(bytes) => pack_into(&value, &mut bytes[start..end]),
            StructureBody::Members(members) => {
                members[index] = Member::Scalar(value);
                Ok(())
            }
        }
    }

    /// Replace an array member, moving `array` in.
    pub fn set_array(&mut self, name: &str, array: Array) -> Result<()> {
        let (index, member) = self.lookup(name)?;
        if !member.is_array() || array.element_type() != member.member_type() {
            return Err(Error::mismatch(
                member.member_type().name(),
                format!("{}[]", array.element_type().name()),
            ));
        }
        match &mut self.body {
            StructureBody::Members(members) => {
                members[index] = Member::Array(array);
                Ok(())
            }
            StructureBody::Packed(_) => Err(Error::Internal(format!(
                "{} is fixed-size but declares an array",
                self.data_type.name()
            ))),
        }
    }
}

impl PartialEq for Structure {
    fn eq(&self, other: &Self) -> bool {
        same_type(&self.data_type, &other.data_type) && self.body == other.body
    }
}

impl fmt::Debug for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct(self.data_type.name());
        for member in self.data_type.members() {
            if member.is_array() {
                s.field(member.name(), &self.array(member.name()));
            } else {
                s.field(member.name(), &self.field(member.name()).as_deref());
            }
        }
        s.finish()
    }
}

/// Element handed out by structures, arrays and variants: unpacked from a
/// packed block, or borrowed from member storage.
#[derive(Debug)]
pub enum ElementRef<'a> {
    Owned(Value),
    Borrowed(&'a Value),
}

impl ElementRef<'_> {
    pub fn into_owned(self) -> Value {
        match self {
            ElementRef::Owned(v) => v,
            ElementRef::Borrowed(v) => v.clone(),
        }
    }
}

impl Deref for ElementRef<'_> {
    type Target = Value;

    fn deref(&self) -> &Value {
        match self {
            ElementRef::Owned(v) => v,
            ElementRef::Borrowed(v) => v,
        }
    }
}

impl PartialEq<Value> for ElementRef<'_> {
    fn eq(&self, other: &Value) -> bool {
        **self == *other
    }
}

// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Generic init / copy / destroy driven by type descriptors.
//!
//! [`Engine`] is the allocation context: every owned buffer a copy creates
//! is admitted by its [`Allocator`] first, and array sizes are checked
//! against its [`EngineConfig`].
//!
//! # Semantics
//!
//! - **init**: builtins take their zero/null state; fixed-size structures
//!   are one zeroed block; other structures init every member and set every
//!   array member absent.
//! - **copy**: fixed-size structures are one bulk byte duplication; other
//!   structures are walked member by member, recursing into nested types and
//!   delegating array members to the array engine. The first failing member
//!   aborts the copy: everything copied so far is dropped and that error is
//!   returned.
//! - **destroy**: releases owned memory and leaves the init state behind.
//!   Fixed-size structures are zero-filled in place.
//!
//! ```
//! use ua_types::{BuiltinType, Engine, MemberDecl, TypeTableBuilder, Value};
//!
//! let mut builder = TypeTableBuilder::new(1);
//! builder.add_structure(
//!     "Sample",
//!     3001,
//!     vec![
//!         MemberDecl::builtin("id", BuiltinType::UInt32),
//!         MemberDecl::builtin("tags", BuiltinType::String).array(),
//!     ],
//! )?;
//! let table = builder.build()?;
//! let ty = table.type_ref("Sample").unwrap();
//!
//! let engine = Engine::system();
//! let mut sample = engine.init(&ty);
//! sample.as_structure_mut().unwrap().set_field("id", Value::UInt32(7))?;
//! let copy = engine.copy(&sample, &ty)?;
//! assert_eq!(copy, sample);
//! # Ok::<(), ua_types::Error>(())
//! ```

use std::fmt;
use std::mem::size_of;
use std::sync::Arc;

use crate::builtin::UaType;
use crate::config::{self, EngineConfig};
use crate::error::{Error, Result};
use crate::memory::{Allocator, SystemAllocator};
use crate::types::{DataType, DataTypeRef};
use crate::value::{Member, Structure, StructureBody, Value};

static SYSTEM_ALLOCATOR: SystemAllocator = SystemAllocator;

/// Allocation context and limits for engine operations.
#[derive(Clone, Copy)]
pub struct Engine<'a> {
    alloc: &'a dyn Allocator,
    config: EngineConfig,
}

impl Engine<'static> {
    /// System allocator with the process-wide configuration.
    pub fn system() -> Self {
        Self {
            alloc: &SYSTEM_ALLOCATOR,
            config: *config::global(),
        }
    }
}

impl<'a> Engine<'a> {
    pub fn with_allocator(alloc: &'a dyn Allocator) -> Self {
        Self {
            alloc,
            config: *config::global(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn allocator(&self) -> &'a dyn Allocator {
        self.alloc
    }

    // ------------------------------------------------------------------
    // Buffer helpers
    // ------------------------------------------------------------------

    #[inline]
    pub(crate) fn admit(&self, bytes: usize) -> Result<()> {
        if bytes == 0 {
            return Ok(());
        }
        self.alloc.admit(bytes)
    }

    /// Exclusive copy of `src`.
    pub(crate) fn dup_bytes(&self, src: &[u8]) -> Result<Box<[u8]>> {
        self.admit(src.len())?;
        let mut buf = Vec::new();
        buf.try_reserve_exact(src.len())?;
        buf.extend_from_slice(src);
        Ok(buf.into_boxed_slice())
    }

    pub(crate) fn alloc_zeroed(&self, len: usize) -> Result<Box<[u8]>> {
        self.admit(len)?;
        let mut buf = Vec::new();
        buf.try_reserve_exact(len)?;
        buf.resize(len, 0);
        Ok(buf.into_boxed_slice())
    }

    /// Empty vector with room for exactly `count` elements.
    pub(crate) fn alloc_vec<T>(&self, count: usize) -> Result<Vec<T>> {
        let bytes = count
            .checked_mul(size_of::<T>())
            .ok_or(Error::oom(usize::MAX))?;
        self.admit(bytes)?;
        let mut v = Vec::new();
        v.try_reserve_exact(count)?;
        Ok(v)
    }

    pub(crate) fn alloc_box<T>(&self, value: T) -> Result<Box<T>> {
        self.admit(size_of::<T>())?;
        Ok(Box::new(value))
    }

    // ------------------------------------------------------------------
    // Generic lifecycle
    // ------------------------------------------------------------------

    /// Init state of `ty`.
    pub fn init(&self, ty: &DataTypeRef) -> Value {
        match ty {
            DataTypeRef::Builtin(kind) => Value::init_builtin(*kind),
            DataTypeRef::Structure(t) => Value::Structure(self.init_structure(t)),
        }
    }

    /// Allocate and init a fresh instance of `ty`.
    pub fn new_value(&self, ty: &DataTypeRef) -> Result<Value> {
        self.admit(ty.mem_size())?;
        Ok(self.init(ty))
    }

    fn init_structure(&self, ty: &Arc<DataType>) -> Structure {
        let body = if ty.is_fixed_size() {
            StructureBody::Packed(vec![0u8; ty.mem_size()].into_boxed_slice())
        } else {
            StructureBody::Members(
                ty.members()
                    .iter()
                    .map(|m| {
                        if m.is_array() {
                            Member::Array(crate::array::Array::absent(m.member_type().clone()))
                        } else {
                            Member::Scalar(self.init(m.member_type()))
                        }
                    })
                    .collect(),
            )
        };
        Structure {
            data_type: Arc::clone(ty),
            body,
        }
    }

    /// Deep copy of `src`, which must be an instance of `ty`.
    pub fn copy(&self, src: &Value, ty: &DataTypeRef) -> Result<Value> {
        src.check(ty)?;
        self.copy_value(src)
    }

    /// Copy `src` into `dst`. On failure `dst` is left in the init state of `ty`.
    pub fn copy_into(&self, src: &Value, dst: &mut Value, ty: &DataTypeRef) -> Result<()> {
        match self.copy(src, ty) {
            Ok(copy) => {
                *dst = copy;
                Ok(())
            }
            Err(err) => {
                log::debug!("[engine] copy of {} failed, destination reset: {}", ty.name(), err);
                *dst = self.init(ty);
                Err(err)
            }
        }
    }

    /// Deep copy of a self-describing value.
    pub fn copy_value(&self, src: &Value) -> Result<Value> {
        let copy = match src {
            Value::Boolean(v) => Value::Boolean(*v),
            Value::SByte(v) => Value::SByte(*v),
            Value::Byte(v) => Value::Byte(*v),
            Value::Int16(v) => Value::Int16(*v),
            Value::UInt16(v) => Value::UInt16(*v),
            Value::Int32(v) => Value::Int32(*v),
            Value::UInt32(v) => Value::UInt32(*v),
            Value::Int64(v) => Value::Int64(*v),
            Value::UInt64(v) => Value::UInt64(*v),
            Value::Float(v) => Value::Float(*v),
            Value::Double(v) => Value::Double(*v),
            Value::DateTime(v) => Value::DateTime(*v),
            Value::Guid(v) => Value::Guid(*v),
            Value::StatusCode(v) => Value::StatusCode(*v),
            Value::String(v) => Value::String(v.copy_with(self)?),
            Value::ByteString(v) => Value::ByteString(v.copy_with(self)?),
            Value::XmlElement(v) => Value::XmlElement(v.copy_with(self)?),
            Value::NodeId(v) => Value::NodeId(v.copy_with(self)?),
            Value::ExpandedNodeId(v) => Value::ExpandedNodeId(v.copy_with(self)?),
            Value::QualifiedName(v) => Value::QualifiedName(v.copy_with(self)?),
            Value::LocalizedText(v) => Value::LocalizedText(v.copy_with(self)?),
            Value::ExtensionObject(v) => Value::ExtensionObject(v.copy_with(self)?),
            Value::DataValue(v) => Value::DataValue(self.alloc_box(v.copy_with(self)?)?),
            Value::Variant(v) => Value::Variant(self.alloc_box(v.copy_with(self)?)?),
            Value::DiagnosticInfo(v) => {
                Value::DiagnosticInfo(self.alloc_box(v.copy_with(self)?)?)
            }
            Value::Structure(s) => Value::Structure(self.copy_structure(s)?),
        };
        Ok(copy)
    }

    fn copy_structure(&self, src: &Structure) -> Result<Structure> {
        let ty = &src.data_type;
        let body = match &src.body {
            StructureBody::Packed(bytes) => StructureBody::Packed(self.dup_bytes(bytes)?),
            StructureBody::Members(members) => {
                if members.len() != ty.members().len() {
                    return Err(Error::Internal(format!(
                        "{} holds {} members, descriptor declares {}",
                        ty.name(),
                        members.len(),
                        ty.members().len()
                    )));
                }
                let mut out = self.alloc_vec::<Member>(members.len())?;
                for (decl, member) in ty.members().iter().zip(members) {
                    let copied = match member {
                        Member::Scalar(v) => self.copy(v, decl.member_type()).map(Member::Scalar),
                        Member::Array(a) => self.copy_array(a).map(Member::Array),
                    };
                    match copied {
                        Ok(m) => out.push(m),
                        Err(err) => {
                            log::debug!(
                                "[engine] {}.{} failed to copy, rolling back {} member(s)",
                                ty.name(),
                                decl.name(),
                                out.len()
                            );
                            return Err(err);
                        }
                    }
                }
                StructureBody::Members(out)
            }
        };
        Ok(Structure {
            data_type: Arc::clone(ty),
            body,
        })
    }

    /// Release everything `value` owns and leave it in the init state of `ty`.
    pub fn destroy_members(&self, value: &mut Value, ty: &DataTypeRef) {
        if let Value::Structure(Structure {
            data_type,
            body: StructureBody::Packed(bytes),
        }) = value
        {
            if let DataTypeRef::Structure(t) = ty {
                if crate::types::descriptor::same_type(data_type, t) {
                    bytes.fill(0);
                    return;
                }
            }
        }
        *value = self.init(ty);
    }

    /// Destroy and release `value`.
    pub fn delete(&self, value: Value) {
        drop(value);
    }
}

impl Default for Engine<'static> {
    fn default() -> Self {
        Self::system()
    }
}

impl fmt::Debug for Engine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

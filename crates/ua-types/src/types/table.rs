// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Application type tables.
//!
//! A [`TypeTable`] holds the structure descriptors of one namespace. It is
//! produced once by [`TypeTableBuilder`] and immutable afterwards; member
//! types are resolved to [`DataTypeRef`] handles while building, so a
//! nested member points at its descriptor directly instead of at a table
//! position.

use std::collections::HashMap;
use std::sync::Arc;

use crate::builtin::{BuiltinType, NodeId};
use crate::error::{Error, Result};
use crate::types::descriptor::{DataType, DataTypeMember, DataTypeRef};

/// Where a declared member takes its type from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum MemberSource {
    Builtin(BuiltinType),
    Named(String),
    Index(usize),
}

/// Declaration of one structure member, resolved by [`TypeTableBuilder`].
#[derive(Debug, Clone)]
pub struct MemberDecl {
    name: String,
    source: MemberSource,
    is_array: bool,
    padding: u8,
}

impl MemberDecl {
    /// Member of a builtin type.
    pub fn builtin(name: impl Into<String>, kind: BuiltinType) -> Self {
        Self::with_source(name, MemberSource::Builtin(kind))
    }

    /// Member of a structure declared earlier in the same table.
    pub fn nested(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::with_source(name, MemberSource::Named(type_name.into()))
    }

    /// Member of the structure at `index` in the same table.
    pub fn table_index(name: impl Into<String>, index: usize) -> Self {
        Self::with_source(name, MemberSource::Index(index))
    }

    fn with_source(name: impl Into<String>, source: MemberSource) -> Self {
        Self {
            name: name.into(),
            source,
            is_array: false,
            padding: 0,
        }
    }

    /// Turn the member into an array of its type.
    #[must_use]
    pub fn array(mut self) -> Self {
        self.is_array = true;
        self
    }

    /// Layout padding; see [`DataTypeMember::padding`].
    #[must_use]
    pub fn padding(mut self, padding: u8) -> Self {
        self.padding = padding;
        self
    }
}

/// Immutable set of structure descriptors for one namespace.
#[derive(Debug, Clone)]
pub struct TypeTable {
    namespace_index: u16,
    types: Vec<Arc<DataType>>,
    by_name: HashMap<String, usize>,
}

impl TypeTable {
    pub fn namespace_index(&self) -> u16 {
        self.namespace_index
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Arc<DataType>> {
        self.types.get(index)
    }

    pub fn by_name(&self, name: &str) -> Option<&Arc<DataType>> {
        self.by_name.get(name).and_then(|&i| self.types.get(i))
    }

    /// Handle to the structure called `name`.
    pub fn type_ref(&self, name: &str) -> Option<DataTypeRef> {
        self.by_name(name).map(|t| DataTypeRef::Structure(Arc::clone(t)))
    }

    /// Descriptor whose type id is `id`.
    pub fn by_node_id(&self, id: &NodeId) -> Option<&Arc<DataType>> {
        if id.namespace_index != self.namespace_index {
            return None;
        }
        self.types.iter().find(|t| t.type_id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<DataType>> {
        self.types.iter()
    }
}

/// Builds a [`TypeTable`], computing member offsets, sizes and the
/// fixed-size flag of each structure.
///
/// Members can only refer to structures added before them, so the table is
/// built bottom-up and contains no cycles.
#[derive(Debug)]
pub struct TypeTableBuilder {
    namespace_index: u16,
    types: Vec<Arc<DataType>>,
    by_name: HashMap<String, usize>,
}

impl TypeTableBuilder {
    pub fn new(namespace_index: u16) -> Self {
        Self {
            namespace_index,
            types: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Declare a structure with type id `ns=<namespace>;i=<numeric_id>`.
    pub fn add_structure(
        &mut self,
        name: impl Into<String>,
        numeric_id: u32,
        members: Vec<MemberDecl>,
    ) -> Result<&mut Self> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(Error::Internal(format!("type {} declared twice", name)));
        }
        let type_id = NodeId::numeric(self.namespace_index, numeric_id);
        if self.types.iter().any(|t| t.type_id() == &type_id) {
            return Err(Error::Internal(format!(
                "type id {} of {} already in use",
                type_id, name
            )));
        }

        let mut cursor = 0usize;
        let mut fixed_size = true;
        let mut resolved = Vec::with_capacity(members.len());
        for decl in members {
            if resolved.iter().any(|m: &DataTypeMember| m.name == decl.name) {
                return Err(Error::Internal(format!(
                    "{}.{} declared twice",
                    name, decl.name
                )));
            }
            let member_type = self.resolve(&name, &decl)?;
            let offset = if decl.is_array {
                cursor + usize::from(decl.padding >> 3)
            } else {
                cursor + usize::from(decl.padding)
            };
            fixed_size &= !decl.is_array && member_type.is_fixed_size();
            let member = DataTypeMember {
                name: decl.name,
                padding: decl.padding,
                is_array: decl.is_array,
                offset,
                member_type,
            };
            cursor += member.footprint();
            resolved.push(member);
        }

        let type_index = self.types.len();
        log::debug!(
            "[types] ns={} #{} {}: {} members, {} bytes, fixed={}",
            self.namespace_index,
            type_index,
            name,
            resolved.len(),
            cursor,
            fixed_size
        );
        self.by_name.insert(name.clone(), type_index);
        self.types.push(Arc::new(DataType {
            name,
            type_id,
            type_index,
            mem_size: cursor,
            fixed_size,
            builtin: None,
            members: resolved,
        }));
        Ok(self)
    }

    fn resolve(&self, owner: &str, decl: &MemberDecl) -> Result<DataTypeRef> {
        let found = match &decl.source {
            MemberSource::Builtin(kind) => return Ok(DataTypeRef::Builtin(*kind)),
            MemberSource::Named(type_name) => {
                self.by_name.get(type_name).and_then(|&i| self.types.get(i))
            }
            MemberSource::Index(index) => self.types.get(*index),
        };
        found
            .map(|t| DataTypeRef::Structure(Arc::clone(t)))
            .ok_or_else(|| {
                Error::Internal(format!(
                    "{}.{} refers to undeclared type {:?}",
                    owner, decl.name, decl.source
                ))
            })
    }

    pub fn build(self) -> Result<TypeTable> {
        if self.types.is_empty() {
            log::warn!("[types] ns={} table is empty", self.namespace_index);
        }
        Ok(TypeTable {
            namespace_index: self.namespace_index,
            types: self.types,
            by_name: self.by_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::descriptor::{ARRAY_LENGTH_SIZE, ARRAY_POINTER_SIZE};

    fn sample() -> TypeTable {
        let mut b = TypeTableBuilder::new(2);
        b.add_structure(
            "Range",
            100,
            vec![
                MemberDecl::builtin("low", BuiltinType::Double),
                MemberDecl::builtin("high", BuiltinType::Double),
            ],
        )
        .unwrap()
        .add_structure(
            "Reading",
            101,
            vec![
                MemberDecl::builtin("flags", BuiltinType::Byte),
                MemberDecl::nested("range", "Range").padding(7),
                MemberDecl::builtin("samples", BuiltinType::Int32).array(),
            ],
        )
        .unwrap();
        b.build().unwrap()
    }

    #[test]
    fn test_layout() {
        let t = sample();
        let range = t.by_name("Range").unwrap();
        assert!(range.is_fixed_size());
        assert_eq!(range.mem_size(), 16);
        assert_eq!(range.member("high").unwrap().offset(), 8);

        let reading = t.by_name("Reading").unwrap();
        assert!(!reading.is_fixed_size());
        assert_eq!(reading.member("range").unwrap().offset(), 8);
        assert_eq!(reading.member("samples").unwrap().offset(), 24);
        assert_eq!(
            reading.mem_size(),
            24 + ARRAY_LENGTH_SIZE + ARRAY_POINTER_SIZE
        );
        assert_eq!(reading.type_index(), 1);
    }

    #[test]
    fn test_nested_member_is_handle() {
        let t = sample();
        let reading = t.by_name("Reading").unwrap();
        match reading.member("range").unwrap().member_type() {
            DataTypeRef::Structure(ty) => assert!(Arc::ptr_eq(ty, t.get(0).unwrap())),
            other => panic!("unexpected member type {:?}", other),
        }
    }

    #[test]
    fn test_fixed_size_is_transitive() {
        let mut b = TypeTableBuilder::new(1);
        b.add_structure("Named", 1, vec![MemberDecl::builtin("n", BuiltinType::String)])
            .unwrap()
            .add_structure("Outer", 2, vec![MemberDecl::table_index("inner", 0)])
            .unwrap();
        let t = b.build().unwrap();
        assert!(!t.by_name("Outer").unwrap().is_fixed_size());
    }

    #[test]
    fn test_lookup_by_node_id() {
        let t = sample();
        let id = NodeId::numeric(2, 101);
        assert_eq!(t.by_node_id(&id).unwrap().name(), "Reading");
        assert!(t.by_node_id(&NodeId::numeric(1, 101)).is_none());
        assert_eq!(t.namespace_index(), 2);
        assert_eq!(t.iter().count(), 2);
    }

    #[test]
    fn test_rejects_bad_declarations() {
        let mut b = TypeTableBuilder::new(1);
        assert!(b
            .add_structure("A", 1, vec![MemberDecl::nested("x", "Missing")])
            .is_err());
        assert!(b
            .add_structure("B", 2, vec![MemberDecl::table_index("x", 5)])
            .is_err());
        b.add_structure("C", 3, vec![]).unwrap();
        assert!(b.add_structure("C", 4, vec![]).is_err());
        assert!(b.add_structure("D", 3, vec![]).is_err());
        assert!(b
            .add_structure(
                "E",
                5,
                vec![
                    MemberDecl::builtin("x", BuiltinType::Byte),
                    MemberDecl::builtin("x", BuiltinType::Byte)
                ]
            )
            .is_err());
        assert_eq!(b.build().unwrap().len(), 1);
    }
}

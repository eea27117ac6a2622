// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Namespace-indexed registry of type tables.
//!
//! Decoders and the address space resolve a data-type [`NodeId`] to the
//! descriptor that drives the engine. Namespace 0 ids `1..=25` always
//! resolve to builtins; every other namespace is served by the table
//! registered for it.

use std::sync::Arc;

use dashmap::DashMap;

use crate::builtin::NodeId;
use crate::status::StatusCode;
use crate::types::descriptor::DataTypeRef;
use crate::types::table::TypeTable;

#[derive(Debug, Default)]
pub struct TypeRegistry {
    tables: DashMap<u16, Arc<TypeTable>>,
}

impl TypeRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `table` under its namespace, returning the table it replaces.
    pub fn register(&self, table: TypeTable) -> Option<Arc<TypeTable>> {
        let ns = table.namespace_index();
        let count = table.len();
        let previous = self.tables.insert(ns, Arc::new(table));
        match &previous {
            Some(old) => log::warn!(
                "[registry] ns={} replaced ({} types -> {} types)",
                ns,
                old.len(),
                count
            ),
            None => log::debug!("[registry] ns={} registered ({} types)", ns, count),
        }
        previous
    }

    pub fn unregister(&self, namespace_index: u16) -> Option<Arc<TypeTable>> {
        let removed = self.tables.remove(&namespace_index).map(|(_, t)| t);
        if removed.is_some() {
            log::debug!("[registry] ns={} unregistered", namespace_index);
        }
        removed
    }

    pub fn table(&self, namespace_index: u16) -> Option<Arc<TypeTable>> {
        self.tables.get(&namespace_index).map(|t| Arc::clone(&t))
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Descriptor for the data type `id`.
    pub fn resolve(&self, id: &NodeId) -> Option<DataTypeRef> {
        if let Some(kind) = id.builtin_type() {
            return Some(DataTypeRef::Builtin(kind));
        }
        let table = self.tables.get(&id.namespace_index)?;
        table
            .by_node_id(id)
            .map(|t| DataTypeRef::Structure(Arc::clone(t)))
    }

    /// Like [`resolve`](Self::resolve), reporting an unknown id as
    /// `BadDataTypeIdUnknown`.
    pub fn resolve_status(&self, id: &NodeId) -> Result<DataTypeRef, StatusCode> {
        self.resolve(id).ok_or_else(|| {
            log::debug!("[registry] unknown data type {}", id);
            StatusCode::BAD_DATA_TYPE_ID_UNKNOWN
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::BuiltinType;
    use crate::types::table::{MemberDecl, TypeTableBuilder};

    fn table(ns: u16, names: &[&str]) -> TypeTable {
        let mut b = TypeTableBuilder::new(ns);
        for (i, name) in names.iter().enumerate() {
            b.add_structure(
                *name,
                5000 + i as u32,
                vec![MemberDecl::builtin("v", BuiltinType::Int32)],
            )
            .unwrap();
        }
        b.build().unwrap()
    }

    #[test]
    fn test_resolves_builtins_without_tables() {
        let reg = TypeRegistry::new();
        assert!(reg.is_empty());
        assert_eq!(
            reg.resolve(&NodeId::numeric(0, 12)),
            Some(DataTypeRef::Builtin(BuiltinType::String))
        );
        assert!(reg.resolve(&NodeId::numeric(0, 26)).is_none());
    }

    #[test]
    fn test_resolves_registered_structures() {
        let reg = TypeRegistry::new();
        assert!(reg.register(table(3, &["Alpha", "Beta"])).is_none());
        let beta = reg.resolve(&NodeId::numeric(3, 5001)).unwrap();
        assert_eq!(beta.name(), "Beta");
        assert!(reg.resolve(&NodeId::numeric(4, 5001)).is_none());
        assert_eq!(
            reg.resolve_status(&NodeId::numeric(3, 9)).unwrap_err(),
            StatusCode::BAD_DATA_TYPE_ID_UNKNOWN
        );
    }

    #[test]
    fn test_replace_and_unregister() {
        let reg = TypeRegistry::new();
        reg.register(table(5, &["A"]));
        let old = reg.register(table(5, &["A", "B"])).unwrap();
        assert_eq!(old.len(), 1);
        assert_eq!(reg.table(5).unwrap().len(), 2);
        assert!(reg.unregister(5).is_some());
        assert!(reg.table(5).is_none());
        assert_eq!(reg.len(), 0);
    }
}

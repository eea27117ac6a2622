// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type descriptors, type tables and the namespace registry.

pub mod descriptor;
pub mod registry;
pub mod table;

pub use descriptor::{DataType, DataTypeMember, DataTypeRef};
pub use registry::TypeRegistry;
pub use table::{MemberDecl, TypeTable, TypeTableBuilder};

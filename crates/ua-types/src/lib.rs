// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # ua-types - OPC UA type and memory engine
//!
//! Runtime type descriptors and the generic lifecycle operations (init,
//! copy, destroy) for OPC UA builtin and structured types, the array
//! engine, the `Variant` container and the protocol status codes.
//!
//! ## Quick Start
//!
//! ```rust
//! use ua_types::{UaString, UaType, Value, Variant};
//!
//! let mut v = Variant::default();
//! v.copy_set_value(&Value::Int32(42))?;
//! let copy = v.copy()?;
//! assert_eq!(copy.scalar::<i32>(), Some(42));
//! assert_eq!(copy.array_length(), 1);
//!
//! let a = UaString::from_text("hello")?;
//! assert_eq!(a, UaString::from_text("hello")?);
//! # Ok::<(), ua_types::Error>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +---------------------------------------------------------------+
//! |  TypeRegistry    namespace -> TypeTable, NodeId -> descriptor  |
//! +---------------------------------------------------------------+
//! |  Engine          init / copy / destroy driven by DataTypeRef   |
//! |                  array engine (allocate / copy / destroy)      |
//! +---------------------------------------------------------------+
//! |  Value           one variant per builtin + Structure           |
//! |  builtin         String, NodeId, Variant, DiagnosticInfo, ...  |
//! +---------------------------------------------------------------+
//! |  Allocator       admission of every owned buffer               |
//! +---------------------------------------------------------------+
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Engine`] | Allocation context for the generic and array operations |
//! | [`DataTypeRef`] | Resolved type handle (builtin or structure) |
//! | [`Value`] | Type-erased instance of any descriptor |
//! | [`Variant`] | Dynamic value container |
//! | [`StatusCode`] | Protocol result code |

/// Homogeneous arrays and the array engine.
pub mod array;
/// Builtin protocol types and the per-type lifecycle contract.
pub mod builtin;
/// Engine limits and process-wide configuration.
pub mod config;
/// Value providers for variable nodes.
pub mod datasource;
/// Generic init / copy / destroy.
pub mod engine;
/// Error type.
pub mod error;
/// Allocation admission and fault injection.
pub mod memory;
/// Protocol status codes.
pub mod status;
/// Type descriptors, tables and registry.
pub mod types;
/// Type-erased values and structures.
pub mod value;
/// Dynamic value container.
pub mod variant;

pub use array::Array;
pub use builtin::{
    builtin_table, BuiltinType, ByteString, DataValue, DateTime, DateTimeStruct, DiagnosticInfo,
    ExpandedNodeId, ExtensionBody, ExtensionObject, ExtensionObjectEncoding, Guid, Identifier,
    LocalizedText, NodeId, QualifiedName, UaString, UaType, XmlElement,
};
pub use config::EngineConfig;
pub use datasource::{ClockSource, DataSource, SharedValue};
pub use engine::Engine;
pub use error::{Error, Result};
pub use memory::{Allocator, FailingAllocator, SystemAllocator};
pub use status::{Severity, StatusCode};
pub use types::{
    DataType, DataTypeMember, DataTypeRef, MemberDecl, TypeRegistry, TypeTable, TypeTableBuilder,
};
pub use value::{ElementRef, FixedScalar, Member, Structure, Value};
pub use variant::Variant;

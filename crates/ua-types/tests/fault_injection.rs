// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::missing_panics_doc)] // Tests panic on failure
#![allow(clippy::cast_possible_truncation)] // Test parameters

//! Allocation fault-injection tests
//!
//! Every admission of a copy is failed in turn; each run must either succeed
//! with an exact copy or fail with the destination back in its init state.

use ua_types::{
    BuiltinType, ByteString, DataTypeRef, DataValue, Engine, Error, ExpandedNodeId,
    FailingAllocator, LocalizedText, MemberDecl, NodeId, QualifiedName, StatusCode, TypeTable,
    TypeTableBuilder, UaString, UaType, Value, Variant,
};

fn plant_table() -> TypeTable {
    let mut b = TypeTableBuilder::new(3);
    b.add_structure(
        "Header",
        7001,
        vec![
            MemberDecl::builtin("name", BuiltinType::String),
            MemberDecl::builtin("stamp", BuiltinType::DateTime),
        ],
    )
    .unwrap()
    .add_structure(
        "Reading",
        7002,
        vec![
            MemberDecl::nested("header", "Header"),
            MemberDecl::builtin("samples", BuiltinType::Double).array(),
            MemberDecl::builtin("tags", BuiltinType::String).array(),
            MemberDecl::builtin("value", BuiltinType::Variant),
            MemberDecl::builtin("source", BuiltinType::NodeId),
        ],
    )
    .unwrap();
    b.build().unwrap()
}

fn reading(engine: &Engine<'_>, ty: &DataTypeRef, header: &DataTypeRef) -> Value {
    let mut h = engine.init(header);
    h.as_structure_mut()
        .unwrap()
        .set_field("name", Value::String(UaString::from_text("pump-3").unwrap()))
        .unwrap();

    let tags = ["flow", "inlet", "north"]
        .iter()
        .map(|t| Value::String(UaString::from_text(t).unwrap()))
        .collect();

    let mut value = Variant::default();
    value
        .copy_set_array(&engine.array_from_scalars(&[1u16, 2, 3]).unwrap())
        .unwrap();
    value.set_array_dimensions(vec![3]);

    let mut r = engine.init(ty);
    let s = r.as_structure_mut().unwrap();
    s.set_field("header", h).unwrap();
    s.set_array("samples", engine.array_from_scalars(&[0.5f64, 1.5]).unwrap())
        .unwrap();
    s.set_array(
        "tags",
        engine
            .array_from_values(&BuiltinType::String.into(), tags)
            .unwrap(),
    )
    .unwrap();
    s.set_field("value", Value::from(value)).unwrap();
    s.set_field(
        "source",
        Value::NodeId(NodeId::string(3, "Plant.Pump3").unwrap()),
    )
    .unwrap();
    r
}

#[test]
fn test_every_admission_failure_resets_destination() {
    let table = plant_table();
    let ty = table.type_ref("Reading").unwrap();
    let header = table.type_ref("Header").unwrap();
    let system = Engine::system();
    let src = reading(&system, &ty, &header);

    let counter = FailingAllocator::counting();
    let expected = Engine::with_allocator(&counter).copy(&src, &ty).unwrap();
    assert_eq!(expected, src);
    let total = counter.admissions();
    assert!(total > 10, "only {} admissions", total);

    for n in 1..=total {
        let alloc = FailingAllocator::fail_nth(n);
        let mut dst = src.clone();
        let res = Engine::with_allocator(&alloc).copy_into(&src, &mut dst, &ty);
        assert!(
            matches!(res, Err(Error::OutOfMemory { .. })),
            "admission {} did not fail the copy",
            n
        );
        assert_eq!(dst, system.init(&ty), "admission {} left partial state", n);
    }

    let alloc = FailingAllocator::fail_nth(total + 1);
    let mut dst = system.init(&ty);
    Engine::with_allocator(&alloc)
        .copy_into(&src, &mut dst, &ty)
        .unwrap();
    assert_eq!(dst, src);
}

#[test]
fn test_node_id_copy_failure_resets_to_null() {
    let alloc = FailingAllocator::fail_nth(1);
    let engine = Engine::with_allocator(&alloc);
    let mut dst = NodeId::numeric(1, 99);
    let src = NodeId::byte_string(1, &[1, 2, 3]).unwrap();
    assert!(src.copy_into(&mut dst, &engine).is_err());
    assert!(dst.is_null());
    assert_eq!(dst, NodeId::NULL);
}

#[test]
fn test_expanded_node_id_is_all_or_nothing() {
    let src = ExpandedNodeId {
        node_id: NodeId::string(2, "a").unwrap(),
        namespace_uri: UaString::from_text("urn:plant").unwrap(),
        server_index: 4,
    };
    // node id succeeds, namespace uri fails
    let alloc = FailingAllocator::fail_nth(2);
    let mut dst = src.clone();
    let res = src.copy_into(&mut dst, &Engine::with_allocator(&alloc));
    assert!(res.is_err());
    assert_eq!(dst, ExpandedNodeId::default());
    assert!(dst.is_null());
}

#[test]
fn test_text_types_fail_cleanly() {
    let fail = |n| FailingAllocator::fail_nth(n);

    let q = QualifiedName::new(2, "Temperature").unwrap();
    let alloc = fail(1);
    let mut dst = q.clone();
    assert!(q.copy_into(&mut dst, &Engine::with_allocator(&alloc)).is_err());
    assert_eq!(dst, QualifiedName::default());

    let l = LocalizedText::new("en-US", "Pump").unwrap();
    let alloc = fail(2);
    let mut dst = l.clone();
    assert!(l.copy_into(&mut dst, &Engine::with_allocator(&alloc)).is_err());
    assert_eq!(dst, LocalizedText::default());
}

#[test]
fn test_data_value_copy_failure() {
    let mut inner = Variant::default();
    inner
        .copy_set_value(&Value::ByteString(ByteString::from_bytes(b"raw").unwrap()))
        .unwrap();
    let src = DataValue::new(inner).with_status(StatusCode::UNCERTAIN_INITIAL_VALUE);

    let counter = FailingAllocator::counting();
    let copy = src.copy_with(&Engine::with_allocator(&counter)).unwrap();
    assert_eq!(copy, src);

    for n in 1..=counter.admissions() {
        let alloc = FailingAllocator::fail_nth(n);
        let mut dst = src.clone();
        assert!(src.copy_into(&mut dst, &Engine::with_allocator(&alloc)).is_err());
        assert_eq!(dst, DataValue::default());
    }
}

#[test]
fn test_rearm_after_failure() {
    let alloc = FailingAllocator::fail_nth(1);
    let engine = Engine::with_allocator(&alloc);
    let s = UaString::from_text("abc").unwrap();
    assert!(s.copy_with(&engine).is_err());
    assert_eq!(s.copy_with(&engine).unwrap(), s);

    alloc.rearm_nth(1);
    assert!(s.copy_with(&engine).is_err());
    assert_eq!(alloc.failures(), 2);
}

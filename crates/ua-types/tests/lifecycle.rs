// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::float_cmp)] // Test assertions with constants
#![allow(clippy::unreadable_literal)] // Large test constants
#![allow(clippy::missing_panics_doc)] // Tests panic on failure

//! Lifecycle integration tests
//!
//! Init / copy / destroy behaviour through the public API: scalars, strings,
//! node ids, the Variant container, the array engine, structure copies under
//! injected allocation failures and diagnostic chains.

use ua_types::{
    BuiltinType, DataTypeRef, DateTime, DiagnosticInfo, Engine, Error, FailingAllocator, Guid,
    MemberDecl, NodeId, StatusCode, TypeTable, TypeTableBuilder, UaString, UaType, Value, Variant,
};

fn scalar_samples(rng: &mut fastrand::Rng) -> Vec<Value> {
    vec![
        Value::Boolean(rng.bool()),
        Value::SByte(rng.i8(..)),
        Value::Byte(rng.u8(..)),
        Value::Int16(rng.i16(..)),
        Value::UInt16(rng.u16(..)),
        Value::Int32(rng.i32(..)),
        Value::UInt32(rng.u32(..)),
        Value::Int64(rng.i64(..)),
        Value::UInt64(rng.u64(..)),
        Value::Float(rng.f32()),
        Value::Double(rng.f64()),
        Value::DateTime(DateTime(rng.i64(0..))),
        Value::Guid(Guid::random_with(rng)),
        Value::StatusCode(StatusCode(rng.u32(..))),
    ]
}

fn sensor_table() -> TypeTable {
    let mut b = TypeTableBuilder::new(1);
    b.add_structure(
        "Sensor",
        4001,
        vec![
            MemberDecl::builtin("id", BuiltinType::UInt32),
            MemberDecl::builtin("names", BuiltinType::String).array(),
        ],
    )
    .unwrap();
    b.build().unwrap()
}

#[test]
fn test_scalar_copy_is_bit_identical() {
    let engine = Engine::system();
    let mut rng = fastrand::Rng::with_seed(0x5eed);
    for _ in 0..32 {
        for value in scalar_samples(&mut rng) {
            let ty = value.data_type_ref();
            let copy = engine.copy(&value, &ty).unwrap();
            match (&value, &copy) {
                (Value::Float(a), Value::Float(b)) => assert_eq!(a.to_bits(), b.to_bits()),
                (Value::Double(a), Value::Double(b)) => assert_eq!(a.to_bits(), b.to_bits()),
                _ => assert_eq!(copy, value),
            }
        }
    }
}

#[test]
fn test_destroy_on_fresh_instance_is_safe() {
    let engine = Engine::system();
    for kind in BuiltinType::ALL {
        let ty = DataTypeRef::Builtin(kind);
        let mut v = engine.init(&ty);
        engine.destroy_members(&mut v, &ty);
        assert_eq!(v, engine.init(&ty), "{}", kind);
        engine.destroy_members(&mut v, &ty);
        engine.delete(v);
    }
}

#[test]
fn test_literal_text_copies_compare_equal() {
    let a = UaString::from_text("hello").unwrap();
    let b = UaString::from_text("hello").unwrap();
    assert_eq!(a, b);
    assert_eq!(a.length(), 5);

    let empty = UaString::from_text("").unwrap();
    assert_eq!(empty.length(), 0);
    assert!(empty.as_bytes().is_empty());
}

#[test]
fn test_non_positive_lengths_are_equal() {
    assert_eq!(UaString::NULL, UaString::empty());
    assert_eq!(UaString::empty(), UaString::empty());
    assert_eq!(UaString::NULL, UaString::NULL);
    assert_ne!(UaString::NULL, UaString::from_text("x").unwrap());
}

#[test]
fn test_node_id_null_then_string() {
    let engine = Engine::system();
    let mut id = NodeId::default();
    assert!(id.is_null());
    NodeId::string(2, "Boiler.Temperature")
        .unwrap()
        .copy_into(&mut id, &engine)
        .unwrap();
    assert!(!id.is_null());
    assert_eq!(id.to_string(), "ns=2;s=Boiler.Temperature");
}

#[test]
fn test_variant_round_trip() {
    let mut original = Variant::default();
    original.copy_set_value(&Value::Int32(42)).unwrap();

    let copy = original.copy().unwrap();
    assert_eq!(copy.scalar::<i32>(), Some(42));
    assert_eq!(copy.array_length(), 1);

    copy.delete();
    assert_eq!(original.scalar::<i32>(), Some(42));
    assert_eq!(original.array_length(), 1);
}

#[test]
fn test_array_engine_edges() {
    let alloc = FailingAllocator::counting();
    let engine = Engine::with_allocator(&alloc);

    let empty = engine
        .allocate_array(&BuiltinType::String.into(), 0)
        .unwrap();
    let copy = engine.copy_array(&empty).unwrap();
    assert!(copy.is_empty());
    assert_eq!(copy.length(), 0);

    let huge = engine
        .allocate_array(&BuiltinType::Guid.into(), i32::MAX)
        .unwrap();
    assert!(huge.is_empty());
    assert_eq!(alloc.admissions(), 0);
}

#[test]
fn test_structure_copy_is_atomic() {
    let table = sensor_table();
    let ty = table.type_ref("Sensor").unwrap();
    let engine = Engine::system();

    let mut src = engine.init(&ty);
    let names = ["a", "bb", "ccc"]
        .iter()
        .map(|s| Value::String(UaString::from_text(s).unwrap()))
        .collect();
    {
        let s = src.as_structure_mut().unwrap();
        s.set_field("id", Value::UInt32(17)).unwrap();
        s.set_array(
            "names",
            engine
                .array_from_values(&BuiltinType::String.into(), names)
                .unwrap(),
        )
        .unwrap();
    }

    // "bb" is the only 2-byte admission
    let alloc = FailingAllocator::fail_on_size(2);
    let mut dst = engine.copy(&src, &ty).unwrap();
    let res = Engine::with_allocator(&alloc).copy_into(&src, &mut dst, &ty);

    assert!(matches!(res, Err(Error::OutOfMemory { bytes: 2 })));
    assert_eq!(alloc.failures(), 1);
    assert_eq!(dst, engine.init(&ty));
    assert!(dst.as_structure().unwrap().array("names").unwrap().is_absent());

    let names = src.as_structure().unwrap().array("names").unwrap();
    assert_eq!(names.len(), 3);
    assert_eq!(
        *names.get(1).unwrap(),
        Value::String(UaString::from_text("bb").unwrap())
    );
}

#[test]
fn test_diagnostic_chain_deep_copy() {
    let mut outer = DiagnosticInfo {
        symbolic_id: Some(1),
        additional_info: Some(UaString::from_text("outer").unwrap()),
        inner_status_code: Some(StatusCode::BAD_TIMEOUT),
        ..DiagnosticInfo::default()
    };
    outer.set_inner(DiagnosticInfo {
        locale: Some(3),
        additional_info: Some(UaString::from_text("inner").unwrap()),
        ..DiagnosticInfo::default()
    });
    assert!(outer.has_inner());

    let mut copy = outer.copy().unwrap();
    assert_eq!(copy, outer);
    assert_eq!(copy.depth(), 2);

    copy.destroy_members();
    assert_eq!(copy, DiagnosticInfo::default());

    assert_eq!(outer.depth(), 2);
    let inner = outer.inner_diagnostic_info.as_deref().unwrap();
    assert_eq!(
        inner.additional_info.as_ref().unwrap(),
        &UaString::from_text("inner").unwrap()
    );
}

#[test]
fn test_redeclared_type_with_new_layout_is_rejected() {
    let mut old = TypeTableBuilder::new(1);
    old.add_structure("Point", 3001, vec![MemberDecl::builtin("x", BuiltinType::Double)])
        .unwrap();
    let old = old.build().unwrap();

    let mut new = TypeTableBuilder::new(1);
    new.add_structure(
        "Point",
        3001,
        vec![
            MemberDecl::builtin("x", BuiltinType::Double),
            MemberDecl::builtin("y", BuiltinType::Double),
        ],
    )
    .unwrap()
    .add_structure("Holder", 3002, vec![MemberDecl::nested("p", "Point")])
    .unwrap();
    let new = new.build().unwrap();

    let engine = Engine::system();
    let old_point_ty = old.type_ref("Point").unwrap();
    let new_point_ty = new.type_ref("Point").unwrap();
    assert_ne!(old_point_ty, new_point_ty);

    let mut old_point = engine.init(&old_point_ty);
    old_point
        .as_structure_mut()
        .unwrap()
        .set_field("x", Value::Double(1.5))
        .unwrap();
    assert!(!old_point.matches(&new_point_ty));

    let mut holder = engine.init(&new.type_ref("Holder").unwrap());
    let res = holder.as_structure_mut().unwrap().set_field("p", old_point.clone());
    assert!(matches!(res, Err(Error::TypeMismatch { .. })));
    assert_eq!(holder, engine.init(&new.type_ref("Holder").unwrap()));

    let mut dst = engine.init(&new_point_ty);
    assert!(engine.copy_into(&old_point, &mut dst, &new_point_ty).is_err());
    assert_eq!(dst, engine.init(&new_point_ty));
}

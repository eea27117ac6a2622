// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::missing_panics_doc)] // Benches panic on setup failure
#![allow(clippy::semicolon_if_nothing_returned)] // Benchmark code formatting

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ua_types::{BuiltinType, Engine, MemberDecl, TypeTableBuilder, UaString, Value};

// ============================================================================
// Structure copy: fixed-size fast path vs member walk
// ============================================================================

/// Eight doubles: one packed block, copied with a single duplication.
/// The same members plus a string force the member-by-member walk.
fn bench_structure_copy(c: &mut Criterion) {
    let mut b = TypeTableBuilder::new(1);
    let doubles: Vec<_> = (0..8)
        .map(|i| MemberDecl::builtin(format!("v{}", i), BuiltinType::Double))
        .collect();
    let mut walked = doubles.clone();
    walked.push(MemberDecl::builtin("label", BuiltinType::String));
    b.add_structure("Packed8", 9001, doubles).unwrap();
    b.add_structure("Walked8", 9002, walked).unwrap();
    let table = b.build().unwrap();

    let engine = Engine::system();
    let packed_ty = table.type_ref("Packed8").unwrap();
    let walked_ty = table.type_ref("Walked8").unwrap();

    let mut packed = engine.init(&packed_ty);
    let mut walked = engine.init(&walked_ty);
    for i in 0..8 {
        let name = format!("v{}", i);
        let v = Value::Double(f64::from(i) * 1.25);
        packed.as_structure_mut().unwrap().set_field(&name, v.clone()).unwrap();
        walked.as_structure_mut().unwrap().set_field(&name, v).unwrap();
    }
    walked
        .as_structure_mut()
        .unwrap()
        .set_field("label", Value::String(UaString::from_text("x").unwrap()))
        .unwrap();

    let mut group = c.benchmark_group("structure_copy");
    group.bench_function("fixed_size", |bench| {
        bench.iter(|| engine.copy(black_box(&packed), &packed_ty).unwrap())
    });
    group.bench_function("member_walk", |bench| {
        bench.iter(|| engine.copy(black_box(&walked), &walked_ty).unwrap())
    });
    group.finish();
}

// ============================================================================
// Array copy
// ============================================================================

fn bench_array_copy(c: &mut Criterion) {
    let engine = Engine::system();
    let ints: Vec<i32> = (0..1024).collect();
    let packed = engine.array_from_scalars(&ints).unwrap();
    let strings = engine
        .array_from_values(
            &BuiltinType::String.into(),
            (0..1024)
                .map(|i| Value::String(UaString::from_text(&i.to_string()).unwrap()))
                .collect(),
        )
        .unwrap();

    let mut group = c.benchmark_group("array_copy_1024");
    group.bench_function("int32", |bench| {
        bench.iter(|| engine.copy_array(black_box(&packed)).unwrap())
    });
    group.bench_function("string", |bench| {
        bench.iter(|| engine.copy_array(black_box(&strings)).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_structure_copy, bench_array_copy);
criterion_main!(benches);

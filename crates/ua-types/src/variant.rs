// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Dynamic value container.
//!
//! A [`Variant`] holds either nothing or an [`Array`] of one element type,
//! plus optional array dimensions. A single value is stored as an array of
//! length 1.
//!
//! Two ways in:
//! - [`Variant::set_value`] / [`Variant::set_array`] move the caller's value
//!   into the container without duplicating its payload;
//! - [`Variant::copy_set_value`] / [`Variant::copy_set_array`] attach a deep
//!   copy and leave the caller's original untouched.

use crate::array::Array;
use crate::builtin::UaType;
use crate::engine::Engine;
use crate::error::Result;
use crate::types::DataTypeRef;
use crate::value::{ElementRef, FixedScalar, Value};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variant {
    data: Option<Array>,
    array_dimensions: Option<Vec<i32>>,
}

impl Variant {
    /// Variant holding `value`, moved in.
    pub fn from_value(value: Value) -> Self {
        let mut v = Self::default();
        v.set_value(value);
        v
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_none()
    }

    /// Element type, `None` for the empty variant.
    pub fn data_type(&self) -> Option<&DataTypeRef> {
        self.data.as_ref().map(Array::element_type)
    }

    /// -1 for the empty variant, otherwise the stored array length.
    pub fn array_length(&self) -> i32 {
        self.data.as_ref().map_or(-1, Array::length)
    }

    pub fn array(&self) -> Option<&Array> {
        self.data.as_ref()
    }

    pub fn get(&self, index: usize) -> Option<ElementRef<'_>> {
        self.data.as_ref()?.get(index)
    }

    /// First element.
    pub fn value(&self) -> Option<ElementRef<'_>> {
        self.get(0)
    }

    /// First element as a fixed-size scalar.
    pub fn scalar<T: FixedScalar>(&self) -> Option<T> {
        self.data.as_ref()?.scalar::<T>(0)
    }

    pub fn array_dimensions(&self) -> Option<&[i32]> {
        self.array_dimensions.as_deref()
    }

    pub fn set_array_dimensions(&mut self, dimensions: Vec<i32>) {
        self.array_dimensions = Some(dimensions);
    }

    /// Attach `value` as a one-element array. Ownership moves into the
    /// variant; fixed-size values are packed.
    pub fn set_value(&mut self, value: Value) {
        self.data = Some(Array::single(value));
        self.array_dimensions = None;
    }

    /// Attach `array`, moving it in.
    pub fn set_array(&mut self, array: Array) {
        self.data = Some(array);
        self.array_dimensions = None;
    }

    /// Attach a deep copy of `value`. On failure the variant is unchanged.
    pub fn copy_set_value(&mut self, value: &Value) -> Result<()> {
        self.copy_set_value_with(&Engine::system(), value)
    }

    pub fn copy_set_value_with(&mut self, engine: &Engine<'_>, value: &Value) -> Result<()> {
        let ty = value.data_type_ref();
        let copy = engine.copy_value(value)?;
        let array = engine.array_from_values(&ty, vec![copy])?;
        self.set_array(array);
        Ok(())
    }

    /// Attach a deep copy of `array`. On failure the variant is unchanged.
    pub fn copy_set_array(&mut self, array: &Array) -> Result<()> {
        self.copy_set_array_with(&Engine::system(), array)
    }

    pub fn copy_set_array_with(&mut self, engine: &Engine<'_>, array: &Array) -> Result<()> {
        let copy = engine.copy_array(array)?;
        self.set_array(copy);
        Ok(())
    }

    /// Detach the stored array, leaving the variant empty.
    pub fn take(&mut self) -> Option<Array> {
        self.array_dimensions = None;
        self.data.take()
    }
}

impl UaType for Variant {
    fn copy_with(&self, engine: &Engine<'_>) -> Result<Self> {
        let data = match &self.data {
            Some(array) => Some(engine.copy_array(array)?),
            None => None,
        };
        let array_dimensions = match &self.array_dimensions {
            Some(dims) => {
                let mut out = engine.alloc_vec::<i32>(dims.len())?;
                out.extend_from_slice(dims);
                Some(out)
            }
            None => None,
        };
        Ok(Self {
            data,
            array_dimensions,
        })
    }
}

impl From<Value> for Variant {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::{BuiltinType, UaString};
    use crate::memory::FailingAllocator;

    #[test]
    fn test_empty_variant() {
        let v = Variant::default();
        assert!(v.is_empty());
        assert_eq!(v.array_length(), -1);
        assert!(v.data_type().is_none());
        assert!(v.value().is_none());
    }

    #[test]
    fn test_copy_set_value_scalar() {
        let mut v = Variant::default();
        v.copy_set_value(&Value::Int32(42)).unwrap();
        let copy = v.copy().unwrap();
        assert_eq!(copy.scalar::<i32>(), Some(42));
        assert_eq!(copy.array_length(), 1);
        assert_eq!(copy.data_type(), Some(&DataTypeRef::Builtin(BuiltinType::Int32)));
        drop(copy);
        assert_eq!(v.scalar::<i32>(), Some(42));
    }

    #[test]
    fn test_set_value_packs_fixed_values() {
        use crate::types::{MemberDecl, TypeTableBuilder};

        let counter = FailingAllocator::counting();
        let engine = Engine::with_allocator(&counter);

        let moved = Variant::from_value(Value::Double(2.5));
        let mut copied = Variant::default();
        copied.copy_set_value_with(&engine, &Value::Double(2.5)).unwrap();
        assert_eq!(moved, copied);
        assert_eq!(moved.array().unwrap().as_packed_bytes(), Some(&2.5f64.to_le_bytes()[..]));

        let mut b = TypeTableBuilder::new(1);
        b.add_structure(
            "Pair",
            4001,
            vec![
                MemberDecl::builtin("a", BuiltinType::UInt16),
                MemberDecl::builtin("b", BuiltinType::UInt16),
            ],
        )
        .unwrap();
        let table = b.build().unwrap();
        let ty = table.type_ref("Pair").unwrap();
        let mut pair = engine.init(&ty);
        pair.as_structure_mut().unwrap().set_field("b", Value::UInt16(9)).unwrap();

        let before = counter.admissions();
        let v = Variant::from_value(pair.clone());
        assert_eq!(counter.admissions(), before);
        assert_eq!(v.array_length(), 1);
        assert_eq!(v.array().unwrap().as_packed_bytes(), Some(&[0, 0, 9, 0][..]));
        assert_eq!(v.value().unwrap().into_owned(), pair);
    }

    #[test]
    fn test_set_value_moves() {
        let v = Variant::from_value(Value::String(UaString::from_text("moved").unwrap()));
        assert_eq!(
            *v.value().unwrap(),
            Value::String(UaString::from_text("moved").unwrap())
        );
        assert!(v.array().unwrap().as_packed_bytes().is_none());
    }

    #[test]
    fn test_copy_set_array_leaves_source() {
        let engine = Engine::system();
        let src = engine.array_from_scalars(&[1.0f64, 2.0, 3.0]).unwrap();
        let mut v = Variant::default();
        v.copy_set_array(&src).unwrap();
        v.set_array_dimensions(vec![3]);
        assert_eq!(v.array(), Some(&src));
        assert_eq!(v.array_dimensions(), Some(&[3][..]));
        assert_eq!(v.get(2).unwrap().as_scalar::<f64>(), Some(3.0));
        drop(v);
        assert_eq!(src.len(), 3);
    }

    #[test]
    fn test_copy_failure_on_dimensions() {
        let engine = Engine::system();
        let mut v = Variant::default();
        v.set_array(engine.array_from_scalars(&[1u8, 2, 3, 4]).unwrap());
        v.set_array_dimensions(vec![2, 2]);

        // data block, then dimensions
        let alloc = FailingAllocator::fail_nth(2);
        let mut dst = Variant::from_value(Value::Boolean(true));
        let res = v.copy_into(&mut dst, &Engine::with_allocator(&alloc));
        assert!(res.is_err());
        assert!(dst.is_empty());
        assert!(dst.array_dimensions().is_none());
    }

    #[test]
    fn test_copy_set_failure_keeps_previous() {
        let mut v = Variant::from_value(Value::UInt16(9));
        let alloc = FailingAllocator::fail_nth(1);
        let engine = Engine::with_allocator(&alloc);
        let text = Value::String(UaString::from_text("abc").unwrap());
        assert!(v.copy_set_value_with(&engine, &text).is_err());
        assert_eq!(v.scalar::<u16>(), Some(9));
    }
}

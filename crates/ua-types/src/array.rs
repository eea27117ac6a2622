// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Homogeneous arrays and the array engine.
//!
//! An [`Array`] owns its elements together with its length, so the block
//! can only be released through the array. Length -1 is the absent array,
//! 0 the empty one; neither owns storage. Fixed-size element types are
//! stored as one packed block, everything else as a vector of values.

use std::fmt;
use std::mem::size_of;

use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::types::DataTypeRef;
use crate::value::{into_packed, pack_into, unpack, ElementRef, FixedScalar, Value};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ArrayStorage {
    Packed(Box<[u8]>),
    Values(Vec<Value>),
}

#[derive(Clone, PartialEq)]
pub struct Array {
    element_type: DataTypeRef,
    length: i32,
    storage: Option<ArrayStorage>,
}

impl Array {
    /// Absent array (length -1).
    pub fn absent(element_type: DataTypeRef) -> Self {
        Self {
            element_type,
            length: -1,
            storage: None,
        }
    }

    /// Empty array (length 0).
    pub fn empty(element_type: DataTypeRef) -> Self {
        Self {
            element_type,
            length: 0,
            storage: None,
        }
    }

    pub fn element_type(&self) -> &DataTypeRef {
        &self.element_type
    }

    /// Wire length: -1 absent, 0 empty, otherwise the element count.
    pub fn length(&self) -> i32 {
        self.length
    }

    /// Element count; 0 for absent and empty arrays.
    pub fn len(&self) -> usize {
        usize::try_from(self.length).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.length <= 0
    }

    pub fn is_absent(&self) -> bool {
        self.length < 0
    }

    fn stride(&self) -> usize {
        self.element_type.mem_size()
    }

    /// Element at `index`.
    pub fn get(&self, index: usize) -> Option<ElementRef<'_>> {
        if index >= self.len() {
            return None;
        }
        match self.storage.as_ref()? {
            ArrayStorage::Packed(bytes) => {
                let stride = self.stride();
                let start = index * stride;
                Some(ElementRef::Owned(unpack(
                    &self.element_type,
                    &bytes[start..start + stride],
                )))
            }
            ArrayStorage::Values(values) => values.get(index).map(ElementRef::Borrowed),
        }
    }

    /// Fixed-size element at `index`.
    pub fn scalar<T: FixedScalar>(&self, index: usize) -> Option<T> {
        self.get(index)?.as_scalar::<T>()
    }

    /// Replace the element at `index`, moving `value` in.
    pub fn set(&mut self, index: usize, value: Value) -> Result<()> {
        value.check(&self.element_type)?;
        let len = self.len();
        let stride = self.stride();
        match self.storage.as_mut() {
            Some(ArrayStorage::Packed(bytes)) if index < len => {
                let start = index * stride;
                pack_into(&value, &mut bytes[start..start + stride])
            }
            Some(ArrayStorage::Values(values)) if index < len => {
                values[index] = value;
                Ok(())
            }
            _ => Err(Error::Internal(format!(
                "index {} out of bounds for array of length {}",
                index, self.length
            ))),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = ElementRef<'_>> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    /// Packed block of a fixed-size element array.
    pub fn as_packed_bytes(&self) -> Option<&[u8]> {
        match self.storage.as_ref()? {
            ArrayStorage::Packed(bytes) => Some(bytes),
            ArrayStorage::Values(_) => None,
        }
    }

    /// Release the elements; the array becomes absent.
    pub fn clear(&mut self) {
        self.storage = None;
        self.length = -1;
    }
}

impl Array {
    /// One-element array owning `value`. Fixed-size values are packed.
    pub(crate) fn single(value: Value) -> Self {
        let element_type = value.data_type_ref();
        let storage = match into_packed(value) {
            Ok(bytes) => ArrayStorage::Packed(bytes),
            Err(value) => ArrayStorage::Values(vec![value]),
        };
        Self {
            element_type,
            length: 1,
            storage: Some(storage),
        }
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_absent() {
            return write!(f, "Array<{}>(absent)", self.element_type.name());
        }
        write!(f, "Array<{}>", self.element_type.name())?;
        f.debug_list().entries(self.iter().map(|e| e.into_owned())).finish()
    }
}

fn wire_length(count: usize) -> Result<i32> {
    i32::try_from(count).map_err(|_| {
        Error::Encoding(format!("array of {} elements exceeds the wire length limit", count))
    })
}

impl Engine<'_> {
    /// Allocate `count` elements of `ty`.
    ///
    /// Returns an absent (`count < 0`) or empty (`count == 0`) array without
    /// allocating. A count whose byte size overflows or exceeds the configured
    /// budget is treated as corrupt and also yields an absent array. Fixed-size
    /// elements are zeroed, others are initialised one by one.
    pub fn allocate_array(&self, ty: &DataTypeRef, count: i32) -> Result<Array> {
        if count < 0 {
            return Ok(Array::absent(ty.clone()));
        }
        if count == 0 {
            return Ok(Array::empty(ty.clone()));
        }

        // Non-fixed elements are stored as `Value`s, budget them at that size.
        let element_bytes = if ty.is_fixed_size() {
            ty.mem_size()
        } else {
            size_of::<Value>()
        };
        let count_usize = count as usize;
        let total = match count_usize.checked_mul(element_bytes) {
            Some(total) if total <= i32::MAX as usize && total <= self.config().max_array_bytes => {
                total
            }
            _ => {
                log::warn!(
                    "[array] rejected allocation of {} x {} ({} bytes each)",
                    count,
                    ty.name(),
                    element_bytes
                );
                return Ok(Array::absent(ty.clone()));
            }
        };

        let storage = if ty.is_fixed_size() {
            ArrayStorage::Packed(self.alloc_zeroed(total)?)
        } else {
            let mut values = self.alloc_vec::<Value>(count_usize)?;
            values.extend((0..count_usize).map(|_| self.init(ty)));
            ArrayStorage::Values(values)
        };
        Ok(Array {
            element_type: ty.clone(),
            length: count,
            storage: Some(storage),
        })
    }

    /// Deep copy of `src`. Absent and empty arrays keep their length and
    /// allocate nothing. On failure every element copied so far is dropped.
    pub fn copy_array(&self, src: &Array) -> Result<Array> {
        let storage = match &src.storage {
            None => None,
            Some(_) if src.length <= 0 => None,
            Some(ArrayStorage::Packed(bytes)) => Some(ArrayStorage::Packed(self.dup_bytes(bytes)?)),
            Some(ArrayStorage::Values(values)) => {
                let mut out = self.alloc_vec::<Value>(values.len())?;
                for (i, v) in values.iter().enumerate() {
                    match self.copy(v, &src.element_type) {
                        Ok(copy) => out.push(copy),
                        Err(err) => {
                            log::debug!(
                                "[array] element {} of {} {} failed to copy, dropping {} copied",
                                i,
                                values.len(),
                                src.element_type.name(),
                                out.len()
                            );
                            return Err(err);
                        }
                    }
                }
                Some(ArrayStorage::Values(out))
            }
        };
        Ok(Array {
            element_type: src.element_type.clone(),
            length: src.length,
            storage,
        })
    }

    /// Release the elements of `array`, leaving it absent.
    pub fn destroy_array(&self, array: &mut Array) {
        array.clear();
    }

    /// Build an array from owned values of type `ty`, moving them in.
    /// Fixed-size values are packed into one block.
    pub fn array_from_values(&self, ty: &DataTypeRef, values: Vec<Value>) -> Result<Array> {
        let length = wire_length(values.len())?;
        for v in &values {
            v.check(ty)?;
        }
        if values.is_empty() {
            return Ok(Array::empty(ty.clone()));
        }
        let storage = if ty.is_fixed_size() {
            let stride = ty.mem_size();
            let mut block = self.alloc_zeroed(stride * values.len())?;
            for (slot, v) in block.chunks_exact_mut(stride).zip(&values) {
                pack_into(v, slot)?;
            }
            ArrayStorage::Packed(block)
        } else {
            ArrayStorage::Values(values)
        };
        Ok(Array {
            element_type: ty.clone(),
            length,
            storage: Some(storage),
        })
    }

    /// Packed array of fixed-size scalars.
    pub fn array_from_scalars<T: FixedScalar>(&self, items: &[T]) -> Result<Array> {
        let ty = DataTypeRef::Builtin(T::KIND);
        let length = wire_length(items.len())?;
        if items.is_empty() {
            return Ok(Array::empty(ty));
        }
        let mut block = self.alloc_zeroed(T::SIZE * items.len())?;
        for (slot, item) in block.chunks_exact_mut(T::SIZE).zip(items) {
            item.write_le(slot);
        }
        Ok(Array {
            element_type: ty,
            length,
            storage: Some(ArrayStorage::Packed(block)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::{BuiltinType, UaString};
    use crate::config::EngineConfig;
    use crate::memory::FailingAllocator;

    fn strings(engine: &Engine<'_>, items: &[&str]) -> Array {
        let values = items
            .iter()
            .map(|s| Value::String(UaString::from_text(s).unwrap()))
            .collect();
        engine
            .array_from_values(&BuiltinType::String.into(), values)
            .unwrap()
    }

    #[test]
    fn test_allocate_non_positive() {
        let engine = Engine::system();
        let ty = DataTypeRef::from(BuiltinType::Int32);
        assert!(engine.allocate_array(&ty, 0).unwrap().is_empty());
        assert!(!engine.allocate_array(&ty, 0).unwrap().is_absent());
        assert!(engine.allocate_array(&ty, -1).unwrap().is_absent());
    }

    #[test]
    fn test_allocate_overflow_is_absent() {
        let alloc = FailingAllocator::counting();
        let engine = Engine::with_allocator(&alloc);
        let ty = DataTypeRef::from(BuiltinType::Int64);
        let arr = engine.allocate_array(&ty, i32::MAX).unwrap();
        assert!(arr.is_absent());
        assert_eq!(alloc.admissions(), 0);
    }

    #[test]
    fn test_allocate_respects_budget() {
        let engine = Engine::system().with_config(EngineConfig::default().with_max_array_bytes(64));
        let ty = DataTypeRef::from(BuiltinType::Double);
        assert_eq!(engine.allocate_array(&ty, 8).unwrap().length(), 8);
        assert!(engine.allocate_array(&ty, 9).unwrap().is_absent());
    }

    #[test]
    fn test_budget_counts_value_storage_for_non_fixed() {
        let per_value = size_of::<Value>();
        assert!(per_value > BuiltinType::String.data_type().mem_size());
        let budget = 4 * per_value;
        let engine =
            Engine::system().with_config(EngineConfig::default().with_max_array_bytes(budget));
        let ty = DataTypeRef::from(BuiltinType::String);
        assert_eq!(engine.allocate_array(&ty, 4).unwrap().length(), 4);
        assert!(engine.allocate_array(&ty, 5).unwrap().is_absent());
    }

    #[test]
    fn test_allocate_initialises_elements() {
        let engine = Engine::system();
        let fixed = engine
            .allocate_array(&BuiltinType::UInt16.into(), 3)
            .unwrap();
        assert_eq!(fixed.as_packed_bytes().unwrap(), &[0u8; 6][..]);
        assert_eq!(fixed.scalar::<u16>(2), Some(0));

        let texts = engine.allocate_array(&BuiltinType::String.into(), 2).unwrap();
        assert_eq!(texts.len(), 2);
        assert!(texts.iter().all(|e| *e == Value::String(UaString::NULL)));
    }

    #[test]
    fn test_copy_empty_allocates_nothing() {
        let alloc = FailingAllocator::counting();
        let engine = Engine::with_allocator(&alloc);
        let empty = Array::empty(BuiltinType::String.into());
        let copy = engine.copy_array(&empty).unwrap();
        assert_eq!(copy.length(), 0);
        let absent = engine.copy_array(&Array::absent(BuiltinType::Int32.into())).unwrap();
        assert_eq!(absent.length(), -1);
        assert_eq!(alloc.admissions(), 0);
    }

    #[test]
    fn test_copy_fixed_is_bulk() {
        let alloc = FailingAllocator::counting();
        let engine = Engine::with_allocator(&alloc);
        let src = Engine::system().array_from_scalars(&[1i32, 2, 3]).unwrap();
        let copy = engine.copy_array(&src).unwrap();
        assert_eq!(copy, src);
        assert_eq!(alloc.admissions(), 1);
        assert_eq!(copy.scalar::<i32>(1), Some(2));
    }

    #[test]
    fn test_copy_failure_drops_partial() {
        let src = strings(&Engine::system(), &["a", "bb", "ccc"]);
        let alloc = FailingAllocator::fail_on_size(2);
        let res = Engine::with_allocator(&alloc).copy_array(&src);
        assert!(matches!(res, Err(Error::OutOfMemory { bytes: 2 })));
        assert_eq!(alloc.failures(), 1);
    }

    #[test]
    fn test_set_and_get() {
        let engine = Engine::system();
        let mut arr = engine.allocate_array(&BuiltinType::Double.into(), 2).unwrap();
        arr.set(1, Value::Double(2.5)).unwrap();
        assert_eq!(arr.scalar::<f64>(1), Some(2.5));
        assert!(arr.set(2, Value::Double(0.0)).is_err());
        assert!(arr.set(0, Value::Float(0.0)).is_err());

        let mut texts = strings(&engine, &["x"]);
        texts.set(0, Value::String(UaString::from_text("y").unwrap())).unwrap();
        assert_eq!(*texts.get(0).unwrap(), Value::String(UaString::from_text("y").unwrap()));
    }

    #[test]
    fn test_destroy() {
        let engine = Engine::system();
        let mut arr = strings(&engine, &["a", "b"]);
        engine.destroy_array(&mut arr);
        assert!(arr.is_absent());
        assert!(arr.get(0).is_none());
    }
}

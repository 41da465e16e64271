// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{buffer::OwningBuffer, hint::CapacityHint, vec::DynamicArray};

// Alloc imports
use alloc::{boxed::Box, vec::Vec};

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    /// Takes the array's elements in order; `len == capacity == N`.
    fn from(src: [T; N]) -> Self {
        Box::<[T]>::from(src).into()
    }
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    fn from(src: &[T]) -> Self {
        Box::<[T]>::from(src).into()
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(src: Vec<T>) -> Self {
        src.into_boxed_slice().into()
    }
}

impl<T> From<Box<[T]>> for DynamicArray<T> {
    fn from(block: Box<[T]>) -> Self {
        let len = block.len();
        Self {
            buf: OwningBuffer::from(block),
            len,
            capacity: len,
        }
    }
}

impl<T: Default> From<CapacityHint> for DynamicArray<T> {
    /// Reserves `hint.capacity()` slots; the array starts empty.
    fn from(hint: CapacityHint) -> Self {
        Self::with_capacity(hint.capacity())
    }
}

impl<T> From<DynamicArray<T>> for Vec<T> {
    /// Releases the block to a `Vec` and drops the dead tail.
    fn from(mut v: DynamicArray<T>) -> Self {
        let mut out = v.buf.release().map(Vec::from).unwrap_or_default();
        out.truncate(v.len);
        out
    }
}

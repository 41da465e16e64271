// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`DynamicArray`](crate::DynamicArray).
//!
//! `Index` and `IndexMut` mirror slice behavior:
//! - any `SliceIndex<[T]>` works (`usize` and every range form);
//! - views are restricted to the live prefix `[0..len)`, so the bound is
//!   strict: `v[len]` panics even when `len < capacity`;
//! - out-of-bounds or inverted ranges panic.
//!
//! Use [`DynamicArray::at`](crate::DynamicArray::at) for a checked,
//! non-panicking lookup.

// Crate imports
use crate::vec::DynamicArray;

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, I: SliceIndex<[T]>> Index<I> for DynamicArray<T> {
    type Output = I::Output;
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for DynamicArray<T> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

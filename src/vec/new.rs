// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{buffer::OwningBuffer, error::Error, vec::DynamicArray};

impl<T> DynamicArray<T> {
    /// Constructs an empty array with no allocated block.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: OwningBuffer::new(),
            len: 0,
            capacity: 0,
        }
    }
}

impl<T: Default> DynamicArray<T> {
    /// Constructs an array of `len` default values (`len == capacity`).
    #[inline]
    pub fn with_len(len: usize) -> Self {
        Self {
            buf: OwningBuffer::with_len(len),
            len,
            capacity: len,
        }
    }

    /// Constructs an empty array with exactly `capacity` reserved slots.
    ///
    /// Same as `DynamicArray::from(CapacityHint::new(capacity))`.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut v = Self::new();
        v.reserve(capacity);
        v
    }

    /// Fallible form of [`with_capacity`](Self::with_capacity).
    #[inline]
    pub fn try_with_capacity(capacity: usize) -> Result<Self, Error> {
        let mut v = Self::new();
        v.try_reserve(capacity)?;
        Ok(v)
    }
}

impl<T: Clone> DynamicArray<T> {
    /// Constructs an array of `len` clones of `value` (`len == capacity`).
    #[inline]
    pub fn from_elem(len: usize, value: T) -> Self {
        Self {
            buf: OwningBuffer::filled(len, value),
            len,
            capacity: len,
        }
    }
}

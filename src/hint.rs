// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capacity reservation hint accepted by [`DynamicArray`](crate::DynamicArray)'s
//! `From` constructor.

/// A request for `capacity` reserved slots and zero elements.
///
/// Exists only to tell "reserve this much" apart from "this many default
/// elements" when constructing a [`DynamicArray`](crate::DynamicArray):
///
/// ```rust
/// use dynamic_array::{reserve, DynamicArray};
///
/// let v: DynamicArray<u8> = DynamicArray::from(reserve(16));
/// assert_eq!(v.len(), 0);
/// assert_eq!(v.capacity(), 16);
///
/// let w: DynamicArray<u8> = DynamicArray::with_len(16);
/// assert_eq!(w.len(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CapacityHint(usize);

impl CapacityHint {
    /// Wraps `capacity`.
    #[inline]
    pub const fn new(capacity: usize) -> Self {
        Self(capacity)
    }

    /// Returns the wrapped capacity.
    #[inline]
    pub const fn capacity(self) -> usize {
        self.0
    }
}

impl From<usize> for CapacityHint {
    fn from(capacity: usize) -> Self {
        Self(capacity)
    }
}

/// Shorthand for [`CapacityHint::new`].
#[inline]
pub const fn reserve(capacity: usize) -> CapacityHint {
    CapacityHint::new(capacity)
}

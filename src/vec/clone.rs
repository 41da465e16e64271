// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{buffer::OwningBuffer, vec::DynamicArray};

impl<T: Clone + Default> Clone for DynamicArray<T> {
    /// Deep copy into a new buffer of the same capacity.
    ///
    /// Live elements are cloned in order; the copy's dead slots hold defaults.
    fn clone(&self) -> Self {
        let mut buf = OwningBuffer::with_len(self.capacity);
        buf.as_mut_slice()[..self.len].clone_from_slice(self.as_slice());
        Self {
            buf,
            len: self.len,
            capacity: self.capacity,
        }
    }
}

// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::DynamicArray;

impl<T: Default> DynamicArray<T> {
    /// Pops the last element if any.
    ///
    /// The value is moved out; its slot stays allocated and holds
    /// `T::default()`.
    #[inline]
    #[must_use]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            Some(core::mem::take(&mut self.buf[self.len]))
        }
    }
}

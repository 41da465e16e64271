// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate import
use crate::vec::DynamicArray;

impl<T> DynamicArray<T> {
    /// Retains only the elements specified by the predicate `f`, preserving order.
    ///
    /// The predicate is applied to each element in iteration order. Rejected
    /// values end up in dead slots past the new `len`.
    #[inline]
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        let live = self.as_mut_slice();
        let mut write = 0;
        for read in 0..live.len() {
            if f(&live[read]) {
                if write != read {
                    live.swap(write, read);
                }
                write += 1;
            }
        }
        self.len = write;
    }
}

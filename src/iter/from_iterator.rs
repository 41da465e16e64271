// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::DynamicArray;

impl<T: Default> FromIterator<T> for DynamicArray<T> {
    /// Collects every element in order, growing with the usual policy.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        <Self as Extend<T>>::extend(&mut v, iter);
        v
    }
}

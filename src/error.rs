// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `DynamicArray`.
//!
//! These errors represent bounds and allocation conditions.
//! They are `Copy` and implement `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by fallible operations on [`DynamicArray`](crate::DynamicArray)
/// and [`OwningBuffer`](crate::OwningBuffer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// An index or position was outside the current logical bounds.
    ///
    /// Returned by [`DynamicArray::at`](crate::DynamicArray::at) when
    /// `index >= len`, and by [`DynamicArray::try_insert`](crate::DynamicArray::try_insert)
    /// when `index > len`.
    OutOfRange,
    /// A growth could not obtain memory, or the requested size overflowed.
    ///
    /// The container is left exactly as it was before the call.
    AllocFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange => f.write_str("index out of range"),
            Self::AllocFailed => f.write_str("allocation failed"),
        }
    }
}

impl CoreError for Error {}
